//! Field descriptors for dynamic form generation

use serde::{Deserialize, Serialize};

/// Input kind of a form field.
///
/// The kind decides which widget a renderer shows, which validation rules
/// apply and what the default value is when a record does not carry the
/// field. List-valued fields are their own kinds (`StringArray`,
/// `StatArray`, `StringList`) so that array validation is declared in the
/// configuration instead of being inferred from field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
	Text,
	#[serde(rename = "textarea")]
	TextArea,
	Email,
	Tel,
	Url,
	Number,
	Date,
	#[serde(rename = "datetime-local")]
	DateTime,
	Checkbox,
	Select,
	Password,
	Color,
	File,
	/// JSON array of non-empty strings, edited as raw JSON text.
	#[serde(rename = "string-array")]
	StringArray,
	/// JSON array of `{"number": "...", "label": "..."}` objects.
	#[serde(rename = "stat-array")]
	StatArray,
	/// JSON array of non-empty strings, edited item by item.
	#[serde(rename = "custom-list")]
	StringList,
}

impl FieldKind {
	/// Default value used when a field is absent from the initial data.
	///
	/// # Examples
	///
	/// ```
	/// use serde_json::json;
	/// use vitrine_registry::FieldKind;
	///
	/// assert_eq!(FieldKind::Checkbox.default_value(), json!(false));
	/// assert_eq!(FieldKind::Number.default_value(), json!(""));
	/// assert_eq!(FieldKind::StringList.default_value(), json!("[]"));
	/// assert_eq!(FieldKind::Text.default_value(), json!(""));
	/// ```
	pub fn default_value(self) -> serde_json::Value {
		match self {
			FieldKind::Checkbox => serde_json::Value::Bool(false),
			FieldKind::StringList => serde_json::Value::String("[]".to_string()),
			_ => serde_json::Value::String(String::new()),
		}
	}

	/// True for the kinds whose value is a JSON array serialized as text.
	pub fn is_array(self) -> bool {
		matches!(
			self,
			FieldKind::StringArray | FieldKind::StatArray | FieldKind::StringList
		)
	}
}

/// Declarative description of one form field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldSpec {
	pub name: String,
	pub label: String,
	pub kind: FieldKind,
	pub required: bool,
	/// Lower bound for `Number` fields.
	pub min: Option<f64>,
	/// Upper bound for `Number` fields.
	pub max: Option<f64>,
	/// Choices for `Select` fields.
	pub options: Vec<String>,
	pub help: Option<String>,
	pub placeholder: Option<String>,
	/// Display-only: excluded from validation and from submitted payloads.
	pub readonly: bool,
	/// Accepted on create, stripped from edit payloads.
	pub create_only: bool,
}

impl FieldSpec {
	/// Create a field of an arbitrary kind.
	///
	/// # Examples
	///
	/// ```
	/// use vitrine_registry::{FieldKind, FieldSpec};
	///
	/// let field = FieldSpec::new("title", "Title", FieldKind::Text);
	/// assert_eq!(field.name, "title");
	/// assert!(!field.required);
	/// ```
	pub fn new(name: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
		Self {
			name: name.into(),
			label: label.into(),
			kind,
			required: false,
			min: None,
			max: None,
			options: Vec::new(),
			help: None,
			placeholder: None,
			readonly: false,
			create_only: false,
		}
	}

	pub fn text(name: impl Into<String>, label: impl Into<String>) -> Self {
		Self::new(name, label, FieldKind::Text)
	}

	pub fn textarea(name: impl Into<String>, label: impl Into<String>) -> Self {
		Self::new(name, label, FieldKind::TextArea)
	}

	pub fn email(name: impl Into<String>, label: impl Into<String>) -> Self {
		Self::new(name, label, FieldKind::Email)
	}

	pub fn tel(name: impl Into<String>, label: impl Into<String>) -> Self {
		Self::new(name, label, FieldKind::Tel)
	}

	pub fn url(name: impl Into<String>, label: impl Into<String>) -> Self {
		Self::new(name, label, FieldKind::Url)
	}

	pub fn number(name: impl Into<String>, label: impl Into<String>) -> Self {
		Self::new(name, label, FieldKind::Number)
	}

	pub fn date(name: impl Into<String>, label: impl Into<String>) -> Self {
		Self::new(name, label, FieldKind::Date)
	}

	pub fn datetime(name: impl Into<String>, label: impl Into<String>) -> Self {
		Self::new(name, label, FieldKind::DateTime)
	}

	pub fn checkbox(name: impl Into<String>, label: impl Into<String>) -> Self {
		Self::new(name, label, FieldKind::Checkbox)
	}

	/// Select field with the given choices.
	///
	/// # Examples
	///
	/// ```
	/// use vitrine_registry::FieldSpec;
	///
	/// let field = FieldSpec::select("role", "Role", ["USER", "ADMIN"]);
	/// assert_eq!(field.options, vec!["USER".to_string(), "ADMIN".to_string()]);
	/// ```
	pub fn select<I, S>(name: impl Into<String>, label: impl Into<String>, options: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let mut field = Self::new(name, label, FieldKind::Select);
		field.options = options.into_iter().map(Into::into).collect();
		field
	}

	pub fn password(name: impl Into<String>, label: impl Into<String>) -> Self {
		Self::new(name, label, FieldKind::Password)
	}

	pub fn color(name: impl Into<String>, label: impl Into<String>) -> Self {
		Self::new(name, label, FieldKind::Color)
	}

	pub fn file(name: impl Into<String>, label: impl Into<String>) -> Self {
		Self::new(name, label, FieldKind::File)
	}

	pub fn string_array(name: impl Into<String>, label: impl Into<String>) -> Self {
		Self::new(name, label, FieldKind::StringArray)
	}

	pub fn stat_array(name: impl Into<String>, label: impl Into<String>) -> Self {
		Self::new(name, label, FieldKind::StatArray)
	}

	pub fn string_list(name: impl Into<String>, label: impl Into<String>) -> Self {
		Self::new(name, label, FieldKind::StringList)
	}

	/// Mark the field as required.
	pub fn required(mut self) -> Self {
		self.required = true;
		self
	}

	pub fn with_min(mut self, min: f64) -> Self {
		self.min = Some(min);
		self
	}

	pub fn with_max(mut self, max: f64) -> Self {
		self.max = Some(max);
		self
	}

	pub fn with_help(mut self, help: impl Into<String>) -> Self {
		self.help = Some(help.into());
		self
	}

	pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
		self.placeholder = Some(placeholder.into());
		self
	}

	/// Mark the field as display-only.
	pub fn readonly(mut self) -> Self {
		self.readonly = true;
		self
	}

	/// Mark the field as accepted on create only.
	///
	/// # Examples
	///
	/// ```
	/// use vitrine_registry::FieldSpec;
	///
	/// let field = FieldSpec::password("password", "Password").required().create_only();
	/// assert!(field.create_only);
	/// ```
	pub fn create_only(mut self) -> Self {
		self.create_only = true;
		self
	}

	/// Default value for this field when absent from initial data.
	pub fn default_value(&self) -> serde_json::Value {
		self.kind.default_value()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	#[case(FieldKind::Checkbox, json!(false))]
	#[case(FieldKind::Number, json!(""))]
	#[case(FieldKind::Date, json!(""))]
	#[case(FieldKind::DateTime, json!(""))]
	#[case(FieldKind::StringList, json!("[]"))]
	#[case(FieldKind::StringArray, json!(""))]
	#[case(FieldKind::Text, json!(""))]
	fn test_default_values(#[case] kind: FieldKind, #[case] expected: serde_json::Value) {
		assert_eq!(kind.default_value(), expected);
	}

	#[rstest]
	fn test_kind_wire_names() {
		// The serialized names follow the HTML input vocabulary
		assert_eq!(
			serde_json::to_string(&FieldKind::DateTime).unwrap(),
			"\"datetime-local\""
		);
		assert_eq!(
			serde_json::to_string(&FieldKind::StringList).unwrap(),
			"\"custom-list\""
		);
		assert_eq!(serde_json::to_string(&FieldKind::TextArea).unwrap(), "\"textarea\"");
	}

	#[rstest]
	fn test_builder_flags() {
		let field = FieldSpec::number("order", "Display order")
			.required()
			.with_min(1.0)
			.with_placeholder("1");

		assert!(field.required);
		assert_eq!(field.min, Some(1.0));
		assert_eq!(field.max, None);
		assert_eq!(field.placeholder.as_deref(), Some("1"));
	}

	#[rstest]
	fn test_array_kinds() {
		assert!(FieldKind::StringArray.is_array());
		assert!(FieldKind::StatArray.is_array());
		assert!(FieldKind::StringList.is_array());
		assert!(!FieldKind::TextArea.is_array());
	}
}
