//! Form state: defaults, validation, cleaned payloads

use crate::validators;
use serde_json::{Map, Value};
use std::collections::HashMap;
use thiserror::Error;
use vitrine_registry::{FieldKind, FieldSpec};

/// Form error type
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
	/// One or more fields failed validation. The map carries one
	/// field-scoped message per offending field; nothing was submitted.
	#[error("{} field(s) failed validation", .0.len())]
	Invalid(HashMap<String, String>),
}

pub type FormResult<T> = Result<T, FormError>;

/// Whether the form creates a new record or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
	Create,
	Edit,
}

/// Transient state of one open form.
///
/// Built from a field list plus initial values, mutated as the user
/// edits, and discarded after submit or cancel. Validation failures are
/// kept per field and block submission.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use vitrine_forms::FormState;
/// use vitrine_registry::FieldSpec;
///
/// let fields = vec![
/// 	FieldSpec::text("title", "Title").required(),
/// 	FieldSpec::email("email", "Email"),
/// ];
/// let mut form = FormState::for_create(&fields);
/// form.set("title", json!("Hello"));
///
/// let payload = form.submit().unwrap();
/// assert_eq!(payload.get("title"), Some(&json!("Hello")));
/// // optional empty email is dropped, not submitted as ""
/// assert!(!payload.contains_key("email"));
/// ```
#[derive(Debug, Clone)]
pub struct FormState {
	fields: Vec<FieldSpec>,
	mode: FormMode,
	values: Map<String, Value>,
	errors: HashMap<String, String>,
}

impl FormState {
	/// New form seeded with the per-kind default values.
	pub fn for_create(fields: &[FieldSpec]) -> Self {
		Self::build(fields, FormMode::Create, None)
	}

	/// New form seeded from an existing record.
	///
	/// A value present in the record wins even when it is falsy; only
	/// absent fields fall back to the defaults.
	pub fn for_edit(fields: &[FieldSpec], record: &Map<String, Value>) -> Self {
		Self::build(fields, FormMode::Edit, Some(record))
	}

	fn build(fields: &[FieldSpec], mode: FormMode, record: Option<&Map<String, Value>>) -> Self {
		let mut values = Map::new();
		for field in fields {
			let value = record
				.and_then(|r| r.get(&field.name).cloned())
				.unwrap_or_else(|| field.default_value());
			values.insert(field.name.clone(), value);
		}
		Self {
			fields: fields.to_vec(),
			mode,
			values,
			errors: HashMap::new(),
		}
	}

	pub fn mode(&self) -> FormMode {
		self.mode
	}

	pub fn is_edit(&self) -> bool {
		self.mode == FormMode::Edit
	}

	pub fn fields(&self) -> &[FieldSpec] {
		&self.fields
	}

	pub fn values(&self) -> &Map<String, Value> {
		&self.values
	}

	pub fn value(&self, name: &str) -> Option<&Value> {
		self.values.get(name)
	}

	pub fn errors(&self) -> &HashMap<String, String> {
		&self.errors
	}

	pub fn error(&self, name: &str) -> Option<&str> {
		self.errors.get(name).map(String::as_str)
	}

	/// Set a field value. Clears any error recorded for the field, so
	/// the inline message disappears as soon as the user edits again.
	pub fn set(&mut self, name: &str, value: Value) {
		self.values.insert(name.to_string(), value);
		self.errors.remove(name);
	}

	/// Validate a single field, for blur-style feedback.
	///
	/// Records (or clears) the field's inline error and returns the
	/// message when the value is invalid.
	pub fn validate_field(&mut self, name: &str) -> Option<String> {
		let field = self.fields.iter().find(|f| f.name == name)?;
		if Self::skipped(field, self.mode) {
			self.errors.remove(name);
			return None;
		}
		match Self::check(field, self.values.get(name)) {
			Some(message) => {
				self.errors.insert(name.to_string(), message.clone());
				Some(message)
			}
			None => {
				self.errors.remove(name);
				None
			}
		}
	}

	/// Validate every field; returns true when the form is clean.
	pub fn validate(&mut self) -> bool {
		self.errors.clear();
		for field in &self.fields {
			if Self::skipped(field, self.mode) {
				continue;
			}
			if let Some(message) = Self::check(field, self.values.get(&field.name)) {
				self.errors.insert(field.name.clone(), message);
			}
		}
		self.errors.is_empty()
	}

	/// Validate and produce the cleaned payload.
	///
	/// Cleaning rules:
	/// - `create_only` fields are stripped when editing;
	/// - `readonly` fields are never submitted;
	/// - empty optional values are dropped rather than sent as `""`;
	/// - an empty required number becomes `0`;
	/// - a missing checkbox becomes `false`;
	/// - file fields without a selection are dropped.
	pub fn submit(&mut self) -> FormResult<Map<String, Value>> {
		if !self.validate() {
			return Err(FormError::Invalid(self.errors.clone()));
		}
		Ok(Self::cleaned(&self.fields, self.mode, &self.values))
	}

	/// Apply the cleaning rules to a raw value map.
	///
	/// Kept separate from validation so callers that assemble values out
	/// of band (import flows, tests) get the same payload shape.
	pub fn cleaned(fields: &[FieldSpec], mode: FormMode, values: &Map<String, Value>) -> Map<String, Value> {
		let mut payload = values.clone();
		for field in fields {
			if (field.create_only && mode == FormMode::Edit) || field.readonly {
				payload.remove(&field.name);
				continue;
			}

			let value = payload.get(&field.name);
			let missing = matches!(value, None | Some(Value::Null));
			let empty = matches!(value, Some(Value::String(s)) if s.trim().is_empty());

			match field.kind {
				FieldKind::Number => {
					if missing || empty {
						if field.required {
							payload.insert(field.name.clone(), Value::from(0));
						} else {
							payload.remove(&field.name);
						}
					}
				}
				FieldKind::Checkbox => {
					if missing {
						payload.insert(field.name.clone(), Value::Bool(false));
					}
				}
				FieldKind::File => {
					if missing || empty {
						payload.remove(&field.name);
					}
				}
				_ => {
					if (missing || empty) && !field.required {
						payload.remove(&field.name);
					}
				}
			}
		}
		payload
	}

	fn skipped(field: &FieldSpec, mode: FormMode) -> bool {
		field.readonly || (field.create_only && mode == FormMode::Edit)
	}

	// One field check; None means valid. Empty optional values are valid
	// and skip the kind-specific rules.
	fn check(field: &FieldSpec, value: Option<&Value>) -> Option<String> {
		let text = match value {
			None | Some(Value::Null) => String::new(),
			Some(Value::String(s)) => s.clone(),
			Some(other) => other.to_string(),
		};
		let trimmed = text.trim();

		if trimmed.is_empty() {
			if field.required {
				return Some(format!("{} is required", field.label));
			}
			return None;
		}

		let result = match field.kind {
			FieldKind::Email => validators::validate_email(trimmed),
			FieldKind::Url => validators::validate_url(trimmed),
			FieldKind::Tel => validators::validate_tel(trimmed),
			FieldKind::Number => validators::validate_number(trimmed, field.min, field.max),
			FieldKind::StringArray | FieldKind::StringList => {
				validators::validate_string_array(&text, field.required)
			}
			FieldKind::StatArray => validators::validate_stat_array(&text),
			_ => Ok(()),
		};
		result.err()
	}
}
