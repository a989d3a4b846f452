//! Column descriptors and cell formatting

use chrono::{DateTime, NaiveDate};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use vitrine_registry::{FieldKind, FieldSpec};

const TRUNCATE_AT: usize = 50;

/// How a column renders its values.
#[derive(Clone, Default)]
pub enum ColumnKind {
	#[default]
	Text,
	Date,
	DateTime,
	Boolean,
	Email,
	Url,
	Image,
	/// Ellipsis after 50 characters.
	Truncate,
	/// Caller-supplied renderer.
	Custom(Arc<dyn Fn(&Value) -> Cell + Send + Sync>),
}

impl fmt::Debug for ColumnKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			ColumnKind::Text => "Text",
			ColumnKind::Date => "Date",
			ColumnKind::DateTime => "DateTime",
			ColumnKind::Boolean => "Boolean",
			ColumnKind::Email => "Email",
			ColumnKind::Url => "Url",
			ColumnKind::Image => "Image",
			ColumnKind::Truncate => "Truncate",
			ColumnKind::Custom(_) => "Custom",
		};
		f.write_str(name)
	}
}

/// A formatted table cell.
///
/// Headless counterpart of what a widget layer would paint: plain text, a
/// link, an image, or the `-` placeholder for missing values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
	Text(String),
	Link { href: String, text: String },
	Image { src: String },
	Empty,
}

impl fmt::Display for Cell {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Cell::Text(text) => f.write_str(text),
			Cell::Link { text, .. } => f.write_str(text),
			Cell::Image { src } => f.write_str(src),
			Cell::Empty => f.write_str("-"),
		}
	}
}

/// One table column.
#[derive(Debug, Clone)]
pub struct Column {
	pub key: String,
	pub label: String,
	pub kind: ColumnKind,
}

impl Column {
	pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
		Self {
			key: key.into(),
			label: label.into(),
			kind: ColumnKind::Text,
		}
	}

	pub fn with_kind(mut self, kind: ColumnKind) -> Self {
		self.kind = kind;
		self
	}

	/// Column with a caller-supplied cell renderer.
	pub fn custom<F>(key: impl Into<String>, label: impl Into<String>, render: F) -> Self
	where
		F: Fn(&Value) -> Cell + Send + Sync + 'static,
	{
		Self::new(key, label).with_kind(ColumnKind::Custom(Arc::new(render)))
	}

	/// Raw text of a value, as used by filtering and sorting.
	///
	/// Null and missing values stringify to the empty string so that they
	/// sort together and never match a search term.
	pub fn raw_text(value: Option<&Value>) -> String {
		match value {
			None | Some(Value::Null) => String::new(),
			Some(Value::String(s)) => s.clone(),
			Some(other) => other.to_string(),
		}
	}

	/// Format a record value into a cell.
	///
	/// # Examples
	///
	/// ```
	/// use serde_json::json;
	/// use vitrine_tables::{Cell, Column, ColumnKind};
	///
	/// let bool_col = Column::new("isActive", "Active").with_kind(ColumnKind::Boolean);
	/// assert_eq!(bool_col.cell(Some(&json!(true))), Cell::Text("Yes".to_string()));
	///
	/// let email_col = Column::new("email", "Email").with_kind(ColumnKind::Email);
	/// assert_eq!(
	/// 	email_col.cell(Some(&json!("a@b.io"))),
	/// 	Cell::Link { href: "mailto:a@b.io".to_string(), text: "a@b.io".to_string() },
	/// );
	///
	/// let any_col = Column::new("x", "X");
	/// assert_eq!(any_col.cell(None), Cell::Empty);
	/// ```
	pub fn cell(&self, value: Option<&Value>) -> Cell {
		let value = match value {
			None | Some(Value::Null) => return Cell::Empty,
			Some(v) => v,
		};

		match &self.kind {
			ColumnKind::Custom(render) => render(value),
			ColumnKind::Boolean => {
				let truthy = value.as_bool().unwrap_or(false);
				Cell::Text(if truthy { "Yes" } else { "No" }.to_string())
			}
			ColumnKind::Date => Cell::Text(format_date(&Column::raw_text(Some(value)))),
			ColumnKind::DateTime => Cell::Text(format_datetime(&Column::raw_text(Some(value)))),
			ColumnKind::Email => {
				let text = Column::raw_text(Some(value));
				if text.is_empty() {
					Cell::Empty
				} else {
					Cell::Link {
						href: format!("mailto:{text}"),
						text,
					}
				}
			}
			ColumnKind::Url => {
				let href = Column::raw_text(Some(value));
				if href.is_empty() {
					Cell::Empty
				} else {
					Cell::Link {
						href,
						text: "Link".to_string(),
					}
				}
			}
			ColumnKind::Image => {
				let src = Column::raw_text(Some(value));
				if src.is_empty() { Cell::Empty } else { Cell::Image { src } }
			}
			ColumnKind::Truncate => {
				let text = Column::raw_text(Some(value));
				let truncated = match text.char_indices().nth(TRUNCATE_AT) {
					Some((at, _)) => format!("{}...", &text[..at]),
					None => text,
				};
				Cell::Text(truncated)
			}
			ColumnKind::Text => Cell::Text(Column::raw_text(Some(value))),
		}
	}
}

impl From<&FieldSpec> for Column {
	/// Derive a column from a field descriptor, mapping the field kind to
	/// the closest cell format.
	fn from(field: &FieldSpec) -> Self {
		let kind = match field.kind {
			FieldKind::Checkbox => ColumnKind::Boolean,
			FieldKind::Date => ColumnKind::Date,
			FieldKind::DateTime => ColumnKind::DateTime,
			FieldKind::Email => ColumnKind::Email,
			FieldKind::Url => ColumnKind::Url,
			FieldKind::File => ColumnKind::Image,
			FieldKind::TextArea => ColumnKind::Truncate,
			_ => ColumnKind::Text,
		};
		Column::new(field.name.clone(), field.label.clone()).with_kind(kind)
	}
}

// Dates arrive as RFC 3339 timestamps or plain YYYY-MM-DD strings; render
// day/month/year and fall back to the raw text when unparseable.
fn format_date(raw: &str) -> String {
	if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
		return timestamp.format("%d/%m/%Y").to_string();
	}
	if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
		return date.format("%d/%m/%Y").to_string();
	}
	raw.to_string()
}

fn format_datetime(raw: &str) -> String {
	if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
		return timestamp.format("%d/%m/%Y %H:%M").to_string();
	}
	raw.to_string()
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	fn test_null_and_missing_are_empty_cells() {
		let column = Column::new("x", "X");
		assert_eq!(column.cell(None), Cell::Empty);
		assert_eq!(column.cell(Some(&Value::Null)), Cell::Empty);
	}

	#[rstest]
	#[case(json!(true), "Yes")]
	#[case(json!(false), "No")]
	fn test_boolean_cells(#[case] value: Value, #[case] expected: &str) {
		let column = Column::new("isActive", "Active").with_kind(ColumnKind::Boolean);
		assert_eq!(column.cell(Some(&value)), Cell::Text(expected.to_string()));
	}

	#[rstest]
	fn test_date_formatting() {
		let column = Column::new("date", "Date").with_kind(ColumnKind::Date);

		assert_eq!(
			column.cell(Some(&json!("2024-03-05"))),
			Cell::Text("05/03/2024".to_string())
		);
		assert_eq!(
			column.cell(Some(&json!("2024-03-05T10:30:00Z"))),
			Cell::Text("05/03/2024".to_string())
		);
		// unparseable input passes through
		assert_eq!(
			column.cell(Some(&json!("soon"))),
			Cell::Text("soon".to_string())
		);
	}

	#[rstest]
	fn test_datetime_formatting() {
		let column = Column::new("createdAt", "Created").with_kind(ColumnKind::DateTime);
		assert_eq!(
			column.cell(Some(&json!("2024-03-05T10:30:00Z"))),
			Cell::Text("05/03/2024 10:30".to_string())
		);
	}

	#[rstest]
	fn test_url_cell() {
		let column = Column::new("link", "Link").with_kind(ColumnKind::Url);
		assert_eq!(
			column.cell(Some(&json!("https://example.com"))),
			Cell::Link {
				href: "https://example.com".to_string(),
				text: "Link".to_string()
			}
		);
		assert_eq!(column.cell(Some(&json!(""))), Cell::Empty);
	}

	#[rstest]
	fn test_truncate_after_fifty_chars() {
		let column = Column::new("excerpt", "Excerpt").with_kind(ColumnKind::Truncate);
		let long = "x".repeat(60);
		let short = "short text";

		let Cell::Text(truncated) = column.cell(Some(&json!(long))) else {
			panic!("expected a text cell");
		};

		assert_eq!(truncated.len(), 53);
		assert!(truncated.ends_with("..."));
		assert_eq!(column.cell(Some(&json!(short))), Cell::Text(short.to_string()));
	}

	#[rstest]
	fn test_custom_renderer() {
		let column = Column::custom("rating", "Rating", |value| {
			Cell::Text("*".repeat(value.as_u64().unwrap_or(0) as usize))
		});
		assert_eq!(column.cell(Some(&json!(3))), Cell::Text("***".to_string()));
	}

	#[rstest]
	fn test_column_from_field_spec() {
		use vitrine_registry::FieldSpec;

		let column: Column = (&FieldSpec::checkbox("isActive", "Active")).into();
		assert!(matches!(column.kind, ColumnKind::Boolean));

		let column: Column = (&FieldSpec::textarea("excerpt", "Excerpt")).into();
		assert!(matches!(column.kind, ColumnKind::Truncate));
	}
}
