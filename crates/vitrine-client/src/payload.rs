//! Mutation payloads and the JSON / multipart encoding rule

use crate::error::ApiResult;
use serde_json::{Map, Value};
use std::collections::HashMap;

/// A binary upload attached to a payload field.
#[derive(Debug, Clone)]
pub struct FileUpload {
	pub filename: String,
	pub bytes: Vec<u8>,
	pub mime: String,
}

impl FileUpload {
	pub fn new(filename: impl Into<String>, bytes: Vec<u8>, mime: impl Into<String>) -> Self {
		Self {
			filename: filename.into(),
			bytes,
			mime: mime.into(),
		}
	}
}

/// Body of a create/update call.
///
/// Plain values travel as JSON. As soon as one field holds a file the
/// whole payload is encoded as `multipart/form-data` instead, with null
/// and empty-string parts omitted.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use vitrine_client::{FileUpload, Payload};
///
/// let payload = Payload::new().set("title", json!("Hello"));
/// assert!(!payload.has_files());
///
/// let payload = payload.with_file(
/// 	"image",
/// 	FileUpload::new("hero.png", vec![0x89, 0x50], "image/png"),
/// );
/// assert!(payload.has_files());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Payload {
	values: Map<String, Value>,
	files: HashMap<String, FileUpload>,
}

impl Payload {
	pub fn new() -> Self {
		Self::default()
	}

	/// Wrap an already-cleaned value map (the form's submit output).
	pub fn from_values(values: Map<String, Value>) -> Self {
		Self {
			values,
			files: HashMap::new(),
		}
	}

	pub fn set(mut self, name: impl Into<String>, value: Value) -> Self {
		self.values.insert(name.into(), value);
		self
	}

	pub fn with_file(mut self, name: impl Into<String>, file: FileUpload) -> Self {
		self.files.insert(name.into(), file);
		self
	}

	pub fn values(&self) -> &Map<String, Value> {
		&self.values
	}

	pub fn has_files(&self) -> bool {
		!self.files.is_empty()
	}

	/// Build the multipart form: one part per non-empty value plus one
	/// part per file.
	pub(crate) fn to_multipart(&self) -> ApiResult<reqwest::multipart::Form> {
		let mut form = reqwest::multipart::Form::new();

		for (name, value) in &self.values {
			let text = match value {
				Value::Null => continue,
				Value::String(s) if s.is_empty() => continue,
				Value::String(s) => s.clone(),
				other => other.to_string(),
			};
			form = form.text(name.clone(), text);
		}

		for (name, file) in &self.files {
			let part = reqwest::multipart::Part::bytes(file.bytes.clone())
				.file_name(file.filename.clone())
				.mime_str(&file.mime)?;
			form = form.part(name.clone(), part);
		}

		Ok(form)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	fn test_json_payload_has_no_files() {
		let payload = Payload::new()
			.set("title", json!("x"))
			.set("order", json!(3));

		assert!(!payload.has_files());
		assert_eq!(payload.values().len(), 2);
	}

	#[rstest]
	fn test_single_file_switches_encoding() {
		let payload =
			Payload::new().with_file("logo", FileUpload::new("logo.svg", vec![1], "image/svg+xml"));
		assert!(payload.has_files());
	}

	#[rstest]
	fn test_multipart_skips_null_and_empty_parts() {
		let payload = Payload::new()
			.set("title", json!("x"))
			.set("slogan", json!(""))
			.set("address", Value::Null)
			.set("isActive", json!(true))
			.with_file("logo", FileUpload::new("logo.png", vec![1, 2], "image/png"));

		// The form builds without error; empty/null values contribute no
		// parts (verified end to end in the client tests).
		let form = payload.to_multipart().unwrap();
		drop(form);
	}
}
