//! Per-kind value validators
//!
//! Small, stateless checks shared by the form engine. Each returns the
//! user-facing message on failure so the form can surface it inline next
//! to the offending field.

use regex::Regex;
use std::sync::LazyLock;

// local@domain.tld shape; intentionally permissive beyond that.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^\S+@\S+\.\S+$").expect("EMAIL_REGEX: invalid regex pattern")
});

// Permissive phone pattern: digits, spaces, dashes, parentheses, one
// optional leading plus.
static TEL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[+]?[\d\s\-()]+$").expect("TEL_REGEX: invalid regex pattern")
});

/// Validates an email address.
///
/// # Examples
///
/// ```
/// use vitrine_forms::validators::validate_email;
///
/// assert!(validate_email("jane@example.com").is_ok());
/// assert!(validate_email("not-an-email").is_err());
/// ```
pub fn validate_email(value: &str) -> Result<(), String> {
	if EMAIL_REGEX.is_match(value) {
		Ok(())
	} else {
		Err("Invalid email format".to_string())
	}
}

/// Validates a URL: it must start with `http://` or `https://`.
///
/// # Examples
///
/// ```
/// use vitrine_forms::validators::validate_url;
///
/// assert!(validate_url("https://example.com").is_ok());
/// assert!(validate_url("http://localhost:3000/x").is_ok());
/// assert!(validate_url("ftp://example.com").is_err());
/// assert!(validate_url("example.com").is_err());
/// ```
pub fn validate_url(value: &str) -> Result<(), String> {
	if value.starts_with("http://") || value.starts_with("https://") {
		Ok(())
	} else {
		Err("Invalid URL (must start with http:// or https://)".to_string())
	}
}

/// Validates a phone number against a permissive character pattern.
///
/// # Examples
///
/// ```
/// use vitrine_forms::validators::validate_tel;
///
/// assert!(validate_tel("+1 (555) 123-4567").is_ok());
/// assert!(validate_tel("call me").is_err());
/// ```
pub fn validate_tel(value: &str) -> Result<(), String> {
	if TEL_REGEX.is_match(value) {
		Ok(())
	} else {
		Err("Invalid phone number format".to_string())
	}
}

/// Validates a numeric input against optional bounds.
///
/// Non-numeric text is rejected before the bounds are checked.
pub fn validate_number(value: &str, min: Option<f64>, max: Option<f64>) -> Result<(), String> {
	let parsed: f64 = value
		.trim()
		.parse()
		.map_err(|_| "Value must be a number".to_string())?;

	if let Some(min) = min
		&& parsed < min
	{
		return Err(format!("Value must be at least {min}"));
	}
	if let Some(max) = max
		&& parsed > max
	{
		return Err(format!("Value must be at most {max}"));
	}
	Ok(())
}

/// Validates a JSON text as an array of non-empty strings.
///
/// `required` additionally rejects an empty array.
///
/// # Examples
///
/// ```
/// use vitrine_forms::validators::validate_string_array;
///
/// assert!(validate_string_array(r#"["a","b"]"#, false).is_ok());
/// assert!(validate_string_array("not json", false).is_err());
/// assert!(validate_string_array(r#"{"a":1}"#, false).is_err());
/// assert!(validate_string_array("[]", true).is_err());
/// assert!(validate_string_array(r#"["", "b"]"#, false).is_err());
/// ```
pub fn validate_string_array(value: &str, required: bool) -> Result<(), String> {
	let parsed: serde_json::Value = serde_json::from_str(value)
		.map_err(|_| r#"Invalid JSON format. Example: ["Item 1", "Item 2"]"#.to_string())?;

	let items = parsed
		.as_array()
		.ok_or_else(|| r#"The value must be a JSON array (e.g. ["Item 1", "Item 2"])"#.to_string())?;

	if items.is_empty() && required {
		return Err("The list cannot be empty".to_string());
	}

	let all_strings = items
		.iter()
		.all(|item| item.as_str().is_some_and(|s| !s.trim().is_empty()));
	if !all_strings {
		return Err("Every element must be a non-empty string".to_string());
	}
	Ok(())
}

/// Validates a JSON text as an array of `{"number", "label"}` objects,
/// both values being strings.
///
/// # Examples
///
/// ```
/// use vitrine_forms::validators::validate_stat_array;
///
/// assert!(validate_stat_array(r#"[{"number":"10+","label":"Projects"}]"#).is_ok());
/// assert!(validate_stat_array(r#"[{"number":10,"label":"Projects"}]"#).is_err());
/// assert!(validate_stat_array(r#"[{"label":"Projects"}]"#).is_err());
/// assert!(validate_stat_array("not json").is_err());
/// ```
pub fn validate_stat_array(value: &str) -> Result<(), String> {
	let parsed: serde_json::Value =
		serde_json::from_str(value).map_err(|_| "Invalid JSON format".to_string())?;

	let items = parsed
		.as_array()
		.ok_or_else(|| "The value must be a JSON array".to_string())?;

	let well_formed = items.iter().all(|item| {
		item.get("number").is_some_and(|n| n.is_string())
			&& item.get("label").is_some_and(|l| l.is_string())
	});
	if !well_formed {
		return Err(r#"Invalid format. Example: [{"number":"10+","label":"Projects"}]"#.to_string());
	}
	Ok(())
}
