//! Entity configuration and capability flags

use crate::field::FieldSpec;
use serde::{Deserialize, Serialize};

/// What the admin is allowed to do with an entity.
///
/// Consumed by the page orchestrator only; the resource client performs
/// whatever operation it is asked to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
	pub can_create: bool,
	pub can_edit: bool,
	pub can_delete: bool,
	/// Entity exposes `PUT /{path}/{id}/toggle`.
	pub has_toggle: bool,
	/// Entity exposes `PATCH /{path}/{id}/toggle-active`.
	pub has_toggle_active: bool,
	/// The whole entity is display-only; overrides the other flags.
	pub read_only: bool,
}

impl Default for Capabilities {
	fn default() -> Self {
		Self {
			can_create: true,
			can_edit: true,
			can_delete: true,
			has_toggle: false,
			has_toggle_active: false,
			read_only: false,
		}
	}
}

impl Capabilities {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn no_create(mut self) -> Self {
		self.can_create = false;
		self
	}

	pub fn no_edit(mut self) -> Self {
		self.can_edit = false;
		self
	}

	pub fn no_delete(mut self) -> Self {
		self.can_delete = false;
		self
	}

	pub fn toggle(mut self) -> Self {
		self.has_toggle = true;
		self
	}

	pub fn toggle_active(mut self) -> Self {
		self.has_toggle_active = true;
		self
	}

	/// Display-only entity.
	///
	/// # Examples
	///
	/// ```
	/// use vitrine_registry::Capabilities;
	///
	/// let caps = Capabilities::new().read_only();
	/// assert!(!caps.allows_create());
	/// assert!(!caps.allows_edit());
	/// assert!(!caps.allows_delete());
	/// ```
	pub fn read_only(mut self) -> Self {
		self.read_only = true;
		self
	}

	pub fn allows_create(&self) -> bool {
		self.can_create && !self.read_only
	}

	pub fn allows_edit(&self) -> bool {
		self.can_edit && !self.read_only
	}

	pub fn allows_delete(&self) -> bool {
		self.can_delete && !self.read_only
	}

	pub fn allows_toggle(&self) -> bool {
		self.has_toggle || self.has_toggle_active
	}
}

/// Configuration of one manageable entity.
///
/// Immutable after construction; the registry builds one per entity at
/// first access and hands out `&'static` references.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityConfig {
	/// Resource key, also the REST collection path segment.
	pub key: String,
	/// Human-readable title for the page header.
	pub title: String,
	pub fields: Vec<FieldSpec>,
	pub capabilities: Capabilities,
}

impl EntityConfig {
	pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
		Self {
			key: key.into(),
			title: title.into(),
			fields: Vec::new(),
			capabilities: Capabilities::default(),
		}
	}

	pub fn field(mut self, field: FieldSpec) -> Self {
		self.fields.push(field);
		self
	}

	pub fn capabilities(mut self, capabilities: Capabilities) -> Self {
		self.capabilities = capabilities;
		self
	}

	pub fn field_by_name(&self, name: &str) -> Option<&FieldSpec> {
		self.fields.iter().find(|f| f.name == name)
	}

	/// Field names, in declaration order.
	pub fn field_names(&self) -> Vec<&str> {
		self.fields.iter().map(|f| f.name.as_str()).collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::field::FieldSpec;
	use rstest::rstest;

	#[rstest]
	fn test_read_only_overrides_flags() {
		// Arrange
		let caps = Capabilities::new().read_only();

		// Act & Assert
		assert!(caps.can_create, "the underlying flag is untouched");
		assert!(!caps.allows_create());
		assert!(!caps.allows_edit());
		assert!(!caps.allows_delete());
	}

	#[rstest]
	fn test_toggle_variants() {
		assert!(Capabilities::new().toggle().allows_toggle());
		assert!(Capabilities::new().toggle_active().allows_toggle());
		assert!(!Capabilities::new().allows_toggle());
	}

	#[rstest]
	fn test_field_lookup() {
		let config = EntityConfig::new("faqs", "FAQ")
			.field(FieldSpec::text("question", "Question").required())
			.field(FieldSpec::textarea("answer", "Answer").required());

		assert!(config.field_by_name("question").is_some());
		assert!(config.field_by_name("missing").is_none());
		assert_eq!(config.field_names(), vec!["question", "answer"]);
	}
}
