//! Item-by-item editor model for `StringList` fields

/// Editing model behind a `custom-list` field.
///
/// The field's stored value is a JSON string (`'["a","b"]'`); this editor
/// parses it into items the UI can manipulate one by one and serializes
/// back on every change.
///
/// # Examples
///
/// ```
/// use vitrine_forms::StringListEditor;
///
/// let mut editor = StringListEditor::from_value(r#"["Launch", "New blog"]"#);
/// editor.add("  Promo  ");
/// assert_eq!(editor.items(), ["Launch", "New blog", "Promo"]);
/// assert_eq!(editor.to_value(), r#"["Launch","New blog","Promo"]"#);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StringListEditor {
	items: Vec<String>,
}

impl StringListEditor {
	pub fn new() -> Self {
		Self::default()
	}

	/// Parse the stored JSON value. Anything that is not a JSON array of
	/// strings (including the empty string) yields an empty editor; a
	/// malformed stored value must not take the form down.
	pub fn from_value(value: &str) -> Self {
		let items = serde_json::from_str::<Vec<String>>(value).unwrap_or_default();
		Self { items }
	}

	pub fn items(&self) -> &[String] {
		&self.items
	}

	pub fn len(&self) -> usize {
		self.items.len()
	}

	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	/// Append a trimmed item; blank input is ignored.
	pub fn add(&mut self, item: &str) {
		let trimmed = item.trim();
		if !trimmed.is_empty() {
			self.items.push(trimmed.to_string());
		}
	}

	pub fn update(&mut self, index: usize, value: impl Into<String>) {
		if let Some(slot) = self.items.get_mut(index) {
			*slot = value.into();
		}
	}

	pub fn remove(&mut self, index: usize) {
		if index < self.items.len() {
			self.items.remove(index);
		}
	}

	/// Swap an item with its predecessor; a no-op at the top.
	pub fn move_up(&mut self, index: usize) {
		if index > 0 && index < self.items.len() {
			self.items.swap(index, index - 1);
		}
	}

	/// Swap an item with its successor; a no-op at the bottom.
	pub fn move_down(&mut self, index: usize) {
		if index + 1 < self.items.len() {
			self.items.swap(index, index + 1);
		}
	}

	/// Serialize back to the field's stored JSON string.
	pub fn to_value(&self) -> String {
		serde_json::to_string(&self.items).unwrap_or_else(|_| "[]".to_string())
	}
}
