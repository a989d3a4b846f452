//! The per-page state machine

use crate::message::Message;
use serde_json::Value;
use std::collections::HashMap;
use tracing::{debug, error};
use vitrine_client::{Api, FileUpload, Payload, Record, ResourceClient};
use vitrine_forms::FormState;
use vitrine_registry::{Entity, EntityConfig, RegistryError};
use vitrine_tables::{Column, DataTable, RowActions};

/// Where a page currently is.
///
/// Transitions are driven by the `CrudPage` methods; every mutation ends
/// in a re-fetch of the list, so `Loaded` always reflects the backend.
#[derive(Debug, Clone)]
pub enum PageState {
	Idle,
	Loading,
	Loaded,
	/// A create or edit form is open. `id` is the edited record's id,
	/// `None` when creating.
	FormOpen { form: FormState, id: Option<Value> },
	ConfirmingDelete { record: Record },
	Viewing { record: Record },
	Saving,
	/// The initial list fetch failed; shown inline, the page stays up.
	Failed { error: String },
}

impl PageState {
	pub fn is_loaded(&self) -> bool {
		matches!(self, PageState::Loaded)
	}

	pub fn is_form_open(&self) -> bool {
		matches!(self, PageState::FormOpen { .. })
	}
}

/// One admin page: entity config + resource client + table + flows.
#[derive(Debug)]
pub struct CrudPage {
	config: &'static EntityConfig,
	client: ResourceClient,
	table: DataTable,
	records: Vec<Record>,
	state: PageState,
	message: Option<Message>,
	pending_files: HashMap<String, FileUpload>,
}

impl CrudPage {
	/// Page for a statically known entity.
	pub fn new(api: &Api, entity: Entity) -> Self {
		let config = entity.config();
		Self {
			config,
			client: api.entity(entity),
			table: Self::default_table(config),
			records: Vec::new(),
			state: PageState::Idle,
			message: None,
			pending_files: HashMap::new(),
		}
	}

	/// Page wired by string key.
	///
	/// An unregistered key comes back as a [`RegistryError`] carrying the
	/// valid keys, ready to be rendered as a configuration-error view.
	pub fn for_key(api: &Api, key: &str) -> Result<Self, RegistryError> {
		let entity: Entity = key.parse()?;
		Ok(Self::new(api, entity))
	}

	fn default_table(config: &EntityConfig) -> DataTable {
		let mut columns: Vec<Column> = config.fields.iter().map(Column::from).collect();
		columns.push(
			Column::new("createdAt", "Created").with_kind(vitrine_tables::ColumnKind::DateTime),
		);

		let caps = config.capabilities;
		let mut actions = RowActions::none().view();
		if caps.allows_edit() {
			actions = actions.edit();
		}
		if caps.allows_delete() {
			actions = actions.delete();
		}
		if caps.allows_toggle() {
			actions = actions.toggle();
		}
		DataTable::new(columns).with_actions(actions)
	}

	/// Replace the derived columns with a hand-picked set.
	pub fn with_columns(mut self, columns: Vec<Column>) -> Self {
		let actions = self.table.actions();
		self.table = DataTable::new(columns).with_actions(actions);
		self
	}

	pub fn config(&self) -> &'static EntityConfig {
		self.config
	}

	pub fn state(&self) -> &PageState {
		&self.state
	}

	pub fn records(&self) -> &[Record] {
		&self.records
	}

	pub fn table(&self) -> &DataTable {
		&self.table
	}

	pub fn table_mut(&mut self) -> &mut DataTable {
		&mut self.table
	}

	/// The rows visible under the current search/sort/page state.
	pub fn visible_rows(&self) -> Vec<&Record> {
		self.table.visible_rows(&self.records)
	}

	pub fn message(&self) -> Option<&Message> {
		self.message.as_ref()
	}

	pub fn dismiss_message(&mut self) {
		self.message = None;
	}

	/// Fetch the list. Failure lands in [`PageState::Failed`] with the
	/// inline error; the page itself stays usable and a later `load`
	/// can recover.
	pub async fn load(&mut self) {
		self.state = PageState::Loading;
		match self.client.list().await {
			Ok(records) => {
				debug!(entity = %self.config.key, count = records.len(), "list loaded");
				self.records = records;
				self.state = PageState::Loaded;
			}
			Err(err) => {
				error!(entity = %self.config.key, "list fetch failed: {err}");
				self.records.clear();
				self.state = PageState::Failed {
					error: format!("Failed to load data: {err}"),
				};
			}
		}
	}

	/// Open the create form. Suppressed (returns false) when the entity
	/// does not allow creation or no list is loaded.
	pub fn open_create(&mut self) -> bool {
		if !self.state.is_loaded() || !self.config.capabilities.allows_create() {
			return false;
		}
		self.state = PageState::FormOpen {
			form: FormState::for_create(&self.config.fields),
			id: None,
		};
		true
	}

	/// Open the edit form for a record. Suppressed when editing is not
	/// allowed or the id is not in the loaded list.
	pub fn open_edit(&mut self, id: &Value) -> bool {
		if !self.state.is_loaded() || !self.config.capabilities.allows_edit() {
			return false;
		}
		let Some(record) = self.find(id).cloned() else {
			return false;
		};
		self.state = PageState::FormOpen {
			form: FormState::for_edit(&self.config.fields, &record),
			id: Some(id.clone()),
		};
		true
	}

	/// Open the read-only view. Always allowed from a loaded list.
	pub fn open_view(&mut self, id: &Value) -> bool {
		if !self.state.is_loaded() {
			return false;
		}
		let Some(record) = self.find(id).cloned() else {
			return false;
		};
		self.state = PageState::Viewing { record };
		true
	}

	/// Ask for delete confirmation. Suppressed when deletion is not
	/// allowed.
	pub fn request_delete(&mut self, id: &Value) -> bool {
		if !self.state.is_loaded() || !self.config.capabilities.allows_delete() {
			return false;
		}
		let Some(record) = self.find(id).cloned() else {
			return false;
		};
		self.state = PageState::ConfirmingDelete { record };
		true
	}

	/// Close any open form, confirmation or view without touching the
	/// backend.
	pub fn cancel(&mut self) {
		if matches!(
			self.state,
			PageState::FormOpen { .. } | PageState::ConfirmingDelete { .. } | PageState::Viewing { .. }
		) {
			self.pending_files.clear();
			self.state = PageState::Loaded;
		}
	}

	/// Set a field on the open form; a no-op when no form is open.
	pub fn form_set(&mut self, name: &str, value: Value) {
		if let PageState::FormOpen { form, .. } = &mut self.state {
			form.set(name, value);
		}
	}

	/// The open form, for rendering values and inline errors.
	pub fn form(&self) -> Option<&FormState> {
		match &self.state {
			PageState::FormOpen { form, .. } => Some(form),
			_ => None,
		}
	}

	/// Attach a file to the open form's payload; switches the submit to
	/// multipart encoding.
	pub fn attach_file(&mut self, field: impl Into<String>, file: FileUpload) {
		if self.state.is_form_open() {
			self.pending_files.insert(field.into(), file);
		}
	}

	/// Submit the open form.
	///
	/// Validation failure keeps the form open with inline errors and
	/// never reaches the network. A backend failure re-opens the form
	/// with its values intact and raises the error banner. Success
	/// closes the form and re-fetches the list.
	pub async fn submit(&mut self) {
		if !self.state.is_form_open() {
			return;
		}
		let PageState::FormOpen { mut form, id } =
			std::mem::replace(&mut self.state, PageState::Saving)
		else {
			return;
		};

		let values = match form.submit() {
			Ok(values) => values,
			Err(_) => {
				// per-field errors are already recorded on the form
				self.state = PageState::FormOpen { form, id };
				return;
			}
		};

		let mut payload = Payload::from_values(values);
		for (field, file) in self.pending_files.drain() {
			payload = payload.with_file(field, file);
		}

		let result = match &id {
			Some(id) => self.client.update(DisplayId(id), &payload).await,
			None => self.client.create(&payload).await,
		};

		match result {
			Ok(_) => {
				self.message = Some(if id.is_some() {
					Message::success("Record updated")
				} else {
					Message::success("Record created")
				});
				self.load().await;
			}
			Err(err) => {
				error!(entity = %self.config.key, "save failed: {err}");
				self.message = Some(Message::error(format!("Failed to save: {err}")));
				self.state = PageState::FormOpen { form, id };
			}
		}
	}

	/// Delete the record under confirmation, then re-fetch. Failure
	/// raises the banner and returns to the loaded list.
	pub async fn confirm_delete(&mut self) {
		if !matches!(self.state, PageState::ConfirmingDelete { .. }) {
			return;
		}
		let PageState::ConfirmingDelete { record } =
			std::mem::replace(&mut self.state, PageState::Saving)
		else {
			return;
		};

		let Some(id) = record.get("id").cloned() else {
			self.message = Some(Message::error("Record has no id"));
			self.state = PageState::Loaded;
			return;
		};

		match self.client.delete(DisplayId(&id)).await {
			Ok(()) => {
				self.message = Some(Message::success("Record deleted"));
				self.load().await;
			}
			Err(err) => {
				error!(entity = %self.config.key, "delete failed: {err}");
				self.message = Some(Message::error(format!("Failed to delete: {err}")));
				self.state = PageState::Loaded;
			}
		}
	}

	/// Flip a record's status straight from the loaded list, using
	/// whichever toggle variant the entity declares, then re-fetch.
	pub async fn toggle(&mut self, id: &Value) {
		let caps = self.config.capabilities;
		if !self.state.is_loaded() || !caps.allows_toggle() {
			return;
		}

		let result = if caps.has_toggle {
			self.client.toggle(DisplayId(id)).await
		} else {
			self.client.toggle_active(DisplayId(id)).await
		};

		match result {
			Ok(_) => {
				self.message = Some(Message::success("Status updated"));
				self.load().await;
			}
			Err(err) => {
				error!(entity = %self.config.key, "toggle failed: {err}");
				self.message = Some(Message::error(format!("Failed to update status: {err}")));
			}
		}
	}

	fn find(&self, id: &Value) -> Option<&Record> {
		self.records.iter().find(|r| r.get("id") == Some(id))
	}
}

// Renders a JSON id into a URL path segment without the quotes a plain
// Value would carry.
struct DisplayId<'a>(&'a Value);

impl std::fmt::Display for DisplayId<'_> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self.0 {
			Value::String(s) => f.write_str(s),
			other => write!(f, "{other}"),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	fn test_display_id_strips_quotes() {
		assert_eq!(DisplayId(&json!(42)).to_string(), "42");
		assert_eq!(DisplayId(&json!("abc-1")).to_string(), "abc-1");
	}

	#[rstest]
	fn test_message_helpers() {
		let banner = Message::error("nope");
		assert!(banner.is_error());
		assert_eq!(banner.text, "nope");
	}
}
