//! Table state: filtering, sorting, pagination

use crate::column::Column;
use crate::debounce::Debouncer;
use serde_json::Value;
use std::time::Instant;
use thiserror::Error;

/// A backend record as the table sees it.
pub type Row = serde_json::Map<String, Value>;

/// Default number of rows per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Table error type
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
	#[error("page numbers are 1-indexed")]
	InvalidPage,
	#[error("page size must be at least 1")]
	InvalidPageSize,
	#[error("no column is keyed '{0}'")]
	UnknownColumn(String),
}

/// Sort direction for the active column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
	Ascending,
	Descending,
}

impl SortOrder {
	pub fn toggled(self) -> Self {
		match self {
			SortOrder::Ascending => SortOrder::Descending,
			SortOrder::Descending => SortOrder::Ascending,
		}
	}
}

/// The single active sort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortConfig {
	pub key: String,
	pub order: SortOrder,
}

/// Which row actions an instantiation offers.
///
/// Each action is rendered only when enabled here; the orchestrator
/// additionally gates mutating actions on the entity's capabilities.
#[derive(Debug, Clone, Copy, Default)]
pub struct RowActions {
	pub view: bool,
	pub edit: bool,
	pub delete: bool,
	pub toggle: bool,
	pub custom: bool,
}

impl RowActions {
	pub fn none() -> Self {
		Self::default()
	}

	pub fn view(mut self) -> Self {
		self.view = true;
		self
	}

	pub fn edit(mut self) -> Self {
		self.edit = true;
		self
	}

	pub fn delete(mut self) -> Self {
		self.delete = true;
		self
	}

	pub fn toggle(mut self) -> Self {
		self.toggle = true;
		self
	}

	pub fn custom(mut self) -> Self {
		self.custom = true;
		self
	}
}

/// Transient view state: search term, sort, current page.
#[derive(Debug, Clone)]
pub struct TableState {
	pub search: String,
	pub sort: Option<SortConfig>,
	/// 1-indexed current page.
	pub page: usize,
	pub page_size: usize,
}

impl Default for TableState {
	fn default() -> Self {
		Self {
			search: String::new(),
			sort: None,
			page: 1,
			page_size: DEFAULT_PAGE_SIZE,
		}
	}
}

/// An interactive data table over caller-owned rows.
///
/// # Examples
///
/// ```
/// use serde_json::{Map, Value, json};
/// use vitrine_tables::{Column, DataTable};
///
/// let rows: Vec<Map<String, Value>> = (1..=25)
/// 	.map(|i| {
/// 		json!({"id": i, "title": format!("Post {i}")})
/// 			.as_object()
/// 			.cloned()
/// 			.unwrap()
/// 	})
/// 	.collect();
///
/// let table = DataTable::new(vec![Column::new("id", "ID"), Column::new("title", "Title")]);
/// assert_eq!(table.visible_rows(&rows).len(), 10);
/// assert_eq!(table.page_count(&rows), 3);
/// ```
#[derive(Debug, Clone)]
pub struct DataTable {
	columns: Vec<Column>,
	actions: RowActions,
	state: TableState,
	debouncer: Debouncer,
}

impl DataTable {
	pub fn new(columns: Vec<Column>) -> Self {
		Self {
			columns,
			actions: RowActions::default(),
			state: TableState::default(),
			debouncer: Debouncer::default(),
		}
	}

	pub fn with_actions(mut self, actions: RowActions) -> Self {
		self.actions = actions;
		self
	}

	pub fn with_page_size(mut self, page_size: usize) -> Self {
		self.state.page_size = page_size.max(1);
		self
	}

	pub fn columns(&self) -> &[Column] {
		&self.columns
	}

	pub fn actions(&self) -> RowActions {
		self.actions
	}

	pub fn state(&self) -> &TableState {
		&self.state
	}

	/// Record a keystroke in the search box; the term only takes effect
	/// once [`DataTable::poll_search`] observes the debounce delay.
	pub fn search_input(&mut self, text: impl Into<String>, at: Instant) {
		self.debouncer.input(text, at);
	}

	/// Apply a settled search term, if any. Returns true when the filter
	/// changed and the caller should re-render.
	pub fn poll_search(&mut self, now: Instant) -> bool {
		match self.debouncer.poll(now) {
			Some(term) => {
				self.set_search(term);
				true
			}
			None => false,
		}
	}

	/// Set the search term immediately, bypassing the debounce.
	///
	/// The current page is deliberately left alone; resetting it on
	/// filter changes is the caller's call.
	pub fn set_search(&mut self, term: impl Into<String>) {
		self.state.search = term.into();
	}

	/// Toggle sorting on a column: a new column starts ascending, the
	/// active column flips direction.
	pub fn toggle_sort(&mut self, key: &str) -> Result<(), TableError> {
		if !self.columns.iter().any(|c| c.key == key) {
			return Err(TableError::UnknownColumn(key.to_string()));
		}
		self.state.sort = Some(match &self.state.sort {
			Some(active) if active.key == key => SortConfig {
				key: key.to_string(),
				order: active.order.toggled(),
			},
			_ => SortConfig {
				key: key.to_string(),
				order: SortOrder::Ascending,
			},
		});
		Ok(())
	}

	pub fn sort_config(&self) -> Option<&SortConfig> {
		self.state.sort.as_ref()
	}

	/// Jump to a page (1-indexed).
	pub fn set_page(&mut self, page: usize) -> Result<(), TableError> {
		if page == 0 {
			return Err(TableError::InvalidPage);
		}
		self.state.page = page;
		Ok(())
	}

	/// Advance one page, clamped to the page count of the given rows.
	pub fn next_page(&mut self, rows: &[Row]) {
		let last = self.page_count(rows).max(1);
		self.state.page = (self.state.page + 1).min(last);
	}

	/// Go back one page, clamped to 1.
	pub fn prev_page(&mut self) {
		self.state.page = self.state.page.saturating_sub(1).max(1);
	}

	/// Number of rows surviving the filter.
	pub fn result_count(&self, rows: &[Row]) -> usize {
		rows.iter().filter(|row| self.matches(row)).count()
	}

	/// Number of pages after filtering.
	pub fn page_count(&self, rows: &[Row]) -> usize {
		self.result_count(rows).div_ceil(self.state.page_size)
	}

	/// The rows visible on the current page: filter, sort, slice.
	pub fn visible_rows<'a>(&self, rows: &'a [Row]) -> Vec<&'a Row> {
		let mut visible: Vec<&Row> = rows.iter().filter(|row| self.matches(row)).collect();

		if let Some(sort) = &self.state.sort {
			visible.sort_by(|a, b| {
				// Stringified comparison: not numeric- or locale-aware.
				let left = Column::raw_text(a.get(&sort.key));
				let right = Column::raw_text(b.get(&sort.key));
				match sort.order {
					SortOrder::Ascending => left.cmp(&right),
					SortOrder::Descending => right.cmp(&left),
				}
			});
		}

		let start = (self.state.page - 1) * self.state.page_size;
		visible
			.into_iter()
			.skip(start)
			.take(self.state.page_size)
			.collect()
	}

	// Case-insensitive substring match over every column's raw text.
	fn matches(&self, row: &Row) -> bool {
		if self.state.search.is_empty() {
			return true;
		}
		let needle = self.state.search.to_lowercase();
		self.columns
			.iter()
			.any(|column| Column::raw_text(row.get(&column.key)).to_lowercase().contains(&needle))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	fn row(pairs: &[(&str, Value)]) -> Row {
		pairs
			.iter()
			.map(|(k, v)| (k.to_string(), v.clone()))
			.collect()
	}

	fn sample_rows() -> Vec<Row> {
		vec![
			row(&[("id", json!(1)), ("name", json!("Alice")), ("active", json!(true))]),
			row(&[("id", json!(2)), ("name", json!("Bob")), ("active", json!(false))]),
			row(&[("id", json!(3)), ("name", json!("Charlie")), ("active", json!(true))]),
		]
	}

	fn columns() -> Vec<Column> {
		vec![Column::new("id", "ID"), Column::new("name", "Name")]
	}

	#[rstest]
	fn test_filter_is_case_insensitive_substring() {
		let mut table = DataTable::new(columns());
		let rows = sample_rows();

		table.set_search("ALI");

		let visible = table.visible_rows(&rows);
		assert_eq!(visible.len(), 1);
		assert_eq!(visible[0].get("name"), Some(&json!("Alice")));
	}

	#[rstest]
	fn test_filter_spans_all_columns() {
		let mut table = DataTable::new(columns());
		let rows = sample_rows();

		// "2" only appears in the id column
		table.set_search("2");

		assert_eq!(table.result_count(&rows), 1);
	}

	#[rstest]
	fn test_sort_toggle_sequence() {
		// Arrange
		let mut table = DataTable::new(columns());
		let rows = sample_rows();

		// Act & Assert: first click sorts ascending
		table.toggle_sort("name").unwrap();
		assert_eq!(
			table.sort_config(),
			Some(&SortConfig { key: "name".to_string(), order: SortOrder::Ascending })
		);
		assert_eq!(table.visible_rows(&rows)[0].get("name"), Some(&json!("Alice")));

		// second click on the same column flips to descending
		table.toggle_sort("name").unwrap();
		assert_eq!(table.visible_rows(&rows)[0].get("name"), Some(&json!("Charlie")));

		// a different column resets to ascending
		table.toggle_sort("id").unwrap();
		assert_eq!(
			table.sort_config(),
			Some(&SortConfig { key: "id".to_string(), order: SortOrder::Ascending })
		);
	}

	#[rstest]
	fn test_sort_unknown_column() {
		let mut table = DataTable::new(columns());
		assert_eq!(
			table.toggle_sort("missing"),
			Err(TableError::UnknownColumn("missing".to_string()))
		);
	}

	#[rstest]
	fn test_set_page_rejects_zero() {
		let mut table = DataTable::new(columns());
		assert_eq!(table.set_page(0), Err(TableError::InvalidPage));
		assert!(table.set_page(2).is_ok());
	}

	#[rstest]
	fn test_debounced_search_applies_on_poll() {
		use std::time::Duration;

		let mut table = DataTable::new(columns());
		let rows = sample_rows();
		let start = Instant::now();

		table.search_input("bob", start);
		assert!(!table.poll_search(start + Duration::from_millis(100)));
		assert_eq!(table.result_count(&rows), 3, "filter not applied yet");

		assert!(table.poll_search(start + Duration::from_millis(400)));
		assert_eq!(table.result_count(&rows), 1);
	}

	#[rstest]
	fn test_page_navigation_clamps() {
		let mut table = DataTable::new(columns()).with_page_size(2);
		let rows = sample_rows();

		table.next_page(&rows);
		assert_eq!(table.state().page, 2);
		table.next_page(&rows);
		assert_eq!(table.state().page, 2, "clamped at the last page");

		table.prev_page();
		table.prev_page();
		assert_eq!(table.state().page, 1, "clamped at the first page");
	}
}
