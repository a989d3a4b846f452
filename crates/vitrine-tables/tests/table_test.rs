use rstest::*;
use serde_json::{Map, Value, json};
use vitrine_tables::{Cell, Column, ColumnKind, DataTable, Row, RowActions};

fn record(id: u64, title: &str, active: bool) -> Row {
	let mut row = Map::new();
	row.insert("id".to_string(), json!(id));
	row.insert("title".to_string(), json!(title));
	row.insert("isActive".to_string(), json!(active));
	row.insert("createdAt".to_string(), json!("2024-06-01T08:00:00Z"));
	row
}

#[fixture]
fn twenty_five_rows() -> Vec<Row> {
	(1..=25)
		.map(|i| record(i, &format!("Post {i:02}"), i % 2 == 0))
		.collect()
}

fn columns() -> Vec<Column> {
	vec![
		Column::new("id", "ID"),
		Column::new("title", "Title"),
		Column::new("isActive", "Active").with_kind(ColumnKind::Boolean),
		Column::new("createdAt", "Created").with_kind(ColumnKind::DateTime),
	]
}

#[rstest]
fn test_pagination_splits_25_rows_into_10_10_5(twenty_five_rows: Vec<Row>) {
	let mut table = DataTable::new(columns());

	assert_eq!(table.page_count(&twenty_five_rows), 3);
	assert_eq!(table.visible_rows(&twenty_five_rows).len(), 10);

	table.set_page(2).unwrap();
	assert_eq!(table.visible_rows(&twenty_five_rows).len(), 10);

	table.set_page(3).unwrap();
	assert_eq!(table.visible_rows(&twenty_five_rows).len(), 5);
}

#[rstest]
fn test_filter_collapses_to_a_single_page(twenty_five_rows: Vec<Row>) {
	// id and title columns only: the timestamp column would match every
	// digit-bearing term
	let mut table = DataTable::new(vec![Column::new("id", "ID"), Column::new("title", "Title")]);
	table.set_page(1).unwrap();

	// "4" appears in rows 4, 14 and 24 only
	table.set_search("4");

	assert_eq!(table.result_count(&twenty_five_rows), 3);
	assert_eq!(table.page_count(&twenty_five_rows), 1);
	assert_eq!(table.visible_rows(&twenty_five_rows).len(), 3);
}

#[rstest]
fn test_filter_does_not_reset_the_page(twenty_five_rows: Vec<Row>) {
	// Page reset on filter change is the caller's responsibility; the
	// table itself leaves the index where it was.
	let mut table = DataTable::new(columns());
	table.set_page(3).unwrap();

	table.set_search("post 25");

	assert_eq!(table.state().page, 3);
	assert!(table.visible_rows(&twenty_five_rows).is_empty());
}

#[rstest]
fn test_sorting_by_stringified_values(twenty_five_rows: Vec<Row>) {
	let mut table = DataTable::new(columns());

	table.toggle_sort("title").unwrap();
	let ascending = table.visible_rows(&twenty_five_rows);
	assert_eq!(ascending[0].get("title"), Some(&json!("Post 01")));

	table.toggle_sort("title").unwrap();
	let descending = table.visible_rows(&twenty_five_rows);
	assert_eq!(descending[0].get("title"), Some(&json!("Post 25")));
}

#[rstest]
fn test_cells_format_by_column_kind(twenty_five_rows: Vec<Row>) {
	let table = DataTable::new(columns());
	let first = table.visible_rows(&twenty_five_rows)[0];

	let active = &table.columns()[2];
	let created = &table.columns()[3];

	assert_eq!(active.cell(first.get("isActive")), Cell::Text("No".to_string()));
	assert_eq!(
		created.cell(first.get("createdAt")),
		Cell::Text("01/06/2024 08:00".to_string())
	);
}

#[rstest]
fn test_row_actions_are_opt_in() {
	let table = DataTable::new(columns()).with_actions(RowActions::none().view().delete());

	let actions = table.actions();
	assert!(actions.view);
	assert!(actions.delete);
	assert!(!actions.edit);
	assert!(!actions.toggle);
	assert!(!actions.custom);
}
