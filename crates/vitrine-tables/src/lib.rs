//! Data table state and formatting.
//!
//! A [`DataTable`] holds column descriptors and transient view state
//! (search term, sort, page) and turns a row slice into the rows that are
//! actually visible: filter, then sort, then slice to the current page.
//! Rows stay owned by the caller; the table never copies them.

pub mod column;
pub mod debounce;
pub mod table;

pub use column::{Cell, Column, ColumnKind};
pub use debounce::Debouncer;
pub use table::{DataTable, Row, RowActions, SortConfig, SortOrder, TableError, TableState};
