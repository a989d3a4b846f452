//! CRUD page orchestration.
//!
//! A [`CrudPage`] wires one entity's configuration, its resource client,
//! a form and a data table into the create/read/update/delete/view/toggle
//! flows. Consistency after a mutation comes from re-reading the source
//! of truth: every successful create, update, delete and toggle triggers
//! a full list re-fetch instead of patching the local snapshot.

pub mod message;
pub mod page;

pub use message::{Message, MessageKind};
pub use page::{CrudPage, PageState};
