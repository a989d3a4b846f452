//! Dynamic form state and validation.
//!
//! A [`FormState`] is derived from an entity's field list plus either a
//! record (edit) or the per-kind defaults (create). Values are set as the
//! user edits, validation runs per field at submit time (or eagerly via
//! [`FormState::validate_field`] for blur-style feedback), and a
//! successful submit produces a cleaned payload ready for the resource
//! client. Validation failures never reach the network.

pub mod form;
pub mod string_list;
pub mod validators;

pub use form::{FormError, FormMode, FormResult, FormState};
pub use string_list::StringListEditor;
