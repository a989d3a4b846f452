//! Static entity configuration for the vitrine back office.
//!
//! Every content type manageable through the admin is described by an
//! [`EntityConfig`]: a display title, an ordered field list and a set of
//! capability flags. Configurations are compiled into the application and
//! looked up either through the typed [`Entity`] enum (infallible) or by
//! string key through [`lookup`] (fallible, for pages wired by key).

pub mod config;
pub mod entity;
pub mod field;
pub mod registry;

pub use config::{Capabilities, EntityConfig};
pub use entity::Entity;
pub use field::{FieldKind, FieldSpec};
pub use registry::{RegistryError, RegistryResult, known_keys, lookup};
