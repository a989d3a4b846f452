//! # Vitrine
//!
//! A configuration-driven back-office framework for marketing websites.
//!
//! Vitrine manages a site's content types (projects, services, blog
//! posts, testimonials, users, settings, ...) through a REST API. Every
//! admin page is an instantiation of the same five pieces:
//!
//! - **Registry** ([`registry`]): a static table describing each entity's
//!   fields and capabilities, keyed by a typed [`registry::Entity`].
//! - **Client** ([`client`]): one REST resource client per entity, with
//!   bearer-token authentication and JSON/multipart encoding.
//! - **Forms** ([`forms`]): dynamic form state with per-field validation
//!   and cleaned payloads.
//! - **Tables** ([`tables`]): debounced search, single-column sort and
//!   fixed-size pagination over the fetched rows.
//! - **Pages** ([`pages`]): the CRUD state machine wiring it all
//!   together, re-fetching the list after every mutation.
//!
//! ## Example
//!
//! ```no_run
//! use vitrine::prelude::*;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let api = Api::new(ApiConfig::from_env())?;
//! api.auth()
//! 	.login(&Credentials::new("admin@example.com", "secret"))
//! 	.await?;
//!
//! let mut page = CrudPage::new(&api, Entity::Projects);
//! page.load().await;
//! for row in page.visible_rows() {
//! 	println!("{:?}", row.get("title"));
//! }
//! # Ok(())
//! # }
//! ```

pub use vitrine_client as client;
pub use vitrine_forms as forms;
pub use vitrine_pages as pages;
pub use vitrine_registry as registry;
pub use vitrine_tables as tables;

/// The usual imports for building an admin page.
pub mod prelude {
	pub use vitrine_client::{
		Api, ApiConfig, ApiError, Credentials, FileUpload, Payload, Record, Session,
	};
	pub use vitrine_forms::{FormMode, FormState, StringListEditor};
	pub use vitrine_pages::{CrudPage, Message, MessageKind, PageState};
	pub use vitrine_registry::{Capabilities, Entity, EntityConfig, FieldKind, FieldSpec, lookup};
	pub use vitrine_tables::{Cell, Column, ColumnKind, DataTable, RowActions};
}
