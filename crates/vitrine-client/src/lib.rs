//! REST resource client for the vitrine back office.
//!
//! [`Api`] is the entry point: it owns the HTTP client, the base URL and
//! the [`Session`], and hands out one [`ResourceClient`] per entity plus
//! the [`AuthApi`] and the singleton-flavored [`SettingsClient`]. Every
//! request carries the session's bearer token; no retries, no caching.

pub mod auth;
pub mod config;
pub mod error;
pub mod payload;
pub mod resource;
pub mod session;
pub mod settings;

pub use auth::{AuthApi, Credentials, LoginResponse};
pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use payload::{FileUpload, Payload};
pub use resource::{Api, Record, ResourceClient};
pub use session::Session;
pub use settings::SettingsClient;
