//! Settings: a singleton modeled as a collection resource

use crate::error::ApiResult;
use crate::payload::Payload;
use crate::resource::{Record, ResourceClient};
use std::fmt;
use tracing::warn;

/// Client for the site settings.
///
/// Only one settings row is ever expected, but the backend models it as a
/// plain collection. `update` therefore upserts: without an id it creates,
/// and an update whose target 404s falls back to create instead of
/// failing. Callers must not treat an update without an existing row as
/// terminal.
#[derive(Debug, Clone)]
pub struct SettingsClient {
	inner: ResourceClient,
}

impl SettingsClient {
	pub(crate) fn new(inner: ResourceClient) -> Self {
		Self { inner }
	}

	/// GET the settings collection; the first row is the active one.
	pub async fn list(&self) -> ApiResult<Vec<Record>> {
		self.inner.list().await
	}

	/// POST a settings row.
	pub async fn create(&self, payload: &Payload) -> ApiResult<Record> {
		self.inner.create(payload).await
	}

	/// Upsert the settings row.
	///
	/// With an id, PATCH it and fall back to POST when the id no longer
	/// exists; without an id, POST directly.
	pub async fn update(
		&self,
		id: Option<impl fmt::Display>,
		payload: &Payload,
	) -> ApiResult<Record> {
		match id {
			Some(id) => match self.inner.update(&id, payload).await {
				Err(err) if err.is_not_found() => {
					warn!("settings row {id} not found; creating a new one");
					self.inner.create(payload).await
				}
				other => other,
			},
			None => self.inner.create(payload).await,
		}
	}
}
