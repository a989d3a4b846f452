//! The per-entity resource client

use crate::auth::AuthApi;
use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};
use crate::payload::Payload;
use crate::session::Session;
use crate::settings::SettingsClient;
use reqwest::Method;
use serde::de::DeserializeOwned;
use std::fmt;
use tracing::{debug, warn};
use vitrine_registry::Entity;

/// A backend record: an opaque JSON object carrying at least `id`,
/// `createdAt` and `updatedAt`.
pub type Record = serde_json::Map<String, serde_json::Value>;

/// Entry point: owns the HTTP client, base URL and session, and hands
/// out per-entity clients.
#[derive(Debug, Clone)]
pub struct Api {
	http: reqwest::Client,
	config: ApiConfig,
	session: Session,
}

impl Api {
	pub fn new(config: ApiConfig) -> ApiResult<Self> {
		let http = reqwest::Client::builder()
			.timeout(config.timeout)
			.build()?;
		Ok(Self {
			http,
			config,
			session: Session::new(),
		})
	}

	pub fn with_session(mut self, session: Session) -> Self {
		self.session = session;
		self
	}

	pub fn session(&self) -> &Session {
		&self.session
	}

	pub fn config(&self) -> &ApiConfig {
		&self.config
	}

	/// Client for an arbitrary collection path.
	pub fn resource(&self, path: impl Into<String>) -> ResourceClient {
		ResourceClient {
			http: self.http.clone(),
			base_url: self.config.base_url.clone(),
			path: path.into(),
			session: self.session.clone(),
		}
	}

	/// Client for a registered entity; the entity key is the path.
	pub fn entity(&self, entity: Entity) -> ResourceClient {
		self.resource(entity.key())
	}

	/// The settings client, with its upsert-on-update policy.
	pub fn settings(&self) -> SettingsClient {
		SettingsClient::new(self.entity(Entity::Settings))
	}

	pub fn auth(&self) -> AuthApi {
		AuthApi::new(
			self.http.clone(),
			self.config.base_url.clone(),
			self.session.clone(),
		)
	}
}

/// CRUD operations for one REST collection.
///
/// One instance per entity. No retries, no caching; every call is a
/// single HTTP round trip with the session's bearer token attached.
#[derive(Debug, Clone)]
pub struct ResourceClient {
	http: reqwest::Client,
	base_url: String,
	path: String,
	session: Session,
}

impl ResourceClient {
	pub fn path(&self) -> &str {
		&self.path
	}

	/// GET the whole collection.
	pub async fn list(&self) -> ApiResult<Vec<Record>> {
		let url = self.collection_url();
		self.request_json(Method::GET, &url, None).await
	}

	/// GET one record.
	pub async fn get(&self, id: impl fmt::Display) -> ApiResult<Record> {
		let url = self.item_url(id);
		self.request_json(Method::GET, &url, None).await
	}

	/// POST a new record.
	pub async fn create(&self, payload: &Payload) -> ApiResult<Record> {
		let url = self.collection_url();
		self.request_json(Method::POST, &url, Some(payload)).await
	}

	/// PATCH an existing record.
	pub async fn update(&self, id: impl fmt::Display, payload: &Payload) -> ApiResult<Record> {
		let url = self.item_url(id);
		self.request_json(Method::PATCH, &url, Some(payload)).await
	}

	/// DELETE a record.
	pub async fn delete(&self, id: impl fmt::Display) -> ApiResult<()> {
		let url = self.item_url(id);
		self.execute(Method::DELETE, &url, None).await?;
		Ok(())
	}

	/// PUT the toggle sub-resource, flipping the record's status flag.
	pub async fn toggle(&self, id: impl fmt::Display) -> ApiResult<Record> {
		let url = format!("{}/toggle", self.item_url(id));
		self.request_json(Method::PUT, &url, None).await
	}

	/// PATCH the toggle-active sub-resource.
	pub async fn toggle_active(&self, id: impl fmt::Display) -> ApiResult<Record> {
		let url = format!("{}/toggle-active", self.item_url(id));
		self.request_json(Method::PATCH, &url, None).await
	}

	/// GET the collection's `active` sub-resource.
	pub async fn get_active(&self) -> ApiResult<Record> {
		let url = format!("{}/active", self.collection_url());
		self.request_json(Method::GET, &url, None).await
	}

	fn collection_url(&self) -> String {
		format!("{}/{}", self.base_url, self.path)
	}

	fn item_url(&self, id: impl fmt::Display) -> String {
		format!("{}/{}/{}", self.base_url, self.path, id)
	}

	async fn request_json<T: DeserializeOwned>(
		&self,
		method: Method,
		url: &str,
		payload: Option<&Payload>,
	) -> ApiResult<T> {
		let response = self.execute(method, url, payload).await?;
		let text = response.text().await?;
		Ok(serde_json::from_str(&text)?)
	}

	async fn execute(
		&self,
		method: Method,
		url: &str,
		payload: Option<&Payload>,
	) -> ApiResult<reqwest::Response> {
		debug!(%method, url, "sending request");

		let mut request = self.http.request(method, url);
		if let Some(token) = self.session.token() {
			request = request.bearer_auth(token);
		}
		if let Some(payload) = payload {
			request = if payload.has_files() {
				request.multipart(payload.to_multipart()?)
			} else {
				request.json(payload.values())
			};
		}

		let response = request.send().await?;
		let status = response.status();
		if status.as_u16() == 401 {
			// Known gap kept on purpose: the session is not cleared and
			// no re-authentication is forced.
			warn!(url, "received 401; keeping session, caller decides re-authentication");
		}
		if !status.is_success() {
			let message = response.text().await.unwrap_or_default();
			return Err(ApiError::Status {
				status: status.as_u16(),
				message,
			});
		}
		Ok(response)
	}
}
