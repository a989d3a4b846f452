//! Authentication endpoints

use crate::error::{ApiError, ApiResult};
use crate::resource::Record;
use crate::session::Session;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Login request body.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
	pub email: String,
	pub password: String,
}

impl Credentials {
	pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
		Self {
			email: email.into(),
			password: password.into(),
		}
	}
}

/// What `POST /auth/login` returns.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
	pub token: String,
	pub user: Record,
}

/// Client for the `/auth` endpoints.
#[derive(Debug, Clone)]
pub struct AuthApi {
	http: reqwest::Client,
	base_url: String,
	session: Session,
}

impl AuthApi {
	pub(crate) fn new(http: reqwest::Client, base_url: String, session: Session) -> Self {
		Self {
			http,
			base_url,
			session,
		}
	}

	/// POST `/auth/login`; on success the returned token is stored in the
	/// session, authenticating every client that shares it.
	pub async fn login(&self, credentials: &Credentials) -> ApiResult<LoginResponse> {
		let url = format!("{}/auth/login", self.base_url);
		let response = self.http.post(&url).json(credentials).send().await?;
		let status = response.status();
		if !status.is_success() {
			let message = response.text().await.unwrap_or_default();
			return Err(ApiError::Status {
				status: status.as_u16(),
				message,
			});
		}

		let login: LoginResponse = serde_json::from_str(&response.text().await?)?;
		self.session.set_token(&login.token);
		Ok(login)
	}

	/// GET `/auth/profile`.
	pub async fn profile(&self) -> ApiResult<Record> {
		self.request(Method::GET, "/auth/profile", None).await
	}

	/// Update the logged-in user's profile.
	///
	/// The backend has grown three routes for this over time; try them in
	/// order of preference and move on only when a route answers 404:
	/// 1. `PATCH /users/{id}` with the id taken from the token claims,
	/// 2. `PUT /auth/profile`,
	/// 3. `PATCH /auth/profile`.
	/// Any other failure is surfaced immediately; if every route 404s the
	/// last error is returned.
	pub async fn update_profile(&self, profile: &Record) -> ApiResult<Record> {
		let user_path = self.session.user_id().map(|id| format!("/users/{id}"));
		let mut routes: Vec<(Method, String)> = Vec::new();
		if let Some(path) = user_path {
			routes.push((Method::PATCH, path));
		}
		routes.push((Method::PUT, "/auth/profile".to_string()));
		routes.push((Method::PATCH, "/auth/profile".to_string()));

		let mut last_error = None;
		for (method, path) in routes {
			debug!(%method, %path, "trying profile update route");
			match self.request(method, &path, Some(profile)).await {
				Ok(record) => return Ok(record),
				Err(err) if err.is_not_found() => last_error = Some(err),
				Err(err) => return Err(err),
			}
		}
		Err(last_error.unwrap_or(ApiError::Status {
			status: 404,
			message: "no profile update route available".to_string(),
		}))
	}

	/// POST `/auth/change-password`.
	pub async fn change_password(&self, body: &Record) -> ApiResult<Record> {
		self.request(Method::POST, "/auth/change-password", Some(body))
			.await
	}

	async fn request(
		&self,
		method: Method,
		path: &str,
		body: Option<&Record>,
	) -> ApiResult<Record> {
		let url = format!("{}{}", self.base_url, path);
		let mut request = self.http.request(method, &url);
		if let Some(token) = self.session.token() {
			request = request.bearer_auth(token);
		}
		if let Some(body) = body {
			request = request.json(body);
		}

		let response = request.send().await?;
		let status = response.status();
		if !status.is_success() {
			let message = response.text().await.unwrap_or_default();
			return Err(ApiError::Status {
				status: status.as_u16(),
				message,
			});
		}
		Ok(serde_json::from_str(&response.text().await?)?)
	}
}
