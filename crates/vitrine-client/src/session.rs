//! Authentication session

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use std::sync::{Arc, RwLock};

/// The authenticated session shared by every client.
///
/// Holds the bearer token obtained at login. Clones share the same
/// underlying token, so storing the token once makes every in-flight
/// client authenticated. The session has an explicit lifecycle: acquired
/// at login, dropped at [`Session::clear`]. A 401 from the backend does
/// not clear it; that policy call is left to the application.
#[derive(Debug, Clone, Default)]
pub struct Session {
	token: Arc<RwLock<Option<String>>>,
}

impl Session {
	pub fn new() -> Self {
		Self::default()
	}

	/// Session pre-seeded with a token, for restoring a persisted login.
	pub fn with_token(token: impl Into<String>) -> Self {
		let session = Self::new();
		session.set_token(token);
		session
	}

	pub fn set_token(&self, token: impl Into<String>) {
		let mut slot = self.token.write().unwrap_or_else(|e| e.into_inner());
		*slot = Some(token.into());
	}

	pub fn token(&self) -> Option<String> {
		self.token
			.read()
			.unwrap_or_else(|e| e.into_inner())
			.clone()
	}

	pub fn is_authenticated(&self) -> bool {
		self.token().is_some()
	}

	/// Forget the token (logout).
	pub fn clear(&self) {
		let mut slot = self.token.write().unwrap_or_else(|e| e.into_inner());
		*slot = None;
	}

	/// Best-effort user id from the token's claims.
	///
	/// Decodes the JWT payload segment without verifying the signature —
	/// good enough to address `/users/{id}`, never for trust decisions.
	/// Looks for `id`, then `userId`, then `sub`.
	pub fn user_id(&self) -> Option<String> {
		let token = self.token()?;
		let payload_segment = token.split('.').nth(1)?;
		let raw = match URL_SAFE_NO_PAD.decode(payload_segment) {
			Ok(raw) => raw,
			Err(err) => {
				tracing::warn!("cannot decode token payload: {err}");
				return None;
			}
		};
		let claims: serde_json::Value = match serde_json::from_slice(&raw) {
			Ok(claims) => claims,
			Err(err) => {
				tracing::warn!("cannot parse token claims: {err}");
				return None;
			}
		};

		["id", "userId", "sub"].into_iter().find_map(|key| {
			match claims.get(key) {
				Some(serde_json::Value::String(s)) => Some(s.clone()),
				Some(serde_json::Value::Number(n)) => Some(n.to_string()),
				_ => None,
			}
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn jwt_with_claims(claims: serde_json::Value) -> String {
		let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
		let payload = URL_SAFE_NO_PAD.encode(claims.to_string().as_bytes());
		format!("{header}.{payload}.sig")
	}

	#[rstest]
	fn test_lifecycle() {
		let session = Session::new();
		assert!(!session.is_authenticated());

		session.set_token("tok");
		assert!(session.is_authenticated());
		assert_eq!(session.token().as_deref(), Some("tok"));

		session.clear();
		assert!(!session.is_authenticated());
	}

	#[rstest]
	fn test_clones_share_the_token() {
		let session = Session::new();
		let other = session.clone();

		session.set_token("tok");

		assert_eq!(other.token().as_deref(), Some("tok"));
	}

	#[rstest]
	#[case(serde_json::json!({"id": 42}), "42")]
	#[case(serde_json::json!({"userId": "u-7"}), "u-7")]
	#[case(serde_json::json!({"sub": "jane"}), "jane")]
	fn test_user_id_claim_priority(#[case] claims: serde_json::Value, #[case] expected: &str) {
		let session = Session::with_token(jwt_with_claims(claims));
		assert_eq!(session.user_id().as_deref(), Some(expected));
	}

	#[rstest]
	fn test_user_id_with_garbage_token() {
		let session = Session::with_token("not-a-jwt");
		assert_eq!(session.user_id(), None);

		let session = Session::with_token("a.###.c");
		assert_eq!(session.user_id(), None);
	}
}
