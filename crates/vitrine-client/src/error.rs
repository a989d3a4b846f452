//! Client error type

use thiserror::Error;

/// Errors surfaced by the resource client.
#[derive(Debug, Error)]
pub enum ApiError {
	/// The backend answered with a non-success status.
	#[error("HTTP {status}: {message}")]
	Status { status: u16, message: String },

	/// The request never completed (connect, timeout, protocol).
	#[error("network error: {0}")]
	Network(#[from] reqwest::Error),

	/// The response body was not the JSON we expected.
	#[error("failed to decode response: {0}")]
	Decode(#[from] serde_json::Error),
}

impl ApiError {
	/// Status code of the response, when the backend answered at all.
	pub fn status(&self) -> Option<u16> {
		match self {
			ApiError::Status { status, .. } => Some(*status),
			ApiError::Network(e) => e.status().map(|s| s.as_u16()),
			ApiError::Decode(_) => None,
		}
	}

	pub fn is_not_found(&self) -> bool {
		self.status() == Some(404)
	}

	pub fn is_unauthorized(&self) -> bool {
		self.status() == Some(401)
	}

	/// True if the request timed out.
	pub fn is_timeout(&self) -> bool {
		match self {
			ApiError::Network(e) => e.is_timeout(),
			_ => false,
		}
	}
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_status_helpers() {
		let not_found = ApiError::Status {
			status: 404,
			message: "missing".to_string(),
		};
		assert!(not_found.is_not_found());
		assert!(!not_found.is_unauthorized());
		assert_eq!(not_found.status(), Some(404));

		let unauthorized = ApiError::Status {
			status: 401,
			message: "nope".to_string(),
		};
		assert!(unauthorized.is_unauthorized());
	}
}
