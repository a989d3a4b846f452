//! Client configuration

use std::time::Duration;

const BASE_URL_VAR: &str = "VITRINE_API_BASE_URL";
const TIMEOUT_VAR: &str = "VITRINE_HTTP_TIMEOUT_SECS";
const DEFAULT_BASE_URL: &str = "http://localhost:3000/api";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Where and how the client talks to the backend.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use vitrine_client::ApiConfig;
///
/// let config = ApiConfig::new("https://api.example.com/")
/// 	.with_timeout(Duration::from_secs(5));
/// assert_eq!(config.base_url, "https://api.example.com");
/// ```
#[derive(Debug, Clone)]
pub struct ApiConfig {
	/// Base URL of the REST API, without a trailing slash.
	pub base_url: String,
	pub timeout: Duration,
}

impl ApiConfig {
	pub fn new(base_url: impl Into<String>) -> Self {
		let base_url = base_url.into();
		Self {
			base_url: base_url.trim_end_matches('/').to_string(),
			timeout: DEFAULT_TIMEOUT,
		}
	}

	/// Read the configuration from `VITRINE_API_BASE_URL` and
	/// `VITRINE_HTTP_TIMEOUT_SECS`, falling back to localhost defaults.
	pub fn from_env() -> Self {
		let base_url =
			std::env::var(BASE_URL_VAR).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
		let timeout = std::env::var(TIMEOUT_VAR)
			.ok()
			.and_then(|raw| raw.parse().ok())
			.map(Duration::from_secs)
			.unwrap_or(DEFAULT_TIMEOUT);
		Self::new(base_url).with_timeout(timeout)
	}

	pub fn with_timeout(mut self, timeout: Duration) -> Self {
		self.timeout = timeout;
		self
	}
}

impl Default for ApiConfig {
	fn default() -> Self {
		Self::new(DEFAULT_BASE_URL)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("http://localhost:3000/api/", "http://localhost:3000/api")]
	#[case("http://localhost:3000/api", "http://localhost:3000/api")]
	fn test_trailing_slash_trimmed(#[case] input: &str, #[case] expected: &str) {
		assert_eq!(ApiConfig::new(input).base_url, expected);
	}

	#[rstest]
	fn test_default_points_at_localhost() {
		let config = ApiConfig::default();
		assert_eq!(config.base_url, "http://localhost:3000/api");
		assert_eq!(config.timeout, Duration::from_secs(30));
	}
}
