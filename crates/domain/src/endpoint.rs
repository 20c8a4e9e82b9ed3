//! Endpoint addressing — where the client sends its requests.

use std::fmt;

use url::Url;

use crate::error::ApiBaseError;

/// Base URL the client talks to when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/";

/// Path of the greeting endpoint, relative to the base URL.
pub const GREETING_PATH: &str = "api/";

/// Validated base URL of the remote API.
///
/// Relative paths are appended with exactly one `/` between the base and the
/// path, so `http://host:8000` and `http://host:8000/` address the same
/// endpoints. A base with a path prefix (`http://host/backend`) keeps it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiBase(String);

impl ApiBase {
    /// Parse and validate a base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ApiBaseError`] when `raw` is not an absolute URL, uses a
    /// scheme other than `http`/`https`, or cannot carry a path.
    pub fn parse(raw: &str) -> Result<Self, ApiBaseError> {
        let raw = raw.trim();
        let url = Url::parse(raw)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ApiBaseError::UnsupportedScheme(url.scheme().to_string()));
        }
        if url.cannot_be_a_base() {
            return Err(ApiBaseError::CannotBeABase);
        }
        Ok(Self(raw.to_string()))
    }

    /// Join a relative path onto the base.
    #[must_use]
    pub fn join(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.0.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Absolute URL of the greeting endpoint.
    #[must_use]
    pub fn greeting_url(&self) -> String {
        self.join(GREETING_PATH)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ApiBase {
    fn default() -> Self {
        Self(DEFAULT_BASE_URL.to_string())
    }
}

impl fmt::Display for ApiBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
