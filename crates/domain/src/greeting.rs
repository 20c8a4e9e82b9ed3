//! Greeting — the payload served by the remote `/api/` endpoint.

use serde::Deserialize;
use serde_json::Value;

use crate::error::FetchFailure;

/// Body of a successful greeting response.
///
/// Only `message` is required; any other fields the server adds are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GreetingResponse {
    pub message: String,
}

impl GreetingResponse {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Decode and validate a raw response body.
    ///
    /// The body must be a JSON object carrying a string `message` field.
    ///
    /// # Errors
    ///
    /// Returns [`FetchFailure::Decode`] when the body is not JSON, is not an
    /// object, or lacks a string `message`.
    pub fn from_json(body: &str) -> Result<Self, FetchFailure> {
        let value: Value =
            serde_json::from_str(body).map_err(|err| FetchFailure::Decode(err.to_string()))?;
        if !value.is_object() {
            return Err(FetchFailure::Decode("expected a JSON object".to_string()));
        }
        serde_json::from_value(value).map_err(|err| FetchFailure::Decode(err.to_string()))
    }
}
