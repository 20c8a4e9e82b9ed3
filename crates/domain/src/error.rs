//! Error types shared across the workspace.
//!
//! Each layer converts its transport-specific failures into these typed
//! errors; none of them carry `String` kinds the caller has to parse.

/// Failure of a single greeting fetch.
///
/// The variants record *why* the fetch failed so adapters and the controller
/// can log it. Consumers never branch on them: every variant settles the home
/// view into the same failed state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchFailure {
    /// The request never produced a response (connection refused, DNS, CORS…).
    #[error("request failed: {0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("unexpected HTTP status {0}")]
    Status(u16),
    /// The response body does not match the expected schema.
    #[error("invalid response body: {0}")]
    Decode(String),
}

/// Rejected API base URL.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiBaseError {
    /// The value is not a URL at all.
    #[error("invalid base URL")]
    Parse(#[from] url::ParseError),
    /// Only `http` and `https` endpoints are reachable from the client.
    #[error("unsupported URL scheme `{0}`")]
    UnsupportedScheme(String),
    /// URLs such as `data:` cannot have paths joined onto them.
    #[error("URL cannot be used as a base")]
    CannotBeABase,
}
