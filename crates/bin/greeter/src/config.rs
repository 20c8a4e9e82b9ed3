//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `greeter.toml` in the working directory unless another path is
//! given. Every field has a default so the file is optional. Environment
//! variables take precedence over file values.

use std::path::Path;

use greeter_domain::endpoint::{ApiBase, DEFAULT_BASE_URL};
use greeter_domain::error::ApiBaseError;
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

/// Default config file name.
pub const DEFAULT_CONFIG_PATH: &str = "greeter.toml";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Remote API settings.
    pub api: ApiConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Remote API configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL the greeting path is joined onto.
    pub base_url: String,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `path` (if present), apply
    /// environment-variable overrides, then the command-line base URL.
    ///
    /// Validation runs last, so a valid `api_base` rescues an invalid
    /// value from the file or the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or is
    /// malformed, or if the resulting base URL or log filter is invalid.
    pub fn load(path: impl AsRef<Path>, api_base: Option<String>) -> Result<Self, ConfigError> {
        Self::from_file(path.as_ref())?.resolve(|key| std::env::var(key).ok(), api_base)
    }

    fn resolve(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
        api_base: Option<String>,
    ) -> Result<Self, ConfigError> {
        self.apply_overrides(lookup);
        if let Some(api_base) = api_base {
            self.api.base_url = api_base;
        }
        self.validate()?;
        Ok(self)
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    /// Apply overrides from a variable lookup, lowest precedence first.
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(val) = lookup("GREETER_API_BASE") {
            self.api.base_url = val;
        }
        if let Some(val) = lookup("GREETER_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = lookup("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    /// Check that the configured values are usable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ApiBase`] if `api.base_url` is not an absolute
    /// `http`/`https` URL, or [`ConfigError::LogFilter`] if `logging.filter`
    /// is not a valid directive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.api_base()?;
        self.log_filter()?;
        Ok(())
    }

    /// Return the validated API base.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ApiBase`] if `api.base_url` is invalid.
    pub fn api_base(&self) -> Result<ApiBase, ConfigError> {
        Ok(ApiBase::parse(&self.api.base_url)?)
    }

    /// Return the parsed log filter.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::LogFilter`] if `logging.filter` does not parse.
    pub fn log_filter(&self) -> Result<EnvFilter, ConfigError> {
        Ok(EnvFilter::try_new(&self.logging.filter)?)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "greeter=info,greeter_app=info,greeter_adapter_http_reqwest=info".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// The configured API base URL is unusable.
    #[error("invalid api.base_url")]
    ApiBase(#[from] ApiBaseError),
    /// The configured log filter is not valid `RUST_LOG` syntax.
    #[error("invalid logging.filter")]
    LogFilter(#[from] tracing_subscriber::filter::ParseError),
}
