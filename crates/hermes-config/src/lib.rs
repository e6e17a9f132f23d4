//! Typed configuration for the Hermes dispatch engine.
//!
//! Engine settings live in a single [`EngineConfig`] value, deserializable
//! from TOML with every field defaulted, so an empty file (or no file at
//! all) yields a working development setup.
//!
//! # Configuration File Format
//!
//! ```toml
//! [cors]
//! allowed_origins = ["http://localhost:8081"]
//! allowed_methods = ["GET", "POST", "PUT", "DELETE"]
//! allowed_headers = ["Content-Type", "Authorization"]
//! allow_credentials = true
//! max_age = 600
//!
//! [session]
//! cookie_name = "hermes_session"
//! lifetime_secs = 3600
//! ```
//!
//! # Example
//!
//! ```rust
//! use hermes_config::EngineConfig;
//!
//! let config = EngineConfig::from_toml_str("[session]\nlifetime_secs = 60\n").unwrap();
//! assert_eq!(config.session.lifetime_secs, 60);
//! // Unset sections keep their defaults.
//! assert!(config.cors.allows_any_origin());
//! ```

mod error;

pub use error::ConfigError;

use hermes_cors::CorsPolicy;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Default session cookie name.
const DEFAULT_COOKIE_NAME: &str = "hermes_session";

/// Default session idle lifetime in seconds (1 hour).
const DEFAULT_LIFETIME_SECS: u64 = 3600;

/// Top-level engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// CORS policy applied to every request.
    pub cors: CorsPolicy,
    /// Session transport and lifetime settings.
    pub session: SessionSettings,
}

impl EngineConfig {
    /// Parses configuration from a TOML string.
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml).map_err(ConfigError::from)
    }

    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }
}

/// Session transport and lifetime settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionSettings {
    /// Name of the cookie carrying the session token.
    pub cookie_name: String,
    /// How long a session may stay idle before it expires, in seconds.
    pub lifetime_secs: u64,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            cookie_name: DEFAULT_COOKIE_NAME.to_string(),
            lifetime_secs: DEFAULT_LIFETIME_SECS,
        }
    }
}

impl SessionSettings {
    /// Returns the idle lifetime as a [`Duration`].
    #[must_use]
    pub fn lifetime(&self) -> Duration {
        Duration::from_secs(self.lifetime_secs)
    }
}
