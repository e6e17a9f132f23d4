//! Static CORS policy configuration.

use serde::{Deserialize, Serialize};

/// The static CORS configuration a [`crate::CorsDecision`] is computed from.
///
/// Never mutated at request time. Deserializable so it can live in a config
/// file, with defaults suitable for a development setup: any origin, the
/// standard verb set, `Content-Type`/`Authorization` headers, no
/// credentials, a 10 minute preflight cache.
///
/// # Example
///
/// ```rust
/// use hermes_cors::CorsPolicy;
///
/// let policy = CorsPolicy::new()
///     .allow_origin("http://localhost:8081")
///     .allow_methods(["GET", "POST", "PUT", "DELETE"])
///     .allow_headers(["Content-Type", "Authorization"])
///     .with_credentials(true);
///
/// assert!(policy.allow_credentials());
/// assert!(!policy.allows_any_origin());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsPolicy {
    allowed_origins: Vec<String>,
    allowed_methods: Vec<String>,
    allowed_headers: Vec<String>,
    allow_credentials: bool,
    max_age: Option<u64>,
}

impl Default for CorsPolicy {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["*".to_string()],
            allowed_methods: ["GET", "POST", "PUT", "DELETE", "PATCH", "OPTIONS"]
                .map(String::from)
                .to_vec(),
            allowed_headers: ["Content-Type", "Authorization"].map(String::from).to_vec(),
            allow_credentials: false,
            max_age: Some(600),
        }
    }
}

impl CorsPolicy {
    /// Creates a policy with the default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the allowed origins with a single origin.
    #[must_use]
    pub fn allow_origin(mut self, origin: impl Into<String>) -> Self {
        self.allowed_origins = vec![origin.into()];
        self
    }

    /// Replaces the allowed origins. `*` allows any origin.
    #[must_use]
    pub fn allow_origins<I, S>(mut self, origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_origins = origins.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the allowed methods.
    #[must_use]
    pub fn allow_methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_methods = methods.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the allowed request headers. `*` selects a safe default pair.
    #[must_use]
    pub fn allow_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_headers = headers.into_iter().map(Into::into).collect();
        self
    }

    /// Sets whether responses may include credentials.
    #[must_use]
    pub fn with_credentials(mut self, allow: bool) -> Self {
        self.allow_credentials = allow;
        self
    }

    /// Sets the preflight cache lifetime in seconds, or disables it.
    #[must_use]
    pub fn with_max_age(mut self, seconds: Option<u64>) -> Self {
        self.max_age = seconds;
        self
    }

    /// Returns the configured origins.
    #[must_use]
    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }

    /// True if the origin list contains the wildcard.
    #[must_use]
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|o| o == "*")
    }

    /// Returns the configured methods.
    #[must_use]
    pub fn allowed_methods(&self) -> &[String] {
        &self.allowed_methods
    }

    /// Returns the configured request headers.
    #[must_use]
    pub fn allowed_headers(&self) -> &[String] {
        &self.allowed_headers
    }

    /// True if responses may include credentials.
    #[must_use]
    pub fn allow_credentials(&self) -> bool {
        self.allow_credentials
    }

    /// Returns the preflight cache lifetime in seconds, if configured.
    #[must_use]
    pub fn max_age(&self) -> Option<u64> {
        self.max_age
    }
}
