//! Error types for Hermes.
//!
//! The engine recovers routing and authorization failures locally by turning
//! them into responses; only handler faults and configuration problems
//! surface as `Err` values. A malformed JSON body is deliberately *not* an
//! error: the binder degrades it to a null argument.

use http::StatusCode;
use thiserror::Error;

/// Result type alias using [`HermesError`].
pub type HermesResult<T> = Result<T, HermesError>;

/// Standard error type for the Hermes engine.
///
/// # Example
///
/// ```rust
/// use hermes_core::HermesError;
/// use http::StatusCode;
///
/// let err = HermesError::NotFound;
/// assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
/// ```
#[derive(Error, Debug)]
pub enum HermesError {
    /// No controller or no method/pattern matched the request.
    #[error("no route matched the request")]
    NotFound,

    /// The authorization gate denied a protected route.
    #[error("request was not authorized")]
    Unauthorized,

    /// A preflight request carried an origin outside the allow-list.
    #[error("origin not allowed")]
    OriginRejected,

    /// A handler failed. Fatal and unrecovered at this layer; the
    /// surrounding server is responsible for turning it into a 500.
    #[error("handler '{operation_id}' failed")]
    Handler {
        /// The operation whose handler failed.
        operation_id: String,
        /// The underlying failure.
        #[source]
        source: anyhow::Error,
    },

    /// Configuration could not be loaded or validated.
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable description of what was wrong.
        message: String,
    },
}

impl HermesError {
    /// Creates a handler fault for the given operation.
    #[must_use]
    pub fn handler(operation_id: impl Into<String>, source: anyhow::Error) -> Self {
        Self::Handler {
            operation_id: operation_id.into(),
            source,
        }
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Returns the HTTP status code for locally recoverable errors.
    ///
    /// Handler and configuration faults map to 500 here, but the engine
    /// never converts them itself; they propagate to the caller.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::OriginRejected => StatusCode::FORBIDDEN,
            Self::Handler { .. } | Self::Config { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
