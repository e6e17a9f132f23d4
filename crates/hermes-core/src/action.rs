//! Action results and handler output normalization.
//!
//! Handlers return either a structured [`ActionResult`] that carries its own
//! status code and body-encoding policy, or a bare [`serde_json::Value`] that
//! the dispatcher auto-encodes: composites (objects, arrays) as JSON with
//! status 200, scalars as plain text with status 200.

use bytes::Bytes;
use http::{header, StatusCode};
use serde_json::Value;

/// The wire response type produced by the engine.
pub type Response = http::Response<Bytes>;

/// Default cache lifetime for [`ActionResult::File`] responses (24 hours).
const DEFAULT_FILE_CACHE_MAX_AGE: u64 = 86_400;

/// A handler return value carrying its own status code and encoding policy.
///
/// # Example
///
/// ```rust
/// use hermes_core::ActionResult;
/// use http::StatusCode;
/// use serde_json::json;
///
/// let ok = ActionResult::ok(json!({"user": "42"}));
/// assert_eq!(ok.status(), StatusCode::OK);
///
/// let missing = ActionResult::not_found();
/// assert_eq!(missing.status(), StatusCode::NOT_FOUND);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionResult {
    /// JSON-encoded body with an explicit status code.
    Json {
        /// The response status.
        status: StatusCode,
        /// The payload, serialized as JSON.
        data: Value,
    },
    /// Raw bytes with a content type and cache headers, status 200.
    File {
        /// The raw body bytes.
        data: Bytes,
        /// The `Content-Type` to emit.
        content_type: String,
        /// `Cache-Control: public, max-age=N` lifetime in seconds.
        cache_max_age: u64,
    },
    /// Status code only, no body.
    Empty {
        /// The response status.
        status: StatusCode,
    },
}

impl ActionResult {
    /// A 200 OK JSON result.
    #[must_use]
    pub fn ok(data: impl Into<Value>) -> Self {
        Self::Json {
            status: StatusCode::OK,
            data: data.into(),
        }
    }

    /// A JSON result with an explicit status code.
    #[must_use]
    pub fn json(status: StatusCode, data: impl Into<Value>) -> Self {
        Self::Json {
            status,
            data: data.into(),
        }
    }

    /// A 204 No Content result.
    #[must_use]
    pub fn no_content() -> Self {
        Self::Empty {
            status: StatusCode::NO_CONTENT,
        }
    }

    /// A 401 Unauthorized result.
    #[must_use]
    pub fn unauthorized() -> Self {
        Self::Empty {
            status: StatusCode::UNAUTHORIZED,
        }
    }

    /// A 404 Not Found result.
    #[must_use]
    pub fn not_found() -> Self {
        Self::Empty {
            status: StatusCode::NOT_FOUND,
        }
    }

    /// A raw-bytes result with the given content type and default caching.
    #[must_use]
    pub fn file(data: impl Into<Bytes>, content_type: impl Into<String>) -> Self {
        Self::File {
            data: data.into(),
            content_type: content_type.into(),
            cache_max_age: DEFAULT_FILE_CACHE_MAX_AGE,
        }
    }

    /// Overrides the cache lifetime of a `File` result. No-op otherwise.
    #[must_use]
    pub fn with_cache_max_age(mut self, seconds: u64) -> Self {
        if let Self::File { cache_max_age, .. } = &mut self {
            *cache_max_age = seconds;
        }
        self
    }

    /// Returns the status code this result will produce.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Json { status, .. } | Self::Empty { status } => *status,
            Self::File { .. } => StatusCode::OK,
        }
    }

    /// Builds the wire response.
    #[must_use]
    pub fn into_response(self) -> Response {
        match self {
            Self::Json { status, data } => {
                let body = serde_json::to_vec(&data).unwrap_or_default();
                http::Response::builder()
                    .status(status)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Bytes::from(body))
                    .expect("valid response")
            }
            Self::File {
                data,
                content_type,
                cache_max_age,
            } => http::Response::builder()
                .status(StatusCode::OK)
                .header(header::CONTENT_TYPE, content_type)
                .header(header::CONTENT_LENGTH, data.len().to_string())
                .header(
                    header::CACHE_CONTROL,
                    format!("public, max-age={cache_max_age}"),
                )
                .body(data)
                .expect("valid response"),
            Self::Empty { status } => http::Response::builder()
                .status(status)
                .body(Bytes::new())
                .expect("valid response"),
        }
    }
}

/// What a handler hands back to the dispatcher.
///
/// Handlers that want full control return an [`ActionResult`]; handlers that
/// return plain data let the dispatcher pick the encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerOutput {
    /// A structured result dispatched via its own rule.
    Action(ActionResult),
    /// A plain value: composites become JSON, scalars become text.
    Value(Value),
}

impl From<ActionResult> for HandlerOutput {
    fn from(result: ActionResult) -> Self {
        Self::Action(result)
    }
}

impl From<Value> for HandlerOutput {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ok_response() {
        let response = ActionResult::ok(json!({"id": 7})).into_response();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
        assert_eq!(response.body().as_ref(), br#"{"id":7}"#);
    }

    #[test]
    fn test_empty_results_have_no_body() {
        for result in [
            ActionResult::no_content(),
            ActionResult::unauthorized(),
            ActionResult::not_found(),
        ] {
            let status = result.status();
            let response = result.into_response();
            assert_eq!(response.status(), status);
            assert!(response.body().is_empty());
        }
    }

    #[test]
    fn test_file_response_headers() {
        let response = ActionResult::file(&b"\x89PNG"[..], "image/png")
            .with_cache_max_age(600)
            .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "image/png"
        );
        assert_eq!(response.headers().get(header::CONTENT_LENGTH).unwrap(), "4");
        assert_eq!(
            response.headers().get(header::CACHE_CONTROL).unwrap(),
            "public, max-age=600"
        );
        assert_eq!(response.body().as_ref(), b"\x89PNG");
    }

    #[test]
    fn test_with_cache_max_age_ignores_non_file() {
        let result = ActionResult::no_content().with_cache_max_age(10);
        assert_eq!(result, ActionResult::no_content());
    }

    #[test]
    fn test_handler_output_conversions() {
        let from_action = HandlerOutput::from(ActionResult::no_content());
        assert!(matches!(from_action, HandlerOutput::Action(_)));

        let from_value = HandlerOutput::from(json!([1, 2, 3]));
        assert!(matches!(from_value, HandlerOutput::Value(_)));
    }
}
