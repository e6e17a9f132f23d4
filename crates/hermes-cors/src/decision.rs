//! The per-request CORS decision.

use bytes::Bytes;
use hermes_core::Response;
use http::{header, HeaderValue, StatusCode};

use crate::headers;

/// How a preflight request short-circuits the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreflightOutcome {
    /// 204 No Content: no origin was supplied, or the origin was granted.
    Accepted,
    /// 403 Forbidden: an origin was supplied but refused.
    Rejected,
}

impl PreflightOutcome {
    /// The status code this outcome produces.
    #[must_use]
    pub fn status(self) -> StatusCode {
        match self {
            Self::Accepted => StatusCode::NO_CONTENT,
            Self::Rejected => StatusCode::FORBIDDEN,
        }
    }
}

/// The headers and control-flow result computed for one request.
///
/// Computed fresh per request by [`crate::negotiate`]; never persisted.
/// `preflight` is `Some` exactly for `OPTIONS` requests, which never reach
/// routing; [`Self::short_circuit_response`] builds their response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsDecision {
    /// Value for `Access-Control-Allow-Origin`, or nothing at all.
    pub allow_origin: Option<String>,
    /// Whether to emit `Access-Control-Allow-Credentials: true`.
    pub allow_credentials: bool,
    /// Value list for `Access-Control-Allow-Methods`.
    pub allow_methods: Vec<String>,
    /// Value for `Access-Control-Allow-Headers`, if any.
    pub allow_headers: Option<String>,
    /// Value for `Access-Control-Max-Age`, if configured.
    pub max_age: Option<u64>,
    /// Preflight short-circuit, `Some` for `OPTIONS` requests.
    pub preflight: Option<PreflightOutcome>,
}

impl CorsDecision {
    /// True if this request never reaches routing.
    #[must_use]
    pub fn is_short_circuit(&self) -> bool {
        self.preflight.is_some()
    }

    /// Builds the preflight response, if this decision short-circuits.
    ///
    /// Accepted preflights get an empty 204; rejected ones a 403 with the
    /// JSON body `{"error":"Origin not allowed"}`. Both carry the decision's
    /// CORS headers.
    #[must_use]
    pub fn short_circuit_response(&self) -> Option<Response> {
        let outcome = self.preflight?;

        let mut response = match outcome {
            PreflightOutcome::Accepted => http::Response::builder()
                .status(StatusCode::NO_CONTENT)
                .body(Bytes::new())
                .expect("valid response"),
            PreflightOutcome::Rejected => http::Response::builder()
                .status(StatusCode::FORBIDDEN)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Bytes::from(
                    serde_json::json!({"error": "Origin not allowed"}).to_string(),
                ))
                .expect("valid response"),
        };

        self.apply(&mut response);
        Some(response)
    }

    /// Writes the decision's headers onto a response.
    ///
    /// The origin grant also marks the response origin-dependent for caches
    /// (`Vary: Origin`). Methods, headers, and max-age are emitted on every
    /// response the decision covers.
    pub fn apply(&self, response: &mut Response) {
        let headers_mut = response.headers_mut();

        if let Some(origin) = &self.allow_origin {
            if let Ok(value) = HeaderValue::from_str(origin) {
                headers_mut.insert(headers::ALLOW_ORIGIN, value);
                headers_mut.insert(headers::VARY, HeaderValue::from_static("Origin"));
            }
        }

        if self.allow_credentials {
            headers_mut.insert(headers::ALLOW_CREDENTIALS, HeaderValue::from_static("true"));
        }

        if !self.allow_methods.is_empty() {
            if let Ok(value) = HeaderValue::from_str(&self.allow_methods.join(", ")) {
                headers_mut.insert(headers::ALLOW_METHODS, value);
            }
        }

        if let Some(allow_headers) = &self.allow_headers {
            if let Ok(value) = HeaderValue::from_str(allow_headers) {
                headers_mut.insert(headers::ALLOW_HEADERS, value);
            }
        }

        if let Some(max_age) = self.max_age {
            headers_mut.insert(
                headers::MAX_AGE,
                HeaderValue::from_str(&max_age.to_string()).expect("numeric header value"),
            );
        }
    }
}
