//! CORS (Cross-Origin Resource Sharing) negotiation.
//!
//! The negotiator runs unconditionally before routing, for every request.
//! From a static [`CorsPolicy`] and the inbound request it computes a fresh
//! [`CorsDecision`]: which CORS headers the response carries, and whether a
//! preflight `OPTIONS` request short-circuits the pipeline entirely (204
//! when acceptable, 403 with a JSON error body when the origin is refused).
//!
//! The security-sensitive origin/credentials interaction is handled here:
//! with credentials enabled, a wildcard policy reflects the literal request
//! origin and never emits `*`, which browsers reject alongside credentials.
//! A disallowed origin receives no CORS grant at all; there is no fallback
//! to a configured origin.
//!
//! # Example
//!
//! ```rust
//! use hermes_core::Request;
//! use hermes_cors::{negotiate, CorsPolicy};
//!
//! let policy = CorsPolicy::new()
//!     .allow_origin("http://localhost:8081")
//!     .with_credentials(true);
//!
//! let request = Request::builder()
//!     .uri("/api/user")
//!     .header("origin", "http://localhost:8081")
//!     .build();
//!
//! let decision = negotiate(&policy, &request);
//! assert_eq!(decision.allow_origin.as_deref(), Some("http://localhost:8081"));
//! assert!(decision.allow_credentials);
//! ```

mod decision;
mod policy;

pub use decision::{CorsDecision, PreflightOutcome};
pub use policy::CorsPolicy;

use hermes_core::Request;
use http::Method;
use tracing::{debug, warn};

/// CORS header names.
pub mod headers {
    /// `Access-Control-Allow-Origin` header.
    pub const ALLOW_ORIGIN: &str = "access-control-allow-origin";
    /// `Access-Control-Allow-Methods` header.
    pub const ALLOW_METHODS: &str = "access-control-allow-methods";
    /// `Access-Control-Allow-Headers` header.
    pub const ALLOW_HEADERS: &str = "access-control-allow-headers";
    /// `Access-Control-Allow-Credentials` header.
    pub const ALLOW_CREDENTIALS: &str = "access-control-allow-credentials";
    /// `Access-Control-Max-Age` header.
    pub const MAX_AGE: &str = "access-control-max-age";
    /// `Access-Control-Request-Headers` header (preflight).
    pub const REQUEST_HEADERS: &str = "access-control-request-headers";
    /// `Origin` header.
    pub const ORIGIN: &str = "origin";
    /// `Vary` header.
    pub const VARY: &str = "vary";
}

/// Safe default allow-list emitted when the policy's header list is `*` and
/// the browser did not name the headers it wants.
const DEFAULT_ALLOWED_HEADERS: &str = "Content-Type, Authorization";

/// Computes the CORS decision for one request.
///
/// Any `OPTIONS` request is treated as a preflight. Non-preflight requests
/// always continue to routing afterwards, whether or not an origin header
/// was granted.
#[must_use]
pub fn negotiate(policy: &CorsPolicy, request: &Request) -> CorsDecision {
    let origin = request.origin();
    let is_preflight = request.method() == Method::OPTIONS;

    let allow_origin = compute_allowed_origin(policy, origin);
    let allow_credentials = policy.allow_credentials() && allow_origin.is_some();
    let allow_methods = normalized_methods(policy);
    let allow_headers = compute_allowed_headers(policy, request, is_preflight);

    let preflight = if is_preflight {
        if origin.is_some() && allow_origin.is_none() {
            warn!(origin = origin.unwrap_or_default(), "preflight rejected");
            Some(PreflightOutcome::Rejected)
        } else {
            debug!("preflight accepted");
            Some(PreflightOutcome::Accepted)
        }
    } else {
        None
    };

    debug!(
        origin = origin.unwrap_or_default(),
        granted = allow_origin.as_deref().unwrap_or_default(),
        credentials = allow_credentials,
        "cors decision"
    );

    CorsDecision {
        allow_origin,
        allow_credentials,
        allow_methods,
        allow_headers,
        max_age: policy.max_age(),
        preflight,
    }
}

/// Decides which origin value, if any, to grant.
///
/// - No request origin: none (never default to `*`).
/// - Wildcard policy with credentials: reflect the literal origin.
/// - Wildcard policy without credentials: `*`.
/// - Otherwise: the origin only if literally allow-listed; never a fallback.
fn compute_allowed_origin(policy: &CorsPolicy, origin: Option<&str>) -> Option<String> {
    let origin = origin?;

    if policy.allows_any_origin() {
        if policy.allow_credentials() {
            return Some(origin.to_string());
        }
        return Some("*".to_string());
    }

    if policy.allowed_origins().iter().any(|o| o == origin) {
        return Some(origin.to_string());
    }

    None
}

/// Upper-cases, trims, and de-duplicates the configured methods, always
/// including the preflight verb.
fn normalized_methods(policy: &CorsPolicy) -> Vec<String> {
    let mut methods: Vec<String> = Vec::new();
    for method in policy.allowed_methods() {
        let normalized = method.trim().to_ascii_uppercase();
        if !methods.contains(&normalized) {
            methods.push(normalized);
        }
    }
    if !methods.iter().any(|m| m == "OPTIONS") {
        methods.push("OPTIONS".to_string());
    }
    methods
}

/// On a preflight naming requested headers, echo them verbatim; otherwise
/// `*` in the policy yields the fixed safe pair, and an explicit list is
/// emitted verbatim.
fn compute_allowed_headers(
    policy: &CorsPolicy,
    request: &Request,
    is_preflight: bool,
) -> Option<String> {
    if is_preflight {
        if let Some(requested) = request.header(headers::REQUEST_HEADERS) {
            if !requested.is_empty() {
                return Some(requested.to_string());
            }
        }
    }

    if policy.allowed_headers().iter().any(|h| h == "*") {
        return Some(DEFAULT_ALLOWED_HEADERS.to_string());
    }

    let joined = policy.allowed_headers().join(", ");
    if joined.is_empty() {
        None
    } else {
        Some(joined)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::StatusCode;

    fn request(method: Method, origin: Option<&str>) -> Request {
        let mut builder = Request::builder().method(method).uri("/api/test");
        if let Some(origin) = origin {
            builder = builder.header("origin", origin);
        }
        builder.build()
    }

    #[test]
    fn test_no_origin_emits_no_grant() {
        let policy = CorsPolicy::new();
        let decision = negotiate(&policy, &request(Method::GET, None));

        assert_eq!(decision.allow_origin, None);
        assert!(!decision.allow_credentials);
        assert_eq!(decision.preflight, None);
    }

    #[test]
    fn test_wildcard_without_credentials_emits_star() {
        let policy = CorsPolicy::new();
        let decision = negotiate(&policy, &request(Method::GET, Some("http://a.example")));

        assert_eq!(decision.allow_origin.as_deref(), Some("*"));
        assert!(!decision.allow_credentials);
    }

    #[test]
    fn test_wildcard_with_credentials_reflects_origin() {
        let policy = CorsPolicy::new().with_credentials(true);
        let decision = negotiate(&policy, &request(Method::GET, Some("http://a.example")));

        assert_eq!(decision.allow_origin.as_deref(), Some("http://a.example"));
        assert!(decision.allow_credentials);
    }

    #[test]
    fn test_allow_listed_origin_reflected() {
        let policy = CorsPolicy::new()
            .allow_origin("http://localhost:8081")
            .with_credentials(true);
        let decision = negotiate(&policy, &request(Method::GET, Some("http://localhost:8081")));

        assert_eq!(decision.allow_origin.as_deref(), Some("http://localhost:8081"));
        assert!(decision.allow_credentials);
    }

    #[test]
    fn test_disallowed_origin_gets_no_grant_and_no_fallback() {
        let policy = CorsPolicy::new().allow_origin("http://localhost:8081");
        let decision = negotiate(&policy, &request(Method::GET, Some("http://evil.example")));

        assert_eq!(decision.allow_origin, None);
        assert!(!decision.allow_credentials);
        // Non-preflight: the request still continues to routing.
        assert_eq!(decision.preflight, None);
    }

    #[test]
    fn test_credentials_suppressed_without_origin_grant() {
        let policy = CorsPolicy::new()
            .allow_origin("http://localhost:8081")
            .with_credentials(true);
        let decision = negotiate(&policy, &request(Method::GET, Some("http://evil.example")));

        assert!(!decision.allow_credentials);
    }

    #[test]
    fn test_methods_normalized_deduped_with_options() {
        let policy = CorsPolicy::new().allow_methods(["get", " post ", "GET"]);
        let decision = negotiate(&policy, &request(Method::GET, None));

        assert_eq!(decision.allow_methods, vec!["GET", "POST", "OPTIONS"]);
    }

    #[test]
    fn test_preflight_allowed_origin_accepted() {
        let policy = CorsPolicy::new().allow_origin("http://localhost:8081");
        let decision = negotiate(
            &policy,
            &request(Method::OPTIONS, Some("http://localhost:8081")),
        );

        assert_eq!(decision.preflight, Some(PreflightOutcome::Accepted));
        let response = decision.short_circuit_response().unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert!(response.body().is_empty());
        let methods = response
            .headers()
            .get(headers::ALLOW_METHODS)
            .unwrap()
            .to_str()
            .unwrap();
        assert!(methods.contains("OPTIONS"));
    }

    #[test]
    fn test_preflight_without_origin_accepted() {
        let policy = CorsPolicy::new().allow_origin("http://localhost:8081");
        let decision = negotiate(&policy, &request(Method::OPTIONS, None));

        assert_eq!(decision.preflight, Some(PreflightOutcome::Accepted));
        let response = decision.short_circuit_response().unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert!(!response.headers().contains_key(headers::ALLOW_ORIGIN));
    }

    #[test]
    fn test_preflight_disallowed_origin_rejected() {
        let policy = CorsPolicy::new().allow_origin("http://localhost:8081");
        let decision = negotiate(&policy, &request(Method::OPTIONS, Some("http://evil.example")));

        assert_eq!(decision.preflight, Some(PreflightOutcome::Rejected));
        let response = decision.short_circuit_response().unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert_eq!(
            response.body().as_ref(),
            br#"{"error":"Origin not allowed"}"#
        );
        assert!(!response.headers().contains_key(headers::ALLOW_ORIGIN));
    }

    #[test]
    fn test_preflight_echoes_requested_headers() {
        let policy = CorsPolicy::new();
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/api/test")
            .header("origin", "http://a.example")
            .header("access-control-request-headers", "X-Custom, X-Trace")
            .build();

        let decision = negotiate(&policy, &request);
        assert_eq!(decision.allow_headers.as_deref(), Some("X-Custom, X-Trace"));
    }

    #[test]
    fn test_wildcard_headers_fall_back_to_safe_pair() {
        let policy = CorsPolicy::new().allow_headers(["*"]);
        let decision = negotiate(&policy, &request(Method::GET, Some("http://a.example")));

        assert_eq!(
            decision.allow_headers.as_deref(),
            Some("Content-Type, Authorization")
        );
    }

    #[test]
    fn test_explicit_header_list_verbatim() {
        let policy = CorsPolicy::new().allow_headers(["Content-Type", "X-Api-Key"]);
        let decision = negotiate(&policy, &request(Method::GET, None));

        assert_eq!(
            decision.allow_headers.as_deref(),
            Some("Content-Type, X-Api-Key")
        );
    }

    #[test]
    fn test_max_age_passed_through() {
        let policy = CorsPolicy::new().with_max_age(Some(3600));
        let decision = negotiate(&policy, &request(Method::GET, None));

        assert_eq!(decision.max_age, Some(3600));
    }
}
