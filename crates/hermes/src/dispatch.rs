//! Response dispatch: normalizing handler output into wire responses.
//!
//! A structured [`ActionResult`] is dispatched via its own status and
//! encoding rule. A bare value is auto-encoded: composites (objects,
//! arrays) as JSON with status 200, scalars as plain text with status 200.

use bytes::Bytes;
use hermes_core::{ActionResult, HandlerOutput, Response};
use http::{header, StatusCode};
use serde_json::Value;

/// Builds the response for an outcome that never reached a handler.
pub(crate) fn status_only(status: StatusCode) -> Response {
    http::Response::builder()
        .status(status)
        .body(Bytes::new())
        .expect("valid response")
}

/// Normalizes a handler's return value into a wire response.
#[must_use]
pub fn normalize_output(output: HandlerOutput) -> Response {
    match output {
        HandlerOutput::Action(result) => result.into_response(),
        HandlerOutput::Value(value) => match value {
            Value::Object(_) | Value::Array(_) => {
                ActionResult::ok(value).into_response()
            }
            scalar => text_response(&scalar),
        },
    }
}

/// Emits a scalar as `text/plain` with status 200. Strings are written
/// without JSON quoting; null produces an empty body.
fn text_response(scalar: &Value) -> Response {
    let body = match scalar {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    };

    http::Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "text/plain; charset=utf-8")
        .body(Bytes::from(body))
        .expect("valid response")
}
