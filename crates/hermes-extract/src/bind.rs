//! The parameter binder.

use hermes_core::Request;
use hermes_router::{Captures, ParamSource, RouteDescriptor};
use serde_json::Value;

use crate::decode::{form_fields, query_value};

/// Produces the positional argument list for a resolved route.
///
/// One value per declared parameter, in declaration order:
///
/// - `Implicit`: the route capture with the parameter's name, else null.
/// - `Body`: the body parsed as JSON (any shape); parse failure is null,
///   not an error.
/// - `Query`: the named query-string value as a string, else null.
/// - `Form`: the entire decoded form-field collection, regardless of the
///   parameter's name.
/// - `RouteCapture`: the named capture only; never the query or body.
#[must_use]
pub fn bind(route: &RouteDescriptor, captures: &Captures, request: &Request) -> Vec<Value> {
    route
        .params()
        .iter()
        .map(|param| match param.source() {
            ParamSource::Implicit | ParamSource::RouteCapture => capture_value(captures, param.name()),
            ParamSource::Body => body_json(request),
            ParamSource::Query => query_value(request, param.name())
                .map(Value::String)
                .unwrap_or(Value::Null),
            ParamSource::Form => form_fields(request).unwrap_or(Value::Null),
        })
        .collect()
}

fn capture_value(captures: &Captures, name: &str) -> Value {
    captures
        .get(name)
        .map(|v| Value::String(v.to_string()))
        .unwrap_or(Value::Null)
}

fn body_json(request: &Request) -> Value {
    serde_json::from_slice(request.body()).unwrap_or(Value::Null)
}
