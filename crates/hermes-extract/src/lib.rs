//! Multi-source parameter binding for the Hermes dispatch engine.
//!
//! Given a resolved route's declared parameters, the binder produces one
//! positional [`serde_json::Value`] per parameter, read from the source the
//! declaration names: the JSON body, the query string, the decoded form
//! fields, or the route captures.
//!
//! Binding is deliberately permissive: a parameter is never rejected for
//! being unbindable. Absent values (and malformed JSON bodies) degrade to
//! `Value::Null`, leaving validation of required fields to the handler.
//!
//! # Example
//!
//! ```rust
//! use hermes_core::Request;
//! use hermes_extract::bind;
//! use hermes_router::{Captures, ControllerRegistration, ParamSource, RouteRegistration, RouteTable};
//! use http::Method;
//! use serde_json::json;
//!
//! let table = RouteTable::build(&[ControllerRegistration::new("search", "/search").route(
//!     RouteRegistration::new("run", "")
//!         .verb(Method::GET)
//!         .param("q", ParamSource::Query),
//! )]);
//! let route = table.routes_for(&"search".into()).next().unwrap();
//!
//! let request = Request::builder().uri("/search?q=5").build();
//! let args = bind(route, &Captures::new(), &request);
//! assert_eq!(args, vec![json!("5")]);
//! ```

mod bind;
mod decode;

pub use bind::bind;
pub use decode::{form_fields, query_value};
