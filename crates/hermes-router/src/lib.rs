//! Controller route table and longest-match resolver for Hermes.
//!
//! This crate holds the declarative routing metadata (controllers with a
//! base path, routes with a verb and sub-path pattern) and resolves an
//! inbound (path, verb) pair to the single responsible route in two phases:
//!
//! 1. **Controller match**: controllers sorted by descending base-path
//!    length; the first whose base path is a literal prefix of the request
//!    path wins, so `/api/user/admin` beats `/api/user`.
//! 2. **Method match**: the controller's routes filtered by verb, sorted by
//!    descending sub-path length, then pattern-matched segment by segment.
//!    `{name}` segments capture the literal request segment; literal
//!    segments compare case-insensitively; segment counts must match
//!    exactly (no wildcards, no catch-alls).
//!
//! Routes marked as requiring authorization consult an [`AuthGate`] before a
//! match is returned.
//!
//! # Example
//!
//! ```rust
//! use hermes_router::{ControllerRegistration, RouteRegistration, RouteTable, ResolutionOutcome};
//! use http::Method;
//!
//! let table = RouteTable::build(&[ControllerRegistration::new("users", "/api/user")
//!     .route(RouteRegistration::new("listUsers", "").verb(Method::GET))
//!     .route(RouteRegistration::new("getUser", "/{id}").verb(Method::GET))]);
//!
//! let outcome = table.resolve(&Method::GET, "/api/user/42", &|| true);
//! match outcome {
//!     ResolutionOutcome::Matched(m) => {
//!         assert_eq!(m.route.operation_id(), "getUser");
//!         assert_eq!(m.captures.get("id"), Some("42"));
//!     }
//!     _ => panic!("expected a match"),
//! }
//! ```

mod captures;
mod descriptor;
mod resolver;
mod table;

pub use captures::Captures;
pub use descriptor::{
    ControllerDescriptor, ControllerId, ControllerRegistration, ParamDescriptor, ParamSource,
    RouteDescriptor, RouteRegistration,
};
pub use resolver::{AuthGate, MatchedRoute, ResolutionOutcome};
pub use table::RouteTable;
