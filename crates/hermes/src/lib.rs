//! Attribute-style HTTP route resolution and dispatch engine.
//!
//! Hermes locates the single handler responsible for an inbound
//! (path, verb) pair among statically registered controllers, binds the
//! handler's parameters from the request's body, query string, form fields,
//! and route captures, enforces a session-backed authorization gate, and
//! negotiates CORS before (or instead of) invoking the handler.
//!
//! The pipeline for every request:
//!
//! ```text
//! CORS negotiation ──(preflight short-circuit)──▶ response
//!        │
//!        ▼
//! route resolution ──(404 / 401)──▶ response
//!        │
//!        ▼
//! parameter binding ▶ handler invocation ▶ dispatch ▶ response
//! ```
//!
//! # Example
//!
//! ```rust
//! use hermes::{ControllerRegistration, Engine, ParamSource, Request, RouteRegistration};
//! use hermes_core::handler_fn;
//! use http::Method;
//! use serde_json::{json, Value};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let engine = Engine::builder()
//!     .controller(ControllerRegistration::new("users", "/api/user").route(
//!         RouteRegistration::new("getUser", "/{id}")
//!             .verb(Method::GET)
//!             .param("id", ParamSource::Implicit),
//!     ))
//!     .handler("getUser", handler_fn(|args: Vec<Value>| async move {
//!         Ok(json!({"user": args[0]}))
//!     }))
//!     .build();
//!
//! let request = Request::builder().method(Method::GET).uri("/api/user/42").build();
//! let response = engine.handle(&request).await.unwrap();
//! assert_eq!(response.status(), 200);
//! assert_eq!(response.body().as_ref(), br#"{"user":"42"}"#);
//! # }
//! ```

mod dispatch;
mod engine;
mod registry;

pub use dispatch::normalize_output;
pub use engine::{Engine, EngineBuilder};
pub use registry::HandlerRegistry;

pub use hermes_authn::{Authenticator, SessionAuthenticator, SessionStore};
pub use hermes_config::EngineConfig;
pub use hermes_core::{
    handler_fn, ActionResult, BoxHandler, HandlerOutput, HermesError, HermesResult, Request,
    Response,
};
pub use hermes_cors::{CorsDecision, CorsPolicy};
pub use hermes_router::{
    Captures, ControllerRegistration, MatchedRoute, ParamSource, ResolutionOutcome,
    RouteRegistration, RouteTable,
};
