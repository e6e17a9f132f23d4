//! Session-backed authentication for the Hermes dispatch engine.
//!
//! The engine's routing layer only asks a yes/no question through the
//! [`Authenticator`] trait. This crate provides the bundled implementation:
//! an in-memory [`SessionStore`] keyed by opaque tokens delivered in a
//! cookie, with sliding expiration. The store tolerates concurrent
//! read-modify-write across distinct sessions; same-session concurrency
//! carries no consistency guarantee.
//!
//! # Example
//!
//! ```rust
//! use hermes_authn::{Authenticator, SessionAuthenticator, SessionConfig, SessionStore};
//! use hermes_core::Request;
//! use std::sync::Arc;
//!
//! let store = Arc::new(SessionStore::new(SessionConfig::default().lifetime));
//! let token = store.login("user-42");
//!
//! let authenticator = SessionAuthenticator::new(Arc::clone(&store));
//! let request = Request::builder()
//!     .uri("/api/user/me")
//!     .header("cookie", &format!("hermes_session={token}"))
//!     .build();
//!
//! assert!(authenticator.is_authenticated(&request));
//! ```

mod authenticator;
mod cookie;
mod store;

pub use authenticator::{Authenticator, RequestAuthGate, SessionAuthenticator};
pub use cookie::cookie_value;
pub use store::{SessionConfig, SessionStore};
