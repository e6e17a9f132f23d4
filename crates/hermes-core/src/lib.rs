//! Core types for the Hermes dispatch engine.
//!
//! This crate defines the request and response records that flow through the
//! engine, the [`ActionResult`] family of handler return values, the
//! [`HermesError`] taxonomy, and the type-erased handler signature used by
//! the dispatcher.
//!
//! Everything here is plumbing shared by the other crates; the actual
//! resolution, binding, and negotiation logic lives in `hermes-router`,
//! `hermes-extract`, and `hermes-cors`.

mod action;
mod error;
mod handler;
mod request;

pub use action::{ActionResult, HandlerOutput, Response};
pub use error::{HermesError, HermesResult};
pub use handler::{handler_fn, BoxHandler, HandlerFuture};
pub use request::{Request, RequestBuilder};
