//! Type-erased handler signatures.
//!
//! The dispatcher invokes handlers through a uniform boxed signature: the
//! bound argument list in, a [`HandlerOutput`] (or failure) out. The
//! [`handler_fn`] adapter erases any async closure whose return type
//! converts into [`HandlerOutput`].

use crate::HandlerOutput;
use serde_json::Value;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// The future returned by an erased handler.
pub type HandlerFuture = Pin<Box<dyn Future<Output = Result<HandlerOutput, anyhow::Error>> + Send>>;

/// A type-erased handler: positional bound arguments in, output out.
pub type BoxHandler = Arc<dyn Fn(Vec<Value>) -> HandlerFuture + Send + Sync>;

/// Erases an async closure into a [`BoxHandler`].
///
/// # Example
///
/// ```rust
/// use hermes_core::{handler_fn, HandlerOutput};
/// use serde_json::{json, Value};
///
/// let handler = handler_fn(|args: Vec<Value>| async move {
///     Ok(json!({"echo": args}))
/// });
///
/// # let _ = handler;
/// ```
pub fn handler_fn<F, Fut, O>(func: F) -> BoxHandler
where
    F: Fn(Vec<Value>) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<O, anyhow::Error>> + Send + 'static,
    O: Into<HandlerOutput>,
{
    Arc::new(move |args| {
        let fut = func(args);
        Box::pin(async move { fut.await.map(Into::into) })
    })
}
