//! Handler registration.

use hermes_core::BoxHandler;
use std::collections::HashMap;

/// Maps operation identities to their type-erased handlers.
///
/// Routing rows carry an `operation_id`; this registry holds the matching
/// callable. Registered once at engine construction, read-only afterwards.
#[derive(Default)]
pub struct HandlerRegistry {
    handlers: HashMap<String, BoxHandler>,
}

impl HandlerRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a handler for an operation. A later registration for the
    /// same operation replaces the earlier one.
    pub fn insert(&mut self, operation_id: impl Into<String>, handler: BoxHandler) {
        self.handlers.insert(operation_id.into(), handler);
    }

    /// Looks up the handler for an operation.
    #[must_use]
    pub fn get(&self, operation_id: &str) -> Option<&BoxHandler> {
        self.handlers.get(operation_id)
    }

    /// Returns the number of registered handlers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Returns true if no handlers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl std::fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerRegistry")
            .field("operations", &self.handlers.keys().collect::<Vec<_>>())
            .finish()
    }
}
