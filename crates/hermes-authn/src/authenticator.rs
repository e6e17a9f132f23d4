//! The authentication collaborator and its gate adapter.

use hermes_core::Request;
use hermes_router::AuthGate;
use std::sync::Arc;
use tracing::trace;

use crate::cookie::cookie_value;
use crate::store::{SessionStore, DEFAULT_COOKIE_NAME};

/// The boolean identity query the routing layer delegates to.
///
/// Implementations hold no per-request state; the engine invokes this once
/// per protected route resolution, strictly before parameter binding and
/// handler invocation.
pub trait Authenticator: Send + Sync {
    /// Returns true if the request carries an authenticated identity.
    fn is_authenticated(&self, request: &Request) -> bool;
}

/// [`Authenticator`] backed by a [`SessionStore`] and a session cookie.
#[derive(Debug, Clone)]
pub struct SessionAuthenticator {
    store: Arc<SessionStore>,
    cookie_name: String,
}

impl SessionAuthenticator {
    /// Creates an authenticator using the default cookie name.
    #[must_use]
    pub fn new(store: Arc<SessionStore>) -> Self {
        Self {
            store,
            cookie_name: DEFAULT_COOKIE_NAME.to_string(),
        }
    }

    /// Overrides the cookie the session token is read from.
    #[must_use]
    pub fn with_cookie_name(mut self, name: impl Into<String>) -> Self {
        self.cookie_name = name.into();
        self
    }

    /// Returns the session store backing this authenticator.
    #[must_use]
    pub fn store(&self) -> &Arc<SessionStore> {
        &self.store
    }
}

impl Authenticator for SessionAuthenticator {
    fn is_authenticated(&self, request: &Request) -> bool {
        let Some(cookies) = request.header("cookie") else {
            trace!("no cookie header");
            return false;
        };
        let Some(token) = cookie_value(cookies, &self.cookie_name) else {
            trace!(cookie = %self.cookie_name, "session cookie absent");
            return false;
        };
        self.store.is_valid(token)
    }
}

/// Binds a request and an authenticator to the resolver's gate seam.
///
/// The gate is only consulted for routes that require authorization, so
/// constructing it is free and the identity query runs lazily.
pub struct RequestAuthGate<'a> {
    request: &'a Request,
    authenticator: &'a dyn Authenticator,
}

impl<'a> RequestAuthGate<'a> {
    /// Creates a gate bound to one request.
    #[must_use]
    pub fn new(request: &'a Request, authenticator: &'a dyn Authenticator) -> Self {
        Self {
            request,
            authenticator,
        }
    }
}

impl AuthGate for RequestAuthGate<'_> {
    fn check(&self) -> bool {
        self.authenticator.is_authenticated(self.request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn store() -> Arc<SessionStore> {
        Arc::new(SessionStore::new(Duration::from_secs(60)))
    }

    fn request_with_cookie(header: &str) -> Request {
        Request::builder().uri("/x").header("cookie", header).build()
    }

    #[test]
    fn test_authenticated_with_valid_token() {
        let store = store();
        let token = store.login("user-1");
        let authenticator = SessionAuthenticator::new(store);

        let request = request_with_cookie(&format!("hermes_session={token}"));
        assert!(authenticator.is_authenticated(&request));
    }

    #[test]
    fn test_not_authenticated_without_cookie_header() {
        let authenticator = SessionAuthenticator::new(store());
        let request = Request::builder().uri("/x").build();
        assert!(!authenticator.is_authenticated(&request));
    }

    #[test]
    fn test_not_authenticated_with_unknown_token() {
        let authenticator = SessionAuthenticator::new(store());
        let request = request_with_cookie("hermes_session=bogus");
        assert!(!authenticator.is_authenticated(&request));
    }

    #[test]
    fn test_custom_cookie_name() {
        let store = store();
        let token = store.login("user-1");
        let authenticator = SessionAuthenticator::new(store).with_cookie_name("sid");

        assert!(authenticator.is_authenticated(&request_with_cookie(&format!("sid={token}"))));
        assert!(
            !authenticator.is_authenticated(&request_with_cookie(&format!(
                "hermes_session={token}"
            )))
        );
    }

    #[test]
    fn test_gate_adapter_delegates() {
        let store = store();
        let token = store.login("user-1");
        let authenticator = SessionAuthenticator::new(store);

        let request = request_with_cookie(&format!("hermes_session={token}"));
        let gate = RequestAuthGate::new(&request, &authenticator);
        assert!(gate.check());

        let anonymous = Request::builder().uri("/x").build();
        let gate = RequestAuthGate::new(&anonymous, &authenticator);
        assert!(!gate.check());
    }
}
