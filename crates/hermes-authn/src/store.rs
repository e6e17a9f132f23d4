//! In-memory session storage with sliding expiration.

use dashmap::DashMap;
use std::time::{Duration, Instant};
use tracing::debug;
use uuid::Uuid;

/// Default idle lifetime of a session (1 hour).
const DEFAULT_SESSION_LIFETIME: Duration = Duration::from_secs(3600);

/// Default name of the cookie carrying the session token.
pub(crate) const DEFAULT_COOKIE_NAME: &str = "hermes_session";

/// Settings for the session transport and lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Name of the cookie carrying the session token.
    pub cookie_name: String,
    /// How long a session may stay idle before it expires.
    pub lifetime: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: DEFAULT_COOKIE_NAME.to_string(),
            lifetime: DEFAULT_SESSION_LIFETIME,
        }
    }
}

#[derive(Debug)]
struct Session {
    user_id: String,
    last_activity: Instant,
}

/// Concurrent session store keyed by opaque tokens.
///
/// Expiration is sliding: every successful validation refreshes the
/// session's last-activity instant. Distinct sessions never interfere; the
/// map is sharded per key.
///
/// # Example
///
/// ```rust
/// use hermes_authn::SessionStore;
/// use std::time::Duration;
///
/// let store = SessionStore::new(Duration::from_secs(3600));
/// let token = store.login("user-42");
///
/// assert!(store.is_valid(&token));
/// store.logout(&token);
/// assert!(!store.is_valid(&token));
/// ```
#[derive(Debug)]
pub struct SessionStore {
    sessions: DashMap<String, Session>,
    lifetime: Duration,
}

impl SessionStore {
    /// Creates a store whose sessions expire after the given idle lifetime.
    #[must_use]
    pub fn new(lifetime: Duration) -> Self {
        Self {
            sessions: DashMap::new(),
            lifetime,
        }
    }

    /// Starts a session for a user and returns its fresh token.
    ///
    /// Tokens are random per login; logging in again issues a new token
    /// rather than reusing an existing one.
    #[must_use]
    pub fn login(&self, user_id: impl Into<String>) -> String {
        let token = Uuid::new_v4().simple().to_string();
        let user_id = user_id.into();
        debug!(%user_id, "session created");
        self.sessions.insert(
            token.clone(),
            Session {
                user_id,
                last_activity: Instant::now(),
            },
        );
        token
    }

    /// Ends the session for a token. Unknown tokens are ignored.
    pub fn logout(&self, token: &str) {
        if self.sessions.remove(token).is_some() {
            debug!("session removed");
        }
    }

    /// Checks a token and refreshes its activity window.
    ///
    /// Sessions idle longer than the configured lifetime are evicted and
    /// treated as absent.
    #[must_use]
    pub fn is_valid(&self, token: &str) -> bool {
        let now = Instant::now();

        match self.sessions.get_mut(token) {
            Some(mut session) => {
                if now.duration_since(session.last_activity) <= self.lifetime {
                    session.last_activity = now;
                    return true;
                }
            }
            None => return false,
        }

        // The shard guard is released here; evict outside of it.
        debug!("session expired");
        self.sessions.remove(token);
        false
    }

    /// Returns the user id behind a token, without refreshing the window.
    #[must_use]
    pub fn user_id(&self, token: &str) -> Option<String> {
        self.sessions.get(token).map(|s| s.user_id.clone())
    }

    /// Returns the number of live sessions (including not-yet-evicted
    /// expired ones).
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Returns true if no sessions exist.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_then_valid() {
        let store = SessionStore::new(Duration::from_secs(60));
        let token = store.login("user-1");

        assert!(store.is_valid(&token));
        assert_eq!(store.user_id(&token), Some("user-1".to_string()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_unknown_token_invalid() {
        let store = SessionStore::new(Duration::from_secs(60));
        assert!(!store.is_valid("nope"));
    }

    #[test]
    fn test_logout_invalidates() {
        let store = SessionStore::new(Duration::from_secs(60));
        let token = store.login("user-1");

        store.logout(&token);
        assert!(!store.is_valid(&token));
        assert!(store.is_empty());
    }

    #[test]
    fn test_tokens_are_unique_per_login() {
        let store = SessionStore::new(Duration::from_secs(60));
        let first = store.login("user-1");
        let second = store.login("user-1");

        assert_ne!(first, second);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_expired_session_evicted() {
        let store = SessionStore::new(Duration::ZERO);
        let token = store.login("user-1");

        std::thread::sleep(Duration::from_millis(5));
        assert!(!store.is_valid(&token));
        assert!(store.is_empty());
    }

    #[test]
    fn test_sliding_expiration_refreshes_window() {
        let store = SessionStore::new(Duration::from_millis(400));
        let token = store.login("user-1");

        // Touch the session inside the window twice; total elapsed time
        // exceeds one lifetime but each touch restarts the clock.
        std::thread::sleep(Duration::from_millis(250));
        assert!(store.is_valid(&token));
        std::thread::sleep(Duration::from_millis(250));
        assert!(store.is_valid(&token));

        std::thread::sleep(Duration::from_millis(500));
        assert!(!store.is_valid(&token));
    }

    #[test]
    fn test_distinct_sessions_do_not_interfere() {
        let store = SessionStore::new(Duration::from_secs(60));
        let a = store.login("user-a");
        let b = store.login("user-b");

        store.logout(&a);
        assert!(!store.is_valid(&a));
        assert!(store.is_valid(&b));
    }
}
