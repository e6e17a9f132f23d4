//! Route capture storage.
//!
//! This module provides storage for values bound to `{param}` segments
//! during pattern matching, using a small-vector optimization to avoid heap
//! allocations for the common case of 1-4 captures.

use smallvec::SmallVec;

/// Maximum number of captures stored inline (stack allocated).
const INLINE_CAPTURES: usize = 4;

/// Values captured from `{param}` segments of a matched route pattern.
///
/// Captures are stored as (name, value) pairs in pattern order.
///
/// # Example
///
/// ```rust
/// use hermes_router::Captures;
///
/// let mut captures = Captures::new();
/// captures.push("userId", "123");
/// captures.push("postId", "9");
///
/// assert_eq!(captures.get("userId"), Some("123"));
/// assert_eq!(captures.get("postId"), Some("9"));
/// assert_eq!(captures.get("unknown"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Captures {
    inner: SmallVec<[(String, String); INLINE_CAPTURES]>,
}

impl Captures {
    /// Creates a new empty capture set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a capture to the set.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.inner.push((name.into(), value.into()));
    }

    /// Returns the value for a capture by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.inner
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Returns true if there are no captures.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the number of captures.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns an iterator over the captures.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.inner.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

impl FromIterator<(String, String)> for Captures {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_captures_new() {
        let captures = Captures::new();
        assert!(captures.is_empty());
        assert_eq!(captures.len(), 0);
    }

    #[test]
    fn test_captures_push_and_get() {
        let mut captures = Captures::new();
        captures.push("id", "123");
        captures.push("name", "alice");

        assert_eq!(captures.get("id"), Some("123"));
        assert_eq!(captures.get("name"), Some("alice"));
        assert_eq!(captures.get("unknown"), None);
    }

    #[test]
    fn test_captures_iter_preserves_order() {
        let mut captures = Captures::new();
        captures.push("a", "1");
        captures.push("b", "2");

        let pairs: Vec<_> = captures.iter().collect();
        assert_eq!(pairs, vec![("a", "1"), ("b", "2")]);
    }

    #[test]
    fn test_captures_from_iterator() {
        let captures: Captures = vec![
            ("a".to_string(), "1".to_string()),
            ("b".to_string(), "2".to_string()),
        ]
        .into_iter()
        .collect();

        assert_eq!(captures.len(), 2);
        assert_eq!(captures.get("b"), Some("2"));
    }

    #[test]
    fn test_captures_spill_past_inline() {
        let mut captures = Captures::new();
        for i in 0..10 {
            captures.push(format!("key{i}"), format!("value{i}"));
        }

        assert_eq!(captures.len(), 10);
        assert_eq!(captures.get("key7"), Some("value7"));
    }
}
