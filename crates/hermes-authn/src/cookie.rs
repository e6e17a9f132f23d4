//! Cookie header parsing for the session token transport.

/// Returns the value of a named cookie from a `Cookie` header value.
///
/// Splits on `;`, trims surrounding whitespace, and returns the first
/// `name=value` pair whose name matches exactly. Values are returned as-is;
/// session tokens are plain hex and need no decoding.
///
/// # Example
///
/// ```rust
/// use hermes_authn::cookie_value;
///
/// let header = "theme=dark; hermes_session=abc123; lang=en";
/// assert_eq!(cookie_value(header, "hermes_session"), Some("abc123"));
/// assert_eq!(cookie_value(header, "missing"), None);
/// ```
#[must_use]
pub fn cookie_value<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header.split(';').find_map(|pair| {
        let (cookie_name, value) = pair.trim().split_once('=')?;
        if cookie_name == name {
            Some(value)
        } else {
            None
        }
    })
}
