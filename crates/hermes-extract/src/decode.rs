//! Query string and form body decoding.

use hermes_core::Request;
use serde_json::{Map, Value};

/// Returns the URL-decoded value of a named query-string parameter.
///
/// The first occurrence wins when a name repeats. Returns `None` when the
/// request has no query string or the name is absent.
#[must_use]
pub fn query_value(request: &Request, name: &str) -> Option<String> {
    let query = request.query_string()?;
    let pairs: Vec<(String, String)> = serde_urlencoded::from_str(query).ok()?;
    pairs.into_iter().find(|(n, _)| n == name).map(|(_, v)| v)
}

/// Decodes the request body as `application/x-www-form-urlencoded` fields.
///
/// Returns the entire field collection as a JSON object (later duplicates
/// overwrite earlier ones, matching form-field semantics), or `None` when
/// the body is not valid UTF-8 or not decodable as a form.
#[must_use]
pub fn form_fields(request: &Request) -> Option<Value> {
    let body = std::str::from_utf8(request.body()).ok()?;
    let pairs: Vec<(String, String)> = serde_urlencoded::from_str(body).ok()?;

    let mut fields = Map::new();
    for (name, value) in pairs {
        fields.insert(name, Value::String(value));
    }
    Some(Value::Object(fields))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_query_value_decoded() {
        let request = Request::builder().uri("/search?q=rust%2Blang&limit=10").build();

        assert_eq!(query_value(&request, "q"), Some("rust+lang".to_string()));
        assert_eq!(query_value(&request, "limit"), Some("10".to_string()));
        assert_eq!(query_value(&request, "missing"), None);
    }

    #[test]
    fn test_query_value_without_query_string() {
        let request = Request::builder().uri("/search").build();
        assert_eq!(query_value(&request, "q"), None);
    }

    #[test]
    fn test_query_value_first_occurrence_wins() {
        let request = Request::builder().uri("/x?a=1&a=2").build();
        assert_eq!(query_value(&request, "a"), Some("1".to_string()));
    }

    #[test]
    fn test_form_fields_full_collection() {
        let request = Request::builder()
            .body("username=alice&password=secret123")
            .build();

        assert_eq!(
            form_fields(&request),
            Some(json!({"username": "alice", "password": "secret123"}))
        );
    }

    #[test]
    fn test_form_fields_empty_body() {
        let request = Request::builder().build();
        assert_eq!(form_fields(&request), Some(json!({})));
    }

    #[test]
    fn test_form_fields_invalid_utf8() {
        let request = Request::builder().body(&b"\xff\xfe"[..]).build();
        assert_eq!(form_fields(&request), None);
    }
}
