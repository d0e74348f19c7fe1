//! Tolerant extraction of review text from a response body of variable shape.
//!
//! The review service's response format is not rigidly specified: it may be a
//! JSON object carrying the review under a `review` or `text` field, a bare
//! JSON string, some other JSON value, or a non-JSON plain-text body. This
//! module reduces all of those to a displayable `String` through an ordered
//! list of extraction rules with a guaranteed default. It never fails — a
//! shape that matches no rule resolves to readable text or an empty string,
//! not an error.

use serde_json::Value;

/// Extracts review text from a raw response body.
///
/// If the body parses as JSON, the value is unwrapped via
/// [`extract_from_value`]; otherwise the body itself is the review text.
/// Applied exactly once per successful response.
pub fn extract_review_text(body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(value) => extract_from_value(&value),
        Err(_) => body.to_owned(),
    }
}

/// Unwraps a parsed JSON value into review text.
///
/// Rules, tried in order:
/// 1. Object with a string field `review` — use that field.
/// 2. Object with a string field `text` — use that field.
/// 3. The value is itself a string — use it directly.
/// 4. Empty object or `null` — no content, empty string.
/// 5. Anything else — pretty-printed JSON so the user sees *something*
///    readable rather than a silent drop.
pub fn extract_from_value(value: &Value) -> String {
    if let Some(review) = value.get("review").and_then(Value::as_str) {
        return review.to_owned();
    }
    if let Some(text) = value.get("text").and_then(Value::as_str) {
        return text.to_owned();
    }
    if let Some(s) = value.as_str() {
        return s.to_owned();
    }
    if value.is_null() || value.as_object().is_some_and(|map| map.is_empty()) {
        return String::new();
    }
    serde_json::to_string_pretty(value).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn review_field_wins() {
        let body = r#"{"review": "Looks good.", "text": "ignored"}"#;
        assert_eq!(extract_review_text(body), "Looks good.");
    }

    #[test]
    fn text_field_is_fallback() {
        let body = r#"{"text": "Second choice"}"#;
        assert_eq!(extract_review_text(body), "Second choice");
    }

    #[test]
    fn bare_json_string_body() {
        assert_eq!(extract_review_text(r#""Y""#), "Y");
    }

    #[test]
    fn non_json_body_is_taken_verbatim() {
        assert_eq!(extract_review_text("plain text, not JSON"), "plain text, not JSON");
    }

    #[test]
    fn empty_object_yields_empty_text() {
        assert_eq!(extract_review_text("{}"), "");
    }

    #[test]
    fn null_yields_empty_text() {
        assert_eq!(extract_review_text("null"), "");
    }

    #[test]
    fn non_string_review_field_falls_through_to_pretty_print() {
        // `review` exists but is a number — rule 1 does not match, and the
        // object is non-empty, so the whole value is pretty-printed.
        let out = extract_from_value(&json!({"review": 42}));
        assert!(out.contains("\"review\": 42"));
    }

    #[test]
    fn unrecognized_shape_is_pretty_printed() {
        let out = extract_from_value(&json!({"verdict": {"score": 7}}));
        assert!(out.contains("\"verdict\""));
        assert!(out.contains("\"score\": 7"));
    }

    #[test]
    fn extraction_never_mutates_input() {
        let value = json!({"review": "stable"});
        let first = extract_from_value(&value);
        let second = extract_from_value(&value);
        assert_eq!(first, second);
    }
}
