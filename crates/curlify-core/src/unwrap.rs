//! Body unwrapper — detects a request-config wrapper object and digs out
//! the real payload.
//!
//! Frameworks like Dio and axios often log the whole request descriptor
//! (`{method, url, headers, data: {...}}`) rather than the payload alone.
//! When the normalized body looks like such a descriptor — at least two
//! config-indicator keys present — the nested body-like object replaces
//! it. Anything else passes through untouched.

use serde_json::Value;

/// Keys that suggest the object describes a request rather than being the
/// payload itself. Compared case-insensitively, punctuation-insensitively
/// (`base_url` counts as `baseurl`).
const CONFIG_INDICATORS: &[&str] = &["method", "url", "baseurl", "headers", "timeout", "responsetype"];

/// Keys under which the real payload usually hides, in lookup order.
const BODY_KEYS: &[&str] = &["body", "data", "payload", "requestbody", "request_body"];

/// How many wrapper indicators must be present before unwrapping.
const INDICATOR_THRESHOLD: usize = 2;

/// If `value` is a request-config wrapper, return the nested payload;
/// otherwise return `value` unchanged. Arrays and primitives always pass
/// through.
pub fn unwrap_config_body(value: Value) -> Value {
    let Value::Object(ref map) = value else {
        return value;
    };

    let indicators = map
        .keys()
        .filter(|k| {
            let folded = fold_key(k);
            CONFIG_INDICATORS.contains(&folded.as_str())
        })
        .count();
    if indicators < INDICATOR_THRESHOLD {
        return value;
    }

    for body_key in BODY_KEYS {
        let nested = map
            .iter()
            .find(|(k, _)| k.to_lowercase() == *body_key)
            .map(|(_, v)| v);
        if let Some(nested @ Value::Object(_)) = nested {
            tracing::debug!(key = body_key, "unwrapped request-config body");
            return nested.clone();
        }
    }

    value
}

/// Case-fold and drop underscores so `base_url` / `baseUrl` / `BASEURL`
/// all hit the same indicator.
fn fold_key(key: &str) -> String {
    key.chars()
        .filter(|c| !matches!(c, '_' | '-'))
        .collect::<String>()
        .to_lowercase()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn wrapper_with_data_object_unwraps() {
        let wrapped = json!({
            "method": "POST",
            "url": "/v1/orders",
            "headers": {"content-type": "application/json"},
            "data": {"order_id": 42}
        });
        assert_eq!(unwrap_config_body(wrapped), json!({"order_id": 42}));
    }

    #[test]
    fn single_indicator_is_not_a_wrapper() {
        let obj = json!({"method": "transfer", "data": {"x": 1}});
        assert_eq!(unwrap_config_body(obj.clone()), obj);
    }

    #[test]
    fn indicator_matching_is_case_and_underscore_insensitive() {
        let wrapped = json!({
            "Method": "GET",
            "base_url": "https://api.x",
            "BODY": {"q": "hi"}
        });
        assert_eq!(unwrap_config_body(wrapped), json!({"q": "hi"}));
    }

    #[test]
    fn body_key_order_is_respected() {
        // `body` outranks `data` even when both are objects.
        let wrapped = json!({
            "method": "POST",
            "timeout": 5000,
            "data": {"loser": true},
            "body": {"winner": true}
        });
        assert_eq!(unwrap_config_body(wrapped), json!({"winner": true}));
    }

    #[test]
    fn non_object_body_value_is_skipped() {
        // `data` is a string, so there is nothing to unwrap.
        let obj = json!({"method": "POST", "url": "/x", "data": "raw text"});
        assert_eq!(unwrap_config_body(obj.clone()), obj);
    }

    #[test]
    fn null_body_value_is_skipped() {
        let obj = json!({"method": "POST", "url": "/x", "body": null});
        assert_eq!(unwrap_config_body(obj.clone()), obj);
    }

    #[test]
    fn arrays_and_primitives_pass_through() {
        assert_eq!(unwrap_config_body(json!([1, 2])), json!([1, 2]));
        assert_eq!(unwrap_config_body(json!(42)), json!(42));
    }
}
