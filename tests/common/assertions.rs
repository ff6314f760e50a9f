//! Domain-specific assertion macros for curlify harnesses.
//!
//! These wrap the plain asserts with context-rich failure messages that
//! make it clear *which* pipeline stage produced the wrong component for
//! *which* pasted log.

/// Assert a conversion's URL.
///
/// ```rust
/// assert_url!(conversion, "https://api.example.com/v1/login");
/// ```
#[macro_export]
macro_rules! assert_url {
    ($conversion:expr, $expected:expr) => {{
        let c: &curlify_core::Conversion = &$conversion;
        assert_eq!(
            c.url, $expected,
            "assert_url! failed\n  expected: {}\n  actual:   {}",
            $expected, c.url
        );
    }};
}

/// Assert a conversion's method (pass `None` for "nothing inferred").
#[macro_export]
macro_rules! assert_method {
    ($conversion:expr, $expected:expr) => {{
        let c: &curlify_core::Conversion = &$conversion;
        let expected: Option<&str> = $expected;
        assert_eq!(
            c.method.as_deref(),
            expected,
            "assert_method! failed on url {}",
            c.url
        );
    }};
}

/// Assert a conversion's bearer token.
#[macro_export]
macro_rules! assert_token {
    ($conversion:expr, $expected:expr) => {{
        let c: &curlify_core::Conversion = &$conversion;
        let expected: Option<&str> = $expected;
        assert_eq!(
            c.token.as_deref(),
            expected,
            "assert_token! failed on url {}",
            c.url
        );
    }};
}

/// Assert that the conversion produced a JSON body with the given value.
///
/// ```rust
/// assert_body_json!(conversion, serde_json::json!({"a": 1}));
/// ```
#[macro_export]
macro_rules! assert_body_json {
    ($conversion:expr, $expected:expr) => {{
        let c: &curlify_core::Conversion = &$conversion;
        match &c.body {
            curlify_core::BodyOutcome::Json(text) => {
                let actual: serde_json::Value = serde_json::from_str(text)
                    .expect("normalized body must be strict JSON");
                assert_eq!(actual, $expected, "assert_body_json! failed on url {}", c.url);
            }
            other => panic!(
                "assert_body_json! failed: expected a JSON body, got {other:?} (url {})",
                c.url
            ),
        }
    }};
}

/// Assert that the conversion found no body at all.
#[macro_export]
macro_rules! assert_body_absent {
    ($conversion:expr) => {{
        let c: &curlify_core::Conversion = &$conversion;
        assert!(
            matches!(c.body, curlify_core::BodyOutcome::Absent),
            "assert_body_absent! failed: got {:?} (url {})",
            c.body,
            c.url
        );
    }};
}
