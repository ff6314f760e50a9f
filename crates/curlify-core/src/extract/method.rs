//! HTTP method extractor.
//!
//! Two ordered pattern classes, first match wins in listed order:
//!
//! - **Explicit**: `method: "POST"`, an HTTP request line
//!   (`POST /login HTTP/1.1`), a verb starting a line right before a full
//!   URL, and annotated section headers (`POST REQUEST DETAILS`).
//! - **Framework hints**: client-library call sites (`dio.post(`,
//!   `Http::get(`), `postRequest`/`get_request`-style tokens, and
//!   fetch-style `method: 'POST'` object literals.
//!
//! Returns `None` when nothing matches; the host layer then prompts the
//! user to pick a verb.

use regex::Regex;
use std::sync::LazyLock;

const VERBS: &str = "GET|POST|PUT|PATCH|DELETE|HEAD|OPTIONS";

/// Ordered pattern list. Each regex captures the verb in group 1.
static PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // -- explicit ------------------------------------------------------
        // method: "POST" / method = 'post' / "method": "POST"
        format!(r#"(?i)\bmethod["']?\s*[:=]\s*["']?({VERBS})\b"#),
        // POST /login HTTP/1.1
        format!(r#"\b({VERBS})\s+/\S*\s+HTTP"#),
        // POST https://api.example.com/... at line start
        format!(r#"(?m)^\s*({VERBS})\s+https?://"#),
        // POST REQUEST DETAILS / DELETE REQUEST:
        format!(r#"\b({VERBS})\s+REQUEST\b"#),
        // -- framework hints ----------------------------------------------
        // dio.post(...), client.get(...), Http::put(...)
        format!(r#"(?i)[\w)\]](?:\.|::)(get|post|put|patch|delete|head|options)\s*\("#),
        // postRequest, get_request, delete-request
        format!(r#"(?i)\b(get|post|put|patch|delete)[-_]?request\b"#),
        // Dio-style "DATA in postRequest" phrasing
        format!(r#"(?i)\bDATA\s+in\s+(get|post|put|patch|delete)\w*"#),
    ]
    .iter()
    .map(|p| Regex::new(p).expect("method pattern must compile"))
    .collect()
});

/// Extract an HTTP verb from prefix-stripped log text, uppercased.
pub fn extract(text: &str) -> Option<String> {
    PATTERNS
        .iter()
        .find_map(|re| re.captures(text))
        .map(|caps| caps[1].to_uppercase())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
