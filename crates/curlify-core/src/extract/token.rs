//! Auth token extractor.
//!
//! Ordered regex alternatives, first match wins. The generic `token:` and
//! `access_token:` patterns carry a 10-character floor so incidental short
//! words ("token: yes") don't get picked up; the labeled `Authorization:
//! Bearer` form is trusted at any length.

use regex::Regex;
use std::sync::LazyLock;

// Alphanumerics plus the JWT / opaque-token punctuation seen in the wild.
const TOKEN: &str = r"[A-Za-z0-9|._/+=\-]";

static PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // Authorization: Bearer xyz — header form, logfmt quoting optional
        format!(r#"(?i)\bauthorization["']?\s*[:=]\s*["']?Bearer\s+({TOKEN}+)"#),
        // "user token xyz" prose
        format!(r#"(?i)\buser\s+token\s*:?\s*({TOKEN}+)"#),
        // token: <10+ chars>
        format!(r#"(?i)\btoken["']?\s*[:=]\s*["']?({TOKEN}{{10,}})"#),
        // access_token: <10+ chars>
        format!(r#"(?i)\baccess[-_]?token["']?\s*[:=]\s*["']?({TOKEN}{{10,}})"#),
        // bare Bearer <10+ chars>
        format!(r#"\bBearer\s+({TOKEN}{{10,}})"#),
    ]
    .iter()
    .map(|p| Regex::new(p).expect("token pattern must compile"))
    .collect()
});

/// Extract an auth token from prefix-stripped log text.
pub fn extract(text: &str) -> Option<String> {
    PATTERNS
        .iter()
        .find_map(|re| re.captures(text))
        .map(|caps| caps[1].to_string())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
