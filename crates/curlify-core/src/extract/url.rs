//! URL extractor.
//!
//! Tries four strategies in strict priority order, first match wins:
//!
//! 1. An explicit label (`FULL URL`, `REQUEST URL`, `ENDPOINT`) followed
//!    by a full `http(s)://` token.
//! 2. A `BASE URL:` label, optionally concatenated with a `PATH:` label.
//! 3. The first raw `http(s)://` token anywhere in the text.
//! 4. Reconstruction from an HTTP request line (`POST /login HTTP/1.1`)
//!    plus a `host=`/`server_name:` field, proxy-log style.
//!
//! The URL is the one mandatory component — the pipeline fails the whole
//! conversion when every strategy comes up empty.

use regex::Regex;
use std::sync::LazyLock;

static LABELED_FULL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)(?:FULL\s*URL|REQUEST\s*URL|ENDPOINT)\s*:\s*(https?://\S+)"#).unwrap()
});

static LABELED_BASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)BASE\s*URL\s*:\s*(https?://\S+)"#).unwrap());

static LABELED_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)\bPATH\s*:\s*(\S+)"#).unwrap());

static RAW_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"https?://\S+"#).unwrap());

static REQUEST_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\b(?:GET|POST|PUT|PATCH|DELETE|HEAD|OPTIONS)\s+(/\S*)\s+HTTP"#).unwrap()
});

static HOST_FIELD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\b(?:host|server_name|server)\s*[:=]\s*['"]?([A-Za-z0-9][A-Za-z0-9.\-]*(?::\d+)?)"#)
        .unwrap()
});

/// Extract a request URL from prefix-stripped log text.
pub fn extract(text: &str) -> Option<String> {
    if let Some(caps) = LABELED_FULL.captures(text) {
        return Some(trim_trailing_punct(&caps[1]).to_string());
    }

    if let Some(caps) = LABELED_BASE.captures(text) {
        let base = trim_trailing_punct(&caps[1]).trim_end_matches('/');
        let path = LABELED_PATH
            .captures(text)
            .map(|c| trim_trailing_punct(&c[1]).to_string())
            .unwrap_or_default();
        return Some(format!("{base}{path}"));
    }

    if let Some(m) = RAW_URL.find(text) {
        return Some(trim_trailing_punct(m.as_str()).to_string());
    }

    reconstruct(text)
}

/// Proxy-log reconstruction: request-line path + host field. With only a
/// host, the host alone becomes the URL; with only a path there is nothing
/// to anchor it to, so the strategy fails.
fn reconstruct(text: &str) -> Option<String> {
    let host = HOST_FIELD.captures(text)?[1].to_string();
    // Port 80 is the only hint we trust for plain http; anything else
    // (including no port at all) defaults to https.
    let scheme = if host.ends_with(":80") { "http" } else { "https" };

    match REQUEST_LINE.captures(text) {
        Some(caps) => Some(format!("{scheme}://{host}{}", &caps[1])),
        None => Some(format!("https://{host}")),
    }
}

/// Trim the punctuation that log formatting typically glues onto a URL.
fn trim_trailing_punct(s: &str) -> &str {
    s.trim_end_matches([',', ';', '\'', '"', ')', ']', '}', '>'])
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
