//! Custom header extractor.
//!
//! Looks for a `HEADERS:` (or `HEADER:`) section label and consumes the
//! `Key: value` lines that follow it, stopping at the first separator
//! line, malformed line, or new section label (a "key" containing
//! whitespace, e.g. `REQUEST BODY:`). Keys keep their first-seen order
//! and duplicates are not collapsed.

use crate::strip::strip_log_prefixes;
use crate::types::CustomHeader;
use regex::Regex;
use std::sync::LazyLock;

static SECTION_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)HEADERS?:$").unwrap());

// Blank lines and ruler lines made of dashes / box-drawing characters.
static SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\s\-=*_~\u{2500}-\u{257F}]*$").unwrap());

static HEADER_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").unwrap());

/// Extract the `HEADERS:` section as an ordered list. Empty when no
/// section is present.
pub fn extract(text: &str) -> Vec<CustomHeader> {
    let mut lines = text.lines().map(|l| strip_log_prefixes(l));
    let mut headers = Vec::new();

    // Find the section start.
    if !lines.any(|l| SECTION_LABEL.is_match(l.trim())) {
        return headers;
    }

    for line in lines {
        let line = line.trim();
        if SEPARATOR.is_match(line) {
            break;
        }
        let Some(colon) = line.find(':') else { break };
        if colon == 0 {
            break;
        }

        let key = line[..colon].trim();
        let value = line[colon + 1..].trim();
        if HEADER_KEY.is_match(key) {
            headers.push(CustomHeader::new(key, value));
        } else if key.chars().any(char::is_whitespace) {
            // A "key" with spaces is the next section label, not a header.
            break;
        }
    }

    headers
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
