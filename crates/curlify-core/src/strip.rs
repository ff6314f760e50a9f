//! Log-prefix stripper — removes per-line logging framework noise so the
//! downstream regex extractors see clean text.
//!
//! Recognized prefix shapes, each removed from the start of a line only:
//!
//! | Shape | Example |
//! |-------|---------|
//! | Flutter debug print | `flutter: {name: John}` |
//! | Android logcat tag | `I/flutter ( 4519): body:` |
//! | Timestamp + dotted level | `[2024-01-15 10:00:03] app.network.info: POST /login` |
//! | Structured logger preamble | `[Api] 2024-01-15T10:00:03Z INFO request sent` |
//! | Bare ISO-8601 timestamp | `2024-01-15T10:00:03.123Z sending request` |
//! | Shell prompt marker | `> curl ...` |
//!
//! Stripping is pure, total (unmatched lines pass through unchanged), and
//! idempotent: each line is re-stripped until no pattern matches, so
//! stacked prefixes (a logcat tag wrapping a Flutter tag) come off in one
//! call and a second call is a no-op.
//!
//! The stripper runs before every field extractor and is re-applied to the
//! selected raw body candidate, since a multi-line body dump often carries
//! a prefix on every physical line.

use regex::Regex;
use std::sync::LazyLock;

/// Prefix patterns, each anchored at line start. Order matters only for
/// readability — the per-line loop keeps applying all of them until none
/// fires.
static PREFIX_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // Flutter debug-print tag
        r"^flutter:\s?",
        // Android logcat: <level>/<tag> (<pid>):
        r"^[VDIWEF]/[\w.$:\-]+\s*\(\s*\d+\s*\):\s?",
        // Bracketed timestamp followed by a dotted level label:
        // [2024-01-15 10:00:03] local.INFO:
        r"^\[\d{4}-\d{2}-\d{2}[T ][\d:.,]+(?:Z|[+-]\d{2}:?\d{2})?\]\s*[\w.]+:\s?",
        // Structured logger preamble: [tag] <timestamp> <LEVEL>
        r"(?i)^\[[\w.\-]+\]\s+\d{4}-\d{2}-\d{2}[T ][\d:.,]+(?:Z|[+-]\d{2}:?\d{2})?\s+(?:trace|verbose|debug|info|notice|warn|warning|error|fatal)\b:?\s?",
        // Bare ISO-8601 timestamp at line start
        r"^\d{4}-\d{2}-\d{2}[T ]\d{2}:\d{2}:\d{2}(?:[.,]\d+)?(?:Z|[+-]\d{2}:?\d{2})?\s?",
        // Shell prompt marker
        r"^>\s",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("prefix pattern must compile"))
    .collect()
});

/// Strip logging-framework prefixes from every line of `text`.
///
/// Pure and total; returns the input with each line's recognized prefixes
/// removed and everything else byte-for-byte intact (including the
/// original line separators).
pub fn strip_log_prefixes(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    loop {
        let (line, sep, tail) = split_line(rest);
        out.push_str(strip_line(line));
        out.push_str(sep);
        match tail {
            Some(t) => rest = t,
            None => break,
        }
    }

    out
}

/// Strip all recognized prefixes from a single line, repeating until no
/// pattern matches so stacked prefixes come off together.
fn strip_line(line: &str) -> &str {
    let mut cur = line;
    loop {
        let mut changed = false;
        for re in PREFIX_PATTERNS.iter() {
            if let Some(m) = re.find(cur) {
                if m.start() == 0 && m.end() > 0 {
                    cur = &cur[m.end()..];
                    changed = true;
                }
            }
        }
        if !changed {
            return cur;
        }
    }
}

/// Split off the first line, preserving its separator (`\r\n` or `\n`).
fn split_line(text: &str) -> (&str, &str, Option<&str>) {
    match text.find('\n') {
        Some(idx) => {
            let (line, sep) = if idx > 0 && text.as_bytes()[idx - 1] == b'\r' {
                (&text[..idx - 1], "\r\n")
            } else {
                (&text[..idx], "\n")
            };
            (line, sep, Some(&text[idx + 1..]))
        }
        None => (text, "", None),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
