//! Body selector — decides which part of the pasted text is the request
//! body.
//!
//! Two stages:
//!
//! 1. **Logfmt fast path**: proxy-style `request_body="{...}"` key=value
//!    hits, keys tried in a fixed priority order; the hit is returned
//!    verbatim (still log-style, not yet valid JSON).
//! 2. **Scored blocks**: every top-level `{...}` block from the scanner is
//!    scored by a set of independent weighted rules — marker text just
//!    before the block, and how header- or config-shaped its keys look —
//!    and the strict winner is returned. A lone block always wins
//!    unconditionally.
//!
//! Scoring never errors; with only bad candidates it still returns the
//! least-bad one.

use crate::scan::scan_blocks;
use crate::strip::strip_log_prefixes;
use crate::types::{ScoredBlock, TextBlock};
use phf::phf_set;
use regex::Regex;
use std::sync::LazyLock;

// ---------------------------------------------------------------------------
// Logfmt fast path
// ---------------------------------------------------------------------------

/// `body={...}` / `body="{...}"` / `body='{...}'` forms, one regex per key
/// so the key list is a priority order, not a leftmost-in-text race. `\b`
/// keeps `body` from firing inside `request_body`.
static LOGFMT_BODY: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    ["request_body", "body", "payload", "data", "post_data"]
        .iter()
        .map(|key| {
            Regex::new(&format!(
                r#"\b{key}\s*=\s*(?:"(\{{.*?\}})"|'(\{{.*?\}})'|(\{{\S*\}}))"#
            ))
            .expect("logfmt pattern must compile")
        })
        .collect()
});

// ---------------------------------------------------------------------------
// Context markers
// ---------------------------------------------------------------------------

/// Marker text that, at the end of the (re-stripped, right-trimmed)
/// preceding context, says "the next block is the payload".
static BODY_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)(?:(?:request_body|body\s*/\s*data|body|payload|post_data|data|params|request)\s*[:=]\s*['"]?|--data(?:-raw|-binary)?(?:\s+|=)['"]?|DATA\s+in\s+\w+\s*[:=>]*\s*)$"#,
    )
    .unwrap()
});

/// Marker text that says "the next block is a header dump".
static HEADER_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)(?:[\w.]*\.)?(?:request_|response_)?headers\s*[:=]\s*['"]?$"#).unwrap()
});

/// Marker text for request config / metadata blocks.
static META_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)(?:config|options|response|extra|query_parameters)\s*[:=]\s*['"]?$"#)
        .unwrap()
});

/// Identifier-like text immediately followed by `:` — the block's
/// "key-looking" tokens, used for vocabulary scoring.
static KEY_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"["']?([A-Za-z_][\w\-$.]*)["']?\s*:"#).unwrap());

// ---------------------------------------------------------------------------
// Vocabularies
// ---------------------------------------------------------------------------

/// Well-known HTTP header names. A block whose keys are mostly drawn from
/// this set is a header dump, not a body.
static HEADER_VOCAB: phf::Set<&'static str> = phf_set! {
    "accept", "accept-encoding", "accept-language", "authorization",
    "cache-control", "connection", "content-encoding", "content-length",
    "content-type", "content_type", "cookie", "date", "etag", "host",
    "if-modified-since", "if-none-match", "origin", "pragma", "referer",
    "set-cookie", "transfer-encoding", "user-agent", "user_agent",
    "x-api-key", "x-correlation-id", "x-forwarded-for", "x-request-id",
    "x-requested-with",
};

/// Well-known HTTP-client metadata field names. A block dominated by these
/// is a request-config descriptor, not a body.
static META_VOCAB: phf::Set<&'static str> = phf_set! {
    "baseurl", "base_url", "connecttimeout", "connect_timeout",
    "followredirects", "follow_redirects", "httpversion", "maxredirects",
    "method", "receivetimeout", "receive_timeout", "responsetype",
    "response_type", "sendtimeout", "send_timeout", "status",
    "statuscode", "status_code", "timeout", "url", "validatestatus",
    "withcredentials",
};

// ---------------------------------------------------------------------------
// Selection
// ---------------------------------------------------------------------------

/// Pick the request body out of `text`, or `None` when no candidate exists.
///
/// The result is raw log-style text; the normalizer turns it into valid
/// JSON afterwards.
pub fn select_body(text: &str) -> Option<String> {
    for re in LOGFMT_BODY.iter() {
        let Some(caps) = re.captures(text) else { continue };
        let hit = caps
            .get(1)
            .or_else(|| caps.get(2))
            .or_else(|| caps.get(3))
            .map(|m| m.as_str().to_string());
        if let Some(body) = hit {
            tracing::debug!(body = %body, "body via logfmt fast path");
            return Some(body);
        }
    }

    let blocks = scan_blocks(text);
    match blocks.len() {
        0 => None,
        // A lone block is the body by default — nothing to disambiguate.
        1 => Some(blocks.into_iter().next().unwrap().content),
        _ => Some(pick_best(blocks)),
    }
}

/// Score every block and return the winner's content.
fn pick_best(blocks: Vec<TextBlock>) -> String {
    let scored: Vec<ScoredBlock> = blocks.into_iter().map(score_block).collect();
    for (i, s) in scored.iter().enumerate() {
        tracing::debug!(index = i, score = s.score, reason = %s.reason, "block candidate");
    }

    let top = scored.iter().map(|s| s.score).max().unwrap_or(i32::MIN);
    let mut leaders: Vec<&ScoredBlock> = scored.iter().filter(|s| s.score == top).collect();

    if leaders.len() == 1 {
        return leaders[0].block.content.clone();
    }

    // Tie-break: the block with the fewest header-vocabulary keys is the
    // least header-shaped; beyond that, scan order stands (sort is stable).
    leaders.sort_by_key(|s| header_key_matches(&s.block.content));
    leaders[0].block.content.clone()
}

/// Score one block. Each rule is an independent predicate contributing a
/// signed weight; the reasons concatenate into an explanation trail.
pub fn score_block(block: TextBlock) -> ScoredBlock {
    let keys = block_keys(&block.content);
    if keys.is_empty() {
        return ScoredBlock {
            block,
            score: -100,
            reason: "empty block".to_string(),
        };
    }

    let mut score = 0i32;
    let mut reasons: Vec<&str> = Vec::new();
    let context = strip_log_prefixes(&block.preceding);
    let context = context.trim_end();

    if BODY_MARKER.is_match(context) {
        score += 50;
        reasons.push("body marker before block");
    }
    if HEADER_MARKER.is_match(context) {
        score -= 50;
        reasons.push("header marker before block");
    }
    if META_MARKER.is_match(context) {
        score -= 30;
        reasons.push("metadata marker before block");
    }

    let header_hits = keys.iter().filter(|k| HEADER_VOCAB.contains(k.as_str())).count();
    let meta_hits = keys.iter().filter(|k| META_VOCAB.contains(k.as_str())).count();

    if header_hits * 2 > keys.len() {
        score -= 40;
        reasons.push("mostly header-vocabulary keys");
    }
    if header_hits == 0 && meta_hits == 0 {
        score += 10;
        reasons.push("no header or metadata keys");
    }
    if meta_hits * 10 > keys.len() * 3 {
        score -= 30;
        reasons.push("metadata-heavy keys");
    }
    if keys.len() >= 3 {
        score += 5;
        reasons.push("multi-field block");
    }

    ScoredBlock {
        block,
        score,
        reason: reasons.join(", "),
    }
}

/// Case-folded, deduplicated key-looking tokens of a block.
fn block_keys(content: &str) -> Vec<String> {
    let mut keys: Vec<String> = KEY_TOKEN
        .captures_iter(content)
        .map(|c| c[1].to_lowercase())
        .collect();
    keys.sort();
    keys.dedup();
    keys
}

/// How many of a block's keys are well-known header names.
fn header_key_matches(content: &str) -> usize {
    block_keys(content)
        .iter()
        .filter(|k| HEADER_VOCAB.contains(k.as_str()))
        .count()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn block(content: &str, preceding: &str) -> TextBlock {
        TextBlock {
            content: content.to_string(),
            start: preceding.len(),
            end: preceding.len() + content.len(),
            preceding: preceding.to_string(),
        }
    }

    #[test]
    fn logfmt_double_quoted() {
        let text = r#"host=api.svc.local request_body="{order_status: delivered, id: 42}" status=200"#;
        assert_eq!(
            select_body(text).as_deref(),
            Some("{order_status: delivered, id: 42}")
        );
    }

    #[test]
    fn logfmt_bare_value() {
        let text = "level=info payload={\"a\":1} elapsed=12ms";
        assert_eq!(select_body(text).as_deref(), Some("{\"a\":1}"));
    }

    #[test]
    fn logfmt_keys_are_a_priority_order() {
        // `data=` comes first in the line, but `request_body=` is the
        // higher-priority key and must win.
        let text = "data={a:1} request_body={b:2}";
        assert_eq!(select_body(text).as_deref(), Some("{b:2}"));
    }

    #[test]
    fn logfmt_body_key_not_matched_inside_request_body() {
        // `request_body=` must be credited to the request_body alternative,
        // not to a spurious `body` hit mid-word.
        let text = r#"request_body='{x: 1}'"#;
        assert_eq!(select_body(text).as_deref(), Some("{x: 1}"));
    }

    #[test]
    fn single_block_returned_unconditionally() {
        // Even a header-shaped lone block wins — there is no ambiguity.
        let text = "HEADERS: {content-type: application/json, accept: */*}";
        assert_eq!(
            select_body(text).as_deref(),
            Some("{content-type: application/json, accept: */*}")
        );
    }

    #[test]
    fn no_blocks_means_none() {
        assert_eq!(select_body("no braces at all"), None);
    }

    #[test]
    fn data_block_beats_headers_block() {
        let text = "HEADERS: {content-type: application/json, accept: */*, host: x, \
                    user-agent: y, authorization: z}\nDATA: {order_id: 42, note: hi}";
        assert_eq!(select_body(text).as_deref(), Some("{order_id: 42, note: hi}"));
    }

    #[test]
    fn empty_block_scores_minus_100() {
        let s = score_block(block("{}", "BODY: "));
        assert_eq!(s.score, -100);
        assert_eq!(s.reason, "empty block");
    }

    #[test]
    fn body_marker_adds_50() {
        let s = score_block(block("{order_id: 42}", "some noise\nBODY: "));
        assert!(s.score >= 50, "score was {} ({})", s.score, s.reason);
    }

    #[test]
    fn prefixed_marker_context_still_counts() {
        // The marker line itself may carry a log prefix; context is
        // re-stripped before matching.
        let s = score_block(block("{order_id: 42}", "flutter: BODY:\nflutter: "));
        assert!(s.score >= 50, "score was {} ({})", s.score, s.reason);
    }

    #[test]
    fn header_vocabulary_penalty() {
        let s = score_block(block(
            "{content-type: application/json, accept: */*, host: api.x}",
            "",
        ));
        assert!(s.score < 0, "score was {} ({})", s.score, s.reason);
    }

    #[test]
    fn metadata_penalty() {
        let s = score_block(block("{method: POST, url: /x, timeout: 5000}", "config: "));
        assert!(s.score < 0, "score was {} ({})", s.score, s.reason);
    }

    #[test]
    fn tie_broken_by_fewest_header_keys() {
        // Two blocks engineered to the same score (+5 each): one holding
        // three well-known header names, one holding none. The clean one
        // must win the tie.
        let a = "{content-type: a, accept: b, host: c, alpha: 1, beta: 2, gamma: 3}";
        let b = "{delta: 4, epsilon: 5, zeta: 6, url: /x}";
        let text = format!("{a}\n{b}");

        let scored: Vec<_> = scan_blocks(&text).into_iter().map(score_block).collect();
        assert_eq!(scored[0].score, scored[1].score, "fixture must tie");

        assert_eq!(select_body(&text).as_deref(), Some(b));
    }

    #[test]
    fn scan_order_breaks_remaining_ties() {
        let text = "x {alpha: 1, beta: 2} y {gamma: 3, delta: 4}";
        assert_eq!(select_body(text).as_deref(), Some("{alpha: 1, beta: 2}"));
    }
}
