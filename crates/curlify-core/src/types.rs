//! Core types for curlify-core.
//!
//! This module defines the data structures shared across the pipeline
//! stages: the [`TextBlock`] spans emitted by the block scanner, the
//! [`CustomHeader`] pairs from the headers extractor, the intermediate
//! [`Conversion`] record the host layer resolves, and the final
//! [`CurlComponents`] contract consumed by the command assembler.

use crate::error::ParseError;

/// One top-level brace-balanced `{...}` span found in the pasted log.
///
/// Blocks are emitted in scan order (left to right). Nested braces are
/// absorbed into `content`; only depth-1 spans become blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBlock {
    /// The span text, starting at `{` and ending at the matching `}`.
    pub content: String,
    /// Byte offset of the opening brace in the source text.
    pub start: usize,
    /// Byte offset one past the closing brace.
    pub end: usize,
    /// Up to 300 characters of source text immediately before the opening
    /// brace. Used by the body selector to look for `BODY:` / `HEADERS:`
    /// style markers.
    pub preceding: String,
}

/// A [`TextBlock`] with its heuristic body-likelihood score attached.
///
/// Ephemeral — built during body selection and discarded once a winner is
/// chosen. `reason` is a human-readable trail of the rules that fired,
/// surfaced at debug log level.
#[derive(Debug, Clone)]
pub struct ScoredBlock {
    pub block: TextBlock,
    pub score: i32,
    pub reason: String,
}

/// A non-standard request header recovered from a `HEADERS:` section.
///
/// Headers keep their first-seen order and are never deduplicated by the
/// extractor; a duplicate key simply appends another entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomHeader {
    pub key: String,
    pub value: String,
}

impl CustomHeader {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// What the body path produced for this conversion.
///
/// Body failures are recoverable: the host layer decides whether
/// to proceed without a body or abort, so the outcome carries the parse
/// error instead of failing the whole conversion.
#[derive(Debug, Clone)]
pub enum BodyOutcome {
    /// A normalized, pretty-printed JSON body.
    Json(String),
    /// No body candidate was found in the text.
    Absent,
    /// A candidate was found but could not be coerced into valid JSON.
    Failed(ParseError),
}

impl BodyOutcome {
    pub fn as_json(&self) -> Option<&str> {
        match self {
            BodyOutcome::Json(s) => Some(s),
            _ => None,
        }
    }
}

/// Everything the pipeline could recover from one pasted log.
///
/// `url` is the only mandatory field; a missing method and a failed body
/// are carried here so the caller can resolve them (prompt, flag, or
/// drop-the-body) before assembling [`CurlComponents`].
#[derive(Debug, Clone)]
pub struct Conversion {
    pub url: String,
    pub method: Option<String>,
    pub token: Option<String>,
    pub custom_headers: Vec<CustomHeader>,
    pub body: BodyOutcome,
}

/// The final output contract: every component of the curl command,
/// normalized and ready for rendering. Immutable once assembled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurlComponents {
    pub url: String,
    pub method: String,
    pub token: Option<String>,
    /// Pretty-printed JSON, or `None` when the request has no body.
    pub body: Option<String>,
    pub custom_headers: Vec<CustomHeader>,
}
