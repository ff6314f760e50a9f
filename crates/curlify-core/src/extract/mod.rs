//! Field extractors — independent heuristic scanners over prefix-stripped
//! log text.
//!
//! Each extractor is a pure function from text to an optional result and
//! knows nothing about the others; the pipeline runs all four over the
//! same stripped text. Callers are expected to have applied
//! [`crate::strip::strip_log_prefixes`] first.

pub mod headers;
pub mod method;
pub mod token;
pub mod url;
