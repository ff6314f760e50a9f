//! Error types for the conversion pipeline.
//!
//! Only a missing URL is fatal. A missing method and a failed body
//! normalization are recoverable — the host layer prompts for a verb or
//! offers to proceed without a body — so [`ConvertError`] is produced by
//! the strict facade, while [`crate::pipeline::convert`] carries those
//! conditions inside [`crate::Conversion`] instead.

use thiserror::Error;

/// A structural violation encountered by the tolerant body parser.
///
/// Carries the character offset and the offending character (where one
/// exists; end-of-input violations have none).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub position: usize,
    pub found: Option<char>,
    pub message: String,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "body parse error at offset {}: {}", self.position, self.message)?;
        if let Some(c) = self.found {
            write!(f, " (found {c:?})")?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

impl ParseError {
    pub fn new(position: usize, found: Option<char>, message: impl Into<String>) -> Self {
        Self {
            position,
            found,
            message: message.into(),
        }
    }
}

/// Typed failure of a full conversion, as returned by the strict facade.
#[derive(Debug, Clone, Error)]
pub enum ConvertError {
    /// No URL could be extracted or reconstructed. Fatal — a curl command
    /// without a URL is meaningless.
    #[error("no URL found in the pasted text")]
    NoUrlFound,

    /// No HTTP method could be inferred. The caller must solicit one from
    /// the user (fixed verb set) and retry.
    #[error("no HTTP method found; one must be supplied explicitly")]
    NoMethodFound,

    /// A body candidate was located but could not be repaired into valid
    /// JSON. The caller may retry the conversion without a body.
    #[error("body normalization failed: {0}")]
    BodyNormalizationFailed(#[from] ParseError),
}
