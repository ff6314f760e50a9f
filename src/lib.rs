//! curlify — turn a pasted HTTP request log into a replayable curl command.
//!
//! The heavy lifting (prefix stripping, field extraction, block scoring,
//! body normalization) lives in `curlify-core`; this crate adds the host
//! glue: config, input handling, and resolution of the recoverable
//! failure modes (missing method, unparseable body).
//!
//! Re-exports the core API so integration tests and downstream users can
//! import everything through one crate.

pub mod config;

pub use curlify_core::{
    convert, convert_strict, render, AssembleDefaults, BodyOutcome, Conversion, ConvertError,
    CurlComponents, CustomHeader, ParseError,
};
