//! curlify-core — heuristic HTTP-log extraction pipeline.
//!
//! Turns free-form, often malformed request logs (mobile frameworks,
//! backend loggers, reverse proxies) into the components of a replayable
//! curl command.
//!
//! # Architecture
//!
//! ```text
//! raw text ──► strip ──► extract (url / method / token / headers)
//!                  │
//!                  └──► select (logfmt, scan, score) ──► normalize ──► unwrap
//!                                                             │
//!                                 CurlComponents ◄── pipeline ─┘
//! ```
//!
//! Everything is synchronous, pure text processing; each conversion is
//! independent and stateless.

pub mod command;
pub mod error;
pub mod extract;
pub mod normalize;
pub mod pipeline;
pub mod scan;
pub mod select;
pub mod strip;
pub mod types;
pub mod unwrap;

pub use command::{render, AssembleDefaults};
pub use error::{ConvertError, ParseError};
pub use pipeline::{convert, convert_strict};
pub use types::{BodyOutcome, Conversion, CurlComponents, CustomHeader, ScoredBlock, TextBlock};
