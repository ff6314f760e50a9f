//! Shared test utilities for curlify integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top
//! of each harness file. Fixtures are real-world-shaped pasted logs, the
//! builders compose synthetic ones, and the assertion macros attach
//! pipeline-aware context to failures.

pub mod assertions;
pub mod builders;
pub mod fixtures;

pub use builders::*;
pub use fixtures::*;
