//! Pipeline orchestration — wires the stages together.
//!
//! ```text
//! raw text ──► strip ──► url / method / token / headers extractors
//!                  │
//!                  └──► logfmt check ──► block scan ──► score & select
//!                                             │
//!                          re-strip ──► normalize ──► unwrap ──► body
//! ```
//!
//! [`convert`] is the lenient entry point: only a missing URL fails it.
//! A missing method and a failed body normalization are carried inside
//! the returned [`Conversion`] so the host layer can prompt or degrade.
//! [`convert_strict`] is the all-or-nothing facade for callers with no
//! user to ask.

use crate::error::{ConvertError, ParseError};
use crate::types::{BodyOutcome, Conversion, CurlComponents};
use crate::{extract, normalize, select, strip, unwrap};
use serde_json::Value;

/// Run the full extraction pipeline over one pasted log.
///
/// Fails only with [`ConvertError::NoUrlFound`]; every other missing piece
/// is represented inside the [`Conversion`].
pub fn convert(text: &str) -> Result<Conversion, ConvertError> {
    let stripped = strip::strip_log_prefixes(text);

    let url = extract::url::extract(&stripped).ok_or(ConvertError::NoUrlFound)?;
    let method = extract::method::extract(&stripped);
    let token = extract::token::extract(&stripped);
    let custom_headers = extract::headers::extract(&stripped);
    let body = recover_body(&stripped);

    tracing::debug!(
        url = %url,
        method = ?method,
        has_token = token.is_some(),
        headers = custom_headers.len(),
        "pipeline finished"
    );

    Ok(Conversion {
        url,
        method,
        token,
        custom_headers,
        body,
    })
}

/// All-or-nothing facade: a complete [`CurlComponents`] or a typed failure.
pub fn convert_strict(text: &str) -> Result<CurlComponents, ConvertError> {
    let conversion = convert(text)?;
    let method = conversion.method.ok_or(ConvertError::NoMethodFound)?;
    let body = match conversion.body {
        BodyOutcome::Json(json) => Some(json),
        BodyOutcome::Absent => None,
        BodyOutcome::Failed(err) => return Err(ConvertError::BodyNormalizationFailed(err)),
    };

    Ok(CurlComponents {
        url: conversion.url,
        method,
        token: conversion.token,
        body,
        custom_headers: conversion.custom_headers,
    })
}

/// Body path: select a candidate, re-strip per-line prefixes the block may
/// carry internally, normalize, then unwrap a request-config wrapper.
fn recover_body(stripped: &str) -> BodyOutcome {
    let Some(candidate) = select::select_body(stripped) else {
        return BodyOutcome::Absent;
    };
    let candidate = strip::strip_log_prefixes(&candidate);

    let json_text = match normalize::normalize(&candidate) {
        Ok(t) => t,
        Err(err) => {
            tracing::debug!(error = %err, "body candidate failed normalization");
            return BodyOutcome::Failed(err);
        }
    };

    // `normalize` self-checks its output, so this parse cannot fail in
    // practice; surface it as a body failure rather than panicking if the
    // invariant is ever broken.
    let value: Value = match serde_json::from_str(&json_text) {
        Ok(v) => v,
        Err(e) => {
            return BodyOutcome::Failed(ParseError::new(
                0,
                None,
                format!("normalized body is not strict JSON: {e}"),
            ))
        }
    };

    let unwrapped = unwrap::unwrap_config_body(value);
    let pretty = serde_json::to_string_pretty(&unwrapped)
        .unwrap_or_else(|_| unwrapped.to_string());
    BodyOutcome::Json(pretty)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
