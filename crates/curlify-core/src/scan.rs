//! Block scanner — finds every top-level brace-balanced `{...}` span in
//! the pasted text.
//!
//! A single left-to-right pass tracks brace depth and quote state. A block
//! opens when depth goes 0→1 and closes when it returns to 0; nested
//! braces are absorbed into the block's content rather than reported as
//! separate blocks. Inside a single- or double-quoted string, braces are
//! inert; a backslash escapes the next character unconditionally. Spurious
//! unmatched `}` clamp depth at 0 instead of failing — malformed input
//! must never crash the scan.
//!
//! Each block carries up to 300 characters of the text immediately before
//! its opening brace, which the body selector mines for `BODY:` /
//! `HEADERS:` style markers.

use crate::types::TextBlock;

/// Number of characters of preceding context captured per block.
const PRECEDING_CONTEXT_CHARS: usize = 300;

/// Scan `text` and return every top-level `{...}` block in source order.
pub fn scan_blocks(text: &str) -> Vec<TextBlock> {
    let mut blocks = Vec::new();
    let mut depth = 0usize;
    let mut block_start = 0usize;
    let mut in_string: Option<char> = None;
    let mut escaped = false;

    for (i, c) in text.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        if c == '\\' {
            escaped = true;
            continue;
        }
        if let Some(quote) = in_string {
            if c == quote {
                in_string = None;
            }
            continue;
        }
        match c {
            '"' | '\'' => in_string = Some(c),
            '{' => {
                depth += 1;
                if depth == 1 {
                    block_start = i;
                }
            }
            '}' => {
                // Clamp on unmatched closers rather than underflowing.
                if depth > 0 {
                    depth -= 1;
                    if depth == 0 {
                        let end = i + 1;
                        blocks.push(TextBlock {
                            content: text[block_start..end].to_string(),
                            start: block_start,
                            end,
                            preceding: preceding_context(text, block_start),
                        });
                    }
                }
            }
            _ => {}
        }
    }

    blocks
}

/// The last [`PRECEDING_CONTEXT_CHARS`] characters before `pos`.
fn preceding_context(text: &str, pos: usize) -> String {
    let before = &text[..pos];
    let cut = before
        .char_indices()
        .rev()
        .nth(PRECEDING_CONTEXT_CHARS - 1)
        .map(|(i, _)| i)
        .unwrap_or(0);
    before[cut..].to_string()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
