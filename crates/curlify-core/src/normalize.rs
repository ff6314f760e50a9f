//! Body normalizer — repairs a log-style object/array literal into strict,
//! pretty-printed JSON.
//!
//! Normalization is an ordered chain of strategies, cheapest first:
//!
//! 1. **Strict**: the candidate already parses as JSON — re-serialize.
//! 2. **Quote swap**: naively rewrite single-quoted string literals to
//!    double-quoted and retry the strict parse.
//! 3. **Tolerant grammar**: a recursive-descent parser over the raw
//!    characters that accepts the shapes log dumps actually produce —
//!    unquoted keys and values, missing or trailing commas, `None`/`True`
//!    Python literals, multi-line unquoted values, truncated tails. The
//!    emitted text is strict-parsed as a self-check before it is returned.
//!
//! Known quirk, kept on purpose: the quote-swap stage does not understand
//! apostrophes inside double-quoted content (`"it's"` becomes damaged), so
//! such input falls through to the tolerant grammar.
//!
//! New strategies slot into [`STRATEGIES`] without touching the existing
//! ones.

use crate::error::ParseError;
use serde_json::Value;

/// Fast-path strategies, tried in order before the tolerant grammar. Each
/// returns the parsed value or bows out silently.
static STRATEGIES: &[(&str, fn(&str) -> Option<Value>)] =
    &[("strict", parse_strict), ("quote-swap", parse_quote_swapped)];

/// Normalize `raw` into pretty-printed (2-space indent) JSON text.
pub fn normalize(raw: &str) -> Result<String, ParseError> {
    for (name, strategy) in STRATEGIES {
        if let Some(value) = strategy(raw) {
            tracing::debug!(strategy = name, "body normalized via fast path");
            return Ok(pretty(&value));
        }
    }

    let emitted = Parser::new(&strip_comment_lines(raw)).parse_root()?;

    // Self-check: the tolerant grammar must have produced strict JSON.
    let value: Value = serde_json::from_str(&emitted).map_err(|e| {
        ParseError::new(0, None, format!("tolerant output failed validation: {e}"))
    })?;
    tracing::debug!(strategy = "tolerant", "body normalized via grammar");
    Ok(pretty(&value))
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

fn parse_strict(raw: &str) -> Option<Value> {
    serde_json::from_str(raw.trim()).ok()
}

/// Swap single-quoted string literals to double-quoted and retry. The scan
/// respects backslash escapes but deliberately does not track double-quoted
/// regions — see the module docs.
fn parse_quote_swapped(raw: &str) -> Option<Value> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                out.push('\\');
                if let Some(n) = chars.next() {
                    out.push(n);
                }
            }
            '\'' => {
                out.push('"');
                while let Some(inner) = chars.next() {
                    match inner {
                        '\\' => {
                            out.push('\\');
                            if let Some(n) = chars.next() {
                                out.push(n);
                            }
                        }
                        '\'' => break,
                        '"' => out.push_str("\\\""),
                        other => out.push(other),
                    }
                }
                out.push('"');
            }
            other => out.push(other),
        }
    }

    parse_strict(&out)
}

/// Drop lines that are nothing but a `//` or `#` comment.
fn strip_comment_lines(raw: &str) -> String {
    raw.lines()
        .filter(|line| {
            let t = line.trim_start();
            !(t.starts_with("//") || t.starts_with('#'))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

// ---------------------------------------------------------------------------
// Tolerant recursive-descent parser
// ---------------------------------------------------------------------------

/// Parser state: the source as chars plus a cursor, emitting compact JSON
/// into `out` as it descends. Purely local — nothing is shared between
/// conversions.
struct Parser {
    chars: Vec<char>,
    pos: usize,
    out: String,
}

impl Parser {
    fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            pos: 0,
            out: String::with_capacity(source.len()),
        }
    }

    fn parse_root(mut self) -> Result<String, ParseError> {
        self.skip_ws();
        self.parse_value()?;
        // Trailing noise after the root value is ignored; the selected
        // block ends at its closing brace anyway.
        Ok(self.out)
    }

    // -- low-level cursor ---------------------------------------------------

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek();
        if c.is_some() {
            self.pos += 1;
        }
        c
    }

    fn skip_ws(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.pos += 1;
        }
    }

    fn error(&self, message: impl Into<String>) -> ParseError {
        ParseError::new(self.pos, self.peek(), message)
    }

    // -- grammar ------------------------------------------------------------

    fn parse_value(&mut self) -> Result<(), ParseError> {
        self.skip_ws();
        match self.peek() {
            Some('{') => self.parse_object(),
            Some('[') => self.parse_array(),
            Some(q @ ('"' | '\'')) => self.parse_quoted_string(q),
            // Empty value slot — `key: ,` or `key: }` — becomes null.
            Some(',' | '}' | ']') | None => {
                self.out.push_str("null");
                Ok(())
            }
            Some(_) => self.parse_unquoted_value(),
        }
    }

    /// `{` entries `}` with optional commas between entries, tolerated
    /// trailing commas, and a best-effort close at end of input.
    fn parse_object(&mut self) -> Result<(), ParseError> {
        self.bump(); // '{'
        self.out.push('{');
        let mut first = true;

        loop {
            self.skip_ws();
            match self.peek() {
                None => break, // truncated dump — close what we have
                Some('}') => {
                    self.bump();
                    break;
                }
                Some(',') => {
                    self.bump();
                    continue;
                }
                Some(_) => {
                    if !first {
                        self.out.push(',');
                    }
                    self.parse_key()?;
                    self.skip_ws();
                    if self.peek() != Some(':') {
                        return Err(self.error("expected ':' after object key"));
                    }
                    self.bump();
                    self.out.push(':');
                    self.parse_value()?;
                    first = false;
                }
            }
        }

        self.out.push('}');
        Ok(())
    }

    /// `[` elements `]` with the same comma tolerance as objects.
    fn parse_array(&mut self) -> Result<(), ParseError> {
        self.bump(); // '['
        self.out.push('[');
        let mut first = true;

        loop {
            self.skip_ws();
            match self.peek() {
                None => break,
                Some(']') => {
                    self.bump();
                    break;
                }
                Some(',') => {
                    self.bump();
                    continue;
                }
                Some(_) => {
                    if !first {
                        self.out.push(',');
                    }
                    self.parse_value()?;
                    first = false;
                }
            }
        }

        self.out.push(']');
        Ok(())
    }

    /// A quoted (either style) or bare identifier key, re-emitted as a
    /// double-quoted JSON key. A missing key is fatal.
    fn parse_key(&mut self) -> Result<(), ParseError> {
        self.skip_ws();
        match self.peek() {
            Some(q @ ('"' | '\'')) => self.parse_quoted_string(q),
            Some(c) if is_bare_key_char(c) => {
                let start = self.pos;
                while matches!(self.peek(), Some(c) if is_bare_key_char(c)) {
                    self.pos += 1;
                }
                let key: String = self.chars[start..self.pos].iter().collect();
                self.emit_string(&key);
                Ok(())
            }
            _ => Err(self.error("expected object key")),
        }
    }

    /// Copy a quoted string, translating it to a double-quoted JSON string.
    /// Recognized JSON escapes pass through; unrecognized escapes lose the
    /// backslash; a literal `"` inside single-quoted input gets escaped.
    fn parse_quoted_string(&mut self, quote: char) -> Result<(), ParseError> {
        self.bump(); // opening quote
        self.out.push('"');

        loop {
            match self.bump() {
                None => return Err(self.error("unterminated string")),
                Some('\\') => match self.bump() {
                    None => return Err(self.error("unterminated string escape")),
                    Some(e @ ('"' | '\\' | '/' | 'b' | 'f' | 'n' | 'r' | 't' | 'u')) => {
                        self.out.push('\\');
                        self.out.push(e);
                    }
                    // Unknown escape: keep the character, drop the backslash.
                    Some(other) => {
                        if other == '\'' {
                            self.out.push('\'');
                        } else {
                            self.out.push(other);
                        }
                    }
                },
                Some(c) if c == quote => break,
                Some('"') => self.out.push_str("\\\""), // only when quote == '\''
                Some(c) => self.out.push(c),
            }
        }

        self.out.push('"');
        Ok(())
    }

    /// An unquoted value: keyword, number, or bare string running to the
    /// next hard terminator. A newline is a soft terminator when the next
    /// line starts a new `key:` pair or closes a bracket, which lets
    /// multi-line unquoted values survive log wrapping.
    fn parse_unquoted_value(&mut self) -> Result<(), ParseError> {
        let start = self.pos;

        while let Some(c) = self.peek() {
            match c {
                ',' | '}' | ']' => break,
                '\n' => {
                    if self.next_line_starts_new_entry() {
                        break;
                    }
                    self.pos += 1;
                }
                _ => self.pos += 1,
            }
        }

        let raw: String = self.chars[start..self.pos].iter().collect();
        let token = raw.trim();

        if token.is_empty() {
            self.out.push_str("null");
        } else if token.eq_ignore_ascii_case("null") || token.eq_ignore_ascii_case("none") {
            self.out.push_str("null");
        } else if token.eq_ignore_ascii_case("true") {
            self.out.push_str("true");
        } else if token.eq_ignore_ascii_case("false") {
            self.out.push_str("false");
        } else if is_json_number(token) {
            self.out.push_str(token);
        } else {
            self.emit_string(token);
        }
        Ok(())
    }

    /// After a newline inside an unquoted value: does the text ahead (any
    /// leading blank space skipped) look like `key:` or a closing bracket?
    fn next_line_starts_new_entry(&self) -> bool {
        let mut i = self.pos + 1; // past the newline
        let at = |i: usize| self.chars.get(i).copied();

        while matches!(at(i), Some(c) if c.is_whitespace()) {
            i += 1;
        }
        match at(i) {
            None => true,
            Some('}' | ']') => true,
            Some(q @ ('"' | '\'')) => {
                // Quoted key: scan to the closing quote, then require ':'.
                i += 1;
                while matches!(at(i), Some(c) if c != q) {
                    i += 1;
                }
                i += 1;
                while matches!(at(i), Some(c) if c.is_whitespace()) {
                    i += 1;
                }
                at(i) == Some(':')
            }
            Some(c) if is_bare_key_char(c) => {
                while matches!(at(i), Some(c) if is_bare_key_char(c)) {
                    i += 1;
                }
                while matches!(at(i), Some(c) if c.is_whitespace() && c != '\n') {
                    i += 1;
                }
                at(i) == Some(':')
            }
            Some(_) => false,
        }
    }

    /// Emit `s` as a double-quoted JSON string with the characters that
    /// matter for validity escaped.
    fn emit_string(&mut self, s: &str) {
        self.out.push('"');
        for c in s.chars() {
            match c {
                '\\' => self.out.push_str("\\\\"),
                '"' => self.out.push_str("\\\""),
                '\n' => self.out.push_str("\\n"),
                '\r' => self.out.push_str("\\r"),
                '\t' => self.out.push_str("\\t"),
                other => self.out.push(other),
            }
        }
        self.out.push('"');
    }
}

/// Bare keys follow `[\w\-.$]+`.
fn is_bare_key_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '-' | '.' | '$')
}

/// Standard JSON number syntax, required to cover the whole token. The
/// token already ends at a structural delimiter, so a full match is the
/// "anchored" check that keeps `30 items` a string rather than a number.
fn is_json_number(token: &str) -> bool {
    let mut rest = token.strip_prefix('-').unwrap_or(token);
    if rest.is_empty() {
        return false;
    }

    // Integer part: 0, or a non-zero digit followed by digits.
    let int_len = rest.chars().take_while(|c| c.is_ascii_digit()).count();
    match int_len {
        0 => return false,
        1 => {}
        _ if rest.starts_with('0') => return false,
        _ => {}
    }
    rest = &rest[int_len..];

    if let Some(frac) = rest.strip_prefix('.') {
        let digits = frac.chars().take_while(|c| c.is_ascii_digit()).count();
        if digits == 0 {
            return false;
        }
        rest = &frac[digits..];
    }

    if let Some(exp) = rest.strip_prefix(['e', 'E']) {
        let exp = exp.strip_prefix(['+', '-']).unwrap_or(exp);
        let digits = exp.chars().take_while(|c| c.is_ascii_digit()).count();
        if digits == 0 || digits != exp.len() {
            return false;
        }
        return true;
    }

    rest.is_empty()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
