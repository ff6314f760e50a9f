//! Test builders — compose synthetic pasted logs line by line.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning
//! `Result`.

/// Fluent builder for pasted-log fixtures.
///
/// # Example
///
/// ```rust
/// let paste = LogPasteBuilder::new()
///     .prefix("flutter: ")
///     .url("https://api.example.com/v1/login")
///     .method("POST")
///     .token("abc123xyz0")
///     .body("{name: John, age: 30}")
///     .build();
/// ```
#[derive(Default)]
pub struct LogPasteBuilder {
    lines: Vec<String>,
    prefix: Option<String>,
}

impl LogPasteBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap every built line in a logging-framework prefix.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn url(mut self, url: &str) -> Self {
        self.lines.push(format!("FULL URL: {url}"));
        self
    }

    pub fn method(mut self, verb: &str) -> Self {
        self.lines.push(format!("{verb} REQUEST"));
        self
    }

    pub fn token(mut self, token: &str) -> Self {
        self.lines.push(format!("Authorization: Bearer {token}"));
        self
    }

    /// A `HEADERS:` section followed by a ruler separator.
    pub fn headers(mut self, pairs: &[(&str, &str)]) -> Self {
        self.lines.push("HEADERS:".to_string());
        for (k, v) in pairs {
            self.lines.push(format!("{k}: {v}"));
        }
        self.lines.push("----------".to_string());
        self
    }

    /// A `BODY:`-labeled raw body; multi-line bodies get the prefix on
    /// every physical line, like real framework logs do.
    pub fn body(mut self, raw: &str) -> Self {
        self.lines.push("BODY:".to_string());
        for line in raw.lines() {
            self.lines.push(line.to_string());
        }
        self
    }

    /// An arbitrary raw line, prefixed like the rest.
    pub fn line(mut self, raw: &str) -> Self {
        self.lines.push(raw.to_string());
        self
    }

    pub fn build(self) -> String {
        let prefix = self.prefix.unwrap_or_default();
        self.lines
            .iter()
            .map(|l| format!("{prefix}{l}"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
