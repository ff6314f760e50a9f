//! Command assembler — renders [`CurlComponents`] into the final
//! multi-line curl invocation.
//!
//! Header order is fixed: `Accept`, `Content-Type`, extracted custom
//! headers verbatim, then `Authorization`. The two defaults step aside
//! when a custom header already covers them, and the bearer line is
//! omitted when a custom `Authorization` header exists.

use crate::types::CurlComponents;

/// Default header values used when the log supplied none. The host layer
/// populates this from its config file.
#[derive(Debug, Clone)]
pub struct AssembleDefaults {
    pub accept: String,
    pub content_type: String,
}

impl Default for AssembleDefaults {
    fn default() -> Self {
        Self {
            accept: "application/json".to_string(),
            content_type: "application/json".to_string(),
        }
    }
}

/// Render the curl command text. Every line but the last ends in ` \`.
pub fn render(components: &CurlComponents, defaults: &AssembleDefaults) -> String {
    let mut lines = Vec::new();

    lines.push(format!("curl --location \"{}\"", components.url));
    lines.push(format!("--request {}", components.method));

    let has_custom = |name: &str| {
        components
            .custom_headers
            .iter()
            .any(|h| h.key.eq_ignore_ascii_case(name))
    };

    if !has_custom("accept") {
        lines.push(format!("--header \"Accept: {}\"", defaults.accept));
    }
    if !has_custom("content-type") {
        lines.push(format!("--header \"Content-Type: {}\"", defaults.content_type));
    }
    for h in &components.custom_headers {
        lines.push(format!("--header \"{}: {}\"", h.key, h.value));
    }
    if let Some(token) = &components.token {
        if !has_custom("authorization") {
            lines.push(format!("--header \"Authorization: Bearer {token}\""));
        }
    }
    if let Some(body) = &components.body {
        lines.push(format!("--data '{body}'"));
    }

    lines.join(" \\\n")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CustomHeader;
    use pretty_assertions::assert_eq;

    fn components() -> CurlComponents {
        CurlComponents {
            url: "https://api.example.com/v1/login".to_string(),
            method: "POST".to_string(),
            token: Some("abc123xyz0".to_string()),
            body: Some("{\n  \"name\": \"John\"\n}".to_string()),
            custom_headers: vec![CustomHeader::new("X-Client-Id", "mobile")],
        }
    }

    #[test]
    fn full_command_layout() {
        let cmd = render(&components(), &AssembleDefaults::default());
        assert_eq!(
            cmd,
            "curl --location \"https://api.example.com/v1/login\" \\\n\
             --request POST \\\n\
             --header \"Accept: application/json\" \\\n\
             --header \"Content-Type: application/json\" \\\n\
             --header \"X-Client-Id: mobile\" \\\n\
             --header \"Authorization: Bearer abc123xyz0\" \\\n\
             --data '{\n  \"name\": \"John\"\n}'"
        );
    }

    #[test]
    fn custom_accept_suppresses_default() {
        let mut c = components();
        c.custom_headers = vec![CustomHeader::new("accept", "text/plain")];
        let cmd = render(&c, &AssembleDefaults::default());
        assert!(!cmd.contains("Accept: application/json"));
        assert!(cmd.contains("--header \"accept: text/plain\""));
    }

    #[test]
    fn custom_authorization_suppresses_bearer_line() {
        let mut c = components();
        c.custom_headers = vec![CustomHeader::new("Authorization", "Basic Zm9v")];
        let cmd = render(&c, &AssembleDefaults::default());
        assert!(!cmd.contains("Bearer abc123xyz0"));
        assert!(cmd.contains("Authorization: Basic Zm9v"));
    }

    #[test]
    fn no_token_no_body() {
        let mut c = components();
        c.token = None;
        c.body = None;
        c.custom_headers.clear();
        let cmd = render(&c, &AssembleDefaults::default());
        assert!(!cmd.contains("Authorization"));
        assert!(!cmd.contains("--data"));
        assert!(cmd.ends_with("--header \"Content-Type: application/json\""));
    }

    #[test]
    fn continuation_backslashes() {
        let cmd = render(&components(), &AssembleDefaults::default());
        assert!(cmd.contains("\" \\\n--request POST \\\n"));
        assert!(!cmd.ends_with('\\'));
    }
}
