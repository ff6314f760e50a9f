//! Configuration types for curlify.
//!
//! [`Config::load`] reads `~/.config/curlify/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::defaults`] returns
//! the same defaults without touching the filesystem (useful in tests).

use serde::Deserialize;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[headers]
accept       = "application/json"
content_type = "application/json"

[prompt]
# Ask for an HTTP verb interactively when none can be inferred from the log.
method = true
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration, loaded from
/// `~/.config/curlify/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub headers: HeadersConfig,
    #[serde(default)]
    pub prompt: PromptConfig,
}

/// `[headers]` section — default header values for the assembled command.
#[derive(Debug, Clone, Deserialize)]
pub struct HeadersConfig {
    #[serde(default = "default_accept")]
    pub accept: String,
    #[serde(default = "default_content_type")]
    pub content_type: String,
}

fn default_accept() -> String { "application/json".to_string() }
fn default_content_type() -> String { "application/json".to_string() }

impl Default for HeadersConfig {
    fn default() -> Self {
        Self {
            accept: default_accept(),
            content_type: default_content_type(),
        }
    }
}

/// `[prompt]` section — interactive fallback behaviour.
#[derive(Debug, Clone, Deserialize)]
pub struct PromptConfig {
    #[serde(default = "default_prompt_method")]
    pub method: bool,
}

fn default_prompt_method() -> bool { true }

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            method: default_prompt_method(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/curlify/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not
    /// exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path.as_path()).required(false))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("curlify")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
