// File: src/config.rs
// Purpose: Failure messages for the built-in fields, loadable from TOML

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Validation configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ValidationConfig {
    #[serde(default)]
    pub messages: MessagesConfig,
}

/// Messages returned by the built-in fields when they fail
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MessagesConfig {
    #[serde(default = "default_email_message")]
    pub email: String,

    #[serde(default = "default_integer_string_message")]
    pub integer_string: String,

    /// `{charset}` is replaced with the allowed characters.
    #[serde(default = "default_charset_message")]
    pub charset: String,
}

impl Default for MessagesConfig {
    fn default() -> Self {
        Self {
            email: default_email_message(),
            integer_string: default_integer_string_message(),
            charset: default_charset_message(),
        }
    }
}

fn default_email_message() -> String {
    "Expected a valid email address.".to_string()
}

fn default_integer_string_message() -> String {
    "Expected a string of digits.".to_string()
}

fn default_charset_message() -> String {
    "Expected only the characters: {charset}".to_string()
}

impl ValidationConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading validation config");

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse validation config")
    }
}

impl MessagesConfig {
    /// The charset message with `{charset}` filled in
    pub fn charset_message(&self, charset: &str) -> String {
        self.charset.replace("{charset}", charset)
    }
}
