//! Collector configuration
//!
//! Provides TOML-based configuration with environment variable override support.
//! Priority: CLI args > Environment variables > Config file > Defaults

use anyhow::{anyhow, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use super::word_check::WordCheck;
use crate::api::DEFAULT_BASE_URL;
use crate::error::CollectError;

/// Maimemo open API tokens are 64 hex characters
static TOKEN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^[a-f0-9]{64}$").expect("Invalid regex"));

/// Collector configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectorConfig {
    /// Maimemo open API token
    #[serde(default)]
    api_token: String,

    /// Title of the notepad words are collected into
    #[serde(default)]
    word_list_title: String,

    /// Verify single words against the dictionary before adding them
    #[serde(default)]
    enable_word_check: WordCheck,

    /// API base URL
    #[serde(default = "default_base_url")]
    base_url: String,

    /// HTTP timeout in seconds
    #[serde(default = "default_timeout_secs")]
    timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            api_token: String::new(),
            word_list_title: String::new(),
            enable_word_check: WordCheck::default(),
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl CollectorConfig {
    /// Create a config from the two required fields
    pub fn new(api_token: impl Into<String>, word_list_title: impl Into<String>) -> Self {
        Self {
            api_token: api_token.into(),
            word_list_title: word_list_title.into(),
            ..Self::default()
        }
    }

    /// Create config from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path.display(), e))?;
        let config: CollectorConfig = toml::from_str(&content)
            .map_err(|e| anyhow!("Failed to parse config file: {}", e))?;
        Ok(config)
    }

    /// Create config from environment variables
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(token) = std::env::var("NOTEPAD_COLLECTOR_API_TOKEN") {
            config.api_token = token;
        } else if let Ok(token) = std::env::var("MAIMEMO_API_TOKEN") {
            config.api_token = token;
        }

        if let Ok(title) = std::env::var("NOTEPAD_COLLECTOR_TITLE") {
            config.word_list_title = title;
        }

        if let Ok(check) = std::env::var("NOTEPAD_COLLECTOR_WORD_CHECK") {
            match check.parse() {
                Ok(check) => config.enable_word_check = check,
                Err(e) => tracing::warn!("Ignoring NOTEPAD_COLLECTOR_WORD_CHECK: {}", e),
            }
        }

        if let Ok(base_url) = std::env::var("NOTEPAD_COLLECTOR_BASE_URL") {
            config.base_url = base_url;
        }

        config
    }

    /// Merge with another config (other takes priority for non-default values)
    pub fn merge_with(&self, other: &Self) -> Self {
        Self {
            api_token: if !other.api_token.is_empty() {
                other.api_token.clone()
            } else {
                self.api_token.clone()
            },
            word_list_title: if !other.word_list_title.is_empty() {
                other.word_list_title.clone()
            } else {
                self.word_list_title.clone()
            },
            enable_word_check: if other.enable_word_check != WordCheck::default() {
                other.enable_word_check
            } else {
                self.enable_word_check
            },
            base_url: if other.base_url != default_base_url() {
                other.base_url.clone()
            } else {
                self.base_url.clone()
            },
            timeout_secs: if other.timeout_secs != default_timeout_secs() {
                other.timeout_secs
            } else {
                self.timeout_secs
            },
        }
    }

    /// Override api_token
    pub fn with_api_token(mut self, token: &str) -> Self {
        self.api_token = token.to_string();
        self
    }

    /// Override word_list_title
    pub fn with_word_list_title(mut self, title: &str) -> Self {
        self.word_list_title = title.to_string();
        self
    }

    /// Override enable_word_check
    pub fn with_word_check(mut self, check: WordCheck) -> Self {
        self.enable_word_check = check;
        self
    }

    /// Override base_url
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    /// Override timeout_secs
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Check the required fields and the token format
    pub fn validate(&self) -> std::result::Result<(), CollectError> {
        if self.api_token.is_empty() || self.word_list_title.is_empty() {
            return Err(CollectError::MissingCredentials);
        }

        if !is_valid_token(&self.api_token) {
            return Err(CollectError::InvalidToken);
        }

        Ok(())
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| anyhow!("Failed to serialize config: {}", e))
    }

    // Getters
    pub fn api_token(&self) -> &str {
        &self.api_token
    }

    pub fn word_list_title(&self) -> &str {
        &self.word_list_title
    }

    pub fn enable_word_check(&self) -> WordCheck {
        self.enable_word_check
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// True if `token` is 64 hex characters, in any case
pub fn is_valid_token(token: &str) -> bool {
    TOKEN_PATTERN.is_match(token)
}
