//! Configuration management for Studyhall
//!
//! This module handles loading, parsing, validating, and managing
//! configuration from files, environment variables, and CLI overrides.

use crate::error::{Result, StudyhallError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure for Studyhall
///
/// This structure holds all configuration needed by the client,
/// including backend endpoints and interactive chat settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Backend service configuration
    #[serde(default)]
    pub backend: BackendConfig,

    /// Interactive chat settings
    #[serde(default)]
    pub chat: ChatSettings,
}

/// Backend service configuration
///
/// Specifies where the chat and document-conversion endpoints live and how
/// requests identify the current user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL for the learning platform backend
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// HTTP client timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// Optional user identifier forwarded with every chat dispatch
    ///
    /// The field is omitted from request bodies when unset; the endpoints
    /// accept anonymous sessions.
    #[serde(default)]
    pub user_id: Option<String>,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout_seconds(),
            user_id: None,
        }
    }
}

/// Interactive chat settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatSettings {
    /// Maximum characters of an ingested transcript echoed to the terminal
    ///
    /// Transcripts can run to many pages; the full text still lands in the
    /// conversation log and the context store.
    #[serde(default = "default_transcript_preview_chars")]
    pub transcript_preview_chars: usize,
}

fn default_transcript_preview_chars() -> usize {
    400
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            transcript_preview_chars: default_transcript_preview_chars(),
        }
    }
}

impl Config {
    /// Load configuration from file with environment and CLI overrides
    ///
    /// # Arguments
    ///
    /// * `path` - Path to configuration file
    /// * `cli` - CLI arguments for overrides
    ///
    /// # Returns
    ///
    /// Returns the loaded and merged configuration
    ///
    /// # Errors
    ///
    /// Returns error if file cannot be read or parsed
    pub fn load(path: &str, cli: &crate::cli::Cli) -> Result<Self> {
        let mut config = if Path::new(path).exists() {
            Self::from_file(path)?
        } else {
            tracing::warn!("Config file not found at {}, using defaults", path);
            Self::default()
        };

        config.apply_env_vars();
        config.apply_cli_overrides(cli);

        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| StudyhallError::Config(format!("Failed to read config file: {}", e)))?;
        serde_yaml::from_str(&contents)
            .map_err(|e| StudyhallError::Config(format!("Failed to parse config: {}", e)).into())
    }

    fn apply_env_vars(&mut self) {
        if let Ok(base_url) = std::env::var("STUDYHALL_BASE_URL") {
            self.backend.base_url = base_url;
        }

        if let Ok(timeout) = std::env::var("STUDYHALL_TIMEOUT_SECONDS") {
            if let Ok(value) = timeout.parse() {
                self.backend.timeout_seconds = value;
            } else {
                tracing::warn!("Invalid STUDYHALL_TIMEOUT_SECONDS: {}", timeout);
            }
        }

        if let Ok(user_id) = std::env::var("STUDYHALL_USER_ID") {
            self.backend.user_id = Some(user_id);
        }
    }

    fn apply_cli_overrides(&mut self, cli: &crate::cli::Cli) {
        let crate::cli::Commands::Chat { base_url, user_id } = &cli.command;

        if let Some(base_url) = base_url {
            self.backend.base_url = base_url.clone();
        }

        if let Some(user_id) = user_id {
            self.backend.user_id = Some(user_id.clone());
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns error if any validation check fails
    pub fn validate(&self) -> Result<()> {
        if self.backend.base_url.is_empty() {
            return Err(StudyhallError::Config("base_url cannot be empty".to_string()).into());
        }

        let parsed = url::Url::parse(&self.backend.base_url)
            .map_err(|e| StudyhallError::Config(format!("Invalid base_url: {}", e)))?;

        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(StudyhallError::Config(format!(
                "base_url must use http or https, got: {}",
                parsed.scheme()
            ))
            .into());
        }

        if self.backend.timeout_seconds == 0 {
            return Err(
                StudyhallError::Config("timeout_seconds must be greater than 0".to_string()).into(),
            );
        }

        if self.backend.timeout_seconds > 600 {
            return Err(StudyhallError::Config(
                "timeout_seconds must be less than or equal to 600".to_string(),
            )
            .into());
        }

        if self.chat.transcript_preview_chars == 0 {
            return Err(StudyhallError::Config(
                "chat.transcript_preview_chars must be greater than 0".to_string(),
            )
            .into());
        }

        Ok(())
    }
}
