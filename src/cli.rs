//! Command-line interface definition for Studyhall
//!
//! This module defines the CLI structure using clap's derive API.

use clap::{Parser, Subcommand};

/// Studyhall - learning platform CLI
///
/// Hold a multi-turn conversation with the platform's chat service,
/// dictate questions through speech capture, and upload documents for
/// transcription into the session context.
#[derive(Parser, Debug, Clone)]
#[command(name = "studyhall")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/config.yaml")]
    pub config: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for Studyhall
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Start an interactive learning session
    Chat {
        /// Override the backend base URL from config
        #[arg(short, long)]
        base_url: Option<String>,

        /// Identifier forwarded to the backend with each dispatch
        #[arg(short, long)]
        user_id: Option<String>,
    },
}

impl Cli {
    /// Parse command line arguments
    ///
    /// # Returns
    ///
    /// Returns the parsed CLI structure
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            config: Some("config/config.yaml".to_string()),
            verbose: false,
            command: Commands::Chat {
                base_url: None,
                user_id: None,
            },
        }
    }
}
