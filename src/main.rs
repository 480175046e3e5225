//! Studyhall - learning platform CLI
//!
//! Main entry point for the Studyhall client application.

use anyhow::Result;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use studyhall::cli::{Cli, Commands};
use studyhall::commands;
use studyhall::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    init_tracing();

    // Parse command line arguments
    let cli = Cli::parse_args();

    // Load configuration
    let config_path = cli.config.as_deref().unwrap_or("config/config.yaml");
    let config = Config::load(config_path, &cli)?;

    // Validate configuration
    config.validate()?;

    // Execute command
    match cli.command {
        Commands::Chat {
            ref base_url,
            ref user_id,
        } => {
            tracing::info!("Starting interactive chat session");
            if let Some(base) = base_url {
                tracing::debug!("Using base URL override: {}", base);
            }
            if let Some(user) = user_id {
                tracing::debug!("Using user id override: {}", user);
            }

            commands::chat::run_chat(config).await?;
            Ok(())
        }
    }
}

/// Initialize tracing subscriber with environment filter
fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("studyhall=info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
