//! Wellbeing dashboard binary - composition root.
//!
//! 1. Parse CLI arguments
//! 2. Load configuration from TOML and fold in CLI/env overrides
//! 3. Initialize tracing
//! 4. Serve the HTTP API until shutdown

mod cli;

use clap::Parser;

use wellbeing_api::state::AppState;
use wellbeing_core::WellbeingConfig;

use crate::cli::CliArgs;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    // Config is read before the subscriber exists, so load problems are
    // reported once tracing is up.
    let config_file = args.resolve_config_path();
    let loaded = WellbeingConfig::load(&config_file);
    let config_missing = loaded.as_ref().err().map(|e| e.to_string());
    let config = args.apply(loaded.unwrap_or_default());

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.general.log_level)),
        )
        .init();

    tracing::info!("Starting wellbeing v{}", env!("CARGO_PKG_VERSION"));
    match config_missing {
        None => tracing::info!(path = %config_file.display(), "Configuration loaded"),
        Some(e) => tracing::warn!(
            path = %config_file.display(),
            error = %e,
            "Failed to load config, using defaults"
        ),
    }
    tracing::info!(
        addr = %config.bind_addr(),
        max_sessions = config.sessions.max_sessions,
        "Server configured"
    );

    let state = AppState::new(config.clone());

    if let Err(e) = wellbeing_api::start_server(&config, state).await {
        tracing::error!(error = %e, "Server exited with error");
        return Err(e.into());
    }

    Ok(())
}
