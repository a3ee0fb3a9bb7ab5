//! CLI argument definitions for the dashboard server.
//!
//! Uses `clap` with derive macros. Priority resolution: CLI args > env vars >
//! config file > defaults.

use clap::Parser;
use std::path::PathBuf;

use wellbeing_core::WellbeingConfig;

/// Wellbeing dashboard server: views, form feedback and a scripted support chat.
#[derive(Parser, Debug, Default)]
#[command(name = "wellbeing", version, about)]
pub struct CliArgs {
    /// Path to the configuration file.
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Interface to bind.
    #[arg(long = "host")]
    pub host: Option<String>,

    /// HTTP port.
    #[arg(short = 'p', long = "port")]
    pub port: Option<u16>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short = 'l', long = "log-level")]
    pub log_level: Option<String>,
}

impl CliArgs {
    /// Resolve the configuration file path.
    ///
    /// Priority: --config flag > WELLBEING_CONFIG env var > ~/.wellbeing/config.toml.
    pub fn resolve_config_path(&self) -> PathBuf {
        if let Some(ref p) = self.config {
            return p.clone();
        }
        if let Ok(p) = std::env::var("WELLBEING_CONFIG") {
            return PathBuf::from(p);
        }
        default_config_path()
    }

    /// Resolve the listen port.
    ///
    /// Priority: --port flag > WELLBEING_PORT > PORT > config file value.
    pub fn resolve_port(&self, config_port: u16) -> u16 {
        if let Some(p) = self.port {
            return p;
        }
        for var in ["WELLBEING_PORT", "PORT"] {
            if let Some(p) = std::env::var(var).ok().and_then(|v| v.parse::<u16>().ok()) {
                return p;
            }
        }
        config_port
    }

    /// Resolve the bind host.
    ///
    /// Priority: --host flag > WELLBEING_HOST > config file value.
    pub fn resolve_host(&self, config_host: &str) -> String {
        if let Some(ref h) = self.host {
            return h.clone();
        }
        std::env::var("WELLBEING_HOST").unwrap_or_else(|_| config_host.to_string())
    }

    /// Resolve the log level. Priority: --log-level flag > config file value.
    pub fn resolve_log_level(&self, config_level: &str) -> String {
        self.log_level
            .clone()
            .unwrap_or_else(|| config_level.to_string())
    }

    /// Fold CLI and environment overrides into a loaded config.
    pub fn apply(&self, mut config: WellbeingConfig) -> WellbeingConfig {
        config.server.port = self.resolve_port(config.server.port);
        config.server.host = self.resolve_host(&config.server.host);
        config.general.log_level = self.resolve_log_level(&config.general.log_level);
        config
    }
}

/// Default config file path for the current platform.
fn default_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    if let Ok(home) = std::env::var("USERPROFILE") {
        return PathBuf::from(home).join(".wellbeing").join("config.toml");
    }
    #[cfg(not(target_os = "windows"))]
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".wellbeing").join("config.toml");
    }
    PathBuf::from("config.toml")
}
