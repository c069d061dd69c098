//! # Configuration loader
//!
//! Reads the launch TOML into [`AppConfig`]. Pure data loading: empty values
//! and odd numbers are accepted as written; interpretation happens in wiring.

use anyhow::Context;
use qc_core::config::AppConfig;
use std::path::PathBuf;

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Fails when the file cannot be read or is not valid TOML.
pub fn load_config(config_path: PathBuf) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}
