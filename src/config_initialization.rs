//! Configuration initialization and precedence

use anyhow::{Context, Result};
use tracing::debug;

use crate::adapters::toml_config::PrepConfig;
use crate::cli::Cli;

/// Build the effective configuration: CLI/env > config file > defaults
pub fn initialize_configuration(cli: &Cli) -> Result<PrepConfig> {
    let mut config = match &cli.config {
        Some(path) => PrepConfig::load(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => PrepConfig::default(),
    };

    apply_cli_overrides(&mut config, cli);

    config.validate().context("Invalid configuration")?;
    debug!(?config, "Effective configuration");
    Ok(config)
}

/// Apply command-line (and environment) overrides on top of `config`
pub fn apply_cli_overrides(config: &mut PrepConfig, cli: &Cli) {
    if let Some(ffmpeg) = &cli.tools.ffmpeg {
        config.tools.ffmpeg = ffmpeg.clone();
    }
    if let Some(ffprobe) = &cli.tools.ffprobe {
        config.tools.ffprobe = ffprobe.clone();
    }
}
