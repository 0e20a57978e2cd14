// ABOUTME: Tracing subscriber initialization and layer composition
// ABOUTME: Combines console, file, and JSON layers under one env filter

use anyhow::{Context, Result};
use tracing_subscriber::{prelude::*, util::SubscriberInitExt};

use crate::config::LoggingConfig;
use crate::layers::{
    BoxedLayer, create_console_layer, create_env_filter, create_file_layer, create_json_layer,
};

/// Build the output layers requested by `config`.
pub fn build_layers(config: &LoggingConfig) -> Result<Vec<BoxedLayer>> {
    let mut layers = Vec::new();
    if let Some(console) = create_console_layer(&config.output) {
        layers.push(console);
    }
    if config.output.file {
        layers.push(create_file_layer(&config.file)?);
    }
    if let Some(json) = create_json_layer(&config.output) {
        layers.push(json);
    }
    Ok(layers)
}

/// Initialize the global tracing subscriber with the given configuration.
///
/// Fails, without panicking, when a global subscriber is already installed.
pub fn init_subscriber(config: LoggingConfig) -> Result<()> {
    let env_filter = create_env_filter(&config).context("Failed to create environment filter")?;
    let layers = build_layers(&config)?;

    tracing_subscriber::registry()
        .with(layers)
        .with(env_filter)
        .try_init()
        .context("Global tracing subscriber already initialized")?;

    tracing::info!(
        log_level = %config.level.0,
        console_output = config.output.console,
        file_output = config.output.file,
        json_output = config.output.json,
        file_path = %config.file.path.display(),
        "Tokenlens logging initialized"
    );

    Ok(())
}
