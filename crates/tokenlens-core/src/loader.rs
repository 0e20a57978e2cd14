// ABOUTME: Reads a token config file from disk and normalizes it
// ABOUTME: Logs counts on success so reloads are visible in the log file

use std::fs;
use std::path::Path;

use tokenlens_logging::{debug, info};
use tokenlens_types::ThemeFilter;

use crate::error::{ConfigError, Result};
use crate::normalize::{TokenConfig, normalize_str};

/// Load and normalize the config at `path`.
pub fn load_token_config(
    path: &Path,
    default_theme: &str,
    filter: &ThemeFilter,
) -> Result<TokenConfig> {
    let source =
        fs::read_to_string(path).map_err(|err| ConfigError::io(path.to_path_buf(), err))?;
    let config = normalize_str(&source, default_theme, filter)?;

    info!(
        path = %path.display(),
        tokens = config.token_count(),
        theme_colors = config.theme_colors().len(),
        shorthands = config.shorthands().len(),
        "Parsed token config"
    );
    debug!(config = ?config, "Normalized token config");

    Ok(config)
}
