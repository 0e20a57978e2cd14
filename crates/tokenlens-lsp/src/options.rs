// ABOUTME: Loads plugin options from tokenlens.toml in the project root
// ABOUTME: A missing file means defaults; an unreadable or invalid one is an error

use anyhow::Context;
use std::path::Path;

use tokenlens_logging::info;
use tokenlens_types::PluginOptions;

pub const OPTIONS_FILE_NAME: &str = "tokenlens.toml";

/// Load options from `dir/tokenlens.toml`, falling back to defaults when the
/// file does not exist.
pub fn load_options_from_dir(dir: &Path) -> anyhow::Result<PluginOptions> {
    let path = dir.join(OPTIONS_FILE_NAME);

    info!(
        options_path = %path.display(),
        options_exist = path.exists(),
        "Loading plugin options"
    );

    if !path.exists() {
        info!("No options file found, using defaults");
        return Ok(PluginOptions::default());
    }
    load_options(&path)
}

pub fn load_options(path: &Path) -> anyhow::Result<PluginOptions> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read options file: {}", path.display()))?;
    let options: PluginOptions = toml::from_str(&text)
        .with_context(|| format!("Failed to parse options file: {}", path.display()))?;

    info!(
        default_theme = %options.default_theme,
        color_tile_size = options.color_tile_size,
        config_file = %options.config_file.display(),
        "Loaded plugin options"
    );
    Ok(options)
}
