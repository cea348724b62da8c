//! Handler functions for config CLI commands.
//!
//! Implements the `path`, `get`, and `init` subcommands against
//! [`TextshiftConfig`].

use std::path::PathBuf;

use textshift_core::{Error, Result};

use crate::cli::ConfigAction;
use crate::config::{CONFIG_KEYS, PROJECT_NAME, TextshiftConfig};

// ============================================================================
// Command dispatch
// ============================================================================

/// Handle a config subcommand.
pub fn handle_config_command(config_path: Option<&str>, action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Path => cmd_config_path(config_path),
        ConfigAction::Get { key } => cmd_config_get(config_path, &key),
        ConfigAction::Init { file, force } => cmd_config_init(file.as_deref(), force),
    }
}

// ============================================================================
// Command handlers
// ============================================================================

/// Show the resolved config file path.
pub fn cmd_config_path(config_path: Option<&str>) -> Result<()> {
    match TextshiftConfig::resolve_config_path(config_path) {
        Some(path) => {
            println!("{}", path.display());
            if !path.exists() {
                eprintln!("(file does not exist; run `{PROJECT_NAME} config init` to create it)");
            }
            Ok(())
        }
        None => Err(Error::config(
            "Could not determine config directory for this platform",
        )),
    }
}

/// Print a configuration value by key.
pub fn cmd_config_get(config_path: Option<&str>, key: &str) -> Result<()> {
    let config = TextshiftConfig::load(config_path)?;
    println!("{}", config_value(&config, key)?);
    Ok(())
}

/// Create a default configuration file.
pub fn cmd_config_init(file: Option<&str>, force: bool) -> Result<()> {
    let path = match file {
        Some(p) => PathBuf::from(p),
        None => TextshiftConfig::default_config_path()
            .ok_or_else(|| Error::config("Could not determine config directory"))?,
    };

    if path.exists() && !force {
        return Err(Error::config(format!(
            "Config file already exists at {}. Use --force to overwrite.",
            path.display()
        )));
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| Error::io_with_path(e, parent))?;
    }

    let toml_str = TextshiftConfig::default().to_toml_string()?;
    std::fs::write(&path, &toml_str).map_err(|e| Error::io_with_path(e, &path))?;

    tracing::info!("Wrote default config to {}", path.display());
    println!("Config file created at {}", path.display());
    Ok(())
}

/// Format the value of one config key for display.
pub fn config_value(config: &TextshiftConfig, key: &str) -> Result<String> {
    match key {
        "default_mode" => Ok(config.default_mode.to_string()),
        "log_level" => Ok(config.log_level.clone()),
        "trailing_newline" => Ok(config.trailing_newline.to_string()),
        _ => Err(Error::config(format!(
            "Key '{key}' not found in configuration (expected one of: {})",
            CONFIG_KEYS.join(", ")
        ))),
    }
}

// ============================================================================
// Tests
// ============================================================================
