//! TOML configuration for the `textshift` binary.
//!
//! The config file is optional. Its location is resolved in this order:
//!
//! 1. an explicit path (the `--config` flag)
//! 2. the `TEXTSHIFT_CONFIG` environment variable
//! 3. `<config dir>/textshift/config.toml`
//!
//! A file that does not exist yields [`TextshiftConfig::default`].

use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use textshift_content::ConversionMode;
use textshift_core::{Error, Result};

/// Project name, used for the config directory and in hints.
pub const PROJECT_NAME: &str = "textshift";

/// Environment variable naming the config file.
pub const CONFIG_ENV_VAR: &str = "TEXTSHIFT_CONFIG";

const CONFIG_FILE_NAME: &str = "config.toml";

/// Keys accepted in the config file.
pub const CONFIG_KEYS: [&str; 3] = ["default_mode", "log_level", "trailing_newline"];

/// Where a loaded config came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Read from this file.
    File(PathBuf),
    /// Defaults; no file exists at this path.
    Missing(PathBuf),
    /// Defaults; no location could be determined.
    Unresolved,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "loaded config from {}", path.display()),
            Self::Missing(path) => {
                write!(f, "no config file at {}, using defaults", path.display())
            }
            Self::Unresolved => write!(f, "no config location for this platform, using defaults"),
        }
    }
}

/// Settings read from the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TextshiftConfig {
    /// Mode used by `convert` when none is given.
    pub default_mode: ConversionMode,

    /// Log filter used when neither `RUST_LOG` nor `--verbose` is set.
    pub log_level: String,

    /// Append a newline to converted output.
    pub trailing_newline: bool,
}

impl Default for TextshiftConfig {
    fn default() -> Self {
        Self {
            default_mode: ConversionMode::MarkdownToText,
            log_level: "warn".to_string(),
            trailing_newline: true,
        }
    }
}

impl TextshiftConfig {
    /// Load the config, falling back to defaults when no file exists.
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        Self::load_with_source(config_path).map(|(config, _)| config)
    }

    /// Load the config and report where it came from.
    ///
    /// Loading logs nothing; callers log the returned [`ConfigSource`].
    pub fn load_with_source(config_path: Option<&str>) -> Result<(Self, ConfigSource)> {
        match Self::resolve_config_path(config_path) {
            Some(path) if path.exists() => {
                let config = Self::from_file(&path)?;
                Ok((config, ConfigSource::File(path)))
            }
            Some(path) => Ok((Self::default(), ConfigSource::Missing(path))),
            None => Ok((Self::default(), ConfigSource::Unresolved)),
        }
    }

    /// Read and parse a config file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        Self::from_toml_str(&content)
            .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))
    }

    /// Parse config from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::config(e.to_string()))
    }

    /// Serialize the config as pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// Resolve which config file applies, if any location can be determined.
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        resolve_from(explicit, std::env::var_os(CONFIG_ENV_VAR))
    }

    /// `<config dir>/textshift/config.toml` for this platform.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(PROJECT_NAME).join(CONFIG_FILE_NAME))
    }
}

fn resolve_from(explicit: Option<&str>, env_value: Option<OsString>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(PathBuf::from(path));
    }
    match env_value {
        Some(value) if !value.is_empty() => Some(PathBuf::from(value)),
        _ => TextshiftConfig::default_config_path(),
    }
}

// ============================================================================
// Tests
// ============================================================================
