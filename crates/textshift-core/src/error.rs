//! Error types for textshift.

use std::path::{Path, PathBuf};

/// Errors that can occur across the textshift crates.
///
/// The text transforms themselves are total and never produce an error;
/// these variants cover mode lookup by key, configuration, and file I/O
/// at the edges.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// No conversion mode is registered under this key.
    #[error("Conversion mode not found: {key}")]
    ModeNotFound {
        /// The key that was looked up
        key: String,
    },

    /// A reverse conversion was requested for a one-way mode.
    #[error("Conversion mode is not bidirectional: {key}")]
    NotBidirectional {
        /// The one-way mode's key
        key: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// I/O error tied to a specific path
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// Path being read or written
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// Parse error (TOML, JSON, etc.)
    #[error("Parse error: {message}")]
    Parse {
        /// What failed to parse
        message: String,
    },
}

/// Convenience `Result` type alias for textshift operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates a mode-not-found error.
    pub fn mode_not_found<S: Into<String>>(key: S) -> Self {
        Error::ModeNotFound { key: key.into() }
    }

    /// Creates a not-bidirectional error.
    pub fn not_bidirectional<S: Into<String>>(key: S) -> Self {
        Error::NotBidirectional { key: key.into() }
    }

    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Creates a new parse error.
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Error::Parse {
            message: message.into(),
        }
    }

    /// Wraps an I/O error with the path it occurred on.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Returns true for lookup misses on the conversion-mode table.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::ModeNotFound { .. })
    }
}
