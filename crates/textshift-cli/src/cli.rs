//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::CONFIG_ENV_VAR;

/// Textshift - convert text between formats and cases
#[derive(Parser, Debug)]
#[command(name = "textshift")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long, global = true, env = CONFIG_ENV_VAR)]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the available conversion modes
    Modes {
        /// Print the mode table as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the descriptor of one conversion mode
    Describe {
        /// Mode key, e.g. `slugify`
        mode: String,
    },

    /// Convert text from stdin or a file and write it to stdout
    Convert {
        /// Mode key; defaults to `default_mode` from the config
        mode: Option<String>,

        /// Read input from this file instead of stdin
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Apply the inverse of a bidirectional mode
        #[arg(short, long)]
        reverse: bool,
    },

    /// Manage the configuration file
    Config {
        /// Config action to run
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// `config` subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the resolved config file path
    Path,

    /// Print a configuration value by key
    Get {
        /// Key, e.g. `default_mode`
        key: String,
    },

    /// Write a default configuration file
    Init {
        /// Where to write the file instead of the default location
        #[arg(long)]
        file: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_convert_with_flags() {
        let args = Args::parse_from([
            "textshift",
            "-v",
            "convert",
            "markdown-to-text",
            "--input",
            "notes.md",
            "--reverse",
        ]);
        assert!(args.verbose);
        match args.command {
            Command::Convert {
                mode,
                input,
                reverse,
            } => {
                assert_eq!(mode.as_deref(), Some("markdown-to-text"));
                assert_eq!(input, Some(PathBuf::from("notes.md")));
                assert!(reverse);
            }
            other => unreachable!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_convert_without_mode() {
        let args = Args::parse_from(["textshift", "convert"]);
        assert!(matches!(
            args.command,
            Command::Convert {
                mode: None,
                input: None,
                reverse: false
            }
        ));
    }

    #[test]
    fn test_global_config_flag_after_subcommand() {
        let args = Args::parse_from(["textshift", "modes", "--json", "-c", "/tmp/t.toml"]);
        assert_eq!(args.config.as_deref(), Some("/tmp/t.toml"));
        assert!(matches!(args.command, Command::Modes { json: true }));
    }

    #[test]
    fn test_parse_config_init() {
        let args = Args::parse_from(["textshift", "config", "init", "--file", "x.toml", "--force"]);
        match args.command {
            Command::Config {
                action: ConfigAction::Init { file, force },
            } => {
                assert_eq!(file.as_deref(), Some("x.toml"));
                assert!(force);
            }
            other => unreachable!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_missing_subcommand_is_an_error() {
        assert!(Args::try_parse_from(["textshift"]).is_err());
    }
}
