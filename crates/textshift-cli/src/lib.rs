//! # textshift-cli
//!
//! Command-line front end for the textshift conversion modes.
//!
//! - `modes` / `describe`: browse the conversion-mode table
//! - `convert`: run a mode over stdin or a file
//! - `config`: locate, inspect, and create the TOML config file

#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_handlers;
pub mod logging;

pub use cli::{Args, Command, ConfigAction};
pub use config::{ConfigSource, TextshiftConfig};
