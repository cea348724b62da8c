//! Textshift CLI
//!
//! Command-line interface for the textshift conversion modes.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use textshift_cli::config_handlers::handle_config_command;
use textshift_cli::{Args, Command, TextshiftConfig, commands, logging};

fn main() -> Result<()> {
    let args = Args::parse();

    // Config subcommands must work even when the file does not parse
    let loaded = TextshiftConfig::load_with_source(args.config.as_deref());
    let configured_level = loaded.as_ref().ok().map(|(c, _)| c.log_level.as_str());
    logging::init(args.verbose, configured_level);

    match &loaded {
        Ok((_, source)) => tracing::debug!("{source}"),
        Err(e) => tracing::warn!("Config not loaded: {e}"),
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match args.command {
        Command::Config { action } => handle_config_command(args.config.as_deref(), action)?,
        Command::Modes { json } => commands::cmd_modes(&mut out, json)?,
        Command::Describe { mode } => commands::cmd_describe(&mut out, &mode)?,
        Command::Convert {
            mode,
            input,
            reverse,
        } => {
            let (config, _) = loaded?;
            commands::cmd_convert(
                &mut out,
                &mut std::io::stdin().lock(),
                mode.as_deref(),
                input.as_deref(),
                reverse,
                &config,
            )?;
        }
    }

    Ok(())
}
