//! Handlers for the `modes`, `describe`, and `convert` subcommands.
//!
//! Handlers write to any [`Write`] so they can be exercised without a
//! terminal; `main` passes stdout.

use std::io::{Read, Write};
use std::path::Path;

use textshift_content::{ConversionMode, ConversionModes, conversion_modes};
use textshift_core::{Error, Result};

use crate::config::TextshiftConfig;

const STDIN: &str = "<stdin>";
const STDOUT: &str = "<stdout>";

/// Width of the key column in the `modes` listing.
const KEY_WIDTH: usize = 18;

/// List every mode in declaration order, or the whole table as JSON.
pub fn cmd_modes(out: &mut impl Write, json: bool) -> Result<()> {
    if json {
        let text = serde_json::to_string_pretty(&ConversionModes)
            .map_err(|e| Error::parse(e.to_string()))?;
        return writeln!(out, "{text}").map_err(|e| Error::io_with_path(e, STDOUT));
    }

    for (key, descriptor) in conversion_modes() {
        let marker = if descriptor.bidirectional {
            " (bidirectional)"
        } else {
            ""
        };
        writeln!(out, "{key:<KEY_WIDTH$}{}{marker}", descriptor.label)
            .map_err(|e| Error::io_with_path(e, STDOUT))?;
    }
    Ok(())
}

/// Print the descriptor for one mode.
pub fn cmd_describe(out: &mut impl Write, key: &str) -> Result<()> {
    let mode: ConversionMode = key.parse()?;
    let d = mode.descriptor();

    let inverse = match mode.inverse() {
        Some(inverse) => format!("yes (reverse: {inverse})"),
        None => "no".to_string(),
    };

    writeln!(
        out,
        "{} ({mode})\n{}\n\nInput:  {}: {}\nOutput: {}: {}\nBidirectional: {inverse}",
        d.label,
        d.description,
        d.input_label,
        d.input_placeholder,
        d.output_label,
        d.output_placeholder,
    )
    .map_err(|e| Error::io_with_path(e, STDOUT))
}

/// Pick the mode for `convert`: the named one or the configured default,
/// flipped when `reverse` is set.
pub fn resolve_mode(
    key: Option<&str>,
    reverse: bool,
    config: &TextshiftConfig,
) -> Result<ConversionMode> {
    let mode = match key {
        Some(key) => key.parse()?,
        None => config.default_mode,
    };
    if reverse { mode.try_inverse() } else { Ok(mode) }
}

/// Apply `mode` and honor the `trailing_newline` setting.
pub fn convert_text(mode: ConversionMode, input: &str, config: &TextshiftConfig) -> String {
    let mut output = mode.convert(input);
    if config.trailing_newline && !output.ends_with('\n') {
        output.push('\n');
    }
    output
}

/// Read the whole input from a file, or from `reader` when no file is given.
pub fn read_input(file: Option<&Path>, reader: &mut impl Read) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path)),
        None => {
            let mut buf = String::new();
            reader
                .read_to_string(&mut buf)
                .map_err(|e| Error::io_with_path(e, STDIN))?;
            Ok(buf)
        }
    }
}

/// Run `convert` end to end.
pub fn cmd_convert(
    out: &mut impl Write,
    stdin: &mut impl Read,
    key: Option<&str>,
    file: Option<&Path>,
    reverse: bool,
    config: &TextshiftConfig,
) -> Result<()> {
    let mode = resolve_mode(key, reverse, config)?;
    let input = read_input(file, stdin)?;
    tracing::debug!(mode = %mode, bytes = input.len(), "converting");

    let output = convert_text(mode, &input, config);
    out.write_all(output.as_bytes())
        .and_then(|()| out.flush())
        .map_err(|e| Error::io_with_path(e, STDOUT))
}

// ============================================================================
// Tests
// ============================================================================
