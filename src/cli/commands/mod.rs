//! CLI command implementations

mod accuracy;
mod drift;
mod schema;


use std::io::Write;

use serde::Serialize;

use crate::cli::{init_tracing, LogLevel};
use crate::config::cli::{Cli, Command, OutputFormat};
use crate::config::{env_lookup, MonitorConfig};
use crate::error::{MonitorError, Result};

/// Execute a CLI command based on the parsed arguments
pub fn run_command(cli: Cli) -> Result<()> {
    run_command_to(cli, &mut std::io::stdout().lock())
}

/// Execute a CLI command, writing its output to `out`.
///
/// With `--format json|yaml` the document is the only thing written to `out`.
pub fn run_command_to<W: Write>(cli: Cli, out: &mut W) -> Result<()> {
    // Configure output based on verbose/quiet flags
    let log_level = LogLevel::from_flags(cli.quiet, cli.verbose);
    init_tracing(log_level);

    match cli.command {
        Command::Drift(args) => drift::run_drift(args, log_level, out),
        Command::Accuracy(args) => accuracy::run_accuracy(args, log_level, out),
        Command::Schema(args) => schema::run_schema(args, log_level, out),
    }
}

/// Defaults, `--config` file and environment; command flags are applied by the caller.
fn base_config(config_file: Option<&std::path::Path>) -> Result<MonitorConfig> {
    MonitorConfig::resolve(config_file, env_lookup)
}

/// Write `value` as JSON or YAML; text output is handled by each command.
fn print_structured<W: Write, T: Serialize>(
    out: &mut W,
    format: OutputFormat,
    value: &T,
) -> Result<()> {
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(value)
            .map_err(|e| MonitorError::Serialization { message: e.to_string() })?,
        OutputFormat::Yaml => serde_yaml::to_string(value)
            .map_err(|e| MonitorError::Serialization { message: e.to_string() })?,
        OutputFormat::Text => return Ok(()),
    };
    writeln!(out, "{}", rendered.trim_end())
        .and_then(|()| out.flush())
        .map_err(|e| MonitorError::io("Failed to write command output", e))
}
