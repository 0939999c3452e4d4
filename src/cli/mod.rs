//! CLI module for churn-monitor
//!
//! This module contains all CLI command handlers and utilities.

mod commands;
mod logging;

pub use commands::{run_command, run_command_to};
pub use logging::{init_tracing, LogLevel};

// Re-export Cli from config for convenience
pub use crate::config::cli::Cli;
