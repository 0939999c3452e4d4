//! Logging utilities for CLI output

use std::io::Write;

use tracing_subscriber::EnvFilter;

/// Log level for CLI output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Suppress all output
    Quiet,
    /// Normal output level
    Normal,
    /// Verbose output with additional details
    Verbose,
}

impl LogLevel {
    /// Level selected by the `--quiet` / `--verbose` flags; quiet wins.
    pub fn from_flags(quiet: bool, verbose: bool) -> Self {
        if quiet {
            LogLevel::Quiet
        } else if verbose {
            LogLevel::Verbose
        } else {
            LogLevel::Normal
        }
    }

    /// Default `tracing` filter directive for this level
    pub fn filter_directive(self) -> &'static str {
        match self {
            LogLevel::Quiet => "error",
            LogLevel::Normal => "info",
            LogLevel::Verbose => "debug",
        }
    }

    /// Whether a message needing `required` is shown at this level
    pub fn permits(self, required: LogLevel) -> bool {
        self != LogLevel::Quiet && (self == required || required == LogLevel::Normal)
    }
}

/// Log a message to `out` if the current level permits it
///
/// Write errors are ignored.
pub fn log_to<W: Write>(out: &mut W, level: LogLevel, required: LogLevel, msg: &str) {
    if level.permits(required) {
        let _ = writeln!(out, "{msg}");
    }
}

/// Install a stderr `tracing` subscriber filtered by `level`; `RUST_LOG` overrides it.
///
/// Does nothing if a global subscriber is already set.
pub fn init_tracing(level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.filter_directive()));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_from_flags() {
        assert_eq!(LogLevel::from_flags(false, false), LogLevel::Normal);
        assert_eq!(LogLevel::from_flags(false, true), LogLevel::Verbose);
        assert_eq!(LogLevel::from_flags(true, true), LogLevel::Quiet);
    }

    #[test]
    fn test_level_permits() {
        assert!(!LogLevel::Quiet.permits(LogLevel::Normal));
        assert!(!LogLevel::Quiet.permits(LogLevel::Quiet));
        assert!(LogLevel::Normal.permits(LogLevel::Normal));
        assert!(!LogLevel::Normal.permits(LogLevel::Verbose));
        assert!(LogLevel::Verbose.permits(LogLevel::Verbose));
        assert!(LogLevel::Verbose.permits(LogLevel::Normal));
    }

    #[test]
    fn test_log_to_respects_quiet() {
        let mut quiet = Vec::new();
        log_to(&mut quiet, LogLevel::Quiet, LogLevel::Normal, "hidden");
        assert!(quiet.is_empty());

        let mut normal = Vec::new();
        log_to(&mut normal, LogLevel::Normal, LogLevel::Normal, "shown");
        log_to(&mut normal, LogLevel::Normal, LogLevel::Verbose, "detail");
        assert_eq!(String::from_utf8(normal).unwrap(), "shown\n");
    }

    #[test]
    fn test_filter_directive() {
        assert_eq!(LogLevel::Quiet.filter_directive(), "error");
        assert_eq!(LogLevel::Normal.filter_directive(), "info");
        assert_eq!(LogLevel::Verbose.filter_directive(), "debug");
    }

    #[test]
    fn test_init_tracing_twice_is_harmless() {
        init_tracing(LogLevel::Quiet);
        init_tracing(LogLevel::Verbose);
    }
}
