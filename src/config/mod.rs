//! Configuration for monitoring runs
//!
//! Settings are layered, later sources winning:
//! defaults → YAML file → environment → command-line flags.

pub mod cli;
mod monitor;

pub use monitor::{env_lookup, MonitorConfig, ENV_VARS};
