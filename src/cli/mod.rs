//! Command-line interface for plant-scout.
//!
//! This module provides CLI commands for identifying plant photos and
//! managing configuration.

mod commands;

pub use commands::{Cli, Commands, run_command};
