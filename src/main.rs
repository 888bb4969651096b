//! Plant Scout - identify plants from photos via the Plant.id API.
//!
//! Given a captured photo, this tool calls the Plant.id v3 identification
//! endpoint, normalizes the heterogeneous response shapes into a ranked
//! candidate list, and prints the result with derived care/edibility/bloom
//! badges. An offline sample mode works without an API key.

pub mod cli;
pub mod config;
pub mod error;
pub mod identification;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(EnvFilter::from_default_env().add_directive("plant_scout=info".parse()?))
        .init();

    cli::run_command(&args)
}
