//! CLI command definitions and dispatch.
//!
//! Each subcommand is implemented in its own submodule:
//! - `identify`: Photo identification and result display
//! - `configure`: Config file inspection and updates

mod configure;
mod identify;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tokio::runtime::Runtime;

pub use configure::{cmd_check, cmd_configure};
pub use identify::cmd_identify;

/// Plant Scout CLI
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Identify the plant in a photo
    Identify {
        /// Path to the photo
        photo: PathBuf,
        /// Plant.id API key (or set PLANT_ID_API_KEY env var)
        #[arg(short, long, env = "PLANT_ID_API_KEY")]
        api_key: Option<String>,
        /// Language for species details (ISO 639-1 code)
        #[arg(short, long)]
        language: Option<String>,
        /// Use the offline sample data instead of the live API
        #[arg(long)]
        offline: bool,
        /// After identifying, promote the candidate with this label
        #[arg(long, value_name = "LABEL")]
        promote: Option<String>,
        /// Print the result set as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },
    /// Check API key and config file status
    Check,
    /// Update and save configuration
    Configure {
        /// Plant.id API key to store
        #[arg(long)]
        api_key: Option<String>,
        /// Language for species details
        #[arg(long)]
        language: Option<String>,
        /// Default to the offline sample source
        #[arg(long)]
        offline: Option<bool>,
    },
}

/// Dispatch the parsed command
pub fn run_command(cli: &Cli) -> anyhow::Result<()> {
    let rt = Runtime::new()?;

    match &cli.command {
        Commands::Identify {
            photo,
            api_key,
            language,
            offline,
            promote,
            json,
        } => cmd_identify(
            &rt,
            photo,
            api_key.as_deref(),
            language.as_deref(),
            *offline,
            promote.as_deref(),
            *json,
        ),
        Commands::Check => cmd_check(),
        Commands::Configure {
            api_key,
            language,
            offline,
        } => cmd_configure(api_key.as_deref(), language.as_deref(), *offline),
    }
}
