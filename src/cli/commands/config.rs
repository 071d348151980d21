//! Config CLI commands.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use crate::domain::models::Config;

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,
}

/// Execute a config subcommand.
pub fn execute(args: &ConfigArgs, config: &Config, json: bool) -> Result<()> {
    match args.command {
        ConfigCommands::Show => {
            let rendered = if json {
                serde_json::to_string_pretty(config).context("Failed to serialize config")?
            } else {
                serde_yaml::to_string(config).context("Failed to serialize config")?
            };
            println!("{}", rendered.trim_end());
        }
    }
    Ok(())
}
