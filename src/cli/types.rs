//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::cli::commands::config::ConfigArgs;
use crate::cli::commands::sections::SectionsArgs;

#[derive(Parser)]
#[command(name = "house-admin")]
#[command(about = "House section administration", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Load configuration from this file instead of .house-admin/
    #[arg(short, long, global = true, env = "HOUSE_ADMIN_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// House section commands
    Sections(SectionsArgs),

    /// Configuration commands
    Config(ConfigArgs),
}
