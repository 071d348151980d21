//! house-admin CLI entry point.

use anyhow::Result;
use clap::Parser;

use house_admin::cli::{Cli, Commands};
use house_admin::domain::models::Config;
use house_admin::infrastructure::config::ConfigLoader;
use house_admin::infrastructure::logging::LoggerImpl;

fn load_config(cli: &Cli) -> Result<Config> {
    match cli.config {
        Some(ref path) => ConfigLoader::load_from_file(path),
        None => ConfigLoader::load(),
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(err) => house_admin::cli::handle_error(&err, cli.json),
    };

    let logger = match LoggerImpl::init(&config.logging) {
        Ok(logger) => logger,
        Err(err) => house_admin::cli::handle_error(&err, cli.json),
    };

    let result = match cli.command {
        Commands::Sections(args) => {
            house_admin::cli::commands::sections::execute(args, &config, cli.json).await
        }
        Commands::Config(ref args) => {
            house_admin::cli::commands::config::execute(args, &config, cli.json)
        }
    };

    if let Err(err) = result {
        // Flush buffered file output before exiting
        drop(logger);
        house_admin::cli::handle_error(&err, cli.json);
    }
}
