mod adapters;
mod cli;
mod config;
mod core;

use std::path::Path;

use clap::Parser;

use cli::{Cli, Commands};
use config::app_config::AppConfig;

fn main() {
    let args = Cli::parse();

    let result = run(&args);

    if let Err(e) = result {
        cli::output::error(&format!("Error: {e}"));
        std::process::exit(1);
    }
}

fn run(args: &Cli) -> crate::core::errors::Result<()> {
    let config_path = args.config.as_deref().unwrap_or("callwatch.toml");
    let config = AppConfig::load(Path::new(config_path))?;

    // CLI flags win over config values
    let backend = args.backend.as_deref().unwrap_or(config.default_backend());
    let json = args.json || config.json_output();

    match &args.command {
        Commands::Run { calls } => {
            cli::commands::run::execute(calls, backend, json, args.verbose, args.quiet)
        }
        Commands::Demo => cli::commands::demo::execute(json, args.quiet),
    }
}
