//! `triplan` - CLI for tripplanner
//!
//! This binary runs the interactive itinerary planner and the configuration
//! inspection commands.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::io;

use anyhow::Context;
use clap::Parser;

use tripplanner::cli::{Cli, Command, ConfigCommand};
use tripplanner::{init_logging, Config, DynArray, Shell};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration
    let config =
        Config::load_from(cli.config.clone()).context("failed to load configuration")?;

    // Execute the command; the interactive planner is the default
    match cli.command {
        Some(Command::Config(config_cmd)) => handle_config(&config, config_cmd),
        Some(Command::Plan) | None => run_planner(config),
    }
}

fn run_planner(config: Config) -> anyhow::Result<()> {
    let itinerary = DynArray::with_capacity(config.itinerary.initial_capacity);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(config, itinerary, stdin.lock(), stdout.lock());
    shell.run().context("planner session failed")
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Itinerary]");
                println!(
                    "  Initial capacity:   {}",
                    config.itinerary.initial_capacity
                );
                if config.itinerary.max_entries == 0 {
                    println!("  Max entries:        unlimited");
                } else {
                    println!("  Max entries:        {}", config.itinerary.max_entries);
                }
                println!();
                println!("[UI]");
                println!("  Clear screen:       {}", config.ui.clear_screen);
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}
