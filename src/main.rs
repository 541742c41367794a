mod cli;
mod config;
mod error;
mod models;
mod prayer_times;
mod tui;
mod utils;

use anyhow::{Context, Result};
use clap::Parser;
use std::str::FromStr;
use std::sync::Arc;

use cli::args::{Cli, Commands};
use cli::handlers;
use config::AppConfig;
use models::Locale;
use prayer_times::FIXED_LOCATION;
use utils::clock::SystemClock;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let mut config = AppConfig::load().context("Loading config")?;

    if let Some(locale) = &cli.locale {
        config.display.locale = Locale::from_str(locale)?;
    }

    match cli.command {
        Some(Commands::Times { date, json }) => {
            handlers::handle_times(&config, date.as_deref(), json)?;
        }
        Some(Commands::Next { json }) => {
            handlers::handle_next(&config, json)?;
        }
        Some(Commands::Config { init }) => {
            handlers::handle_config(&config, init)?;
        }

        // No subcommand → launch TUI
        None => {
            let clock = Arc::new(SystemClock::new(FIXED_LOCATION.offset()?));
            tui::app::run(config, clock)?;
        }
    }

    Ok(())
}
