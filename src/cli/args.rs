use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "mawaqit", version, author, about = "Prayer times with a live countdown to the next prayer")]
pub struct Cli {
    /// Display language (ar, en, fr). Overrides the config file.
    #[arg(long, global = true)]
    pub locale: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the day's prayer times and the countdown to the next prayer
    Times {
        /// Date to show (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show only the next prayer and time remaining
    Next {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the config file location and effective settings
    Config {
        /// Write the effective settings to the config file
        #[arg(long)]
        init: bool,
    },
}
