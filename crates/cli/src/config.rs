//! Command-line and environment configuration.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use stockroom_inventory::Theme;
use stockroom_observability::LogFormat;

#[derive(Debug, Parser)]
#[command(name = "stockroom")]
#[command(about = "Inventory entry with province/ward lookup", long_about = None)]
pub struct Cli {
    /// Directory holding provinces.json and wards.json
    #[arg(long, env = "STOCKROOM_DATA_DIR", default_value = "data", global = true)]
    pub data_dir: PathBuf,

    /// Log output format (json or pretty); logs go to stderr
    #[arg(long, env = "STOCKROOM_LOG_FORMAT", default_value = "json", global = true)]
    pub log_format: LogFormat,

    /// Initial theme (light or dark)
    #[arg(long, default_value = "light", global = true)]
    pub theme: Theme,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand, PartialEq, Eq)]
pub enum Command {
    /// Interactive session (default)
    Repl,

    /// Apply a JSON-lines file of commands, then print the product table
    Run {
        /// Path to the script (use '-' for stdin)
        script: String,

        /// Print the resulting products as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List all provinces
    Provinces,

    /// List the wards of one province
    Wards {
        /// Province code, e.g. 01
        province: String,
    },
}

impl Cli {
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Repl)
    }
}
