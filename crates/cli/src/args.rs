//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use stockroom_inventory::{DEFAULT_INVENTORY_FILE, DEFAULT_LOW_STOCK_THRESHOLD};
use stockroom_observability::{LogConfig, LogFormat};

#[derive(Debug, Parser)]
#[command(name = "stockroom")]
#[command(version)]
#[command(about = "Track item quantities in a JSON inventory file")]
#[command(long_about = r#"
Track item quantities in a JSON inventory file.

Without a subcommand, runs the demo sequence: add apple 10, add banana 15,
remove apple 3, show the apple stock and low items, save, reload, report.

Example usage:
  stockroom add apple 10
  stockroom remove apple 3
  stockroom low --threshold 8
"#)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to the inventory file
    #[arg(short, long, global = true, env = "STOCKROOM_FILE", default_value = DEFAULT_INVENTORY_FILE)]
    pub file: PathBuf,

    /// Log output format (text or json)
    #[arg(long, global = true, env = "STOCKROOM_LOG_FORMAT", default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Run the fixed demo sequence (default)
    Demo,

    /// Add units of an item
    #[command(allow_negative_numbers = true)]
    Add { item: String, quantity: i64 },

    /// Remove units of an item
    #[command(allow_negative_numbers = true)]
    Remove { item: String, quantity: i64 },

    /// Show the quantity of one item
    Get { item: String },

    /// Print the inventory report
    Report,

    /// List items below a threshold
    #[command(allow_negative_numbers = true)]
    Low {
        #[arg(short, long, default_value_t = DEFAULT_LOW_STOCK_THRESHOLD)]
        threshold: i64,
    },
}

impl Cli {
    pub fn log_config(&self) -> LogConfig {
        LogConfig {
            format: self.log_format,
            ..LogConfig::default()
        }
        .verbose(self.verbose)
    }

    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Demo)
    }
}
