// NOTE: Command Organization Rationale
//
// Why mostly flat commands?
// - The inventory screen has one noun (records) and a handful of verbs, so
//   `add`, `adjust`, `delete` read better than `record add`
// - Read-only side areas with their own verbs (history, config) get a
//   namespace, mirroring the server's separate endpoints

mod commands;

pub use commands::*;

use crate::types::{LogLevel, OutputFormat};
use clap::Parser;

#[derive(Parser)]
#[command(name = "bintrack")]
#[command(about = "Track warehouse stock by bin location", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data directory holding config.toml (defaults to $BINTRACK_PATH, then the XDG data dir)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    /// Inventory server base URL (overrides config and $BINTRACK_SERVER)
    #[arg(long, global = true)]
    pub server: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    /// Log verbosity; RUST_LOG wins when set
    #[arg(long, global = true)]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
