use crate::types::{OperationArg, ViewArg};
use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "List inventory records")]
    List {
        /// Case-insensitive substring matched against bin name and product description
        #[arg(long, short)]
        search: Option<String>,

        #[arg(long)]
        view: Option<ViewArg>,
    },

    #[command(about = "List bin locations")]
    Bins {
        #[arg(long, short)]
        search: Option<String>,
    },

    #[command(about = "Search the product catalog")]
    Products {
        /// At least two characters of a description or UPC
        query: String,
    },

    #[command(about = "Add a product to a bin location")]
    Add {
        #[arg(long)]
        bin_id: Option<i64>,

        #[arg(long)]
        upc: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        cases: Option<String>,

        #[arg(long)]
        qty_per_case: Option<String>,
    },

    #[command(about = "Edit a record; omitted fields keep their current value")]
    Update {
        id: i64,

        #[arg(long)]
        bin_id: Option<i64>,

        #[arg(long)]
        upc: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        cases: Option<String>,

        #[arg(long)]
        qty_per_case: Option<String>,
    },

    #[command(about = "Add or remove cases")]
    Adjust {
        id: i64,

        /// Signed case delta, e.g. 3 or -2
        #[arg(long, allow_negative_numbers = true)]
        by: Option<String>,

        #[arg(long)]
        notes: Option<String>,
    },

    #[command(about = "Delete a record")]
    Delete {
        id: i64,

        /// Skip the confirmation summary and delete
        #[arg(long, short)]
        yes: bool,
    },

    #[command(about = "Inspect the audit trail")]
    History {
        #[command(subcommand)]
        command: HistoryCommand,
    },

    #[command(about = "Check that the server is reachable")]
    Health,

    #[command(about = "End the server session and forget the stored cookie")]
    Logout,

    #[command(about = "Interactive inventory browser")]
    Browse {
        #[arg(long)]
        view: Option<ViewArg>,
    },

    #[command(about = "Manage the configuration file")]
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum HistoryCommand {
    #[command(about = "List audit entries, newest first")]
    List {
        #[arg(long)]
        record_id: Option<i64>,

        #[arg(long)]
        operation: Option<OperationArg>,

        #[arg(long)]
        user: Option<String>,

        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        since: Option<String>,

        /// End date (YYYY-MM-DD)
        #[arg(long)]
        until: Option<String>,

        #[arg(long, default_value = "500")]
        limit: u32,
    },

    #[command(about = "Operation counts")]
    Stats,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    #[command(about = "Write a config file with defaults")]
    Init {
        #[arg(long)]
        force: bool,
    },

    #[command(about = "Print the effective configuration")]
    Show,
}
