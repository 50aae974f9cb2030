// NOTE: bintrack Architecture Rationale
//
// Why a thin client (no local database)?
// - The inventory server owns the data and the audit trail
// - Every mutation is followed by a full reload, so the local snapshot is
//   never patched by hand and can't drift from the server
// - Trade-off: one extra request per write, acceptable at warehouse scale
//
// Why one session type for every front end?
// - `list`, `add`, `adjust` and the `browse` TUI all drive the same
//   `InventorySession`, so validation, notices and redirects behave the same
//   whether a command runs once or inside the event loop
//
// Why ViewModels between session and output?
// - The same inventory renders as aligned text, escaped HTML, JSON, or
//   ratatui widgets; presenters decide *what* is shown, views decide *how*

mod args;
mod commands;
mod handlers;
mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands, ConfigCommand, HistoryCommand};
pub use commands::run;
