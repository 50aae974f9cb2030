//! # Presentation Layer
//!
//! User interface logic for the CLI, built on an adaptation of
//! **MVVM (Model-View-ViewModel)**.
//!
//! ## Data Flow
//!
//! ### Console output (plain / html / json)
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(json)==> [ serde_json ] --> stdout
//!  (session)       (converter)        (data)          (driver)   ==(plain/html)==> [ View ] --> stdout
//! ```
//!
//! ### Interactive browser
//!
//! ```text
//! [ browse handler ] --> [ present_screen ] --> [ ScreenViewModel ] --> [ TuiRenderer ] --> widgets
//!        ^                                                                    |
//!        +------------------------- BrowseAction <--- map_key <---- key events
//! ```
//!
//! ## Rules
//!
//! 1. **ViewModels carry raw data.** `qty_per_case: Option<f64>`, never
//!    `"Not Set"`. JSON output is an API.
//! 2. **JSON ignores `ViewMode`.** It always dumps the full ViewModel.
//! 3. **Views own formatting.** Thousands separators, placeholders, escaping
//!    and alignment live in `views/` via `formatters/`.
//! 4. **The TUI renderer routes input, it does not act on it.** Keys become
//!    [`renderers::BrowseAction`]s; the handler applies them to the session.
//!
//! ## Where does code go?
//!
//! | If you need to... | Go to... |
//! |-------------------|----------|
//! | Add a field to the JSON output | **`view_models/`** |
//! | Compute totals or pick a badge | **`presenters/`** |
//! | Change a column header or card label | **`views/`** |
//! | Change a color in the browser | **`views/tui/`** |
//! | Bind a new key | **`renderers/tui.rs`** |
//! | Format a number or escape text | **`formatters/`** |

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer};
pub use view_models::{
    CommandResultViewModel, CreateView, Guidance, StatusBadge, StatusLevel, ViewMode,
};
