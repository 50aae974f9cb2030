//! TUI View Components
//!
//! Ratatui widgets for the `browse` screen. Each component wraps a
//! reference to a ViewModel and only maps it onto widgets.

pub mod inventory;
pub mod modal;
pub mod status_bar;

pub use inventory::{CardGridView, InventoryTableView, SummaryView};
pub use modal::ModalView;
pub use status_bar::{NoticeView, SearchBarView, StatusBarView};

use crate::presentation::view_models::StatusLevel;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::Color;

pub(crate) fn status_level_to_color(level: StatusLevel) -> Color {
    match level {
        StatusLevel::Success => Color::Green,
        StatusLevel::Info => Color::Cyan,
        StatusLevel::Warning => Color::Yellow,
        StatusLevel::Error => Color::Red,
    }
}

/// Rect of `width` x `height` centered in `area`, clamped to fit.
pub(crate) fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    rect
}
