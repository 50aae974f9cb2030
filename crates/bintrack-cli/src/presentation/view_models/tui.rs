//! ViewModels for the interactive browser.
//!
//! The browse handler rebuilds a [`ScreenViewModel`] after every event and
//! the TUI renderer draws it; nothing here is serialized.

use super::common::StatusLevel;
use super::inventory::InventoryViewModel;

#[derive(Debug, Clone)]
pub struct ScreenViewModel {
    pub server: String,
    pub search: String,
    pub search_focused: bool,
    pub inventory: InventoryViewModel,
    /// Index into `inventory.rows()`.
    pub selected: Option<usize>,
    pub busy: bool,
    pub notices: Vec<NoticeViewModel>,
    pub modal: Option<ModalViewModel>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NoticeViewModel {
    pub level: StatusLevel,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldFocus {
    Bin,
    Product,
    QtyPerCase,
    Cases,
    Delta,
    Notes,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormFieldViewModel {
    pub label: String,
    pub value: String,
    pub focused: bool,
    /// Set once a suggestion has been picked for an autocomplete field.
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SuggestionListViewModel {
    pub items: Vec<SuggestionItemViewModel>,
    pub highlighted: Option<usize>,
    /// Shown in place of items, e.g. "No products found".
    pub empty_message: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SuggestionItemViewModel {
    pub primary: String,
    pub secondary: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ModalViewModel {
    Record {
        title: String,
        fields: Vec<FormFieldViewModel>,
        suggestions: Option<SuggestionListViewModel>,
    },
    Adjust {
        label: String,
        current_cases: i64,
        fields: Vec<FormFieldViewModel>,
        projected_cases: Option<i64>,
        notes_len: usize,
        notes_limit: usize,
    },
    Delete {
        lines: Vec<String>,
    },
}
