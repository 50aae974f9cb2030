pub mod catalog;
pub mod common;
pub mod history;
pub mod inventory;
pub mod mutation;
pub mod result;
pub mod system;
pub mod tui;

pub use catalog::{BinEntryViewModel, BinListViewModel, ProductEntryViewModel, ProductListViewModel};
pub use common::{Guidance, StatusBadge, StatusLevel, ViewMode};
pub use history::{HistoryEntryViewModel, HistoryListViewModel, HistoryStatsViewModel};
pub use inventory::{InventoryBody, InventoryViewModel, RecordRowViewModel, TotalsViewModel};
pub use mutation::{DeleteConfirmationViewModel, MutationKind, MutationViewModel};
pub use result::CommandResultViewModel;
pub use system::{ConfigInitViewModel, ConfigViewModel, HealthViewModel, LogoutViewModel};
pub use tui::{
    FieldFocus, FormFieldViewModel, ModalViewModel, NoticeViewModel, ScreenViewModel,
    SuggestionItemViewModel, SuggestionListViewModel,
};

use std::fmt;

/// Bridge from a ViewModel to the view that displays it.
pub trait CreateView {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a>;
}
