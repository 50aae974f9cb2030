use bintrack_types::OperationType;
use serde::Serialize;
use std::fmt;

use super::{CreateView, ViewMode};

// --------------------------------------------------------
// Data Definitions (ViewModels)
// --------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct HistoryListViewModel {
    pub limit: u32,
    pub entries: Vec<HistoryEntryViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HistoryEntryViewModel {
    pub history_id: i64,
    pub record_id: i64,
    pub operation: OperationType,
    /// Local time, or the raw server value when it can't be parsed.
    pub time: Option<String>,
    pub user: Option<String>,
    pub product: String,
    pub bin: String,
    pub change: String,
    pub notes: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HistoryStatsViewModel {
    pub total_operations: i64,
    pub creates: i64,
    pub updates: i64,
    pub adjustments: i64,
    pub deletes: i64,
    pub unique_users: i64,
    pub earliest: Option<String>,
    pub latest: Option<String>,
}

// --------------------------------------------------------
// CreateView Trait Implementations (Bridge to Views)
// --------------------------------------------------------

impl CreateView for HistoryListViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::history::HistoryListView;
        Box::new(HistoryListView::new(self, mode))
    }
}

impl CreateView for HistoryStatsViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::history::HistoryStatsView;
        Box::new(HistoryStatsView::new(self, mode))
    }
}
