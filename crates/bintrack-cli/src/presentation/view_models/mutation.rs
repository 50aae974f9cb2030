use serde::Serialize;
use std::fmt;

use super::{CreateView, ViewMode};

// --------------------------------------------------------
// Data Definitions (ViewModels)
// --------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MutationKind {
    Create,
    Update,
    Adjust,
    Delete,
}

/// A write the server accepted, followed by the reload it triggered.
#[derive(Debug, Serialize)]
pub struct MutationViewModel {
    pub operation: MutationKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_id: Option<i64>,
    pub message: String,
    /// Size of the refreshed snapshot.
    pub record_count: usize,
}

/// Shown instead of deleting when the user has not confirmed.
#[derive(Debug, Serialize)]
pub struct DeleteConfirmationViewModel {
    pub record_id: i64,
    pub bin_location: String,
    pub product: String,
    pub cases: i64,
}

// --------------------------------------------------------
// CreateView Trait Implementations (Bridge to Views)
// --------------------------------------------------------

impl CreateView for MutationViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::mutation::MutationView;
        Box::new(MutationView::new(self, mode))
    }
}

impl CreateView for DeleteConfirmationViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::mutation::DeleteConfirmationView;
        Box::new(DeleteConfirmationView::new(self, mode))
    }
}
