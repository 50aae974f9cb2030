use serde::Serialize;
use std::fmt;

use super::{CreateView, ViewMode};

// --------------------------------------------------------
// Data Definitions (ViewModels)
// --------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct BinListViewModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    pub bins: Vec<BinEntryViewModel>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BinEntryViewModel {
    pub id: i64,
    pub name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ProductListViewModel {
    pub query: String,
    /// The query was below the minimum length, so no search ran.
    pub skipped: bool,
    pub products: Vec<ProductEntryViewModel>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductEntryViewModel {
    pub upc: String,
    pub description: Option<String>,
    pub qty_per_case: Option<f64>,
}

// --------------------------------------------------------
// CreateView Trait Implementations (Bridge to Views)
// --------------------------------------------------------

impl CreateView for BinListViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::catalog::BinListView;
        Box::new(BinListView::new(self, mode))
    }
}

impl CreateView for ProductListViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::catalog::ProductListView;
        Box::new(ProductListView::new(self, mode))
    }
}
