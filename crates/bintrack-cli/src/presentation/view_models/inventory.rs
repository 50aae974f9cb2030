use bintrack_engine::AggregateSummary;
use bintrack_types::ViewKind;
use serde::Serialize;
use std::fmt;

use super::{CreateView, ViewMode};

// --------------------------------------------------------
// Data Definitions (ViewModels)
// --------------------------------------------------------

/// The inventory region: summary header plus table or card body.
#[derive(Debug, Clone, Serialize)]
pub struct InventoryViewModel {
    pub view: ViewKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Hidden together with the body when nothing matches.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<AggregateSummary>,
    pub body: InventoryBody,
    #[serde(skip)]
    pub separator: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum InventoryBody {
    Empty {
        message: String,
    },
    Table {
        rows: Vec<RecordRowViewModel>,
        totals: TotalsViewModel,
    },
    Cards {
        cards: Vec<RecordRowViewModel>,
    },
}

/// Raw values of one record. `None` text renders as "N/A", `None`
/// quantities as "Not Set" / "—".
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordRowViewModel {
    pub id: i64,
    pub bin_location: Option<String>,
    pub product: Option<String>,
    pub upc: Option<String>,
    pub cases: i64,
    pub qty_per_case: Option<f64>,
    pub total_quantity: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TotalsViewModel {
    pub total_cases: i64,
    pub total_items: f64,
}

impl InventoryViewModel {
    pub fn is_empty(&self) -> bool {
        matches!(self.body, InventoryBody::Empty { .. })
    }

    /// Rows in display order, whatever the body kind.
    pub fn rows(&self) -> &[RecordRowViewModel] {
        match &self.body {
            InventoryBody::Empty { .. } => &[],
            InventoryBody::Table { rows, .. } => rows,
            InventoryBody::Cards { cards } => cards,
        }
    }
}

// --------------------------------------------------------
// CreateView Trait Implementations (Bridge to Views)
// --------------------------------------------------------

impl CreateView for InventoryViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::inventory::{InventoryMarkupView, InventoryView};
        match mode {
            ViewMode::Text => Box::new(InventoryView::new(self)),
            ViewMode::Markup => Box::new(InventoryMarkupView::new(self)),
        }
    }
}
