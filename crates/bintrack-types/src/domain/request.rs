use serde::{Deserialize, Serialize};

use super::bin::BinId;

/// Body of the create and update record requests
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordDraft {
    pub bin_location_id: BinId,
    pub product_upc: String,
    pub product_description: String,
    pub qty_per_case: Option<f64>,
    pub qty_cases: i64,
}

/// Body of the quantity adjustment request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Adjustment {
    /// Signed change in case count. Never zero once validated.
    pub adjustment: i64,
    pub notes: Option<String>,
}
