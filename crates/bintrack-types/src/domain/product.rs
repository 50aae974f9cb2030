use serde::{Deserialize, Serialize};

/// Product search hit. Never cached beyond the suggestion list that shows it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "ProductID", default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<i64>,

    #[serde(rename = "ProductUPC", default)]
    pub upc: Option<String>,

    #[serde(rename = "ProductDescription", default)]
    pub description: Option<String>,

    #[serde(rename = "UnitQty2", default)]
    pub unit_qty: Option<f64>,
}

impl Product {
    pub fn upc(&self) -> &str {
        self.upc.as_deref().unwrap_or_default()
    }

    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }

    /// Default units per case, `None` when unset or zero.
    pub fn qty_per_case(&self) -> Option<f64> {
        self.unit_qty.filter(|qty| *qty > 0.0)
    }
}
