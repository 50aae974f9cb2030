use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::bin::BinId;

/// Stable unique key of an inventory line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(i64);

impl RecordId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for RecordId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl FromStr for RecordId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// One inventory line: a product stocked at a bin location.
///
/// Field names follow the server's JSON contract. Text fields arrive as
/// `null` when the joined bin or product row is missing, so they stay
/// optional here and the accessors below decide how absence reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,

    #[serde(rename = "BinLocation", default)]
    pub bin_location: Option<String>,

    #[serde(rename = "BinLocationID", default)]
    pub bin_location_id: Option<BinId>,

    #[serde(rename = "ProductUPC", default)]
    pub product_upc: Option<String>,

    #[serde(rename = "ProductDescription", default)]
    pub product_description: Option<String>,

    /// Units per case. The server reports `0` when the product has none set.
    #[serde(rename = "UnitQty2", default)]
    pub unit_qty: Option<f64>,

    #[serde(rename = "Qty_Cases", default)]
    pub qty_cases: Option<i64>,

    #[serde(rename = "LastUpdate", default, skip_serializing_if = "Option::is_none")]
    pub last_update: Option<String>,
}

impl Record {
    /// Bin location name, empty when the bin is missing.
    pub fn bin_location_name(&self) -> &str {
        self.bin_location.as_deref().unwrap_or_default()
    }

    /// Product description, empty when missing.
    pub fn description(&self) -> &str {
        self.product_description.as_deref().unwrap_or_default()
    }

    pub fn upc(&self) -> &str {
        self.product_upc.as_deref().unwrap_or_default()
    }

    /// Number of cases on hand (missing counts as zero).
    pub fn cases(&self) -> i64 {
        self.qty_cases.unwrap_or(0)
    }

    /// Units per case, `None` when unset. Zero is reported as unset: the
    /// server cannot tell the two apart.
    pub fn qty_per_case(&self) -> Option<f64> {
        self.unit_qty.filter(|qty| *qty > 0.0)
    }

    /// Total units, only defined when `qty_per_case` is set.
    ///
    /// The server also sends a `TotalQuantity` column, but it reports `0`
    /// for unknown case sizes, so the client always derives the value.
    pub fn total_quantity(&self) -> Option<f64> {
        self.qty_per_case().map(|per_case| per_case * self.cases() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(unit_qty: Option<f64>, cases: Option<i64>) -> Record {
        Record {
            id: RecordId::new(1),
            bin_location: Some("A-01".to_string()),
            bin_location_id: Some(BinId::new(7)),
            product_upc: Some("0001".to_string()),
            product_description: Some("Whole Milk".to_string()),
            unit_qty,
            qty_cases: cases,
            last_update: None,
        }
    }

    #[test]
    fn test_total_quantity_requires_qty_per_case() {
        assert_eq!(sample(Some(12.0), Some(3)).total_quantity(), Some(36.0));
        assert_eq!(sample(Some(0.0), Some(3)).total_quantity(), None);
        assert_eq!(sample(None, Some(3)).total_quantity(), None);
    }

    #[test]
    fn test_missing_cases_count_as_zero() {
        let record = sample(Some(6.0), None);
        assert_eq!(record.cases(), 0);
        assert_eq!(record.total_quantity(), Some(0.0));
    }

    #[test]
    fn test_deserialize_server_row_with_nulls() {
        let json = r#"{
            "id": 42,
            "BinLocation": null,
            "BinLocationID": 3,
            "ProductUPC": "0123",
            "ProductDescription": null,
            "UnitQty2": 0,
            "Qty_Cases": 5,
            "TotalQuantity": 0,
            "LastUpdate": "Tue, 14 Jan 2025 09:30:00 GMT"
        }"#;

        let record: Record = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, RecordId::new(42));
        assert_eq!(record.bin_location_name(), "");
        assert_eq!(record.description(), "");
        assert_eq!(record.qty_per_case(), None);
        assert_eq!(record.cases(), 5);
    }
}
