use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::{BinId, RecordId};
use crate::error::Error;

/// Kind of mutation recorded in the audit trail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OperationType {
    Create,
    Update,
    Adjust,
    Delete,
}

impl OperationType {
    pub fn as_str(self) -> &'static str {
        match self {
            OperationType::Create => "CREATE",
            OperationType::Update => "UPDATE",
            OperationType::Adjust => "ADJUST",
            OperationType::Delete => "DELETE",
        }
    }
}

impl fmt::Display for OperationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OperationType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "CREATE" => Ok(OperationType::Create),
            "UPDATE" => Ok(OperationType::Update),
            "ADJUST" => Ok(OperationType::Adjust),
            "DELETE" => Ok(OperationType::Delete),
            other => Err(Error::InvalidValue {
                kind: "operation type",
                value: other.to_string(),
            }),
        }
    }
}

/// One audit trail row. `previous_*` is empty for creates, `new_*` for deletes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    #[serde(rename = "HistoryID")]
    pub history_id: i64,
    #[serde(rename = "RecordID")]
    pub record_id: RecordId,
    #[serde(rename = "OperationType")]
    pub operation: OperationType,
    #[serde(rename = "Timestamp", default)]
    pub timestamp: Option<String>,
    #[serde(rename = "Username", default)]
    pub username: Option<String>,

    #[serde(rename = "PreviousProductUPC", default)]
    pub previous_upc: Option<String>,
    #[serde(rename = "PreviousProductDescription", default)]
    pub previous_description: Option<String>,
    #[serde(rename = "PreviousQty_Cases", default)]
    pub previous_cases: Option<i64>,
    #[serde(rename = "PreviousBinLocationID", default)]
    pub previous_bin_id: Option<BinId>,
    #[serde(rename = "PreviousBinLocation", default)]
    pub previous_bin: Option<String>,
    #[serde(rename = "PreviousUnitQty2", default)]
    pub previous_unit_qty: Option<f64>,

    #[serde(rename = "NewProductUPC", default)]
    pub new_upc: Option<String>,
    #[serde(rename = "NewProductDescription", default)]
    pub new_description: Option<String>,
    #[serde(rename = "NewQty_Cases", default)]
    pub new_cases: Option<i64>,
    #[serde(rename = "NewBinLocationID", default)]
    pub new_bin_id: Option<BinId>,
    #[serde(rename = "NewBinLocation", default)]
    pub new_bin: Option<String>,
    #[serde(rename = "NewUnitQty2", default)]
    pub new_unit_qty: Option<f64>,

    #[serde(rename = "AdjustmentAmount", default)]
    pub adjustment: Option<i64>,
    #[serde(rename = "Notes", default)]
    pub notes: Option<String>,
}

impl HistoryEntry {
    pub fn occurred_at(&self) -> Option<DateTime<FixedOffset>> {
        self.timestamp.as_deref().and_then(parse_server_timestamp)
    }

    /// Description of the product as it reads after the operation (or before, for deletes).
    pub fn product_label(&self) -> &str {
        self.new_description
            .as_deref()
            .or(self.previous_description.as_deref())
            .unwrap_or_default()
    }

    pub fn bin_label(&self) -> &str {
        self.new_bin
            .as_deref()
            .or(self.previous_bin.as_deref())
            .unwrap_or_default()
    }
}

/// Aggregate counts over the whole audit trail
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoryStats {
    #[serde(default)]
    pub total_operations: i64,
    #[serde(default)]
    pub creates: Option<i64>,
    #[serde(default)]
    pub updates: Option<i64>,
    #[serde(default)]
    pub adjustments: Option<i64>,
    #[serde(default)]
    pub deletes: Option<i64>,
    #[serde(default)]
    pub unique_users: i64,
    #[serde(default)]
    pub earliest_operation: Option<String>,
    #[serde(default)]
    pub latest_operation: Option<String>,
}

/// Query parameters accepted by the history endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_id: Option<RecordId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_type: Option<OperationType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    pub limit: u32,
}

impl Default for HistoryFilter {
    fn default() -> Self {
        Self {
            record_id: None,
            operation_type: None,
            username: None,
            start_date: None,
            end_date: None,
            limit: Self::DEFAULT_LIMIT,
        }
    }
}

impl HistoryFilter {
    pub const DEFAULT_LIMIT: u32 = 500;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(mut self, id: RecordId) -> Self {
        self.record_id = Some(id);
        self
    }

    pub fn operation(mut self, operation: OperationType) -> Self {
        self.operation_type = Some(operation);
        self
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn since(mut self, start: impl Into<String>) -> Self {
        self.start_date = Some(start.into());
        self
    }

    pub fn until(mut self, end: impl Into<String>) -> Self {
        self.end_date = Some(end.into());
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }
}

/// The server serializes datetimes as RFC 2822 (`Tue, 14 Jan 2025 09:30:00 GMT`);
/// ISO 8601 is accepted as well.
pub fn parse_server_timestamp(raw: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc2822(raw)
        .or_else(|_| DateTime::parse_from_rfc3339(raw))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rfc2822_timestamp() {
        let parsed = parse_server_timestamp("Tue, 14 Jan 2025 09:30:00 GMT").unwrap();
        assert_eq!(parsed.to_rfc3339(), "2025-01-14T09:30:00+00:00");
    }

    #[test]
    fn test_operation_type_round_trips_through_str() {
        assert_eq!("adjust".parse::<OperationType>().unwrap(), OperationType::Adjust);
        assert!("rename".parse::<OperationType>().is_err());
    }

    #[test]
    fn test_history_entry_labels_fall_back_to_previous_state() {
        let json = r#"{
            "HistoryID": 9,
            "RecordID": 4,
            "OperationType": "DELETE",
            "Timestamp": "Tue, 14 Jan 2025 09:30:00 GMT",
            "Username": "jdoe",
            "PreviousProductDescription": "Oat Milk",
            "PreviousBinLocation": "B-02",
            "NewProductDescription": null
        }"#;
        let entry: HistoryEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.operation, OperationType::Delete);
        assert_eq!(entry.product_label(), "Oat Milk");
        assert_eq!(entry.bin_label(), "B-02");
        assert!(entry.occurred_at().is_some());
    }
}
