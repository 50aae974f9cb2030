use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Foreign key of a physical bin location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BinId(i64);

impl BinId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for BinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for BinId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl FromStr for BinId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// Catalog entry for a physical storage slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bin {
    #[serde(rename = "BinLocationID")]
    pub id: BinId,

    #[serde(rename = "BinLocation", default)]
    pub name: Option<String>,
}

impl Bin {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id: BinId::new(id),
            name: Some(name.into()),
        }
    }

    /// Bin name, empty when missing.
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }
}
