use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Presentation mode of the inventory region
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewKind {
    #[default]
    Table,
    Card,
}

impl ViewKind {
    pub fn toggled(self) -> Self {
        match self {
            ViewKind::Table => ViewKind::Card,
            ViewKind::Card => ViewKind::Table,
        }
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewKind::Table => write!(f, "table"),
            ViewKind::Card => write!(f, "card"),
        }
    }
}

impl FromStr for ViewKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" => Ok(ViewKind::Table),
            "card" | "cards" => Ok(ViewKind::Card),
            other => Err(Error::InvalidValue {
                kind: "view",
                value: other.to_string(),
            }),
        }
    }
}
