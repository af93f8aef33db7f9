//! The normalized JSON shape written for each converted document.

use serde::{Deserialize, Serialize};

use crate::classification::Classification;
use crate::table::{RatePoint, TableMeta};

/// Root of the converted JSON payload.
///
/// Field order is part of the output contract: `identifier`, `version`,
/// `classification`, `tables`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertedDocument {
    pub identifier: String,
    pub version: String,
    pub classification: Option<Classification>,
    pub tables: Vec<TablePayload>,
}

impl ConvertedDocument {
    /// Table name from the classification, or an empty string.
    pub fn table_name(&self) -> &str {
        self.classification
            .as_ref()
            .map_or("", |class| class.table_name.as_str())
    }

    /// Total number of rate entries across all tables.
    pub fn rate_count(&self) -> usize {
        self.tables.iter().map(|table| table.rates.len()).sum()
    }
}

/// One entry per distinct table index seen in rate data or metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TablePayload {
    pub index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<TableMeta>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rates: Vec<RateEntry>,
}

impl TablePayload {
    /// True when any rate carries a duration (a select table).
    pub fn is_select(&self) -> bool {
        self.rates.iter().any(|rate| rate.duration.is_some())
    }
}

/// A rate point without its table index, as written under `tables[].rates`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateEntry {
    pub age: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
    #[serde(default)]
    pub rate: Option<f64>,
}

impl From<&RatePoint> for RateEntry {
    fn from(point: &RatePoint) -> Self {
        Self {
            age: point.age,
            duration: point.duration,
            rate: point.rate,
        }
    }
}
