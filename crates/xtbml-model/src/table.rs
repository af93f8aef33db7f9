use serde::{Deserialize, Serialize};

use crate::classification::ClassifiedValue;

/// One `<AxisDef>` entry declared in a table's metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AxisDefinition {
    pub id: String,
    pub scale_type: ClassifiedValue,
    pub axis_name: String,
    pub min_value: String,
    pub max_value: String,
    pub increment: String,
}

/// Metadata for a single `<Table>`.
///
/// Tables without a `<MetaData>` block keep the `Default` value so positions
/// stay aligned with the rate parser's table indices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TableMeta {
    pub scaling_factor: String,
    pub data_type: ClassifiedValue,
    pub nation: ClassifiedValue,
    pub table_description: String,
    pub axes: Vec<AxisDefinition>,
}

impl TableMeta {
    /// True for the placeholder of a table that declared no metadata.
    pub fn is_blank(&self) -> bool {
        *self == Self::default()
    }
}

/// A single numeric observation extracted from a `<Values>` block.
///
/// `duration` is set only for values nested two axis levels deep (select
/// tables). `rate` is `None` for blank cells.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatePoint {
    pub table: usize,
    pub age: i64,
    pub duration: Option<i64>,
    pub rate: Option<f64>,
}

impl RatePoint {
    pub fn is_select(&self) -> bool {
        self.duration.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_meta_is_blank() {
        assert!(TableMeta::default().is_blank());
        let meta = TableMeta {
            scaling_factor: "0".to_string(),
            ..TableMeta::default()
        };
        assert!(!meta.is_blank());
    }

    #[test]
    fn select_points_carry_duration() {
        let ultimate = RatePoint {
            table: 0,
            age: 40,
            duration: None,
            rate: Some(0.01),
        };
        let select = RatePoint {
            duration: Some(2),
            ..ultimate
        };
        assert!(!ultimate.is_select());
        assert!(select.is_select());
    }
}
