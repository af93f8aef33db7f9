//! Normalization of a decoded [`Document`] into the JSON payload.

use std::collections::BTreeMap;

use xtbml_model::{ConvertedDocument, RateEntry, TableMeta, TablePayload};

use crate::document::Document;
use crate::error::Result;
use crate::identifier::normalize_identifier;

/// Group rate points by table index and attach each table's metadata.
///
/// Tables come out in ascending index order. A document with metadata but no
/// rate points gets one entry per metadata block instead.
pub fn build_payload(document: Document) -> ConvertedDocument {
    let Document {
        version,
        classification,
        table_metas,
        rates,
    } = document;

    let mut grouped: BTreeMap<usize, Vec<RateEntry>> = BTreeMap::new();
    for point in &rates {
        grouped.entry(point.table).or_default().push(RateEntry::from(point));
    }

    let tables = if grouped.is_empty() {
        table_metas
            .into_iter()
            .enumerate()
            .map(|(index, meta)| TablePayload {
                index,
                metadata: Some(meta),
                rates: Vec::new(),
            })
            .collect()
    } else {
        grouped
            .into_iter()
            .map(|(index, rates)| TablePayload {
                index,
                metadata: meta_for_index(&table_metas, index),
                rates,
            })
            .collect()
    };

    ConvertedDocument {
        identifier: normalize_identifier(&classification.table_name),
        version,
        classification: Some(classification),
        tables,
    }
}

fn meta_for_index(metas: &[TableMeta], index: usize) -> Option<TableMeta> {
    metas.get(index).cloned()
}

/// Serialize a payload as two-space indented JSON with a trailing newline.
pub fn to_json(payload: &ConvertedDocument) -> Result<Vec<u8>> {
    let mut out = serde_json::to_vec_pretty(payload)?;
    out.push(b'\n');
    Ok(out)
}
