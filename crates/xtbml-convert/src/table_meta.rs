//! Per-table `<MetaData>` blocks and their axis definitions.

use xtbml_model::{AxisDefinition, TableMeta};

use crate::classification::{classified_value, trimmed_text};
use crate::error::Result;
use crate::xml::{StartTag, Token, XmlCursor};

pub(crate) const TABLE: &str = "Table";
pub(crate) const METADATA: &str = "MetaData";

/// Table metadata in document order, one slot per `<Table>` seen so far.
///
/// Every table start appends a blank placeholder that a later `<MetaData>`
/// block overwrites, so slot `i` always belongs to table ordinal `i`.
#[derive(Debug, Default)]
pub(crate) struct TableMetaCollector {
    metas: Vec<TableMeta>,
}

impl TableMetaCollector {
    pub(crate) fn open_table(&mut self) {
        self.metas.push(TableMeta::default());
    }

    /// Store metadata for the current table. Dropped when no table is open.
    pub(crate) fn assign(&mut self, meta: TableMeta) {
        if let Some(slot) = self.metas.last_mut() {
            *slot = meta;
        }
    }

    pub(crate) fn finish(self) -> Vec<TableMeta> {
        self.metas
    }
}

/// Decode the children of a `<MetaData>` element whose start tag was just
/// read. Consumes through the element's end tag.
pub(crate) fn decode_table_meta(cursor: &mut XmlCursor<'_>) -> Result<TableMeta> {
    let mut meta = TableMeta::default();

    while let Some(child) = cursor.next_child()? {
        if child.is("ScalingFactor") {
            meta.scaling_factor = trimmed_text(cursor)?;
        } else if child.is("DataType") {
            meta.data_type = classified_value(cursor, &child)?;
        } else if child.is("Nation") {
            meta.nation = classified_value(cursor, &child)?;
        } else if child.is("TableDescription") {
            meta.table_description = trimmed_text(cursor)?;
        } else if child.is("AxisDef") {
            meta.axes.push(decode_axis(cursor, &child)?);
        } else {
            cursor.skip_element()?;
        }
    }

    Ok(meta)
}

fn decode_axis(cursor: &mut XmlCursor<'_>, start: &StartTag) -> Result<AxisDefinition> {
    let mut axis = AxisDefinition {
        id: start.attr("id").unwrap_or_default().trim().to_string(),
        ..AxisDefinition::default()
    };

    while let Some(child) = cursor.next_child()? {
        if child.is("ScaleType") {
            axis.scale_type = classified_value(cursor, &child)?;
        } else if child.is("AxisName") {
            axis.axis_name = trimmed_text(cursor)?;
        } else if child.is("MinScaleValue") {
            axis.min_value = trimmed_text(cursor)?;
        } else if child.is("MaxScaleValue") {
            axis.max_value = trimmed_text(cursor)?;
        } else if child.is("Increment") {
            axis.increment = trimmed_text(cursor)?;
        } else {
            cursor.skip_element()?;
        }
    }

    Ok(axis)
}

/// Extract the metadata of every `<Table>` in document order.
///
/// Tables without a `<MetaData>` block yield a blank [`TableMeta`]; only
/// decode errors fail.
pub fn parse_table_metas(input: &[u8]) -> Result<Vec<TableMeta>> {
    let mut cursor = XmlCursor::new(input);
    let mut collector = TableMetaCollector::default();

    while let Some(token) = cursor.next_token()? {
        let Token::Start(tag) = token else {
            continue;
        };
        if tag.is(TABLE) {
            collector.open_table();
        } else if tag.is(METADATA) {
            let meta = decode_table_meta(&mut cursor)?;
            collector.assign(meta);
        }
    }

    Ok(collector.finish())
}
