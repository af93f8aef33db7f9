//! Terminal tables for listing and inspecting converted rate tables.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use xtbml_ingest::TableSummary;
use xtbml_model::{ClassifiedValue, ConvertedDocument, RateEntry, TableMeta, TablePayload};

/// One row per converted table, in the order given.
pub fn summary_table(summaries: &[TableSummary]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Identity"),
        header_cell("Identifier"),
        header_cell("Name"),
        header_cell("Provider"),
        header_cell("Summary"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for summary in summaries {
        table.add_row(vec![
            text_cell(&summary.table_identity).add_attribute(Attribute::Bold),
            Cell::new(&summary.identifier).fg(Color::Blue),
            Cell::new(&summary.name),
            text_cell(&summary.provider),
            text_cell(&summary.summary),
        ]);
    }
    table
}

/// Identity, classification and per-table counts of one document.
pub fn document_table(document: &ConvertedDocument) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Value")]);
    apply_table_style(&mut table);
    table.add_row(vec![label_cell("Identifier"), Cell::new(&document.identifier)]);
    table.add_row(vec![label_cell("Version"), Cell::new(&document.version)]);
    match &document.classification {
        Some(classification) => {
            table.add_row(vec![
                label_cell("Table Identity"),
                text_cell(&classification.table_identity),
            ]);
            table.add_row(vec![
                label_cell("Table Name"),
                text_cell(&classification.table_name),
            ]);
            table.add_row(vec![
                label_cell("Provider"),
                text_cell(&classification.provider_name),
            ]);
            table.add_row(vec![
                label_cell("Provider Domain"),
                text_cell(&classification.provider_domain),
            ]);
            table.add_row(vec![
                label_cell("Reference"),
                text_cell(&classification.table_reference),
            ]);
            table.add_row(vec![
                label_cell("Content Type"),
                coded_cell(&classification.content_type),
            ]);
            table.add_row(vec![
                label_cell("Description"),
                text_cell(&classification.table_description),
            ]);
            table.add_row(vec![
                label_cell("Comments"),
                text_cell(&classification.comments),
            ]);
            table.add_row(vec![
                label_cell("Keywords"),
                text_cell(&classification.keywords.join(", ")),
            ]);
        }
        None => {
            table.add_row(vec![label_cell("Classification"), dim_cell("-")]);
        }
    }
    table.add_row(vec![
        label_cell("Tables"),
        Cell::new(document.tables.len()),
    ]);
    table.add_row(vec![
        label_cell("Rates"),
        Cell::new(document.rate_count()),
    ]);
    table
}

/// Scaling, data type, nation and axes of one table.
pub fn meta_table(meta: &TableMeta) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Axis"),
        header_cell("Scale Type"),
        header_cell("Name"),
        header_cell("Min"),
        header_cell("Max"),
        header_cell("Increment"),
    ]);
    apply_table_style(&mut table);
    for column in 3..6 {
        align_column(&mut table, column, CellAlignment::Right);
    }
    for axis in &meta.axes {
        table.add_row(vec![
            text_cell(&axis.id),
            coded_cell(&axis.scale_type),
            text_cell(&axis.axis_name),
            text_cell(&axis.min_value),
            text_cell(&axis.max_value),
            text_cell(&axis.increment),
        ]);
    }
    table
}

/// One-line description of a table's metadata for the `show` heading.
pub fn meta_line(meta: &TableMeta) -> String {
    let mut parts = Vec::new();
    if !meta.data_type.is_empty() {
        parts.push(format!("data type {}", meta.data_type));
    }
    if !meta.nation.is_empty() {
        parts.push(format!("nation {}", meta.nation));
    }
    if !meta.scaling_factor.trim().is_empty() {
        parts.push(format!("scaling factor {}", meta.scaling_factor.trim()));
    }
    if !meta.table_description.trim().is_empty() {
        parts.push(meta.table_description.trim().to_string());
    }
    parts.join("; ")
}

/// The first `rows` rate entries of a table.
pub fn rate_table(payload: &TablePayload, rows: usize) -> Table {
    let select = payload.is_select();
    let mut header = vec![header_cell("Age")];
    if select {
        header.push(header_cell("Duration"));
    }
    header.push(header_cell("Rate"));
    let mut table = Table::new();
    table.set_header(header);
    apply_table_style(&mut table);
    for column in 0..table.column_count() {
        align_column(&mut table, column, CellAlignment::Right);
    }
    for entry in payload.rates.iter().take(rows) {
        table.add_row(rate_row(entry, select));
    }
    table
}

fn rate_row(entry: &RateEntry, select: bool) -> Vec<Cell> {
    let mut row = vec![Cell::new(entry.age)];
    if select {
        row.push(match entry.duration {
            Some(duration) => Cell::new(duration),
            None => dim_cell("-"),
        });
    }
    row.push(match entry.rate {
        Some(rate) => Cell::new(rate).fg(Color::Green),
        None => dim_cell("null"),
    });
    row
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(165);
    if table.column_count() >= 5 {
        table.set_constraints(vec![
            ColumnConstraint::LowerBoundary(Width::Fixed(8)),
            ColumnConstraint::UpperBoundary(Width::Percentage(25)),
            ColumnConstraint::UpperBoundary(Width::Percentage(30)),
            ColumnConstraint::UpperBoundary(Width::Fixed(24)),
            ColumnConstraint::UpperBoundary(Width::Percentage(40)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn label_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

fn coded_cell(value: &ClassifiedValue) -> Cell {
    if value.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(value)
    }
}

fn text_cell(value: &str) -> Cell {
    let value = value.trim();
    if value.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(value)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(age: i64, duration: Option<i64>, rate: Option<f64>) -> RateEntry {
        RateEntry {
            age,
            duration,
            rate,
        }
    }

    #[test]
    fn test_rate_table_limits_rows() {
        let payload = TablePayload {
            index: 0,
            metadata: None,
            rates: (0..20).map(|age| entry(age, None, Some(0.5))).collect(),
        };
        let mut table = rate_table(&payload, 3);
        assert_eq!(table.row_count(), 3);
        assert_eq!(table.column_count(), 2);
    }

    #[test]
    fn test_select_rate_table_has_duration_column() {
        let payload = TablePayload {
            index: 0,
            metadata: None,
            rates: vec![entry(30, Some(1), None)],
        };
        let mut table = rate_table(&payload, 10);
        assert_eq!(table.column_count(), 3);
        let rendered = table.to_string();
        assert!(rendered.contains("Duration"));
        assert!(rendered.contains("null"));
    }

    #[test]
    fn test_meta_line_skips_blank_fields() {
        let meta = TableMeta {
            scaling_factor: "0".to_string(),
            nation: ClassifiedValue::new("US", "United States of America"),
            ..TableMeta::default()
        };
        assert_eq!(
            meta_line(&meta),
            "nation United States of America (US); scaling factor 0"
        );
    }
}
