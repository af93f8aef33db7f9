//! Subcommand implementations.
//!
//! Each command writes to the given output streams so it can run against
//! in-memory buffers in tests.

use std::ffi::OsStr;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use xtbml_ingest::{
    BatchReport, convert_directory_with_observer, filter_summaries, load_document, load_summaries,
};

use crate::render::{document_table, meta_line, meta_table, rate_table, summary_table};

/// Convert every XTbML file in `src` into `dst`.
///
/// Prints one line per converted file as it completes and one line per
/// failure to `err`. Per-file failures are part of the returned report;
/// only directory-level problems are errors.
pub fn run_convert<O, E>(src: &Path, dst: &Path, out: &mut O, err: &mut E) -> Result<BatchReport>
where
    O: Write,
    E: Write,
{
    let span = info_span!("convert", src = %src.display(), dst = %dst.display());
    let _guard = span.enter();

    let mut write_result: io::Result<()> = Ok(());
    let report = convert_directory_with_observer(src, dst, |source, output| {
        if write_result.is_ok() {
            let name = source
                .file_name()
                .map(OsStr::to_string_lossy)
                .unwrap_or_default();
            write_result = writeln!(out, "Converted {name} -> {}", output.display());
        }
    })
    .with_context(|| format!("convert {}", src.display()))?;
    write_result.context("write conversion progress")?;

    for failure in &report.failed {
        writeln!(err, "conversion failed: {failure}").context("write conversion failure")?;
    }
    if report.converted.is_empty() {
        writeln!(out, "No XML files converted.").context("write conversion summary")?;
    }
    info!(
        converted = report.converted.len(),
        failed = report.failed.len(),
        "convert command finished"
    );
    Ok(report)
}

/// Print the converted tables in `dir` matching `query`.
///
/// Returns the number of tables printed.
pub fn run_list<O: Write>(dir: &Path, query: Option<&str>, out: &mut O) -> Result<usize> {
    let summaries =
        load_summaries(dir).with_context(|| format!("load tables from {}", dir.display()))?;
    let matches = filter_summaries(&summaries, query.unwrap_or_default());
    debug!(
        total = summaries.len(),
        matched = matches.len(),
        "filtered table summaries"
    );
    if matches.is_empty() {
        writeln!(out, "No converted tables found.")?;
        return Ok(0);
    }
    writeln!(out, "{}", summary_table(&matches))?;
    Ok(matches.len())
}

/// Print the classification, table metadata and first `rows` rates of a
/// converted table.
pub fn run_show<O: Write>(file: &Path, rows: usize, out: &mut O) -> Result<()> {
    let document =
        load_document(file).with_context(|| format!("load table {}", file.display()))?;
    writeln!(out, "{}", document_table(&document))?;
    for payload in &document.tables {
        writeln!(out)?;
        writeln!(
            out,
            "Table {} ({} rates)",
            payload.index + 1,
            payload.rates.len()
        )?;
        if let Some(meta) = &payload.metadata {
            let line = meta_line(meta);
            if !line.is_empty() {
                writeln!(out, "{line}")?;
            }
            if !meta.axes.is_empty() {
                writeln!(out, "{}", meta_table(meta))?;
            }
        }
        if payload.rates.is_empty() || rows == 0 {
            continue;
        }
        writeln!(out, "{}", rate_table(payload, rows))?;
        if payload.rates.len() > rows {
            writeln!(out, "... {} more", payload.rates.len() - rows)?;
        }
    }
    Ok(())
}
