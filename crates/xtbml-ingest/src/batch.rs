//! Directory-level conversion of XTbML files into JSON.
//!
//! Each source file is converted independently: a malformed document is
//! recorded in the [`BatchReport`] and the remaining files still convert.

use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::{debug, info, info_span, warn};

use crate::discovery::{list_xml_files, output_path};
use crate::error::{IngestError, Result};

/// A source file and the JSON file written for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedFile {
    pub source: PathBuf,
    pub output: PathBuf,
}

/// Outcome of converting a whole directory.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub converted: Vec<ConvertedFile>,
    pub failed: Vec<IngestError>,
}

impl BatchReport {
    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }

    /// Number of source files attempted.
    pub fn total(&self) -> usize {
        self.converted.len() + self.failed.len()
    }
}

/// Convert the XTbML file at `src` and write its JSON to `dst`.
pub fn convert_file(src: &Path, dst: &Path) -> Result<()> {
    let input = std::fs::read(src).map_err(|e| IngestError::FileRead {
        path: src.to_path_buf(),
        source: e,
    })?;
    let output = xtbml_convert::convert(&input).map_err(|e| IngestError::Convert {
        path: src.to_path_buf(),
        source: e,
    })?;
    std::fs::write(dst, output).map_err(|e| IngestError::FileWrite {
        path: dst.to_path_buf(),
        source: e,
    })?;
    debug!(src = %src.display(), dst = %dst.display(), "converted file");
    Ok(())
}

/// Convert every `.xml` file in `src_dir` into a `.json` file in `dst_dir`.
pub fn convert_directory(src_dir: &Path, dst_dir: &Path) -> Result<BatchReport> {
    convert_directory_with_observer(src_dir, dst_dir, |_, _| {})
}

/// Like [`convert_directory`], calling `observer(src, dst)` after each
/// successful conversion.
///
/// Files are processed in file-name order. Per-file failures are collected
/// in the report; only directory-level failures (unreadable source,
/// uncreatable destination) return an error.
pub fn convert_directory_with_observer<F>(
    src_dir: &Path,
    dst_dir: &Path,
    mut observer: F,
) -> Result<BatchReport>
where
    F: FnMut(&Path, &Path),
{
    let span = info_span!(
        "convert_directory",
        src = %src_dir.display(),
        dst = %dst_dir.display()
    );
    let _guard = span.enter();
    let start = Instant::now();

    let sources = list_xml_files(src_dir)?;
    std::fs::create_dir_all(dst_dir).map_err(|e| IngestError::DirectoryCreate {
        path: dst_dir.to_path_buf(),
        source: e,
    })?;

    let mut report = BatchReport::default();
    for source in sources {
        let output = output_path(&source, dst_dir);
        match convert_file(&source, &output) {
            Ok(()) => {
                observer(&source, &output);
                report.converted.push(ConvertedFile { source, output });
            }
            Err(error) => {
                warn!(src = %source.display(), %error, "conversion failed");
                report.failed.push(error);
            }
        }
    }

    info!(
        converted = report.converted.len(),
        failed = report.failed.len(),
        duration_ms = start.elapsed().as_millis(),
        "directory conversion complete"
    );
    Ok(report)
}
