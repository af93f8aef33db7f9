//! Batch conversion and loading for XTbML rate tables.
//!
//! This crate connects the pure conversion engine in `xtbml-convert` to the
//! file system.
//!
//! # Features
//!
//! - **Discovery**: list `.xml` sources and `.json` outputs in a directory
//! - **Batch Conversion**: convert a directory file by file, isolating failures
//! - **Loading**: read converted JSON back, build and filter table summaries
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use xtbml_ingest::{convert_directory, load_summaries};
//!
//! let report = convert_directory(Path::new("xml"), Path::new("json"))?;
//! println!("{} converted, {} failed", report.converted.len(), report.failed.len());
//!
//! let summaries = load_summaries(Path::new("json"))?;
//! ```

mod batch;
mod discovery;
mod error;
mod loader;

// === Error Types ===
pub use error::{IngestError, Result};

// === File Discovery ===
pub use discovery::{list_json_files, list_xml_files, output_path};

// === Batch Conversion ===
pub use batch::{
    BatchReport, ConvertedFile, convert_directory, convert_directory_with_observer, convert_file,
};

// === Loading ===
pub use loader::{TableSummary, filter_summaries, load_document, load_summaries, load_summary};
