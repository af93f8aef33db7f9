//! Error types for batch conversion and JSON loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while converting or loading table files.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Directory not found or not readable.
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Failed to read directory entries.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to create the output directory.
    #[error("failed to create directory {path}: {source}")]
    DirectoryCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write file.
    #[error("failed to write file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Conversion Errors ===
    /// The XTbML document could not be converted.
    #[error("failed to convert {path}: {source}")]
    Convert {
        path: PathBuf,
        #[source]
        source: xtbml_convert::ConvertError,
    },

    /// A converted JSON file could not be decoded.
    #[error("failed to decode {path}: {source}")]
    JsonDecode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl IngestError {
    /// Path of the file or directory the error refers to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::DirectoryNotFound { path }
            | Self::DirectoryRead { path, .. }
            | Self::DirectoryCreate { path, .. }
            | Self::FileRead { path, .. }
            | Self::FileWrite { path, .. }
            | Self::Convert { path, .. }
            | Self::JsonDecode { path, .. } => path,
        }
    }
}

/// Result type for ingest operations.
pub type Result<T> = std::result::Result<T, IngestError>;
