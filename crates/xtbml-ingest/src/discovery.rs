//! File discovery for source and output directories.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::error::{IngestError, Result};

/// Lists all XTbML (`.xml`) files in a directory.
///
/// Returns files sorted by filename.
pub fn list_xml_files(dir: &Path) -> Result<Vec<PathBuf>> {
    list_files_with_extension(dir, "xml")
}

/// Lists all converted (`.json`) files in a directory.
///
/// Returns files sorted by filename.
pub fn list_json_files(dir: &Path) -> Result<Vec<PathBuf>> {
    list_files_with_extension(dir, "json")
}

fn list_files_with_extension(dir: &Path, wanted: &str) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut files = Vec::new();

    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let path = entry.path();

        // Skip directories
        if !path.is_file() {
            continue;
        }

        // Extension match is case-insensitive
        let matches = path
            .extension()
            .and_then(OsStr::to_str)
            .is_some_and(|ext| ext.eq_ignore_ascii_case(wanted));

        if matches {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    Ok(files)
}

/// Output path for a source file: same stem, `.json` extension, in `dst_dir`.
pub fn output_path(src: &Path, dst_dir: &Path) -> PathBuf {
    let stem = src.file_stem().unwrap_or(src.as_os_str());
    let mut name = stem.to_os_string();
    name.push(".json");
    dst_dir.join(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_dir() -> TempDir {
        let dir = TempDir::new().unwrap();

        for name in &["b_table.xml", "a_table.XML", "notes.txt", "c_table.json"] {
            let path = dir.path().join(name);
            std::fs::write(&path, "<XTbML/>").unwrap();
        }
        std::fs::create_dir(dir.path().join("nested.xml")).unwrap();

        dir
    }

    #[test]
    fn test_list_xml_files() {
        let dir = create_test_dir();
        let files = list_xml_files(dir.path()).unwrap();

        let names: Vec<_> = files
            .iter()
            .map(|path| path.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, vec!["a_table.XML", "b_table.xml"]);
    }

    #[test]
    fn test_list_json_files() {
        let dir = create_test_dir();
        let files = list_json_files(dir.path()).unwrap();
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn test_list_xml_files_empty_dir() {
        let dir = TempDir::new().unwrap();
        assert!(list_xml_files(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_list_xml_files_not_a_directory() {
        let dir = TempDir::new().unwrap();
        let file_path = dir.path().join("test.xml");
        std::fs::write(&file_path, "data").unwrap();

        let result = list_xml_files(&file_path);
        assert!(matches!(result, Err(IngestError::DirectoryNotFound { .. })));
    }

    #[test]
    fn test_output_path_replaces_extension() {
        let dst = Path::new("/out");
        assert_eq!(
            output_path(Path::new("/in/t1941.XML"), dst),
            PathBuf::from("/out/t1941.json")
        );
        assert_eq!(
            output_path(Path::new("/in/table.v2.xml"), dst),
            PathBuf::from("/out/table.v2.json")
        );
    }
}
