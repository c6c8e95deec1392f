//! Loading the metadata mapping from disk.
//!
//! The export step of the training pipeline writes `metadata.json` next to
//! the ONNX model. Its top-level object carries at least `user2idx` and
//! `movie2idx`, each mapping a string-encoded ID to an integer index.
//!
//! Rust concepts you'll learn here:
//! - File I/O with buffered readers
//! - Deserializing straight into a struct with serde_json
//! - Mapping library errors into domain error variants with `?`

use crate::error::{MetadataError, Result};
use crate::types::MetadataIndex;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

impl MetadataIndex {
    /// Load the index mapping from a JSON file.
    ///
    /// This is the main entry point for loading metadata. A missing file
    /// becomes `FileNotFound`; anything serde_json rejects (invalid JSON,
    /// missing table, non-integer index value) becomes `JsonError`. Neither
    /// is caught here: callers propagate and terminate.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                MetadataError::FileNotFound {
                    path: path.display().to_string(),
                }
            } else {
                MetadataError::IoError(e)
            }
        })?;

        let reader = BufReader::new(file);
        let index: MetadataIndex =
            serde_json::from_reader(reader).map_err(|e| MetadataError::JsonError {
                file: path.display().to_string(),
                source: e,
            })?;

        let (users, movies) = index.counts();
        debug!("Loaded index mapping: {} users, {} movies", users, movies);

        Ok(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    /// Write `contents` to a unique temp file and return its path.
    fn write_temp_file(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("metadata-test-{}-{}", std::process::id(), name));
        let mut file = File::create(&path).expect("Failed to create temp file");
        file.write_all(contents.as_bytes())
            .expect("Failed to write temp file");
        path
    }

    #[test]
    fn test_load_valid_file() {
        let path = write_temp_file(
            "valid.json",
            r#"{"user2idx": {"1": 0, "2": 1}, "movie2idx": {"1": 0}}"#,
        );

        let index = MetadataIndex::load_from_file(&path).unwrap();
        assert_eq!(index.counts(), (2, 1));
        assert_eq!(index.user_index(2).unwrap(), 1);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let path = Path::new("no/such/metadata.json");
        let err = MetadataIndex::load_from_file(path).unwrap_err();
        assert!(matches!(err, MetadataError::FileNotFound { .. }));
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let path = write_temp_file("invalid.json", "not json at all {{");
        let err = MetadataIndex::load_from_file(&path).unwrap_err();
        assert!(matches!(err, MetadataError::JsonError { .. }));
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_missing_table_is_parse_error() {
        // Valid JSON, but no movie2idx table
        let path = write_temp_file("missing-table.json", r#"{"user2idx": {"1": 0}}"#);
        let err = MetadataIndex::load_from_file(&path).unwrap_err();
        assert!(matches!(err, MetadataError::JsonError { .. }));
        std::fs::remove_file(&path).ok();
    }
}
