//! # Metadata Crate
//!
//! This crate handles loading the index mapping exported alongside the
//! trained recommender model.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (UserId, MovieId, MetadataIndex)
//! - **loader**: Parse metadata.json into a MetadataIndex
//! - **error**: Error types for metadata loading and lookups
//!
//! ## Example Usage
//!
//! ```ignore
//! use metadata::MetadataIndex;
//! use std::path::Path;
//!
//! // Load the exported mapping
//! let index = MetadataIndex::load_from_file(Path::new("metadata.json"))?;
//!
//! // Resolve an external ID to the dense index the model expects
//! let user_idx = index.user_index(1)?;
//! let movie_idx = index.movie_index(1)?;
//! ```
//!
//! ## Learning Goals
//!
//! This crate demonstrates several key Rust concepts:
//!
//! 1. **Ownership and Borrowing**: MetadataIndex owns the tables, queries borrow
//! 2. **Error Handling**: Using Result<T> and custom error types
//! 3. **Type Safety**: Type aliases (UserId, MovieId) prevent mixing up IDs
//! 4. **Serde**: Deserializing JSON straight into domain types

// Public modules
pub mod error;
pub mod types;
pub mod loader;

// Re-export commonly used types for convenience
pub use error::{MetadataError, Result};
pub use types::{EmbeddingIndex, MetadataIndex, MovieId, UserId};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_index() {
        let index = MetadataIndex::new();
        assert_eq!(index.counts(), (0, 0));
    }

    #[test]
    fn test_insert_and_resolve() {
        let mut index = MetadataIndex::new();
        index.insert_user_index(1, 0);
        index.insert_movie_index(1193, 42);

        assert_eq!(index.user_index(1).unwrap(), 0);
        assert_eq!(index.movie_index(1193).unwrap(), 42);
    }

    #[test]
    fn test_zero_is_a_valid_index() {
        // Index 0 is the first embedding row, not a sentinel
        let mut index = MetadataIndex::new();
        index.insert_user_index(1, 0);
        index.insert_movie_index(1, 0);

        assert_eq!(index.user_index(1).unwrap(), 0);
        assert_eq!(index.movie_index(1).unwrap(), 0);
    }

    #[test]
    fn test_unknown_ids_are_errors() {
        let index = MetadataIndex::new();

        assert!(matches!(
            index.user_index(999),
            Err(MetadataError::UnknownUser { id: 999 })
        ));
        assert!(matches!(
            index.movie_index(999),
            Err(MetadataError::UnknownMovie { id: 999 })
        ));
    }

    #[test]
    fn test_deserialize_from_json() {
        let json = r#"{"user2idx": {"1": 0, "6040": 6039}, "movie2idx": {"1": 0, "3952": 3705}}"#;
        let index: MetadataIndex = serde_json::from_str(json).unwrap();

        assert_eq!(index.counts(), (2, 2));
        // Round-trip: the resolved index is the stored JSON value verbatim
        assert_eq!(index.user_index(6040).unwrap(), 6039);
        assert_eq!(index.movie_index(3952).unwrap(), 3705);
    }

    #[test]
    fn test_extra_top_level_keys_are_ignored() {
        // The export step may write additional metadata next to the tables
        let json = r#"{
            "user2idx": {"1": 0},
            "movie2idx": {"1": 0},
            "num_users": 6040,
            "model_version": "mf-v2"
        }"#;
        let index: MetadataIndex = serde_json::from_str(json).unwrap();
        assert_eq!(index.counts(), (1, 1));
    }
}
