//! Core types for the exported recommender metadata.
//!
//! Key Rust concepts demonstrated here:
//! - Type aliases for domain clarity (UserId, MovieId)
//! - Deriving `Deserialize` so serde maps the JSON tables straight onto the struct
//! - HashMap for O(1) lookups
//! - Borrowing: query methods take `&self` and never mutate

use serde::Deserialize;
use std::collections::HashMap;

// =============================================================================
// Type Aliases
// =============================================================================
// These make the domain clearer and prevent mixing up user IDs with movie IDs

/// Unique identifier for a user (1-6040 in MovieLens 1M)
pub type UserId = u32;

/// Unique identifier for a movie (varies in MovieLens 1M)
pub type MovieId = u32;

/// Dense index the model's embedding layers expect.
///
/// The ONNX graph takes these as int64 tensors, so we keep them as i64
/// from lookup onward instead of converting at the tensor boundary.
pub type EmbeddingIndex = i64;

// =============================================================================
// MetadataIndex - The Exported Index Mapping
// =============================================================================

/// Holds the `user2idx` and `movie2idx` tables exported alongside the model.
///
/// The training pipeline re-indexes raw MovieLens IDs into dense embedding
/// rows; this struct is the program's view of that mapping. Keys are the
/// string form of the external ID, exactly as serialized in `metadata.json`.
///
/// Loaded once at startup and held immutably for the process lifetime.
/// Unknown top-level keys in the JSON are ignored, so the file may carry
/// extra export metadata without breaking this program.
#[derive(Debug, Deserialize)]
pub struct MetadataIndex {
    pub(crate) user2idx: HashMap<String, EmbeddingIndex>,
    pub(crate) movie2idx: HashMap<String, EmbeddingIndex>,
}

impl MetadataIndex {
    /// Creates a new, empty MetadataIndex
    pub fn new() -> Self {
        Self {
            user2idx: HashMap::new(),
            movie2idx: HashMap::new(),
        }
    }

    /// Resolve a user identifier to its embedding index.
    ///
    /// Returns the value stored verbatim under the identifier's string key.
    /// Absence is an error, not a fallback: a user the model was never
    /// trained on has no valid embedding row.
    pub fn user_index(&self, id: UserId) -> crate::error::Result<EmbeddingIndex> {
        self.user2idx
            .get(&id.to_string())
            .copied()
            .ok_or(crate::error::MetadataError::UnknownUser { id })
    }

    /// Resolve a movie identifier to its embedding index.
    pub fn movie_index(&self, id: MovieId) -> crate::error::Result<EmbeddingIndex> {
        self.movie2idx
            .get(&id.to_string())
            .copied()
            .ok_or(crate::error::MetadataError::UnknownMovie { id })
    }

    /// Get table sizes for logging/validation
    pub fn counts(&self) -> (usize, usize) {
        (self.user2idx.len(), self.movie2idx.len())
    }

    // Mutators - used when building an index by hand (mainly in tests)

    /// Insert a user mapping into the index
    pub fn insert_user_index(&mut self, id: UserId, index: EmbeddingIndex) {
        self.user2idx.insert(id.to_string(), index);
    }

    /// Insert a movie mapping into the index
    pub fn insert_movie_index(&mut self, id: MovieId, index: EmbeddingIndex) {
        self.movie2idx.insert(id.to_string(), index);
    }
}

// Implement Default trait for convenience
impl Default for MetadataIndex {
    fn default() -> Self {
        Self::new()
    }
}
