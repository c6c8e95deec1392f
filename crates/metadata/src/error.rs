//! Error types for the metadata crate.
//!
//! Rust error handling concepts demonstrated:
//! - thiserror for defining custom error types
//! - Enum variants for different error cases
//! - Error messages with context
//! - Automatic `Display` and `Error` trait implementations

use crate::types::{MovieId, UserId};
use thiserror::Error;

/// Errors that can occur while loading or querying the metadata mapping
///
/// The `#[derive(Error)]` macro from thiserror automatically implements
/// the `std::error::Error` trait and `Display` based on our `#[error(...)]` attributes
#[derive(Error, Debug)]
pub enum MetadataError {
    /// Metadata file could not be found
    #[error("Failed to open metadata file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading the file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Metadata file isn't valid JSON, or is missing a required table
    #[error("Malformed metadata in {file}: {source}")]
    JsonError {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    /// User identifier has no entry in the `user2idx` table
    #[error("User {id} not present in user2idx")]
    UnknownUser { id: UserId },

    /// Movie identifier has no entry in the `movie2idx` table
    #[error("Movie {id} not present in movie2idx")]
    UnknownMovie { id: MovieId },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, MetadataError>;
