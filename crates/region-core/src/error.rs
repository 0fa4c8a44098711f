//! Error types for loading region boundaries.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading the boundary dataset.
///
/// All of them are fatal at startup.
#[derive(Debug, Error)]
pub enum BoundaryError {
    /// The dataset file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The dataset is not valid JSON.
    #[error("invalid feature collection: {0}")]
    Parse(#[from] serde_json::Error),

    /// The top-level object has no `features` array.
    #[error("feature collection has no features array")]
    MissingFeatures,

    /// A feature lacks the region property (or it is not a string).
    #[error("feature {index} has no string property {field:?}")]
    MissingProperty { index: usize, field: &'static str },
}

/// Result type for boundary operations.
pub type Result<T> = std::result::Result<T, BoundaryError>;
