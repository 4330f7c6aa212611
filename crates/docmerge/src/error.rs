//! Error types for docmerge
//!
//! Only configuration problems and the final write are errors. Per-document
//! failures are absorbed into placeholder records by the loader.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for docmerge operations
#[derive(Error, Debug)]
pub enum MergeError {
    /// The merged document could not be written
    #[error("failed to write merged document to {}", path.display())]
    Write {
        /// Output path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The manifest file exists but could not be read
    #[error("failed to read manifest {}", path.display())]
    ManifestRead {
        /// Manifest path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The manifest is not valid JSON or has the wrong shape
    #[error("failed to parse manifest {}", path.display())]
    ManifestParse {
        /// Manifest path
        path: PathBuf,
        /// Underlying parse error
        #[source]
        source: serde_json::Error,
    },

    /// The merge configuration is unusable
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias for docmerge operations
pub type Result<T> = std::result::Result<T, MergeError>;
