//! Error types for the segmentation pipeline

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while configuring the pipeline or writing its
/// results. Scoring and segmentation themselves never fail.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration validation failed
    #[error("Configuration error: {0}")]
    Config(String),

    /// An output file could not be created or written
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The winning output could not be copied to the final file
    #[error("Failed to copy {} to {}: {source}", .from.display(), .to.display())]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Result type used across the crate
pub type Result<T> = std::result::Result<T, Error>;
