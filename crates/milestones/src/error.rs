//! Error types for milestone loading.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for milestone operations.
pub type MilestoneResult<T> = Result<T, MilestoneError>;

/// Errors raised before any period is computed.
#[derive(Debug, Error)]
pub enum MilestoneError {
    /// The milestone file could not be read.
    #[error("failed to read milestone file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The milestone file is not valid JSON or has an invalid date.
    #[error("failed to parse milestone file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The time-zone identifier is not in the IANA database.
    #[error("unknown time zone: {0}")]
    UnknownTimeZone(String),

    /// A milestone has an empty label.
    #[error("milestone #{index} has an empty label")]
    EmptyLabel {
        /// Zero-based position in the file.
        index: usize,
    },
}
