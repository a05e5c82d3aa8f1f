//! Error types for header reading.

use thiserror::Error;

/// Result type for header operations.
pub type HeaderResult<T> = Result<T, HeaderError>;

/// Errors that can occur while reading a WAV header.
#[derive(Debug, Error)]
pub enum HeaderError {
    /// The file could not be opened or read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Fewer bytes than the canonical header were available.
    #[error("header truncated: {len} of {expected} bytes available")]
    Truncated {
        /// Number of bytes actually available.
        len: usize,
        /// Number of bytes required.
        expected: usize,
    },
}

impl HeaderError {
    /// Creates a truncation error for a buffer of `len` bytes.
    pub fn truncated(len: usize) -> Self {
        Self::Truncated {
            len,
            expected: crate::HEADER_LEN,
        }
    }
}
