//! Error types for mail-corpus.

use std::io;

use thiserror::Error;

/// Structured error types for mail-corpus.
#[derive(Error, Debug)]
pub enum Error {
    /// File could not be opened.
    #[error("{message}: {path}")]
    Open {
        /// File path where the error occurred.
        path: String,
        /// Error description.
        message: String,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// File opened but its contents could not be read.
    #[error("failed to read file: {path}")]
    Read {
        /// File path where the error occurred.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// File length exceeds platform limits.
    #[error(
        "file size {size} bytes exceeds platform limit of {} bytes: {path}",
        usize::MAX
    )]
    SizeExceeded {
        /// File path where the error occurred.
        path: String,
        /// File size in bytes.
        size: u64,
    },
}

impl Error {
    /// Whether the failure happened at open time (missing file, permission
    /// denied and the like).
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    /// Whether the file opened but reading its contents failed.
    #[must_use]
    pub const fn is_read_failure(&self) -> bool {
        matches!(self, Self::Read { .. } | Self::SizeExceeded { .. })
    }
}
