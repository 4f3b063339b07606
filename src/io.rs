//! Configuration for file read strategies.

use core::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// Determines how a mail file's contents are brought into memory.
///
/// - **Buffered**: Allocates a buffer of exactly the file's byte length and
///   reads the contents into it. The length is taken as a 64-bit size and the
///   conversion to an allocation size is checked, never narrowed.
///
/// - **MemoryMapped**: Uses the OS virtual memory system for zero-copy file
///   access. Requires a regular, seekable file.
///
/// # Examples
///
/// ```
/// use mail_corpus::Io;
///
/// assert_eq!(Io::default(), Io::Buffered);
/// assert_eq!(Io::MemoryMapped.to_string(), "memory-mapped");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Io {
    /// Read the entire file into an exactly sized buffer.
    Buffered,

    /// Use memory-mapped I/O for zero-copy file access.
    MemoryMapped,
}

impl Default for Io {
    fn default() -> Self {
        Self::Buffered
    }
}

impl Display for Io {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Buffered => write!(f, "buffered"),
            Self::MemoryMapped => write!(f, "memory-mapped"),
        }
    }
}
