//! Memory view over one mail file's contents.

use std::{
    fmt::{self, Display, Formatter},
    ops::Deref,
    path::{Path, PathBuf},
};

use memmap2::Mmap;

use crate::{Buffer, mail::Metadata};

/// One mail file's full contents, either copied into an exactly sized buffer
/// or memory-mapped in place.
#[derive(Debug)]
pub enum View {
    /// Owned buffer sized to the file's byte length at read time.
    Buffer(Buffer),
    /// Memory-mapped file view.
    Mmap {
        /// Path the mapping was created from.
        path: PathBuf,
        /// The mapping itself.
        mmap: Mmap,
    },
}

impl AsRef<[u8]> for View {
    /// Returns the underlying byte slice.
    fn as_ref(&self) -> &[u8] {
        match self {
            Self::Buffer(bytes) => bytes,
            Self::Mmap { mmap, .. } => mmap,
        }
    }
}

impl Deref for View {
    type Target = [u8];

    /// Provides direct access to the underlying byte data.
    fn deref(&self) -> &Self::Target {
        self.as_ref()
    }
}

impl Display for View {
    /// Shows the file path for mapped views or `<buffer>` for owned bytes.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Buffer(_) => write!(f, "<buffer>"),
            Self::Mmap { path, .. } => write!(f, "{}", path.display()),
        }
    }
}

impl From<Buffer> for View {
    /// Creates a view from boxed bytes.
    fn from(bytes: Buffer) -> Self {
        Self::Buffer(bytes)
    }
}

impl From<Vec<u8>> for View {
    /// Creates a view from a byte vector.
    fn from(bytes: Vec<u8>) -> Self {
        Self::Buffer(bytes.into_boxed_slice())
    }
}

impl From<&[u8]> for View {
    /// Creates a view from a byte slice.
    fn from(bytes: &[u8]) -> Self {
        Self::Buffer(Box::from(bytes))
    }
}

impl<const N: usize> From<&[u8; N]> for View {
    /// Creates a view from a fixed-size byte array.
    fn from(bytes: &[u8; N]) -> Self {
        Self::Buffer(Box::from(bytes.as_slice()))
    }
}

impl Metadata for View {
    /// Returns the file path for mapped views, `None` for owned buffers.
    fn path(&self) -> Option<&Path> {
        match self {
            Self::Buffer(_) => None,
            Self::Mmap { path, .. } => Some(path),
        }
    }

    /// Returns the view size in bytes.
    fn size(&self) -> Option<u64> {
        Some(self.len() as u64)
    }
}
