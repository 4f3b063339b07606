//! Per-file reader for mail files.
//!
//! A [`MailFile`] owns its file handle, so the handle is released on every
//! exit path, including the error branches. File lengths travel as `u64` and
//! the single conversion to an allocation size is checked, so files of any
//! length get an exactly sized buffer.

use std::{
    fmt::{self, Display, Formatter},
    fs::File,
    io::{self, Read},
    path::{Path, PathBuf},
};

use memmap2::Mmap;

use crate::{error::Error, io::Io, view::View};

/// Provides metadata for data sources.
pub trait Metadata {
    /// Returns the file path, if file-based.
    fn path(&self) -> Option<&Path>;

    /// Returns the size in bytes, if known.
    fn size(&self) -> Option<u64>;
}

/// An opened mail file, ready to be read into memory.
#[derive(Debug)]
pub struct MailFile {
    path: PathBuf,
    file: File,
}

impl MailFile {
    /// Opens a mail file for reading.
    ///
    /// # Errors
    ///
    /// Returns `Error::Open` with specific messages for:
    /// - File not found
    /// - Permission denied
    /// - Other I/O errors
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| {
            let message = match source.kind() {
                io::ErrorKind::NotFound => format!("no such file: {}", path.display()),
                io::ErrorKind::PermissionDenied => {
                    format!("permission denied: {}", path.display())
                }
                _ => format!("failed to open file: {}", path.display()),
            };

            Error::Open {
                path: path.display().to_string(),
                message,
                source,
            }
        })?;

        Ok(Self {
            path: path.to_path_buf(),
            file,
        })
    }

    /// The file's byte length at this moment, from its metadata.
    ///
    /// # Errors
    ///
    /// Returns `Error::Read` if the metadata cannot be queried.
    pub fn len(&self) -> Result<u64, Error> {
        self.file
            .metadata()
            .map(|metadata| metadata.len())
            .map_err(|source| self.read_error(source))
    }

    /// Whether the file is empty.
    ///
    /// # Errors
    ///
    /// Returns `Error::Read` if the metadata cannot be queried.
    pub fn is_empty(&self) -> Result<bool, Error> {
        self.len().map(|len| len == 0)
    }

    /// Consumes the opened file and produces its full contents.
    ///
    /// With `Io::Buffered`, allocates a buffer of exactly the file's byte
    /// length and reads until the buffer is full or the stream ends. With
    /// `Io::MemoryMapped`, maps the file and exposes its bytes in place.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `Error::Read` if the contents cannot be read or mapped
    /// - `Error::SizeExceeded` if the file's length exceeds `usize::MAX`
    ///
    /// # Examples
    ///
    /// ```
    /// use mail_corpus::{Io, MailFile};
    /// use anyhow::Result;
    ///
    /// # fn example() -> Result<()> {
    /// let mail = MailFile::open("inbox/0001.txt")?;
    /// let contents = mail.read(Io::Buffered)?;
    /// assert!(!contents.is_empty());
    /// # Ok(())
    /// # }
    /// ```
    pub fn read(self, io: Io) -> Result<View, Error> {
        match io {
            Io::Buffered => self.read_buffered(),
            Io::MemoryMapped => self.map(),
        }
    }

    /// Reads the whole file into a buffer sized to its byte length.
    fn read_buffered(mut self) -> Result<View, Error> {
        let len = self.len()?;
        let capacity = usize::try_from(len).map_err(|_| Error::SizeExceeded {
            path: self.path.display().to_string(),
            size: len,
        })?;

        let mut buffer = vec![0_u8; capacity];
        let mut filled = 0;

        while filled < buffer.len() {
            match self.file.read(&mut buffer[filled..]) {
                // The file shrank between sizing and reading.
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(source) if source.kind() == io::ErrorKind::Interrupted => {}
                Err(source) => return Err(self.read_error(source)),
            }
        }
        buffer.truncate(filled);

        Ok(View::from(buffer))
    }

    /// Memory-maps the file for zero-copy access to its bytes.
    fn map(self) -> Result<View, Error> {
        // Safety: Memory mapping requires `unsafe` per memmap2 crate
        #[allow(unsafe_code)]
        let mmap = unsafe { Mmap::map(&self.file) }.map_err(|source| self.read_error(source))?;

        Ok(View::Mmap {
            path: self.path,
            mmap,
        })
    }

    fn read_error(&self, source: io::Error) -> Error {
        Error::Read {
            path: self.path.display().to_string(),
            source,
        }
    }
}

impl Display for MailFile {
    /// Shows the file path.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

impl TryFrom<&Path> for MailFile {
    type Error = Error;

    /// Opens a mail file from a path.
    ///
    /// # Errors
    ///
    /// Returns `Error::Open` if the file cannot be opened.
    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        Self::open(path)
    }
}

impl TryFrom<&str> for MailFile {
    type Error = Error;

    /// Opens a mail file from a string path.
    ///
    /// # Errors
    ///
    /// Returns `Error::Open` if the file cannot be opened.
    fn try_from(path: &str) -> Result<Self, Self::Error> {
        Self::open(Path::new(path))
    }
}

impl Metadata for MailFile {
    /// Returns the file path.
    fn path(&self) -> Option<&Path> {
        Some(&self.path)
    }

    /// Returns the file size in bytes, `None` if metadata cannot be queried.
    fn size(&self) -> Option<u64> {
        self.file.metadata().ok().map(|metadata| metadata.len())
    }
}

/// Opens and fully reads one mail file into an exactly sized buffer.
///
/// # Errors
///
/// Returns `Error::Open` if the file cannot be opened and `Error::Read` if
/// its contents cannot be read.
pub fn read<P: AsRef<Path>>(path: P) -> Result<View, Error> {
    MailFile::open(path)?.read(Io::Buffered)
}
