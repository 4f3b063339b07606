//! Read a collection of email files into exactly sized in-memory buffers.
//!
//! `mail-corpus` brings mail files on local storage into memory as a
//! precursor to later text processing. Each file is opened, sized from its
//! metadata as a 64-bit length, and read into a buffer of exactly that many
//! bytes. Batch processing is sequential and per-file failures are recorded
//! as diagnostics rather than aborting the run, so one missing or unreadable
//! file never costs the rest of the collection.
//!
//! Diagnostics flow through an injectable [`Record`] collaborator instead of
//! a process-wide stream, so tests can capture them with a plain
//! `Vec<String>`.
//!
//! ## Module structure
//!
//! The `mail-corpus` library is organized into these modules:
//! - `batch.rs`: Sequential batch reading with per-file failure recovery
//! - `error.rs`: Structured error types
//! - `io.rs`: File read strategy configuration
//! - `lib.rs`: Core library functionality and API
//! - `log.rs`: Injectable diagnostics recorder
//! - `mail.rs`: Per-file open, size, and read operations
//! - `view.rs`: Byte access to one file's contents
//!
//! # Reading one file
//!
//! ```
//! use mail_corpus::{Io, MailFile};
//! use anyhow::Result;
//!
//! # fn example() -> Result<()> {
//! let mail = MailFile::open("inbox/0001.txt")?;
//! let len = mail.len()?;
//! let contents = mail.read(Io::Buffered)?;
//! assert_eq!(contents.len() as u64, len);
//! # Ok(())
//! # }
//! ```
//!
//! # Reading a batch
//!
//! ```
//! use mail_corpus::read_all;
//!
//! # fn example() {
//! let paths = ["inbox/0001.txt", "inbox/0002.txt", "inbox/0003.txt"];
//! let mut diagnostics: Vec<String> = Vec::new();
//!
//! read_all(&paths, &mut diagnostics);
//!
//! for line in &diagnostics {
//!     eprintln!("{line}");
//! }
//! # }
//! ```

pub mod batch;
pub mod error;
pub mod io;
pub mod log;
pub mod mail;
pub mod view;

pub use batch::read_all;
pub use error::Error;
pub use io::Io;
pub use log::{Log, Record, Writer};
pub use mail::{MailFile, Metadata};
pub use view::View;

/// An in-memory byte region holding one file's full contents.
pub type Buffer = Box<[u8]>;
