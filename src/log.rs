//! Injectable diagnostics recorder.
//!
//! The batch reader reports per-file failures through a [`Record`] rather
//! than writing to process-wide streams directly, so tests can capture
//! diagnostics with a plain `Vec<String>`.

use std::{
    fmt::{self, Debug, Formatter},
    fs::File,
    io::{self, LineWriter, Write},
    path::Path,
};

use anyhow::{Context, Result};

/// Records one diagnostic message per call.
pub trait Record {
    /// Records a diagnostic message.
    fn record(&mut self, message: &str);
}

/// A capture recorder for tests: each message becomes one element.
impl Record for Vec<String> {
    fn record(&mut self, message: &str) {
        self.push(message.to_string());
    }
}

/// `Writer` dynamic dispatches the `Write` trait.
pub type Writer = Box<dyn Write>;

/// `Log` records diagnostics to a file or a stream like stdout or stderr.
pub struct Log {
    writer: Writer,
}

impl Debug for Log {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Log").field("writer", &"<dyn Write>").finish()
    }
}

impl Default for Log {
    /// Default log writes to stdout.
    fn default() -> Self {
        Self::stdout()
    }
}

impl Log {
    /// Creates a `Log` that writes to stdout.
    #[must_use]
    pub fn stdout() -> Self {
        Self {
            writer: Box::new(io::stdout().lock()),
        }
    }

    /// Creates a `Log` that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(io::stderr().lock()),
        }
    }

    /// Creates a `Log` that writes to a file with error context.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created.
    pub fn file(path: &Path) -> Result<Self> {
        let file = File::create(path)
            .map(|file| Box::new(LineWriter::new(file)) as Writer)
            .with_context(|| format!("failed to create log file: {}", path.display()))?;

        Ok(Self { writer: file })
    }

    /// Creates a `Log` from a writer.
    pub fn from_writer<W: Write + 'static>(writer: W) -> Self {
        Self {
            writer: Box::new(writer),
        }
    }
}

impl Record for Log {
    /// Writes the message and a trailing newline.
    ///
    /// A diagnostics channel has no error channel of its own, so write
    /// failures, `BrokenPipe` included, are dropped.
    fn record(&mut self, message: &str) {
        if writeln!(self.writer, "{message}").is_ok() {
            let _ = self.writer.flush();
        }
    }
}
