//! Log sinks and the error-reporting channel.
//!
//! Sinks take `&self` so one handle can be shared by the main path and the
//! control handler without an application-level lock. Each line is handed to
//! the OS as a single write.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

/// Default log file name, created in the working directory.
pub const DEFAULT_LOG_FILE: &str = "ctrlhandlerdemo.log";

/// A destination for complete log lines.
pub trait Sink: Send + Sync {
    /// Operation name used when reporting a failure of this sink.
    fn operation(&self) -> &'static str;

    /// Write one complete line, returning how many bytes were accepted.
    fn write_line(&self, line: &[u8]) -> io::Result<usize>;
}

/// Channel for reporting non-fatal failures (stderr in production).
pub trait ErrorReporter: Send + Sync {
    fn report(&self, message: &str);
}

/// Standard output, flushed after every line.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl Sink for ConsoleSink {
    fn operation(&self) -> &'static str {
        "WriteConsole"
    }

    fn write_line(&self, line: &[u8]) -> io::Result<usize> {
        let mut out = io::stdout().lock();
        let written = out.write(line)?;
        out.flush()?;
        Ok(written)
    }
}

/// Append-only handle to the log file, held for the life of the process.
#[derive(Debug)]
pub struct FileSink {
    file: File,
}

impl FileSink {
    /// Create (or truncate) the log file for writing.
    ///
    /// On Windows other processes may open the file for reading only.
    pub fn create(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);

        #[cfg(windows)]
        {
            use std::os::windows::fs::OpenOptionsExt;
            use windows::Win32::Storage::FileSystem::FILE_SHARE_READ;
            options.share_mode(FILE_SHARE_READ.0);
        }

        let file = options.open(path)?;
        tracing::debug!(path = %path.display(), "log file opened");
        Ok(Self { file })
    }
}

impl Sink for FileSink {
    fn operation(&self) -> &'static str {
        "WriteFile"
    }

    fn write_line(&self, line: &[u8]) -> io::Result<usize> {
        (&self.file).write(line)
    }
}

/// Standard error, unbuffered, no trailing newline added.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrReporter;

impl ErrorReporter for StderrReporter {
    fn report(&self, message: &str) {
        // Nowhere left to report a failing stderr.
        let _ = io::stderr().lock().write_all(message.as_bytes());
    }
}
