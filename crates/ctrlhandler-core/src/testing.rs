//! In-memory sinks and reporters for tests.

use std::io;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::sink::{ErrorReporter, Sink};

/// Sink that keeps every accepted byte in memory.
#[derive(Debug)]
pub struct MemorySink {
    operation: &'static str,
    buf: Mutex<Vec<u8>>,
}

impl MemorySink {
    pub const fn new(operation: &'static str) -> Self {
        Self {
            operation,
            buf: Mutex::new(Vec::new()),
        }
    }

    /// Stand-in for the console sink.
    pub const fn console() -> Self {
        Self::new("WriteConsole")
    }

    /// Stand-in for the log file sink.
    pub const fn file() -> Self {
        Self::new("WriteFile")
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buf.lock().unwrap()).into_owned()
    }

    /// Complete lines written so far, without terminators.
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_owned).collect()
    }

    /// Messages of the lines written so far, with date and time tokens removed.
    pub fn messages(&self) -> Vec<String> {
        self.lines()
            .iter()
            .map(|line| line.splitn(3, ' ').nth(2).unwrap_or_default().to_owned())
            .collect()
    }
}

impl Sink for MemorySink {
    fn operation(&self) -> &'static str {
        self.operation
    }

    fn write_line(&self, line: &[u8]) -> io::Result<usize> {
        self.buf.lock().unwrap().extend_from_slice(line);
        Ok(line.len())
    }
}

/// Sink whose every write fails with a fixed OS error code.
#[derive(Debug)]
pub struct FailingSink {
    operation: &'static str,
    code: i32,
    attempts: AtomicUsize,
}

impl FailingSink {
    pub const fn new(operation: &'static str, code: i32) -> Self {
        Self {
            operation,
            code,
            attempts: AtomicUsize::new(0),
        }
    }

    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

impl Sink for FailingSink {
    fn operation(&self) -> &'static str {
        self.operation
    }

    fn write_line(&self, _line: &[u8]) -> io::Result<usize> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(io::Error::from_raw_os_error(self.code))
    }
}

/// Sink that accepts at most `limit` bytes per write.
#[derive(Debug)]
pub struct ShortSink {
    operation: &'static str,
    limit: usize,
}

impl ShortSink {
    pub const fn new(operation: &'static str, limit: usize) -> Self {
        Self { operation, limit }
    }
}

impl Sink for ShortSink {
    fn operation(&self) -> &'static str {
        self.operation
    }

    fn write_line(&self, line: &[u8]) -> io::Result<usize> {
        Ok(line.len().min(self.limit))
    }
}

/// Error channel that records each report.
#[derive(Debug, Default)]
pub struct MemoryReporter {
    messages: Mutex<Vec<String>>,
}

impl MemoryReporter {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl ErrorReporter for MemoryReporter {
    fn report(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_owned());
    }
}
