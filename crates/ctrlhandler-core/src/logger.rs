//! Dual-sink timestamped logger.
//!
//! A line is `<date> <time> <message>\n`. It is written in full to the
//! console sink, then to the file sink. Sink failures are reported once on the
//! error channel and never reach the caller.

use std::fmt::{Display, Write as _};
use std::sync::Arc;

use chrono::{DateTime, Local, TimeZone};

use crate::error::SinkFailure;
use crate::sink::{ErrorReporter, Sink};

/// Locale-invariant date token, e.g. `03/07/2024`.
pub const DATE_FORMAT: &str = "%m/%d/%Y";

/// Locale-invariant time token, e.g. `09:05:01`.
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// Shared logger handle. Clones share the same sinks.
#[derive(Clone)]
pub struct Logger {
    console: Arc<dyn Sink>,
    file: Arc<dyn Sink>,
    errors: Arc<dyn ErrorReporter>,
}

impl Logger {
    pub fn new(
        console: Arc<dyn Sink>,
        file: Arc<dyn Sink>,
        errors: Arc<dyn ErrorReporter>,
    ) -> Self {
        Self {
            console,
            file,
            errors,
        }
    }

    /// Log a message stamped with the current local date and time.
    pub fn log(&self, message: &str) {
        self.log_at(&Local::now(), message);
    }

    /// Log a message stamped with the given instant.
    pub fn log_at<Tz>(&self, now: &DateTime<Tz>, message: &str)
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let line = self.render(now, message);
        for sink in [&self.console, &self.file] {
            if let Err(failure) = write_line(sink.as_ref(), line.as_bytes()) {
                self.errors.report(&failure.to_string());
            }
        }
    }

    fn render<Tz>(&self, now: &DateTime<Tz>, message: &str) -> String
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let mut line = String::with_capacity(message.len() + 22);
        for (pattern, operation) in [(DATE_FORMAT, "FormatDate"), (TIME_FORMAT, "FormatTime")] {
            match format_token(now, pattern) {
                Some(token) => {
                    line.push_str(&token);
                    line.push(' ');
                }
                None => self
                    .errors
                    .report(&SinkFailure::Format { operation }.to_string()),
            }
        }
        line.push_str(message);
        line.push('\n');
        line
    }
}

fn format_token<Tz>(now: &DateTime<Tz>, pattern: &str) -> Option<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut token = String::new();
    write!(token, "{}", now.format(pattern)).ok()?;
    (!token.is_empty()).then_some(token)
}

fn write_line(sink: &dyn Sink, line: &[u8]) -> Result<(), SinkFailure> {
    let operation = sink.operation();
    match sink.write_line(line) {
        Ok(written) if written == line.len() => Ok(()),
        Ok(written) => Err(SinkFailure::ShortWrite {
            operation,
            written,
            wanted: line.len(),
        }),
        Err(source) => Err(SinkFailure::Write { operation, source }),
    }
}
