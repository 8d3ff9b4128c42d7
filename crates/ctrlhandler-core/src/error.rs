//! Error types for startup and logging.
//!
//! Every failure is rendered on the error channel as
//! `"<Operation> failed: <os code>"`; failures without an OS code use `0`.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// OS error code carried by an I/O error, or `0` when there is none.
pub fn os_code(err: &io::Error) -> i32 {
    err.raw_os_error().unwrap_or_default()
}

/// Fatal errors raised before the coordinator starts waiting for commands.
#[derive(Debug, Error)]
pub enum StartupError {
    /// The log file could not be created or truncated.
    #[error("failed to create log file {}: {source}", .path.display())]
    CreateLogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The control-signal callback could not be registered with the host.
    #[error("failed to register control handler: {source}")]
    RegisterHandler {
        #[source]
        source: io::Error,
    },

    /// Environment configuration was malformed.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl StartupError {
    /// Name of the operation that failed, as shown on the error channel.
    pub const fn operation(&self) -> &'static str {
        match self {
            Self::CreateLogFile { .. } => "CreateLogFile",
            Self::RegisterHandler { .. } => "RegisterControlHandler",
            Self::Config(_) => "LoadConfig",
        }
    }

    /// OS error code behind the failure.
    pub fn os_code(&self) -> i32 {
        match self {
            Self::CreateLogFile { source, .. } | Self::RegisterHandler { source } => {
                os_code(source)
            }
            Self::Config(_) => 0,
        }
    }

    /// The line written to the error channel for this failure.
    pub fn report_line(&self) -> String {
        match self {
            Self::Config(err) => format!("{} failed: {err}", self.operation()),
            _ => format!("{} failed: {}", self.operation(), self.os_code()),
        }
    }
}

/// Malformed environment configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{var} must be a whole number of milliseconds, got {value:?}")]
    InvalidDelay { var: &'static str, value: String },

    #[error("{var} must be at most {max} ms, got {value}")]
    DelayTooLong {
        var: &'static str,
        value: u64,
        max: u64,
    },

    #[error("{var} must not contain line breaks")]
    MultilineStopCommand { var: &'static str },

    #[error("{var} must be \"terminate\" or \"passive\", got {value:?}")]
    InvalidHostDefault { var: &'static str, value: String },
}

/// A non-fatal failure of one log sink or timestamp token.
#[derive(Debug, Error)]
pub enum SinkFailure {
    #[error("{operation} failed: {}", os_code(.source))]
    Write {
        operation: &'static str,
        #[source]
        source: io::Error,
    },

    #[error("{operation} only wrote {written} bytes (wanted {wanted})")]
    ShortWrite {
        operation: &'static str,
        written: usize,
        wanted: usize,
    },

    #[error("{operation} failed: 0")]
    Format { operation: &'static str },
}
