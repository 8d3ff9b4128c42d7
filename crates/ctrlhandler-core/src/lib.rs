//! Core types for the console control-handler demo: control event kinds, log
//! sinks, the dual-sink logger, configuration and error types.
//!
//! No async runtime and no OS signal plumbing live here; see
//! `ctrlhandler-runtime` for those.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

pub mod config;
pub mod error;
pub mod event;
pub mod logger;
pub mod sink;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

// Re-export commonly used types for convenience
pub use config::{DEFAULT_CLEANUP_DELAY, DEFAULT_STOP_COMMAND, DemoConfig, HostDefaultMode};
pub use error::{ConfigError, SinkFailure, StartupError, os_code};
pub use event::{ControlEventKind, ShutdownTrigger, UNKNOWN_LABEL};
pub use logger::{DATE_FORMAT, Logger, TIME_FORMAT};
pub use sink::{ConsoleSink, DEFAULT_LOG_FILE, ErrorReporter, FileSink, Sink, StderrReporter};
