//! CLI error type and exit-code mapping.

use ctrlhandler_core::StartupError;
use thiserror::Error;

/// Status after the shutdown sequence completes.
pub const EXIT_SUCCESS: i32 = 0;

/// Status when the program cannot get as far as waiting for commands.
pub const EXIT_STARTUP_FAILURE: i32 = 1;

/// CLI-level error.
#[derive(Debug, Error)]
pub enum CliError {
    /// Fatal failure before the command loop started.
    #[error(transparent)]
    Startup(#[from] StartupError),
}

impl CliError {
    /// Map error to the process exit code.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Startup(_) => EXIT_STARTUP_FAILURE,
        }
    }

    /// Line written to the error channel, `"<Operation> failed: <code>"`.
    pub fn report_line(&self) -> String {
        match self {
            Self::Startup(err) => err.report_line(),
        }
    }
}
