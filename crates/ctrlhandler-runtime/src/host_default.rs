//! Host default handling applied after a handler declines an event.
//!
//! The console host terminates the process when no handler claims an event.
//! `TerminateProcess` reproduces that, exiting immediately even if the
//! coordinator is in the middle of its cleanup delay.

use std::sync::Arc;

use ctrlhandler_core::{ControlEventKind, HostDefaultMode};
use tracing::debug;

/// Action taken for an event no handler claimed.
#[cfg_attr(test, mockall::automock)]
pub trait HostDefault: Send + Sync {
    fn apply(&self, kind: ControlEventKind);
}

/// Exit the process with the host's conventional status for `kind`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminateProcess;

impl HostDefault for TerminateProcess {
    fn apply(&self, kind: ControlEventKind) {
        let code = termination_code(kind);
        debug!(event = %kind, code, "host default: terminating process");
        std::process::exit(code);
    }
}

/// Leave termination to the surrounding host.
#[derive(Debug, Default, Clone, Copy)]
pub struct PassiveHost;

impl HostDefault for PassiveHost {
    fn apply(&self, kind: ControlEventKind) {
        debug!(event = %kind, "host default: passive, process keeps running");
    }
}

/// Build the host default for a configured mode.
pub fn host_default_for(mode: HostDefaultMode) -> Arc<dyn HostDefault> {
    match mode {
        HostDefaultMode::Terminate => Arc::new(TerminateProcess),
        HostDefaultMode::Passive => Arc::new(PassiveHost),
    }
}

/// Exit status a killed process reports: `128 + signal` on Unix.
#[cfg(unix)]
pub fn termination_code(kind: ControlEventKind) -> i32 {
    use nix::sys::signal::Signal;

    let signal = match kind {
        ControlEventKind::Interrupt => Signal::SIGINT,
        ControlEventKind::Break => Signal::SIGQUIT,
        ControlEventKind::Close | ControlEventKind::Logoff => Signal::SIGHUP,
        ControlEventKind::Shutdown | ControlEventKind::Unknown(_) => Signal::SIGTERM,
    };
    128 + signal as i32
}

/// Exit status a killed process reports: `STATUS_CONTROL_C_EXIT` on Windows.
#[cfg(windows)]
pub fn termination_code(_kind: ControlEventKind) -> i32 {
    windows::Win32::Foundation::STATUS_CONTROL_C_EXIT.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(unix)]
    fn unix_codes_follow_shell_convention() {
        assert_eq!(termination_code(ControlEventKind::Interrupt), 130);
        assert_eq!(termination_code(ControlEventKind::Break), 131);
        assert_eq!(termination_code(ControlEventKind::Close), 129);
        assert_eq!(termination_code(ControlEventKind::Logoff), 129);
        assert_eq!(termination_code(ControlEventKind::Shutdown), 143);
        assert_eq!(termination_code(ControlEventKind::Unknown(12)), 143);
    }

    #[test]
    #[cfg(windows)]
    fn windows_code_is_control_c_exit() {
        #[allow(clippy::cast_possible_wrap)]
        let expected = 0xC000_013A_u32 as i32;
        assert_eq!(termination_code(ControlEventKind::Close), expected);
    }

    #[test]
    fn passive_host_returns() {
        PassiveHost.apply(ControlEventKind::Interrupt);
        host_default_for(HostDefaultMode::Passive).apply(ControlEventKind::Shutdown);
    }
}
