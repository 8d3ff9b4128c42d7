//! Console control events and shutdown triggers.
//!
//! Raw codes follow the Windows console convention so the same numbering is
//! used on every platform, even where the OS delivers POSIX signals instead.

use std::fmt;

/// Raw code for an interactive interrupt (Ctrl+C).
pub const CTRL_C_CODE: u32 = 0;
/// Raw code for a break request (Ctrl+Break).
pub const CTRL_BREAK_CODE: u32 = 1;
/// Raw code for the console window being closed.
pub const CTRL_CLOSE_CODE: u32 = 2;
/// Raw code for a user logging off.
pub const CTRL_LOGOFF_CODE: u32 = 5;
/// Raw code for the system shutting down.
pub const CTRL_SHUTDOWN_CODE: u32 = 6;

/// Label rendered for codes outside the known set.
pub const UNKNOWN_LABEL: &str = "[unknown]";

/// A termination-intent notification delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlEventKind {
    Interrupt,
    Break,
    Close,
    Logoff,
    Shutdown,
    Unknown(u32),
}

impl ControlEventKind {
    /// Decode a raw control code.
    pub const fn from_code(code: u32) -> Self {
        match code {
            CTRL_C_CODE => Self::Interrupt,
            CTRL_BREAK_CODE => Self::Break,
            CTRL_CLOSE_CODE => Self::Close,
            CTRL_LOGOFF_CODE => Self::Logoff,
            CTRL_SHUTDOWN_CODE => Self::Shutdown,
            other => Self::Unknown(other),
        }
    }

    /// The raw control code for this event.
    pub const fn code(self) -> u32 {
        match self {
            Self::Interrupt => CTRL_C_CODE,
            Self::Break => CTRL_BREAK_CODE,
            Self::Close => CTRL_CLOSE_CODE,
            Self::Logoff => CTRL_LOGOFF_CODE,
            Self::Shutdown => CTRL_SHUTDOWN_CODE,
            Self::Unknown(code) => code,
        }
    }

    /// Human-readable label used in log lines.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Interrupt => "CTRL_C_EVENT",
            Self::Break => "CTRL_BREAK_EVENT",
            Self::Close => "CTRL_CLOSE_EVENT",
            Self::Logoff => "CTRL_LOGOFF_EVENT",
            Self::Shutdown => "CTRL_SHUTDOWN_EVENT",
            Self::Unknown(_) => UNKNOWN_LABEL,
        }
    }
}

impl fmt::Display for ControlEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What moved the coordinator into its terminating sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShutdownTrigger {
    /// The stop command arrived on the control channel.
    StopCommand(String),
    /// A control event was delivered by the host.
    ControlEvent(ControlEventKind),
}

impl fmt::Display for ShutdownTrigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StopCommand(command) => write!(f, "\"{command}\" command"),
            Self::ControlEvent(kind) => f.write_str(kind.label()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_round_trip_to_labels() {
        let cases = [
            (CTRL_C_CODE, "CTRL_C_EVENT"),
            (CTRL_BREAK_CODE, "CTRL_BREAK_EVENT"),
            (CTRL_CLOSE_CODE, "CTRL_CLOSE_EVENT"),
            (CTRL_LOGOFF_CODE, "CTRL_LOGOFF_EVENT"),
            (CTRL_SHUTDOWN_CODE, "CTRL_SHUTDOWN_EVENT"),
        ];
        for (code, label) in cases {
            let kind = ControlEventKind::from_code(code);
            assert_eq!(kind.label(), label);
            assert_eq!(kind.code(), code);
        }
    }

    #[test]
    fn unmapped_codes_use_placeholder() {
        for code in [3, 4, 7, 42, u32::MAX] {
            let kind = ControlEventKind::from_code(code);
            assert_eq!(kind, ControlEventKind::Unknown(code));
            assert_eq!(kind.to_string(), UNKNOWN_LABEL);
        }
    }

    #[test]
    fn trigger_display() {
        assert_eq!(
            ShutdownTrigger::StopCommand("stop".into()).to_string(),
            "\"stop\" command"
        );
        assert_eq!(
            ShutdownTrigger::ControlEvent(ControlEventKind::Close).to_string(),
            "CTRL_CLOSE_EVENT"
        );
    }
}
