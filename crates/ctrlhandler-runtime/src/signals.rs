//! OS control-signal subscription.
//!
//! Registration installs the process-wide listeners once. Notifications are
//! then forwarded, in delivery order, into a channel consumed by the
//! dispatcher.
//!
//! # Platform mapping
//! - Windows: the five console control events map one-to-one.
//! - Unix: SIGINT → Interrupt, SIGQUIT → Break, SIGHUP → Close,
//!   SIGTERM → Shutdown. There is no logoff notification.
//!
//! Events that become ready together are taken in signal-number order on
//! Unix and control-code order on Windows, matching the order the OS
//! delivers them.
//!
//! # Windows limitation
//! While listeners are registered, tokio's console handler reports every
//! event to the OS as handled, so the `NotHandled` disposition never reaches
//! the console host. [`TerminateProcess`](crate::TerminateProcess) stands in
//! for the OS default; in `passive` mode nothing ends the process for
//! Ctrl+C or Ctrl+Break, while close, logoff and shutdown still end it when
//! the OS timeout for those events expires.

use std::io;

use ctrlhandler_core::ControlEventKind;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

/// Installed control-signal listeners.
#[cfg(unix)]
pub struct ControlSignals {
    interrupt: tokio::signal::unix::Signal,
    quit: tokio::signal::unix::Signal,
    hangup: tokio::signal::unix::Signal,
    terminate: tokio::signal::unix::Signal,
}

/// Installed control-signal listeners.
#[cfg(windows)]
pub struct ControlSignals {
    ctrl_c: tokio::signal::windows::CtrlC,
    ctrl_break: tokio::signal::windows::CtrlBreak,
    ctrl_close: tokio::signal::windows::CtrlClose,
    ctrl_logoff: tokio::signal::windows::CtrlLogoff,
    ctrl_shutdown: tokio::signal::windows::CtrlShutdown,
}

#[cfg(unix)]
impl ControlSignals {
    /// Register listeners with the host. Must be called inside a tokio runtime.
    pub fn register() -> io::Result<Self> {
        use tokio::signal::unix::{SignalKind, signal};

        let signals = Self {
            interrupt: signal(SignalKind::interrupt())?,
            quit: signal(SignalKind::quit())?,
            hangup: signal(SignalKind::hangup())?,
            terminate: signal(SignalKind::terminate())?,
        };
        debug!("control handler installed for SIGINT, SIGQUIT, SIGHUP, SIGTERM");
        Ok(signals)
    }

    /// Next notification, or `None` once every listener has closed.
    pub async fn recv(&mut self) -> Option<ControlEventKind> {
        // Pending signals are delivered lowest number first; poll in that order.
        tokio::select! {
            biased;
            Some(()) = self.hangup.recv() => Some(ControlEventKind::Close),
            Some(()) = self.interrupt.recv() => Some(ControlEventKind::Interrupt),
            Some(()) = self.quit.recv() => Some(ControlEventKind::Break),
            Some(()) = self.terminate.recv() => Some(ControlEventKind::Shutdown),
            else => None,
        }
    }
}

#[cfg(windows)]
impl ControlSignals {
    /// Register listeners with the host. Must be called inside a tokio runtime.
    pub fn register() -> io::Result<Self> {
        use tokio::signal::windows::{ctrl_break, ctrl_c, ctrl_close, ctrl_logoff, ctrl_shutdown};

        let signals = Self {
            ctrl_c: ctrl_c()?,
            ctrl_break: ctrl_break()?,
            ctrl_close: ctrl_close()?,
            ctrl_logoff: ctrl_logoff()?,
            ctrl_shutdown: ctrl_shutdown()?,
        };
        debug!("console control handler installed");
        Ok(signals)
    }

    /// Next notification, or `None` once every listener has closed.
    pub async fn recv(&mut self) -> Option<ControlEventKind> {
        // Ordered by control code.
        tokio::select! {
            biased;
            Some(()) = self.ctrl_c.recv() => Some(ControlEventKind::Interrupt),
            Some(()) = self.ctrl_break.recv() => Some(ControlEventKind::Break),
            Some(()) = self.ctrl_close.recv() => Some(ControlEventKind::Close),
            Some(()) = self.ctrl_logoff.recv() => Some(ControlEventKind::Logoff),
            Some(()) = self.ctrl_shutdown.recv() => Some(ControlEventKind::Shutdown),
            else => None,
        }
    }
}

impl ControlSignals {
    /// Spawn the listener task that pushes every notification into `tx`.
    ///
    /// The task ends when the receiving side is dropped.
    pub fn forward(mut self, tx: mpsc::UnboundedSender<ControlEventKind>) -> JoinHandle<()> {
        tokio::spawn(async move {
            while let Some(kind) = self.recv().await {
                debug!(event = %kind, code = kind.code(), "control event delivered");
                if tx.send(kind).is_err() {
                    break;
                }
            }
        })
    }
}
