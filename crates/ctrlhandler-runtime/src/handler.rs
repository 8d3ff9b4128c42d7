//! The control-signal callback.

use ctrlhandler_core::{ControlEventKind, Logger};

/// Whether a handler fully dealt with a control event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// The event was consumed; host default handling is skipped.
    Handled,
    /// Host default handling proceeds after the handler returns.
    NotHandled,
}

/// Callback invoked for each control event.
///
/// Implementations must be short and non-blocking, and must tolerate running
/// while the main path is logging.
#[cfg_attr(test, mockall::automock)]
pub trait ControlHandler: Send + Sync {
    fn handle(&self, kind: ControlEventKind) -> Disposition;
}

/// Logs `Received <label>` and defers to the host.
#[derive(Clone)]
pub struct LoggingHandler {
    logger: Logger,
}

impl LoggingHandler {
    pub const fn new(logger: Logger) -> Self {
        Self { logger }
    }
}

impl ControlHandler for LoggingHandler {
    fn handle(&self, kind: ControlEventKind) -> Disposition {
        self.logger.log(&format!("Received {kind}"));
        Disposition::NotHandled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ctrlhandler_core::testing::{MemoryReporter, MemorySink};
    use std::sync::Arc;

    #[test]
    fn logs_label_and_declines_every_event() {
        let console = Arc::new(MemorySink::console());
        let file = Arc::new(MemorySink::file());
        let logger = Logger::new(console, file.clone(), Arc::new(MemoryReporter::default()));
        let handler = LoggingHandler::new(logger);

        let kinds = [
            ControlEventKind::Interrupt,
            ControlEventKind::Break,
            ControlEventKind::Close,
            ControlEventKind::Logoff,
            ControlEventKind::Shutdown,
            ControlEventKind::Unknown(99),
        ];
        for kind in kinds {
            assert_eq!(handler.handle(kind), Disposition::NotHandled);
        }

        assert_eq!(
            file.messages(),
            vec![
                "Received CTRL_C_EVENT",
                "Received CTRL_BREAK_EVENT",
                "Received CTRL_CLOSE_EVENT",
                "Received CTRL_LOGOFF_EVENT",
                "Received CTRL_SHUTDOWN_EVENT",
                "Received [unknown]",
            ]
        );
    }
}
