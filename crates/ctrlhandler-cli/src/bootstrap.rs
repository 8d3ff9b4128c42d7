//! CLI bootstrap - the composition root.
//!
//! Wires the production pieces together in startup order:
//! 1. Create the log file (fatal on failure)
//! 2. Build the dual-sink logger over stdout and the log file
//! 3. Register the control-signal subscription (fatal on failure)
//! 4. Spawn the dispatcher running the logging handler

use std::sync::Arc;

use ctrlhandler_core::{
    ConsoleSink, DemoConfig, FileSink, Logger, StartupError, StderrReporter,
};
use ctrlhandler_runtime::{ControlSignals, LoggingHandler, host_default_for, spawn_dispatcher};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

/// Everything the main path needs once startup has succeeded.
pub struct DemoContext {
    /// Resolved configuration.
    pub config: DemoConfig,
    /// Logger shared with the control handler.
    pub logger: Logger,
    /// Task forwarding OS notifications.
    pub listener: JoinHandle<()>,
    /// Task running the control handler.
    pub dispatcher: JoinHandle<()>,
}

/// Bootstrap the demo. Must be called from inside a tokio runtime.
pub fn bootstrap(config: DemoConfig) -> Result<DemoContext, StartupError> {
    let file = FileSink::create(&config.log_path).map_err(|source| {
        StartupError::CreateLogFile {
            path: config.log_path.clone(),
            source,
        }
    })?;
    let logger = Logger::new(
        Arc::new(ConsoleSink),
        Arc::new(file),
        Arc::new(StderrReporter),
    );

    let signals =
        ControlSignals::register().map_err(|source| StartupError::RegisterHandler { source })?;
    let (tx, rx) = mpsc::unbounded_channel();
    let listener = signals.forward(tx);
    let dispatcher = spawn_dispatcher(
        rx,
        Arc::new(LoggingHandler::new(logger.clone())),
        host_default_for(config.host_default),
    );

    debug!(
        log_path = %config.log_path.display(),
        cleanup_delay_ms = u64::try_from(config.cleanup_delay.as_millis()).unwrap_or(u64::MAX),
        host_default = ?config.host_default,
        "bootstrap complete"
    );

    Ok(DemoContext {
        config,
        logger,
        listener,
        dispatcher,
    })
}
