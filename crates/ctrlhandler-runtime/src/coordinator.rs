//! Shutdown coordinator: waits for the stop command on the control channel,
//! then runs the timed cleanup sequence.
//!
//! End-of-input is not a shutdown trigger. After EOF the read loop parks
//! forever and the process only ends through a control event's host default
//! handling (or an external kill).

use std::time::Duration;

use ctrlhandler_core::{DemoConfig, Logger, ShutdownTrigger};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt};
use tokio::time::Instant;
use tracing::{debug, warn};

/// Line terminator the stop command must carry on this platform.
pub const LINE_ENDING: &str = if cfg!(windows) { "\r\n" } else { "\n" };

/// Longest control channel line kept in memory. Longer lines are skipped.
pub const MAX_LINE_LEN: usize = 256;

pub struct ShutdownCoordinator<R> {
    logger: Logger,
    input: R,
    stop_command: String,
    stop_line: Vec<u8>,
    line_limit: usize,
    cleanup_delay: Duration,
}

impl<R> ShutdownCoordinator<R>
where
    R: AsyncBufRead + Unpin,
{
    pub fn new(logger: Logger, input: R, config: &DemoConfig) -> Self {
        let stop_line = format!("{}{LINE_ENDING}", config.stop_command).into_bytes();
        Self {
            logger,
            input,
            stop_command: config.stop_command.clone(),
            line_limit: stop_line.len().max(MAX_LINE_LEN),
            stop_line,
            cleanup_delay: config.cleanup_delay,
        }
    }

    /// Wait for the stop command, then run the cleanup sequence.
    pub async fn run(mut self) -> ShutdownTrigger {
        let trigger = self.wait_for_stop().await;
        self.terminate(&trigger).await;
        trigger
    }

    /// Read lines until one matches the stop command exactly.
    ///
    /// Each read is capped at the line limit; the rest of an over-long line is
    /// discarded up to its terminator. Never returns once the control channel
    /// reaches end-of-input.
    pub async fn wait_for_stop(&mut self) -> ShutdownTrigger {
        self.logger
            .log(&format!("Waiting for \"{}\" command...", self.stop_command));

        let limit = u64::try_from(self.line_limit).unwrap_or(u64::MAX);
        let mut line = Vec::with_capacity(self.line_limit);
        let mut skipping = false;
        loop {
            line.clear();
            let read = (&mut self.input)
                .take(limit)
                .read_until(b'\n', &mut line)
                .await;
            match read {
                Ok(0) => break,
                Ok(n) => {
                    if !skipping {
                        if line == self.stop_line {
                            return ShutdownTrigger::StopCommand(self.stop_command.clone());
                        }
                        debug!(bytes = n, "ignoring control channel line");
                    }
                    skipping = line.last() != Some(&b'\n');
                }
                Err(err) => {
                    warn!(error = %err, "control channel read failed, treating as EOF");
                    break;
                }
            }
        }

        self.logger.log("Received EOF on stdin");
        debug!("control channel closed, read loop suspended");
        std::future::pending().await
    }

    /// Log the trigger and hold the process for the cleanup delay.
    pub async fn terminate(&self, trigger: &ShutdownTrigger) {
        self.logger.log(&format!("Exiting due to {trigger}"));
        self.logger.log("Simulating cleanup on exit...");
        let started = Instant::now();
        tokio::time::sleep(self.cleanup_delay).await;
        debug!(
            elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
            "cleanup delay finished"
        );
        self.logger.log("Exiting after simulated cleanup");
    }
}
