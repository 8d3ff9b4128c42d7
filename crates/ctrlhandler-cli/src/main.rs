//! `ctrlhandlerdemo` entry point.
//!
//! Logs lifecycle events to stdout and `ctrlhandlerdemo.log`, waits for the
//! `stop` command on stdin, and reports console control events as they
//! arrive. Diagnostics go to stderr through `tracing` (`RUST_LOG`).

use ctrlhandler_cli::{CliError, EXIT_SUCCESS, bootstrap};
use ctrlhandler_core::{DemoConfig, ErrorReporter, StderrReporter};
use ctrlhandler_runtime::ShutdownCoordinator;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    // Priority: RUST_LOG env var > default (warn). Stdout carries the log lines.
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .ok(); // Ignore error if already initialized
}

async fn run() -> Result<(), CliError> {
    let config = DemoConfig::from_env().map_err(ctrlhandler_core::StartupError::from)?;
    let ctx = bootstrap(config)?;

    let stdin = BufReader::new(tokio::io::stdin());
    let trigger = ShutdownCoordinator::new(ctx.logger.clone(), stdin, &ctx.config)
        .run()
        .await;
    info!(%trigger, "shutdown sequence complete");
    Ok(())
}

#[tokio::main]
async fn main() {
    // Load environment variables before RUST_LOG is read
    dotenvy::dotenv().ok();

    // Initialize logging
    init_tracing();

    let code = match run().await {
        Ok(()) => EXIT_SUCCESS,
        Err(err) => {
            StderrReporter.report(&err.report_line());
            err.exit_code()
        }
    };

    // Blocking stdin reads must not hold up runtime shutdown.
    std::process::exit(code);
}
