//! Composition root for the `ctrlhandlerdemo` binary.
//!
//! [`bootstrap`] is the only place where the concrete sinks, the OS signal
//! subscription and the dispatcher are wired together.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Silence unused dev-dependency warnings; used by the binary tests
#[cfg(test)]
use tempfile as _;
#[cfg(all(test, unix))]
use nix as _;

// Used by main.rs only
use dotenvy as _;
use tracing_subscriber as _;

pub mod bootstrap;
pub mod error;

pub use bootstrap::{DemoContext, bootstrap};
pub use error::{CliError, EXIT_STARTUP_FAILURE, EXIT_SUCCESS};
