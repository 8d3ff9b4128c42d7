//! Control-signal subscription, dispatch and shutdown coordination.
//!
//! Two paths run concurrently once the process is up:
//! - the coordinator reads the control channel and owns the cleanup sequence;
//! - the dispatcher runs the control handler for each OS notification and
//!   applies host default handling when the handler declines it.
//!
//! The paths share only the [`Logger`](ctrlhandler_core::Logger) and are not
//! serialized against each other.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

pub mod coordinator;
pub mod dispatcher;
pub mod handler;
pub mod host_default;
pub mod signals;

pub use coordinator::{LINE_ENDING, MAX_LINE_LEN, ShutdownCoordinator};
pub use dispatcher::{dispatch, spawn_dispatcher};
pub use handler::{ControlHandler, Disposition, LoggingHandler};
pub use host_default::{
    HostDefault, PassiveHost, TerminateProcess, host_default_for, termination_code,
};
pub use signals::ControlSignals;
