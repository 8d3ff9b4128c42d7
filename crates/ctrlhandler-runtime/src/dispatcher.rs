//! Runs the control handler for each delivered event.
//!
//! Events are handled one at a time in delivery order on a runtime task, so
//! handling is concurrent with the coordinator but never reorders events.
//! Nothing here is synchronized with the coordinator: host default handling
//! may end the process while cleanup is still running.

use std::sync::Arc;

use ctrlhandler_core::ControlEventKind;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::handler::{ControlHandler, Disposition};
use crate::host_default::HostDefault;

/// Spawn the dispatcher task. It ends when every sender is dropped.
pub fn spawn_dispatcher(
    mut events: mpsc::UnboundedReceiver<ControlEventKind>,
    handler: Arc<dyn ControlHandler>,
    host_default: Arc<dyn HostDefault>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(kind) = events.recv().await {
            dispatch(handler.as_ref(), host_default.as_ref(), kind);
        }
        debug!("control event channel closed");
    })
}

/// Handle a single event synchronously.
pub fn dispatch(handler: &dyn ControlHandler, host_default: &dyn HostDefault, kind: ControlEventKind) {
    let disposition = handler.handle(kind);
    debug!(event = %kind, ?disposition, "control event dispatched");
    if disposition == Disposition::NotHandled {
        host_default.apply(kind);
    }
}
