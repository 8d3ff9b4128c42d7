//! Ordering of control events that are pending at the same time.
//!
//! Runs in its own test binary so raised signals cannot reach listeners
//! registered by the unit tests.

#![cfg(unix)]

use std::time::Duration;

use ctrlhandler_core::ControlEventKind;
use ctrlhandler_runtime::ControlSignals;
use nix::sys::signal::{Signal, raise};
use tokio::sync::mpsc;

#[tokio::test]
async fn pending_signals_are_forwarded_in_signal_number_order() {
    let signals = ControlSignals::register().unwrap();
    let (tx, mut rx) = mpsc::unbounded_channel();

    // Both are pending before the listener task is first polled.
    raise(Signal::SIGHUP).unwrap();
    raise(Signal::SIGINT).unwrap();
    let task = signals.forward(tx);

    let mut received = Vec::new();
    for _ in 0..2 {
        let kind = tokio::time::timeout(Duration::from_secs(5), rx.recv())
            .await
            .expect("signal not forwarded")
            .unwrap();
        received.push(kind);
    }
    task.abort();

    assert_eq!(
        received,
        vec![ControlEventKind::Close, ControlEventKind::Interrupt]
    );
}
