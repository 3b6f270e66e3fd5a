//! Live elapsed-time display while a session is open

use std::sync::Arc;
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::output::{HourStyle, format_duration};

/// Sink for rendered `HH:MM:SS` strings
pub(crate) type Render = Arc<dyn Fn(&str) + Send + Sync>;

/// Periodic task that renders the elapsed time since `started`.
///
/// Renders once immediately, then every `interval` until cancelled.
/// Dropping the indicator cancels it.
pub(crate) struct StatusIndicator {
    cancel: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl StatusIndicator {
    pub(crate) fn spawn(started: DateTime<Utc>, interval: Duration, render: Render) -> Self {
        let (tx, rx) = mpsc::channel::<()>();
        let handle = thread::spawn(move || {
            loop {
                render(&elapsed_clock(started, Utc::now()));
                match rx.recv_timeout(interval) {
                    Err(RecvTimeoutError::Timeout) => {}
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            }
            debug!("status indicator stopped");
        });

        Self {
            cancel: Some(tx),
            handle: Some(handle),
        }
    }

    /// Stop ticking and wait for the ticker thread to exit
    pub(crate) fn cancel(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        if let Some(tx) = self.cancel.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take()
            && handle.join().is_err()
        {
            warn!("status indicator thread panicked");
        }
    }
}

impl Drop for StatusIndicator {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Elapsed time between two instants as `HH:MM:SS`
pub(crate) fn elapsed_clock(started: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let secs = (now - started).num_seconds().max(0) as u64;
    format_duration(secs, HourStyle::TwoDigit)
}
