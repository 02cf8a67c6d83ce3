// ── Debounced snapshot application ──
//
// The backend feed can deliver bursts of refreshes (retries, overlapping
// polls, reconnects). Rebuilding the tree for each one is wasted work, so
// arrivals within a quiet window collapse and only the latest snapshot is
// applied — trailing edge, like the dashboard's own update buffering.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::config::MonitorConfig;
use crate::error::CoreError;
use crate::model::App;

use super::StatusStore;

/// Handle to the background task that feeds a [`StatusStore`].
///
/// Dropping the handle detaches the task; call
/// [`shutdown()`](Self::shutdown) for an orderly stop that flushes any
/// buffered snapshot first.
pub struct SnapshotDebouncer {
    tx: mpsc::UnboundedSender<Vec<App>>,
    cancel: CancellationToken,
    handle: JoinHandle<()>,
}

impl SnapshotDebouncer {
    /// Spawn the debounce task with the configured quiet window.
    pub fn spawn(store: Arc<StatusStore>, config: &MonitorConfig) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let cancel = CancellationToken::new();
        let handle = tokio::spawn(debounce_task(
            store,
            rx,
            config.debounce_window,
            cancel.clone(),
        ));

        Self { tx, cancel, handle }
    }

    /// Hand a fresh snapshot to the debouncer.
    ///
    /// Returns [`CoreError::UpdaterClosed`] if the background task has
    /// already stopped.
    pub fn offer(&self, apps: Vec<App>) -> Result<(), CoreError> {
        self.tx.send(apps).map_err(|_| CoreError::UpdaterClosed)
    }

    /// Stop the task, applying any still-buffered snapshot on the way out.
    pub async fn shutdown(self) {
        self.cancel.cancel();
        let _ = self.handle.await;
    }
}

async fn debounce_task(
    store: Arc<StatusStore>,
    mut rx: mpsc::UnboundedReceiver<Vec<App>>,
    window: Duration,
    cancel: CancellationToken,
) {
    let mut pending: Option<Vec<App>> = None;

    'outer: loop {
        tokio::select! {
            biased;
            () = cancel.cancelled() => break 'outer,
            received = rx.recv() => {
                let Some(apps) = received else { break 'outer };
                pending = Some(apps);

                // Trailing edge: every new arrival restarts the quiet window.
                loop {
                    tokio::select! {
                        biased;
                        () = cancel.cancelled() => break 'outer,
                        more = rx.recv() => match more {
                            Some(apps) => pending = Some(apps),
                            None => break 'outer,
                        },
                        () = tokio::time::sleep(window) => break,
                    }
                }

                if let Some(apps) = pending.take() {
                    store.apply_snapshot(apps);
                }
            }
        }
    }

    // Snapshots can still sit in the channel when cancellation wins the
    // race; the newest one supersedes whatever was already buffered.
    while let Ok(apps) = rx.try_recv() {
        pending = Some(apps);
    }
    if let Some(apps) = pending.take() {
        debug!("flushing buffered snapshot on shutdown");
        store.apply_snapshot(apps);
    }
}
