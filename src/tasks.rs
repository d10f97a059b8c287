//! Async task management for the non-blocking dataset fetch.
//!
//! The fetch runs in a background tokio task so the UI stays responsive.
//! Results come back over an unbounded channel that the main loop drains
//! with `try_recv()` between frames.
//!
//! Every spawn returns the task's [`AbortHandle`]. The main loop keeps
//! the handle for the in-flight fetch and aborts it when the application
//! exits or when a refresh supersedes it, so no request outlives its
//! purpose.

use tokio::sync::mpsc;
use tokio::task::AbortHandle;

use crate::api::error::ApiError;
use crate::api::types::RowData;
use crate::api::ResultsClient;

/// Messages sent from background tasks to the main event loop.
#[derive(Debug)]
pub enum DataMessage {
    /// The dataset fetch finished (initial load or refresh).
    RowsFetched(Result<Vec<RowData>, ApiError>),
}

/// Spawns background tasks for async operations.
#[derive(Clone)]
pub struct TaskSpawner {
    tx: mpsc::UnboundedSender<DataMessage>,
}

impl TaskSpawner {
    /// Create a new spawner with the given channel sender.
    pub fn new(tx: mpsc::UnboundedSender<DataMessage>) -> Self {
        Self { tx }
    }

    /// Spawn a task that fetches the full dataset.
    ///
    /// Returns the abort handle; dropping it does not cancel the task,
    /// calling `abort()` does.
    pub fn spawn_fetch_rows(&self, client: &ResultsClient) -> AbortHandle {
        let tx = self.tx.clone();
        let client = client.clone();
        let handle = tokio::spawn(async move {
            let result = client.fetch_rows().await;
            let _ = tx.send(DataMessage::RowsFetched(result));
        });
        handle.abort_handle()
    }
}

/// Create a new task channel and spawner.
///
/// The receiver is polled in the main event loop; the spawner is used to
/// start background work.
pub fn create_task_channel() -> (mpsc::UnboundedReceiver<DataMessage>, TaskSpawner) {
    let (tx, rx) = mpsc::unbounded_channel();
    (rx, TaskSpawner::new(tx))
}
