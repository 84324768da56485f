//! Polling controller for book snapshots
//!
//! A single spawned task owns the state cell and runs every fetch inline, so
//! there is exactly one logical fetch timeline and last-write-wins holds
//! trivially. Consumers clone an immutable snapshot of
//! `{ data, loading, error }`; a failed fetch sets the error string and keeps
//! the previous data, so a backend outage degrades to a stale book rather
//! than an empty one.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Notify, RwLock};
use tokio::time::MissedTickBehavior;
use tracing::{debug, warn};

use crate::book::BookSummary;
use crate::error::Result;

/// Latest snapshot plus fetch status
#[derive(Debug, Clone, Default)]
pub struct SnapshotState {
    /// Last successfully fetched summary; retained across failures
    pub data: Option<BookSummary>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Handle to a running scheduler
pub struct RefreshHandle {
    state: Arc<RwLock<SnapshotState>>,
    refresh: Arc<Notify>,
    shutdown: Arc<Notify>,
}

impl RefreshHandle {
    /// Clone the current snapshot state.
    pub async fn snapshot(&self) -> SnapshotState {
        self.state.read().await.clone()
    }

    /// Force an immediate fetch ahead of the next scheduled tick.
    ///
    /// The fetch runs on the scheduler's own timeline; it does not cancel
    /// anything already in flight.
    pub fn refresh(&self) {
        self.refresh.notify_one();
    }

    /// Stop scheduling further fetches.
    ///
    /// A fetch already in flight completes and still updates state.
    pub fn stop(&self) {
        self.shutdown.notify_one();
    }
}

/// Fixed-interval polling scheduler
pub struct RefreshScheduler;

impl RefreshScheduler {
    /// Spawn the polling task.
    ///
    /// `fetch` is invoked once immediately, then on every interval tick and
    /// on every manual refresh, until the handle is stopped.
    pub fn spawn<F, Fut>(interval: Duration, fetch: F) -> RefreshHandle
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<BookSummary>> + Send + 'static,
    {
        let state = Arc::new(RwLock::new(SnapshotState {
            data: None,
            loading: true,
            error: None,
        }));
        let refresh = Arc::new(Notify::new());
        let shutdown = Arc::new(Notify::new());

        let task_state = state.clone();
        let task_refresh = refresh.clone();
        let task_shutdown = shutdown.clone();

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            // A slow fetch must not cause a burst of catch-up ticks.
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                tokio::select! {
                    _ = ticker.tick() => {}
                    _ = task_refresh.notified() => {
                        debug!("Manual refresh requested");
                    }
                    _ = task_shutdown.notified() => {
                        debug!("Scheduler stopped");
                        break;
                    }
                }

                task_state.write().await.loading = true;

                let result = fetch().await;

                let mut state = task_state.write().await;
                state.loading = false;
                match result {
                    Ok(summary) => {
                        state.data = Some(summary);
                        state.error = None;
                    }
                    Err(e) => {
                        // Keep the previous snapshot; stale beats empty.
                        warn!(error = %e, "Snapshot fetch failed");
                        state.error = Some(e.to_string());
                    }
                }
            }
        });

        RefreshHandle {
            state,
            refresh,
            shutdown,
        }
    }
}
