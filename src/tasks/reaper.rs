//! Cache Reaper Task
//!
//! Background task that periodically removes expired cache entries.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{oneshot, Mutex};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::cache::CacheStore;

/// Shortest period the reaper will tick at; `tokio::time::interval` rejects zero.
const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Longest period the reaper will tick at. Deadlines past this risk
/// overflowing the clock; entries older than their ttl are still refused on
/// read either way.
const MAX_PERIOD: Duration = Duration::from_secs(365 * 24 * 60 * 60);

// == Reaper Handle ==
/// Owns a running reaper task.
///
/// Dropping the handle closes the shutdown channel, which wakes the task
/// and makes it exit promptly; [`stop`](Self::stop) additionally waits for it.
#[derive(Debug)]
pub struct ReaperHandle {
    shutdown: oneshot::Sender<()>,
    task: JoinHandle<()>,
}

impl ReaperHandle {
    /// Signals the reaper to stop and waits until the task has exited.
    pub async fn stop(self) {
        // The task may already be gone if it panicked; nothing to signal then.
        let _ = self.shutdown.send(());

        if let Err(err) = self.task.await {
            if err.is_panic() {
                warn!("Cache reaper panicked: {}", err);
            }
        }
    }

    /// Returns true once the reaper task has exited.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

/// Spawns a task that sweeps `store` every `period`.
///
/// The first sweep happens one full period after spawning. Each sweep holds
/// the store's lock for its whole duration and reads the clock only after
/// acquiring it, so entries added while it waited are never judged against
/// an older instant.
///
/// Must be called from within a tokio runtime.
///
/// # Arguments
/// * `store` - Arc<Mutex<CacheStore>> shared with the owning cache
/// * `period` - Time between sweeps, clamped to `MIN_PERIOD..=MAX_PERIOD`
///
/// # Returns
/// A ReaperHandle that stops the task when told to or when dropped.
///
/// # Example
/// ```ignore
/// let store = Arc::new(Mutex::new(CacheStore::new(Duration::from_secs(10))));
/// let reaper = spawn_reaper(store.clone(), Duration::from_secs(10));
/// // Later:
/// reaper.stop().await;
/// ```
pub fn spawn_reaper(store: Arc<Mutex<CacheStore>>, period: Duration) -> ReaperHandle {
    let period = period.clamp(MIN_PERIOD, MAX_PERIOD);
    let (shutdown_tx, mut shutdown_rx) = oneshot::channel::<()>();

    let task = tokio::spawn(async move {
        debug!("Starting cache reaper with period of {:?}", period);

        let Some(start) = Instant::now().checked_add(period) else {
            warn!(
                "Cache reaper period {:?} exceeds the clock range; sweeping disabled",
                period
            );
            let _ = shutdown_rx.await;
            return;
        };
        let mut ticker = interval_at(start, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                // Fires on an explicit stop and when the handle is dropped.
                _ = &mut shutdown_rx => break,
                _ = ticker.tick() => {}
            }

            let (removed, remaining) = {
                let mut guard = store.lock().await;
                let removed = guard.reap_expired(Instant::now());
                (removed, guard.len())
            };

            if removed > 0 {
                info!(
                    "Cache reaper: removed {} expired entries, {} remaining",
                    removed, remaining
                );
            } else {
                debug!("Cache reaper: no expired entries found");
            }
        }

        debug!("Cache reaper stopped");
    });

    ReaperHandle {
        shutdown: shutdown_tx,
        task,
    }
}
