//! Envelope Sweep Task
//!
//! Background task that periodically drops expired pagination envelopes.
//! Correctness never depends on it: `PageCache::lookup` checks expiry
//! itself. The sweep only keeps long-idle caches from holding dead entries.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::PageCache;

/// Spawns a background task that periodically sweeps one page cache.
///
/// The task runs in an infinite loop, sleeping for the specified interval
/// between sweeps. One task is spawned per entity kind's cache.
///
/// # Arguments
/// * `cache` - Shared handle to the cache to sweep
/// * `kind` - Entity kind label used in log lines
/// * `sweep_interval_secs` - Interval in seconds between sweeps
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during graceful shutdown.
pub fn spawn_sweep_task<T>(
    cache: Arc<RwLock<PageCache<T>>>,
    kind: &'static str,
    sweep_interval_secs: u64,
) -> JoinHandle<()>
where
    T: Clone + Send + Sync + 'static,
{
    let interval = Duration::from_secs(sweep_interval_secs);

    tokio::spawn(async move {
        info!(
            kind,
            interval_secs = sweep_interval_secs,
            "starting envelope sweep task"
        );

        loop {
            // Sleep for the configured interval
            tokio::time::sleep(interval).await;

            // Acquire write lock and drop expired envelopes
            let removed = {
                let mut cache_guard = cache.write().await;
                cache_guard.sweep_expired()
            };

            if removed > 0 {
                info!(kind, removed, "swept expired envelopes");
            } else {
                debug!(kind, "sweep found no expired envelopes");
            }
        }
    })
}
