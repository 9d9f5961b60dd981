//! Polling scheduler — refreshes entity state on a fixed interval.

use std::time::Duration;

use tokio::task::JoinHandle;

use crate::ports::PolledEntity;

/// Periodically awaits `update` on one entity.
///
/// Updates run strictly one after another; a slow poll delays the next
/// tick rather than overlapping it.
pub struct Poller {
    handle: JoinHandle<()>,
}

impl Poller {
    /// Spawn the poll loop.
    ///
    /// The first update fires after one full interval; setup is expected
    /// to have run an initial poll already.
    pub fn spawn<E>(entity: E, interval: Duration) -> Self
    where
        E: PolledEntity + 'static,
    {
        tracing::debug!(interval_secs = interval.as_secs(), "poll loop started");

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            // The first tick of an interval completes immediately.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                entity.update().await;
            }
        });

        Self { handle }
    }

    /// Stop polling. An in-flight update is aborted with the loop.
    pub fn stop(self) {
        self.handle.abort();
        tracing::debug!("poll loop stopped");
    }
}
