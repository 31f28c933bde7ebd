//! Cancellable repeating timer backing the live tracking view.
//!
//! The timer is a scoped resource: it starts ticking when created and its
//! task is aborted when the handle is dropped, so a view that goes away can
//! never receive further updates from it.

use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};

pub struct TrackingTimer {
    generation: u64,
    task: JoinHandle<()>,
}

impl TrackingTimer {
    /// Spawn a timer on `runtime` that calls `sink(generation)` every
    /// `period`, starting one period from now.
    ///
    /// The task ends on its own once `sink` returns `false` (receiver gone).
    pub fn start<F>(runtime: &Handle, generation: u64, period: Duration, sink: F) -> Self
    where
        F: Fn(u64) -> bool + Send + 'static,
    {
        let task = runtime.spawn(async move {
            let mut ticker = interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // First tick completes immediately.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                if !sink(generation) {
                    tracing::debug!(generation, "Tracking tick receiver gone, stopping timer");
                    break;
                }
            }
        });
        tracing::debug!(
            generation,
            period_ms = period.as_millis() as u64,
            "Tracking timer started"
        );
        Self { generation, task }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }
}

impl Drop for TrackingTimer {
    fn drop(&mut self) {
        self.task.abort();
        tracing::debug!(generation = self.generation, "Tracking timer released");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    #[tokio::test(start_paused = true)]
    async fn ticks_every_period_until_dropped() {
        let count = Arc::new(AtomicU32::new(0));
        let counter = Arc::clone(&count);
        let timer = TrackingTimer::start(&Handle::current(), 7, Duration::from_secs(1), move |g| {
            assert_eq!(g, 7);
            counter.fetch_add(1, Ordering::SeqCst);
            true
        });

        tokio::time::sleep(Duration::from_millis(3500)).await;
        assert_eq!(count.load(Ordering::SeqCst), 3);
        assert!(timer.is_running());

        drop(timer);
        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(count.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn stops_when_sink_refuses() {
        let timer = TrackingTimer::start(&Handle::current(), 1, Duration::from_secs(1), |_| false);
        tokio::time::sleep(Duration::from_millis(1500)).await;
        tokio::task::yield_now().await;
        assert!(!timer.is_running());
    }
}
