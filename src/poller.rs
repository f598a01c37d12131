// src/poller.rs
use std::future::Future;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

/// A repeating task bound to the lifetime of a view. The task is aborted
/// when the handle is cancelled or dropped.
pub struct PollHandle {
    label: &'static str,
    task: JoinHandle<()>,
}

impl PollHandle {
    /// Runs `tick` immediately, then once per `period`.
    pub fn spawn<F, Fut>(label: &'static str, period: Duration, tick: F) -> Self
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        Self::start(label, Instant::now(), period, tick)
    }

    /// Like [`PollHandle::spawn`], but the first tick waits one period.
    pub fn spawn_delayed<F, Fut>(label: &'static str, period: Duration, tick: F) -> Self
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        Self::start(label, Instant::now() + period, period, tick)
    }

    fn start<F, Fut>(label: &'static str, first: Instant, period: Duration, mut tick: F) -> Self
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        log::debug!("mounting poller '{}' every {:?}", label, period);
        let task = tokio::spawn(async move {
            let mut interval = time::interval_at(first, period);
            // A slow tick pushes the schedule back instead of queueing a burst.
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                tick().await;
            }
        });
        Self { label, task }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }

    pub fn cancel(&self) {
        if !self.task.is_finished() {
            log::debug!("releasing poller '{}'", self.label);
        }
        self.task.abort();
    }
}

impl Drop for PollHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counter() -> (Arc<AtomicUsize>, impl FnMut() -> futures::future::Ready<()> + Send + 'static) {
        let count = Arc::new(AtomicUsize::new(0));
        let c = count.clone();
        let tick = move || {
            c.fetch_add(1, Ordering::SeqCst);
            futures::future::ready(())
        };
        (count, tick)
    }

    async fn settle() {
        for _ in 0..8 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn ticks_immediately_then_every_period() {
        let (count, tick) = counter();
        let _handle = PollHandle::spawn("test", Duration::from_secs(5), tick);

        settle().await;
        assert_eq!(count.load(Ordering::SeqCst), 1);

        time::advance(Duration::from_secs(5)).await;
        settle().await;
        assert_eq!(count.load(Ordering::SeqCst), 2);

        for _ in 0..2 {
            time::advance(Duration::from_secs(5)).await;
            settle().await;
        }
        assert_eq!(count.load(Ordering::SeqCst), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn delayed_start_waits_one_period() {
        let (count, tick) = counter();
        let _handle = PollHandle::spawn_delayed("test", Duration::from_secs(2), tick);

        settle().await;
        assert_eq!(count.load(Ordering::SeqCst), 0);

        time::advance(Duration::from_secs(2)).await;
        settle().await;
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn drop_stops_ticking() {
        let (count, tick) = counter();
        let handle = PollHandle::spawn("test", Duration::from_secs(1), tick);
        settle().await;
        drop(handle);

        time::advance(Duration::from_secs(10)).await;
        settle().await;
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn slow_tick_delays_schedule() {
        let count = Arc::new(AtomicUsize::new(0));
        let c = count.clone();
        let _handle = PollHandle::spawn("slow", Duration::from_secs(1), move || {
            let c = c.clone();
            async move {
                c.fetch_add(1, Ordering::SeqCst);
                time::sleep(Duration::from_secs(3)).await;
            }
        });
        settle().await;
        assert_eq!(count.load(Ordering::SeqCst), 1);

        // 0s tick runs until 3s; the next starts at 3s, not as a catch-up burst.
        time::advance(Duration::from_millis(3500)).await;
        settle().await;
        assert_eq!(count.load(Ordering::SeqCst), 2);

        // The ticks missed between 1s and 3s are never replayed.
        time::advance(Duration::from_secs(1)).await;
        settle().await;
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }
}
