// src/synchronizer/mod.rs
//! Keeps a view in step with the service by re-fetching on a fixed cadence
//! and re-rendering from each fresh snapshot.
//!
//! Overlapping refreshes (a timer tick racing a submit-triggered refresh) are
//! not sequenced: whichever response lands last is what the view shows. Since
//! every render depends only on its own snapshot, the worst case is a stale
//! view for at most one polling interval.

use std::future::Future;
use std::time::Duration;

use crate::errors::FetchError;
use crate::poller::PollHandle;

pub mod detail;
pub mod list;

pub use detail::DetailSynchronizer;
pub use list::ListSynchronizer;

/// A view that can be brought up to date with one fetch.
pub trait Synchronizer: Clone + Send + Sync + 'static {
    /// Short name used in logs and poller labels.
    fn label(&self) -> &'static str;

    /// Fetches a fresh snapshot and re-renders. On failure the container is
    /// left exactly as it was.
    fn refresh(&self) -> impl Future<Output = Result<(), FetchError>> + Send;

    /// Starts polling: one refresh now, then one per `period`, for as long as
    /// the returned handle lives.
    fn mount(&self, period: Duration) -> PollHandle {
        let sync = self.clone();
        PollHandle::spawn(self.label(), period, move || tick(sync.clone()))
    }

    /// Like [`Synchronizer::mount`], for callers that already refreshed.
    fn mount_delayed(&self, period: Duration) -> PollHandle {
        let sync = self.clone();
        PollHandle::spawn_delayed(self.label(), period, move || tick(sync.clone()))
    }
}

/// One poll tick. Fetch errors end here so the loop always keeps going.
async fn tick<S: Synchronizer>(sync: S) {
    if let Err(e) = sync.refresh().await {
        log::warn!("⚠️  {} refresh failed, keeping last render: {}", sync.label(), e);
    }
}
