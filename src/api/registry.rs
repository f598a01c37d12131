// src/api/registry.rs
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;

use crate::client::ExpressionApi;
use crate::models::ExpressionId;
use crate::poller::PollHandle;
use crate::synchronizer::{DetailSynchronizer, Synchronizer};
use crate::view::Container;

struct MountedDetail {
    container: Container,
    // Dropping the entry releases the poller.
    _poller: PollHandle,
    last_viewed: Instant,
}

/// Detail views currently being polled, one per expression id. When more
/// than `capacity` are mounted the least recently viewed one is released.
pub struct DetailRegistry<A> {
    period: Duration,
    capacity: usize,
    mounted: Arc<Mutex<HashMap<ExpressionId, MountedDetail>>>,
    _api: std::marker::PhantomData<fn() -> A>,
}

impl<A> Clone for DetailRegistry<A> {
    fn clone(&self) -> Self {
        Self {
            period: self.period,
            capacity: self.capacity,
            mounted: self.mounted.clone(),
            _api: std::marker::PhantomData,
        }
    }
}

impl<A: ExpressionApi + 'static> DetailRegistry<A> {
    pub fn new(period: Duration, capacity: usize) -> Self {
        Self {
            period,
            capacity: capacity.max(1),
            mounted: Arc::new(Mutex::new(HashMap::new())),
            _api: std::marker::PhantomData,
        }
    }

    /// Returns the container of the view for `sync`'s id, mounting it on
    /// first use. A fresh mount is refreshed once before returning so the
    /// first page load is not blank.
    pub async fn open(&self, sync: DetailSynchronizer<A>) -> Container {
        if let Some(entry) = self.mounted.lock().await.get_mut(sync.id()) {
            entry.last_viewed = Instant::now();
            return entry.container.clone();
        }

        if let Err(e) = sync.refresh().await {
            log::warn!("⚠️  Initial fetch of expression {} failed: {}", sync.id(), e);
        }

        let mut mounted = self.mounted.lock().await;
        // Another request may have mounted the same id while we were fetching.
        if let Some(entry) = mounted.get_mut(sync.id()) {
            entry.last_viewed = Instant::now();
            return entry.container.clone();
        }

        log::info!("👁️  Mounting detail view for expression {}", sync.id());
        let container = sync.container().clone();
        mounted.insert(
            sync.id().clone(),
            MountedDetail {
                container: container.clone(),
                _poller: sync.mount_delayed(self.period),
                last_viewed: Instant::now(),
            },
        );

        while mounted.len() > self.capacity {
            let oldest = mounted
                .iter()
                .min_by_key(|(_, entry)| entry.last_viewed)
                .map(|(id, _)| id.clone());
            match oldest {
                Some(id) => {
                    log::info!("👋 Releasing detail view for expression {}", id);
                    mounted.remove(&id);
                }
                None => break,
            }
        }

        container
    }

    pub async fn len(&self) -> usize {
        self.mounted.lock().await.len()
    }

    pub async fn is_mounted(&self, id: &ExpressionId) -> bool {
        self.mounted.lock().await.contains_key(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synchronizer::testing::{record, ScriptedApi};

    fn detail(api: &Arc<ScriptedApi>, id: &str) -> DetailSynchronizer<ScriptedApi> {
        DetailSynchronizer::new(api.clone(), Container::new(), ExpressionId::new(id).unwrap())
    }

    #[tokio::test(start_paused = true)]
    async fn reopening_reuses_the_mounted_view() {
        let api = Arc::new(ScriptedApi::default());
        api.push_record(record("1", "2+2", "completed", Some("4")));
        let registry = DetailRegistry::new(Duration::from_secs(2), 4);

        let first = registry.open(detail(&api, "1")).await;
        assert!(first.snapshot().as_str().contains("2+2"));

        let again = registry.open(detail(&api, "1")).await;
        assert_eq!(again.snapshot(), first.snapshot());
        assert_eq!(api.one_calls(), 1);
        assert_eq!(registry.len().await, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn least_recently_viewed_is_released() {
        let api = Arc::new(ScriptedApi::default());
        let registry = DetailRegistry::new(Duration::from_secs(2), 2);

        registry.open(detail(&api, "a")).await;
        time_step().await;
        registry.open(detail(&api, "b")).await;
        time_step().await;
        registry.open(detail(&api, "a")).await;
        time_step().await;
        registry.open(detail(&api, "c")).await;

        assert_eq!(registry.len().await, 2);
        assert!(registry.is_mounted(&ExpressionId::new("a").unwrap()).await);
        assert!(!registry.is_mounted(&ExpressionId::new("b").unwrap()).await);
        assert!(registry.is_mounted(&ExpressionId::new("c").unwrap()).await);
    }

    async fn time_step() {
        tokio::time::advance(Duration::from_millis(10)).await;
    }
}
