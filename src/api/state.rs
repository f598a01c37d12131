// src/api/state.rs
use crate::api::registry::DetailRegistry;
use crate::client::HttpApi;
use crate::config::ClientConfig;
use crate::errors::Result;
use crate::synchronizer::ListSynchronizer;
use crate::view::{AlertBuffer, Container, InputField};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ClientConfig>,
    pub api: Arc<HttpApi>,
    pub list: ListSynchronizer<HttpApi>,
    pub details: DetailRegistry<HttpApi>,
}

impl AppState {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let api = Arc::new(HttpApi::from_config(&config)?);
        // Submissions run on per-request copies with their own input and alerts.
        let list = ListSynchronizer::new(
            api.clone(),
            Container::new(),
            InputField::default(),
            Arc::new(AlertBuffer::default()),
        );
        let details = DetailRegistry::new(config.detail_interval, config.max_detail_views);

        Ok(Self {
            config: Arc::new(config),
            api,
            list,
            details,
        })
    }
}
