// src/synchronizer/detail.rs
use std::sync::Arc;

use crate::client::ExpressionApi;
use crate::errors::{ConfigurationError, FetchError};
use crate::models::ExpressionId;
use crate::navigation;
use crate::render::{render, DetailView};
use crate::synchronizer::Synchronizer;
use crate::view::Container;

/// Owns the detail panel of one expression. Read-only.
pub struct DetailSynchronizer<A> {
    api: Arc<A>,
    id: ExpressionId,
    container: Container,
}

impl<A> Clone for DetailSynchronizer<A> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            id: self.id.clone(),
            container: self.container.clone(),
        }
    }
}

impl<A: ExpressionApi + 'static> DetailSynchronizer<A> {
    pub fn new(api: Arc<A>, container: Container, id: ExpressionId) -> Self {
        Self { api, id, container }
    }

    /// Builds the view for the page at `location`. The `id` query parameter
    /// is read once here and never again; without it construction fails and
    /// nothing is fetched.
    pub fn from_location(
        api: Arc<A>,
        container: Container,
        location: &str,
    ) -> Result<Self, ConfigurationError> {
        let id = navigation::id_from_location(location).ok_or_else(|| {
            ConfigurationError::MissingId {
                location: location.to_string(),
            }
        })?;
        Ok(Self::new(api, container, id))
    }

    pub fn id(&self) -> &ExpressionId {
        &self.id
    }

    pub fn container(&self) -> &Container {
        &self.container
    }
}

impl<A: ExpressionApi + 'static> Synchronizer for DetailSynchronizer<A> {
    fn label(&self) -> &'static str {
        "expression detail"
    }

    async fn refresh(&self) -> Result<(), FetchError> {
        let record = self.api.fetch_one(&self.id).await?;
        if self.container.replace(render(&DetailView(&record))) {
            log::debug!("🔄 Expression {} re-rendered ({})", self.id, record.status);
        }
        Ok(())
    }
}
