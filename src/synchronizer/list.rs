// src/synchronizer/list.rs
use std::sync::Arc;

use crate::client::ExpressionApi;
use crate::errors::{FetchError, SubmitError};
use crate::render::{render, ListView};
use crate::synchronizer::Synchronizer;
use crate::view::{Container, InputField, Notifier};

/// Owns the "all expressions" view and the submission input.
pub struct ListSynchronizer<A> {
    api: Arc<A>,
    container: Container,
    input: InputField,
    notifier: Arc<dyn Notifier>,
}

impl<A> Clone for ListSynchronizer<A> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            container: self.container.clone(),
            input: self.input.clone(),
            notifier: self.notifier.clone(),
        }
    }
}

impl<A: ExpressionApi + 'static> ListSynchronizer<A> {
    pub fn new(
        api: Arc<A>,
        container: Container,
        input: InputField,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            api,
            container,
            input,
            notifier,
        }
    }

    /// Same list and container, with a separate input and alert target.
    /// Used to keep one client's pending text and errors away from another's.
    pub fn with_input(&self, input: InputField, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            api: self.api.clone(),
            container: self.container.clone(),
            input,
            notifier,
        }
    }

    pub fn container(&self) -> &Container {
        &self.container
    }

    pub fn input(&self) -> &InputField {
        &self.input
    }

    /// Submits the current input.
    ///
    /// On success the input is cleared and the list is re-fetched right away
    /// instead of waiting for the next tick. On failure the user is alerted,
    /// and both the input and the view are left as they were.
    pub async fn submit(&self) -> Result<(), SubmitError> {
        let expression = self.input.value();

        match self.api.submit(&expression).await {
            Ok(()) => {
                log::info!("✅ Submitted expression '{}'", expression);
                self.input.clear();
                if let Err(e) = self.refresh().await {
                    log::warn!("⚠️  Refresh after submit failed: {}", e);
                }
                Ok(())
            }
            Err(e) => {
                self.notifier
                    .alert(&format!("Failed to submit expression: {}", e));
                Err(e)
            }
        }
    }
}

impl<A: ExpressionApi + 'static> Synchronizer for ListSynchronizer<A> {
    fn label(&self) -> &'static str {
        "expressions"
    }

    async fn refresh(&self) -> Result<(), FetchError> {
        let collection = self.api.fetch_collection().await?;
        if self.container.replace(render(&ListView(&collection))) {
            log::debug!("🔄 Expression list re-rendered ({} items)", collection.len());
        }
        Ok(())
    }
}
