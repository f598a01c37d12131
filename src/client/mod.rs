// src/client/mod.rs

use crate::errors::{FetchError, SubmitError};
use crate::models::{ExpressionCollection, ExpressionId, ExpressionRecord};

pub mod http;

pub use http::HttpApi;

/// The three operations the views need from the evaluation service.
///
/// Each call is exactly one round trip: no caching, no retry, no backoff.
/// Failures are returned to the caller as soon as they happen.
pub trait ExpressionApi: Send + Sync {
    /// Sends `expression` verbatim for evaluation. The service, not the
    /// client, decides whether it is valid arithmetic.
    fn submit(
        &self,
        expression: &str,
    ) -> impl std::future::Future<Output = Result<(), SubmitError>> + Send;

    /// The full current collection in service order.
    fn fetch_collection(
        &self,
    ) -> impl std::future::Future<Output = Result<ExpressionCollection, FetchError>> + Send;

    /// One record. `ExpressionId` is never empty, so no malformed request
    /// can be built from a missing id.
    fn fetch_one(
        &self,
        id: &ExpressionId,
    ) -> impl std::future::Future<Output = Result<ExpressionRecord, FetchError>> + Send;
}
