// src/client/http.rs

use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;

use crate::client::ExpressionApi;
use crate::config::ClientConfig;
use crate::errors::{ClientError, ConfigurationError, FetchError, SubmitError};
use crate::models::{
    CollectionEnvelope, ExpressionCollection, ExpressionId, ExpressionRecord, RecordEnvelope,
    SubmitRequest,
};

/// reqwest-backed client for the evaluation service.
#[derive(Clone)]
pub struct HttpApi {
    client: Client,
    base: Url,
}

impl HttpApi {
    /// Creates a client rooted at `api_base`, e.g. `http://localhost:8080/api/v1`.
    pub fn new(client: Client, api_base: &str) -> Result<Self, ConfigurationError> {
        let base = Url::parse(api_base.trim_end_matches('/'))
            .map_err(|_| ConfigurationError::InvalidBaseUrl(api_base.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(ConfigurationError::InvalidBaseUrl(api_base.to_string()));
        }
        Ok(Self { client, base })
    }

    /// Builds the underlying HTTP client with the configured request timeout.
    pub fn from_config(config: &ClientConfig) -> Result<Self, ClientError> {
        let client = Client::builder().timeout(config.request_timeout).build()?;
        Ok(Self::new(client, &config.api_base)?)
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty();
            for segment in segments {
                path.push(segment);
            }
        }
        url
    }
}

impl ExpressionApi for HttpApi {
    async fn submit(&self, expression: &str) -> Result<(), SubmitError> {
        let url = self.endpoint(&["calculate"]);
        log::info!("📡 Submitting expression to {}", url);

        let resp = self
            .client
            .post(url)
            .json(&SubmitRequest { expression })
            .send()
            .await?;

        let status = resp.status();
        log::debug!("📥 Submit response status: {}", status);

        if !status.is_success() {
            let body = resp
                .text()
                .await
                .unwrap_or_else(|_| "Could not read error body".to_string());
            return Err(SubmitError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }

    async fn fetch_collection(&self) -> Result<ExpressionCollection, FetchError> {
        let url = self.endpoint(&["expressions"]);
        log::debug!("📡 Fetching collection from {}", url);

        let resp = self.client.get(url).send().await?;
        let envelope: CollectionEnvelope = read_json(resp).await?;
        let collection = envelope.into_collection();

        log::debug!("📥 Received {} expressions", collection.len());
        Ok(collection)
    }

    async fn fetch_one(&self, id: &ExpressionId) -> Result<ExpressionRecord, FetchError> {
        let url = self.endpoint(&["expressions", id.as_str()]);
        log::debug!("📡 Fetching expression {} from {}", id, url);

        let resp = self.client.get(url).send().await?;
        let envelope: RecordEnvelope = read_json(resp).await?;
        Ok(envelope.expression)
    }
}

async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T, FetchError> {
    let status = resp.status();
    if !status.is_success() {
        let body = resp
            .text()
            .await
            .unwrap_or_else(|_| "Could not read error body".to_string());
        return Err(FetchError::Status {
            status: status.as_u16(),
            body,
        });
    }

    let body = resp.text().await?;
    Ok(serde_json::from_str(&body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(base: &str) -> HttpApi {
        HttpApi::new(Client::new(), base).unwrap()
    }

    #[test]
    fn endpoints_hang_off_the_base_path() {
        let api = api("http://localhost:8080/api/v1/");
        assert_eq!(
            api.endpoint(&["calculate"]).as_str(),
            "http://localhost:8080/api/v1/calculate"
        );
        assert_eq!(
            api.endpoint(&["expressions"]).as_str(),
            "http://localhost:8080/api/v1/expressions"
        );
    }

    #[test]
    fn id_is_a_single_encoded_segment() {
        let api = api("http://localhost:8080/api/v1");
        let id = ExpressionId::new("a/b?c").unwrap();
        assert_eq!(
            api.endpoint(&["expressions", id.as_str()]).as_str(),
            "http://localhost:8080/api/v1/expressions/a%2Fb%3Fc"
        );
    }

    #[test]
    fn rejects_unusable_base() {
        assert!(HttpApi::new(Client::new(), "nonsense").is_err());
        assert!(HttpApi::new(Client::new(), "mailto:calc@example.com").is_err());
    }
}
