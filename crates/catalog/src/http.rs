//! HTTP implementation of the catalog contract.

use std::env;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;

use journey_core::model::{CategoryId, PhaseId, TopicId};

use crate::api::{CatalogApi, CatalogError};
use crate::dto::{
    CategoryDetailResponse, PhaseDetailResponse, PhaseRecord, TopicDetailResponse,
};

/// Connection settings for the hosted catalog.
#[derive(Clone, Debug)]
pub struct CatalogConfig {
    pub base_url: String,
    pub bearer_token: String,
}

impl CatalogConfig {
    /// Reads the catalog endpoint and credential from the environment.
    ///
    /// Returns `None` when no token is configured; obtaining and
    /// refreshing the credential is the session layer's job.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let bearer_token = env::var("JOURNEY_API_TOKEN").ok()?;
        if bearer_token.trim().is_empty() {
            return None;
        }
        let base_url = env::var("JOURNEY_API_BASE_URL")
            .unwrap_or_else(|_| "https://api.steadypath.app/v1".into());
        Some(Self {
            base_url,
            bearer_token,
        })
    }
}

/// `CatalogApi` over HTTP with bearer auth.
#[derive(Clone)]
pub struct HttpCatalog {
    client: Client,
    config: CatalogConfig,
}

impl HttpCatalog {
    #[must_use]
    pub fn new(config: CatalogConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Builds a client from the environment, if a credential is
    /// configured.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        CatalogConfig::from_env().map(Self::new)
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, CatalogError> {
        let response = self
            .client
            .get(self.url(path))
            .bearer_auth(&self.config.bearer_token)
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound);
        }
        if !response.status().is_success() {
            return Err(CatalogError::HttpStatus(response.status()));
        }

        Ok(response.json().await?)
    }

    async fn post_json<B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), CatalogError> {
        let response = self
            .client
            .post(self.url(path))
            .bearer_auth(&self.config.bearer_token)
            .json(body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(CatalogError::HttpStatus(response.status()));
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
struct CompleteRequest {
    topic_id: u64,
    phase_id: u64,
}

#[async_trait]
impl CatalogApi for HttpCatalog {
    async fn phases(&self) -> Result<Vec<PhaseRecord>, CatalogError> {
        self.get_json("phases").await
    }

    async fn phase_detail(&self, phase_id: PhaseId) -> Result<PhaseDetailResponse, CatalogError> {
        self.get_json(&format!("phases/{phase_id}")).await
    }

    async fn category_detail(
        &self,
        phase_id: PhaseId,
        category_id: CategoryId,
    ) -> Result<CategoryDetailResponse, CatalogError> {
        self.get_json(&format!("phases/{phase_id}/categories/{category_id}"))
            .await
    }

    async fn topic_detail(
        &self,
        phase_id: PhaseId,
        topic_id: TopicId,
    ) -> Result<TopicDetailResponse, CatalogError> {
        self.get_json(&format!("phases/{phase_id}/topics/{topic_id}"))
            .await
    }

    async fn complete_topic(
        &self,
        topic_id: TopicId,
        phase_id: PhaseId,
    ) -> Result<(), CatalogError> {
        let body = CompleteRequest {
            topic_id: topic_id.value(),
            phase_id: phase_id.value(),
        };
        self.post_json("progress/topic-complete", &body).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_without_double_slash() {
        let catalog = HttpCatalog::new(CatalogConfig {
            base_url: "https://api.steadypath.app/v1/".into(),
            bearer_token: "t".into(),
        });
        assert_eq!(
            catalog.url("phases/3"),
            "https://api.steadypath.app/v1/phases/3"
        );
    }
}
