use async_trait::async_trait;
use thiserror::Error;

use journey_core::model::{CategoryId, PhaseId, TopicId};

use crate::dto::{
    CategoryDetailResponse, PhaseDetailResponse, PhaseRecord, TopicDetailResponse,
};

/// Errors surfaced by catalog adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("catalog request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("not found")]
    NotFound,

    #[error("completion rejected for topic {topic_id} in phase {phase_id}")]
    CompletionRejected {
        topic_id: TopicId,
        phase_id: PhaseId,
    },
}

/// Remote curriculum catalog contract.
///
/// The catalog owns the authoritative curriculum and completion state.
/// Everything here is a read except `complete_topic`, which is
/// success-or-failure only from the engine's point of view; retry policy
/// belongs to the caller.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Fetch the full phase list.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the request fails.
    async fn phases(&self) -> Result<Vec<PhaseRecord>, CatalogError>;

    /// Fetch one phase with its topic slots.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` for an unknown phase, or other
    /// transport errors.
    async fn phase_detail(&self, phase_id: PhaseId) -> Result<PhaseDetailResponse, CatalogError>;

    /// Fetch the subtopics of one category.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` for an unknown pair, or other
    /// transport errors.
    async fn category_detail(
        &self,
        phase_id: PhaseId,
        category_id: CategoryId,
    ) -> Result<CategoryDetailResponse, CatalogError>;

    /// Fetch one topic's detail payload, including the next-topic hint.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` for an unknown topic, or other
    /// transport errors.
    async fn topic_detail(
        &self,
        phase_id: PhaseId,
        topic_id: TopicId,
    ) -> Result<TopicDetailResponse, CatalogError>;

    /// Record a completion with the server.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` when the write is rejected; the caller
    /// decides whether and when to retry.
    async fn complete_topic(&self, topic_id: TopicId, phase_id: PhaseId)
        -> Result<(), CatalogError>;
}
