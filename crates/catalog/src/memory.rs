//! In-memory catalog implementation for testing and prototyping.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use journey_core::model::{CategoryId, PhaseId, TopicId};

use crate::api::{CatalogApi, CatalogError};
use crate::dto::{
    CategoryDetailResponse, PhaseDetailResponse, PhaseRecord, TopicDetailResponse,
};

/// Canned-response catalog.
///
/// Records every completion call it sees and can be told to reject them,
/// which is how tests exercise the optimistic-update error path.
#[derive(Clone, Default)]
pub struct InMemoryCatalog {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    phases: Vec<PhaseRecord>,
    phase_details: HashMap<PhaseId, PhaseDetailResponse>,
    category_details: HashMap<(PhaseId, CategoryId), CategoryDetailResponse>,
    topic_details: HashMap<TopicId, TopicDetailResponse>,
    completions: Vec<(TopicId, PhaseId)>,
    reject_completions: bool,
}

impl InMemoryCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_phases(&self, phases: Vec<PhaseRecord>) {
        self.lock().phases = phases;
    }

    pub fn put_phase_detail(&self, phase_id: PhaseId, detail: PhaseDetailResponse) {
        self.lock().phase_details.insert(phase_id, detail);
    }

    pub fn put_category_detail(
        &self,
        phase_id: PhaseId,
        category_id: CategoryId,
        detail: CategoryDetailResponse,
    ) {
        self.lock()
            .category_details
            .insert((phase_id, category_id), detail);
    }

    pub fn put_topic_detail(&self, topic_id: TopicId, detail: TopicDetailResponse) {
        self.lock().topic_details.insert(topic_id, detail);
    }

    /// Makes subsequent completion calls fail.
    pub fn reject_completions(&self, reject: bool) {
        self.lock().reject_completions = reject;
    }

    /// Completion calls seen so far, in order.
    #[must_use]
    pub fn completions(&self) -> Vec<(TopicId, PhaseId)> {
        self.lock().completions.clone()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl CatalogApi for InMemoryCatalog {
    async fn phases(&self) -> Result<Vec<PhaseRecord>, CatalogError> {
        Ok(self.lock().phases.clone())
    }

    async fn phase_detail(&self, phase_id: PhaseId) -> Result<PhaseDetailResponse, CatalogError> {
        self.lock()
            .phase_details
            .get(&phase_id)
            .cloned()
            .ok_or(CatalogError::NotFound)
    }

    async fn category_detail(
        &self,
        phase_id: PhaseId,
        category_id: CategoryId,
    ) -> Result<CategoryDetailResponse, CatalogError> {
        self.lock()
            .category_details
            .get(&(phase_id, category_id))
            .cloned()
            .ok_or(CatalogError::NotFound)
    }

    async fn topic_detail(
        &self,
        _phase_id: PhaseId,
        topic_id: TopicId,
    ) -> Result<TopicDetailResponse, CatalogError> {
        self.lock()
            .topic_details
            .get(&topic_id)
            .cloned()
            .ok_or(CatalogError::NotFound)
    }

    async fn complete_topic(
        &self,
        topic_id: TopicId,
        phase_id: PhaseId,
    ) -> Result<(), CatalogError> {
        let mut inner = self.lock();
        if inner.reject_completions {
            return Err(CatalogError::CompletionRejected { topic_id, phase_id });
        }
        inner.completions.push((topic_id, phase_id));
        Ok(())
    }
}
