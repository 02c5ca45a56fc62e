use std::sync::Arc;

use catalog::{CatalogApi, PhaseRecord};
use journey_core::Clock;
use journey_core::model::{ContextScope, NavContext, TopicId};

use crate::error::JourneyError;
use crate::journey::normalize::CatalogNormalizer;
use crate::journey::resolver::NextTopicResolver;
use crate::journey::state::JourneyState;
use crate::journey::tracker::{CompletionTracker, MarkOutcome};
use crate::journey::view::JourneyOverview;

/// Result of completing a topic and resolving the follow-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Advance {
    pub outcome: MarkOutcome,
    pub next: Option<TopicId>,
}

/// Orchestrates catalog fetches and completion flows against an owned
/// `JourneyState`.
///
/// The service holds nothing beyond the catalog handle and the clock;
/// callers own the state value and pass it in by reference.
#[derive(Clone)]
pub struct JourneyService {
    clock: Clock,
    catalog: Arc<dyn CatalogApi>,
}

impl JourneyService {
    #[must_use]
    pub fn new(clock: Clock, catalog: Arc<dyn CatalogApi>) -> Self {
        Self { clock, catalog }
    }

    /// Fetches the phase list and replaces the roster wholesale.
    ///
    /// # Errors
    ///
    /// Returns `JourneyError::Catalog` when the fetch fails; the previous
    /// roster is kept in that case.
    pub async fn refresh_phases(&self, state: &mut JourneyState) -> Result<(), JourneyError> {
        let records = self.catalog.phases().await?;
        state.set_phases(records.into_iter().map(PhaseRecord::into_phase).collect());
        Ok(())
    }

    /// Loads and installs the snapshot for a navigation context.
    ///
    /// Returns `false` when the fetched result was stale (a newer fetch
    /// began while this one was in flight) and was discarded.
    ///
    /// # Errors
    ///
    /// Returns `JourneyError::Catalog` when the fetch fails; nothing is
    /// installed in that case.
    pub async fn open_context(
        &self,
        state: &mut JourneyState,
        context: NavContext,
    ) -> Result<bool, JourneyError> {
        let token = state.begin_fetch(context);
        let snapshot = match context.scope() {
            ContextScope::Category(category_id) => {
                let response = self
                    .catalog
                    .category_detail(context.phase_id(), category_id)
                    .await?;
                CatalogNormalizer::from_category_detail(context, response, self.clock.now())
            }
            ContextScope::Flat | ContextScope::Track(_) => {
                let response = self.catalog.phase_detail(context.phase_id()).await?;
                CatalogNormalizer::from_phase_detail(context, response, self.clock.now())
            }
        };
        Ok(state.install_snapshot(token, snapshot))
    }

    /// Completes a topic: the local transition first, then the remote
    /// write.
    ///
    /// The local mutation is optimistic and stands even when the remote
    /// write fails; callers retry the action, which is locally idempotent
    /// and re-issues the write.
    ///
    /// # Errors
    ///
    /// Tracker errors (`NoActiveContext`, `UnknownTopic`, `TopicLocked`)
    /// occur before any mutation; `Catalog` means the remote write was
    /// rejected after the local update.
    pub async fn complete_topic(
        &self,
        state: &mut JourneyState,
        topic_id: TopicId,
    ) -> Result<MarkOutcome, JourneyError> {
        let phase_id = state
            .snapshot()
            .ok_or(JourneyError::NoActiveContext)?
            .context()
            .phase_id();
        let outcome = CompletionTracker::mark_complete(state, topic_id)?;
        self.catalog.complete_topic(topic_id, phase_id).await?;
        Ok(outcome)
    }

    /// Resolves what to present after completing `topic_id`.
    ///
    /// Fetches the topic detail for the server's next-topic hint; a
    /// failed hint fetch falls back to positional resolution with a
    /// warning.
    ///
    /// # Errors
    ///
    /// Returns `NoActiveContext` without a loaded snapshot.
    pub async fn next_topic(
        &self,
        state: &JourneyState,
        completed: TopicId,
    ) -> Result<Option<TopicId>, JourneyError> {
        let snapshot = state.snapshot().ok_or(JourneyError::NoActiveContext)?;
        let phase_id = snapshot.context().phase_id();

        let hint = match self.catalog.topic_detail(phase_id, completed).await {
            Ok(detail) => detail.next_topic_id.map(TopicId::new),
            Err(err) => {
                log::warn!("topic {completed}: hint fetch failed, resolving positionally: {err}");
                None
            }
        };

        Ok(NextTopicResolver::resolve(snapshot, completed, hint))
    }

    /// Completes a topic and resolves the follow-up in one step.
    ///
    /// # Errors
    ///
    /// Same as `complete_topic`; resolution itself cannot fail.
    pub async fn complete_and_advance(
        &self,
        state: &mut JourneyState,
        topic_id: TopicId,
    ) -> Result<Advance, JourneyError> {
        let outcome = self.complete_topic(state, topic_id).await?;
        let next = self.next_topic(state, topic_id).await?;
        Ok(Advance { outcome, next })
    }

    /// Phase list plus the topic-count-weighted overall figure.
    #[must_use]
    pub fn overview(&self, state: &JourneyState) -> JourneyOverview {
        JourneyOverview::from_state(state)
    }
}
