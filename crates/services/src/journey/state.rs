use std::collections::HashMap;

use chrono::{DateTime, Utc};

use journey_core::model::{ActionCategory, NavContext, Phase, PhaseId, Progress, Topic, TopicId};

//
// ─── CONTEXT SNAPSHOT ──────────────────────────────────────────────────────────
//

/// Normalized topic data for one navigation context.
///
/// `order` is the active projection exactly as the catalog ordered it.
/// `index` additionally holds topics the context loaded but does not
/// display (the other track of a dual-track phase), so completion lookup
/// is a single map hit wherever the topic lives.
#[derive(Debug, Clone)]
pub struct ContextSnapshot {
    context: NavContext,
    order: Vec<TopicId>,
    index: HashMap<TopicId, Topic>,
    categories: Vec<ActionCategory>,
    summary: Progress,
    refreshed_at: DateTime<Utc>,
}

impl ContextSnapshot {
    pub(crate) fn new(
        context: NavContext,
        order: Vec<TopicId>,
        index: HashMap<TopicId, Topic>,
        categories: Vec<ActionCategory>,
        summary: Progress,
        refreshed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            context,
            order,
            index,
            categories,
            summary,
            refreshed_at,
        }
    }

    #[must_use]
    pub fn context(&self) -> NavContext {
        self.context
    }

    /// Completed/total for the active projection.
    #[must_use]
    pub fn summary(&self) -> Progress {
        self.summary
    }

    #[must_use]
    pub fn refreshed_at(&self) -> DateTime<Utc> {
        self.refreshed_at
    }

    /// Categories of a categorized phase's overview; empty elsewhere.
    #[must_use]
    pub fn categories(&self) -> &[ActionCategory] {
        &self.categories
    }

    /// Active projection order, exactly as the catalog shipped it.
    #[must_use]
    pub fn order(&self) -> &[TopicId] {
        &self.order
    }

    /// Topics of the active projection, in catalog order.
    pub fn topics_in_order(&self) -> impl Iterator<Item = &Topic> {
        self.order.iter().filter_map(|id| self.index.get(id))
    }

    #[must_use]
    pub fn topic(&self, id: TopicId) -> Option<&Topic> {
        self.index.get(&id)
    }

    /// True when the projection displays the topic (not merely indexes
    /// it for lookup).
    #[must_use]
    pub fn displays(&self, id: TopicId) -> bool {
        self.order.contains(&id)
    }

    pub(crate) fn topic_mut(&mut self, id: TopicId) -> Option<&mut Topic> {
        self.index.get_mut(&id)
    }

    pub(crate) fn summary_mut(&mut self) -> &mut Progress {
        &mut self.summary
    }
}

//
// ─── JOURNEY STATE ─────────────────────────────────────────────────────────────
//

/// The engine's owned, in-memory view of the curriculum.
///
/// Callers own the value and pass it by reference; topic status is
/// written only through the completion tracker, and snapshots are
/// replaced only through the fetch-token install path below.
#[derive(Debug, Clone, Default)]
pub struct JourneyState {
    phases: Vec<Phase>,
    snapshot: Option<ContextSnapshot>,
    epoch: u64,
}

/// Identity of one in-flight context fetch.
///
/// A token minted before a newer `begin_fetch` identifies a stale
/// response; installing with it is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchToken {
    context: NavContext,
    epoch: u64,
}

impl FetchToken {
    #[must_use]
    pub fn context(self) -> NavContext {
        self.context
    }
}

impl JourneyState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phases(&self) -> &[Phase] {
        &self.phases
    }

    #[must_use]
    pub fn phase(&self, id: PhaseId) -> Option<&Phase> {
        self.phases.iter().find(|p| p.id() == id)
    }

    pub(crate) fn phase_mut(&mut self, id: PhaseId) -> Option<&mut Phase> {
        self.phases.iter_mut().find(|p| p.id() == id)
    }

    /// Replaces the phase roster wholesale, as every phase-list fetch
    /// does.
    pub(crate) fn set_phases(&mut self, phases: Vec<Phase>) {
        self.phases = phases;
    }

    #[must_use]
    pub fn snapshot(&self) -> Option<&ContextSnapshot> {
        self.snapshot.as_ref()
    }

    pub(crate) fn snapshot_mut(&mut self) -> Option<&mut ContextSnapshot> {
        self.snapshot.as_mut()
    }

    /// Starts a context fetch. Each call supersedes every token minted
    /// before it.
    pub fn begin_fetch(&mut self, context: NavContext) -> FetchToken {
        self.epoch = self.epoch.wrapping_add(1);
        FetchToken {
            context,
            epoch: self.epoch,
        }
    }

    /// Installs a fetched snapshot, unless a newer fetch began while this
    /// one was in flight. Returns whether the snapshot was installed.
    pub fn install_snapshot(&mut self, token: FetchToken, snapshot: ContextSnapshot) -> bool {
        if token.epoch != self.epoch {
            log::warn!(
                "discarding stale snapshot for phase {} (fetch superseded)",
                token.context.phase_id()
            );
            return false;
        }
        self.snapshot = Some(snapshot);
        true
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
