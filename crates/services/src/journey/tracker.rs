//! Completion transitions against the loaded snapshot.

use journey_core::model::TopicId;

use crate::error::JourneyError;
use crate::journey::state::JourneyState;

/// What a mark-complete call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkOutcome {
    /// The topic moved to `Completed` and counters advanced.
    Updated,
    /// The topic was already complete; nothing changed.
    AlreadyCompleted,
}

/// Sole writer of topic status and completion counters.
pub struct CompletionTracker;

impl CompletionTracker {
    /// Marks a topic complete in the active snapshot.
    ///
    /// Idempotent: a repeat call reports `AlreadyCompleted` and moves no
    /// counter. The snapshot summary advances only when the topic is part
    /// of the displayed projection; the owning phase's counter advances
    /// for any indexed topic.
    ///
    /// # Errors
    ///
    /// Returns `NoActiveContext` without a loaded snapshot,
    /// `UnknownTopic` when the id is not indexed there, and
    /// `TopicLocked` for locked topics (unlocking is a server
    /// transition this tracker only reflects).
    pub fn mark_complete(
        state: &mut JourneyState,
        topic_id: TopicId,
    ) -> Result<MarkOutcome, JourneyError> {
        let phase_id = {
            let snapshot = state
                .snapshot_mut()
                .ok_or(JourneyError::NoActiveContext)?;
            let topic = snapshot
                .topic_mut(topic_id)
                .ok_or(JourneyError::UnknownTopic(topic_id))?;

            if !topic.status().is_actionable() {
                return Err(JourneyError::TopicLocked(topic_id));
            }
            let phase_id = topic.phase_id();
            if !topic.complete() {
                return Ok(MarkOutcome::AlreadyCompleted);
            }

            if snapshot.displays(topic_id) {
                snapshot.summary_mut().increment();
            }
            phase_id
        };

        if let Some(phase) = state.phase_mut(phase_id) {
            phase.record_completion();
        }

        Ok(MarkOutcome::Updated)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
