use crate::model::ids::{CategoryId, PhaseId};
use crate::model::progress::Progress;
use crate::model::status::TopicStatus;

/// A named grouping of topics inside a categorized phase.
///
/// Counters may be server-supplied; when the server omits them they stay
/// `None` until the category's topic list is loaded and counted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionCategory {
    id: CategoryId,
    phase_id: PhaseId,
    title: String,
    description: String,
    completed_topics: Option<u32>,
    total_topics: Option<u32>,
    status: TopicStatus,
}

impl ActionCategory {
    #[must_use]
    pub fn new(
        id: CategoryId,
        phase_id: PhaseId,
        title: impl Into<String>,
        description: impl Into<String>,
        completed_topics: Option<u32>,
        total_topics: Option<u32>,
        status: TopicStatus,
    ) -> Self {
        Self {
            id,
            phase_id,
            title: title.into(),
            description: description.into(),
            completed_topics,
            total_topics,
            status,
        }
    }

    // Accessors
    #[must_use]
    pub fn id(&self) -> CategoryId {
        self.id
    }

    #[must_use]
    pub fn phase_id(&self) -> PhaseId {
        self.phase_id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn completed_topics(&self) -> Option<u32> {
        self.completed_topics
    }

    #[must_use]
    pub fn total_topics(&self) -> Option<u32> {
        self.total_topics
    }

    #[must_use]
    pub fn status(&self) -> TopicStatus {
        self.status
    }

    /// Progress as far as it is known; missing counters read as zero.
    #[must_use]
    pub fn progress(&self) -> Progress {
        Progress::new(
            self.completed_topics.unwrap_or(0),
            self.total_topics.unwrap_or(0),
        )
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_uses_server_counters_when_present() {
        let c = ActionCategory::new(
            CategoryId::new(3),
            PhaseId::new(4),
            "Boundaries",
            "",
            Some(2),
            Some(5),
            TopicStatus::InProgress,
        );
        assert_eq!(c.progress().percent(), 40);
    }

    #[test]
    fn progress_without_counters_is_empty() {
        let c = ActionCategory::new(
            CategoryId::new(3),
            PhaseId::new(4),
            "Boundaries",
            "",
            None,
            None,
            TopicStatus::NotStarted,
        );
        assert_eq!(c.progress().percent(), 0);
        assert!(!c.progress().is_complete());
    }
}
