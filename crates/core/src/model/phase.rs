use url::Url;

use crate::model::ids::PhaseId;
use crate::model::progress::Progress;
use crate::model::status::TopicStatus;

//
// ─── PHASE LAYOUT ──────────────────────────────────────────────────────────────
//

/// Structural shape of a phase's topic data.
///
/// The catalog signals the shape with two booleans. Resolving them into a
/// single tag here means nothing downstream ever probes array elements to
/// figure out what they hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseLayout {
    /// Topics are a single flat ordered list.
    Flat,
    /// Topics are grouped under categories that load separately.
    Categorized,
    /// Two parallel topic tracks over the same ordinal slots.
    DualTrack,
}

impl PhaseLayout {
    /// Resolves the catalog's flag pair. Categories win if a phase claims
    /// both shapes.
    #[must_use]
    pub fn from_flags(has_categories: bool, has_tracks: bool) -> Self {
        if has_categories {
            Self::Categorized
        } else if has_tracks {
            Self::DualTrack
        } else {
            Self::Flat
        }
    }
}

//
// ─── PHASE ─────────────────────────────────────────────────────────────────────
//

/// One stage of the curriculum.
///
/// Replaced wholesale on every phase-list fetch; the only in-place
/// mutation is the completion counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phase {
    id: PhaseId,
    name: String,
    description: String,
    layout: PhaseLayout,
    status: TopicStatus,
    completed_topics: u32,
    total_topics: u32,
    image_url: Option<Url>,
}

impl Phase {
    /// Builds a phase from catalog data, clamping `completed` into
    /// `0..=total`.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: PhaseId,
        name: impl Into<String>,
        description: impl Into<String>,
        layout: PhaseLayout,
        status: TopicStatus,
        completed_topics: u32,
        total_topics: u32,
        image_url: Option<Url>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            layout,
            status,
            completed_topics: completed_topics.min(total_topics),
            total_topics,
            image_url,
        }
    }

    // Accessors
    #[must_use]
    pub fn id(&self) -> PhaseId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn layout(&self) -> PhaseLayout {
        self.layout
    }

    #[must_use]
    pub fn status(&self) -> TopicStatus {
        self.status
    }

    #[must_use]
    pub fn completed_topics(&self) -> u32 {
        self.completed_topics
    }

    #[must_use]
    pub fn total_topics(&self) -> u32 {
        self.total_topics
    }

    #[must_use]
    pub fn image_url(&self) -> Option<&Url> {
        self.image_url.as_ref()
    }

    #[must_use]
    pub fn progress(&self) -> Progress {
        Progress::new(self.completed_topics, self.total_topics)
    }

    /// Counts one more completed topic, saturating at the total.
    pub fn record_completion(&mut self) {
        self.completed_topics = self.completed_topics.saturating_add(1).min(self.total_topics);
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn phase(completed: u32, total: u32) -> Phase {
        Phase::new(
            PhaseId::new(1),
            "Awareness",
            "Seeing the pattern clearly",
            PhaseLayout::Flat,
            TopicStatus::InProgress,
            completed,
            total,
            None,
        )
    }

    #[test]
    fn new_clamps_completed_to_total() {
        let p = phase(12, 7);
        assert_eq!(p.completed_topics(), 7);
        assert_eq!(p.total_topics(), 7);
    }

    #[test]
    fn record_completion_saturates() {
        let mut p = phase(6, 7);
        p.record_completion();
        assert_eq!(p.completed_topics(), 7);
        p.record_completion();
        assert_eq!(p.completed_topics(), 7);
        assert!(p.progress().is_complete());
    }

    #[test]
    fn layout_from_flags_prefers_categories() {
        assert_eq!(PhaseLayout::from_flags(false, false), PhaseLayout::Flat);
        assert_eq!(
            PhaseLayout::from_flags(true, false),
            PhaseLayout::Categorized
        );
        assert_eq!(PhaseLayout::from_flags(false, true), PhaseLayout::DualTrack);
        assert_eq!(
            PhaseLayout::from_flags(true, true),
            PhaseLayout::Categorized
        );
    }
}
