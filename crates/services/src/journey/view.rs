use url::Url;

use journey_core::model::{
    NavContext, Phase, PhaseId, PhaseLayout, Progress, Topic, TopicId, TopicStatus, VideoRef,
};

use crate::journey::state::{ContextSnapshot, JourneyState};

//
// ─── TOPIC VIEW ────────────────────────────────────────────────────────────────
//

/// Presentation-ready projection of one topic.
///
/// This is intentionally **not** a UI view-model: no pre-formatted
/// strings beyond markup stripping, no localization assumptions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicView {
    pub id: TopicId,
    pub title: String,
    /// Markup-free description for list rows and summaries.
    pub description: String,
    /// Original description with markup, for rich rendering.
    pub markup: String,
    pub status: TopicStatus,
    pub videos: Vec<VideoRef>,
    pub context: NavContext,
}

impl TopicView {
    #[must_use]
    pub fn from_topic(topic: &Topic, context: NavContext) -> Self {
        Self {
            id: topic.id(),
            title: topic.title().to_owned(),
            description: topic.plain_description(),
            markup: topic.description_markup().to_owned(),
            status: topic.status(),
            videos: topic.videos().to_vec(),
            context,
        }
    }
}

impl ContextSnapshot {
    /// Ordered topic views for the active projection.
    #[must_use]
    pub fn views(&self) -> Vec<TopicView> {
        self.topics_in_order()
            .map(|t| TopicView::from_topic(t, self.context()))
            .collect()
    }
}

//
// ─── PHASE OVERVIEW ────────────────────────────────────────────────────────────
//

/// Presentation-agnostic list item for one phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhaseOverview {
    pub id: PhaseId,
    pub name: String,
    pub description: String,
    pub layout: PhaseLayout,
    pub status: TopicStatus,
    pub progress: Progress,
    pub image_url: Option<Url>,
}

impl PhaseOverview {
    #[must_use]
    pub fn from_phase(phase: &Phase) -> Self {
        Self {
            id: phase.id(),
            name: phase.name().to_owned(),
            description: phase.description().to_owned(),
            layout: phase.layout(),
            status: phase.status(),
            progress: phase.progress(),
            image_url: phase.image_url().cloned(),
        }
    }
}

/// The phase list plus the topic-count-weighted overall figure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JourneyOverview {
    pub phases: Vec<PhaseOverview>,
    pub overall: Progress,
}

impl JourneyOverview {
    #[must_use]
    pub fn from_state(state: &JourneyState) -> Self {
        let phases = state
            .phases()
            .iter()
            .map(PhaseOverview::from_phase)
            .collect();
        let overall = state.phases().iter().map(Phase::progress).sum();
        Self { phases, overall }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topic_view_strips_markup_but_keeps_it() {
        let topic = Topic::new(
            TopicId::new(1),
            PhaseId::new(1),
            None,
            "Naming the pattern",
            "<p>Watch &amp; reflect</p>",
            TopicStatus::InProgress,
            Vec::new(),
        );
        let view = TopicView::from_topic(&topic, NavContext::flat(PhaseId::new(1)));

        assert_eq!(view.description, "Watch & reflect");
        assert_eq!(view.markup, "<p>Watch &amp; reflect</p>");
        assert_eq!(view.status, TopicStatus::InProgress);
    }

    #[test]
    fn overview_weights_overall_by_topic_count() {
        let mut state = JourneyState::new();
        let phases = vec![
            Phase::new(
                PhaseId::new(1),
                "Awareness",
                "",
                PhaseLayout::Flat,
                TopicStatus::InProgress,
                1,
                2,
                None,
            ),
            Phase::new(
                PhaseId::new(4),
                "Action",
                "",
                PhaseLayout::Categorized,
                TopicStatus::NotStarted,
                0,
                8,
                None,
            ),
        ];
        state.set_phases(phases);

        let overview = JourneyOverview::from_state(&state);
        assert_eq!(overview.phases.len(), 2);
        // 1/10 overall, not the 25% an average of percentages would give
        assert_eq!(overview.overall, Progress::new(1, 10));
        assert_eq!(overview.overall.percent(), 10);
    }
}
