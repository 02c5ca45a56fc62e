//! Projection of raw catalog payloads into context snapshots.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use catalog::{CategoryDetailResponse, PhaseDetailResponse, TopicRecord};
use journey_core::model::{
    ActionCategory, CategoryId, ContextScope, NavContext, PhaseId, PhaseLayout, Progress, Topic,
    TopicId, TopicStatus,
};

use crate::journey::state::ContextSnapshot;

/// Builds normalized snapshots out of the catalog's polymorphic payloads.
///
/// Ordering is preserved exactly as received; the normalizer never
/// re-sorts. A missing or malformed source is an empty projection with a
/// zero summary, never an error.
pub struct CatalogNormalizer;

impl CatalogNormalizer {
    /// Snapshot for a phase-level context: the flat list, one track of a
    /// dual-track phase, or the category overview of a categorized phase.
    #[must_use]
    pub fn from_phase_detail(
        context: NavContext,
        response: PhaseDetailResponse,
        now: DateTime<Utc>,
    ) -> ContextSnapshot {
        let phase_id = context.phase_id();
        let layout = response.layout();

        match (context.scope(), layout) {
            (ContextScope::Track(version), PhaseLayout::DualTrack) => {
                let active = response.topics.topics_for(version);
                let other = response.topics.topics_for(version.other());

                let order = record_order(&active);
                // counts follow the selected track, not the phase totals
                let summary = counted_summary(&active);

                // the other track stays addressable for lookups but is
                // neither displayed nor counted; on an id collision the
                // active track wins
                let mut index = index_topics(other, phase_id, None);
                index.extend(index_topics(active, phase_id, None));

                ContextSnapshot::new(context, order, index, Vec::new(), summary, now)
            }
            (ContextScope::Flat | ContextScope::Track(_), PhaseLayout::Categorized) => {
                // categories must be resolved before their topics are
                // addressable; the overview shows categories only
                let categories: Vec<ActionCategory> = response
                    .topics
                    .categories()
                    .into_iter()
                    .map(|c| c.into_category(phase_id))
                    .collect();
                let summary = Progress::new(response.completed_topics, response.total_topics);
                ContextSnapshot::new(context, Vec::new(), HashMap::new(), categories, summary, now)
            }
            (ContextScope::Flat, PhaseLayout::Flat | PhaseLayout::DualTrack) => {
                let records = response.topics.flat_topics();
                let summary = if response.total_topics == 0 && !records.is_empty() {
                    counted_summary(&records)
                } else {
                    Progress::new(response.completed_topics, response.total_topics)
                };
                let order = record_order(&records);
                let index = index_topics(records, phase_id, None);
                ContextSnapshot::new(context, order, index, Vec::new(), summary, now)
            }
            (ContextScope::Track(_), PhaseLayout::Flat) => {
                log::warn!("track context requested for flat phase {phase_id}; no topics");
                empty_snapshot(context, now)
            }
            (ContextScope::Category(category_id), _) => {
                log::warn!(
                    "category {category_id} topics come from the category endpoint, \
                     not the phase detail"
                );
                empty_snapshot(context, now)
            }
        }
    }

    /// Snapshot for a category context.
    ///
    /// The summary prefers the response's own counters and falls back to
    /// counting subtopic statuses when either is missing.
    #[must_use]
    pub fn from_category_detail(
        context: NavContext,
        response: CategoryDetailResponse,
        now: DateTime<Utc>,
    ) -> ContextSnapshot {
        let phase_id = context.phase_id();
        let category_id = context.category_id();

        let summary = match (response.completed_topics, response.total_topics) {
            (Some(completed), Some(total)) => Progress::new(completed, total),
            _ => counted_summary(&response.subtopics),
        };
        let order = record_order(&response.subtopics);
        let index = index_topics(response.subtopics, phase_id, category_id);

        ContextSnapshot::new(context, order, index, Vec::new(), summary, now)
    }
}

fn empty_snapshot(context: NavContext, now: DateTime<Utc>) -> ContextSnapshot {
    ContextSnapshot::new(
        context,
        Vec::new(),
        HashMap::new(),
        Vec::new(),
        Progress::default(),
        now,
    )
}

fn record_order(records: &[TopicRecord]) -> Vec<TopicId> {
    records.iter().map(|r| TopicId::new(r.id)).collect()
}

fn counted_summary(records: &[TopicRecord]) -> Progress {
    let completed = records
        .iter()
        .filter(|r| TopicStatus::from_raw(r.status.as_deref()).is_completed())
        .count();
    Progress::new(
        u32::try_from(completed).unwrap_or(u32::MAX),
        u32::try_from(records.len()).unwrap_or(u32::MAX),
    )
}

fn index_topics(
    records: Vec<TopicRecord>,
    phase_id: PhaseId,
    category_id: Option<CategoryId>,
) -> HashMap<TopicId, Topic> {
    records
        .into_iter()
        .map(|r| {
            let topic = r.into_topic(phase_id, category_id);
            (topic.id(), topic)
        })
        .collect()
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use journey_core::model::TrackVersion;
    use journey_core::time::fixed_now;
    use serde_json::json;

    fn phase_detail(value: serde_json::Value) -> PhaseDetailResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn flat_phase_preserves_order_and_server_counts() {
        let response = phase_detail(json!({
            "phase_name": "Awareness",
            "total_topics": 3,
            "completed_topics": 1,
            "topics": { "data_1": [
                { "id": 30, "title": "C", "status": "completed" },
                { "id": 10, "title": "A" },
                { "id": 20, "title": "B" }
            ]}
        }));

        let context = NavContext::flat(PhaseId::new(1));
        let snapshot = CatalogNormalizer::from_phase_detail(context, response, fixed_now());

        assert_eq!(
            snapshot.order(),
            &[TopicId::new(30), TopicId::new(10), TopicId::new(20)]
        );
        assert_eq!(snapshot.summary(), Progress::new(1, 3));
        assert!(snapshot.categories().is_empty());
    }

    #[test]
    fn flat_phase_counts_statuses_when_server_totals_missing() {
        let response = phase_detail(json!({
            "phase_name": "Awareness",
            "topics": { "data_1": [
                { "id": 1, "title": "A", "status": "completed" },
                { "id": 2, "title": "B" }
            ]}
        }));

        let snapshot = CatalogNormalizer::from_phase_detail(
            NavContext::flat(PhaseId::new(1)),
            response,
            fixed_now(),
        );
        assert_eq!(snapshot.summary(), Progress::new(1, 2));
    }

    #[test]
    fn dual_track_counts_only_the_selected_track() {
        let response = phase_detail(json!({
            "phase_name": "Acceptance",
            "total_topics": 4,
            "completed_topics": 3,
            "isVersionTabAvailable": true,
            "topics": {
                "data_1": [
                    { "id": 101, "title": "Stage one", "status": "completed" },
                    { "id": 102, "title": "Stage two", "status": "completed" }
                ],
                "data_2": [
                    { "id": 201, "title": "Stage one" },
                    { "id": 202, "title": "Stage two", "status": "completed" }
                ]
            }
        }));

        let context = NavContext::in_track(PhaseId::new(2), TrackVersion::Adapter);
        let snapshot = CatalogNormalizer::from_phase_detail(context, response, fixed_now());

        assert_eq!(snapshot.order(), &[TopicId::new(201), TopicId::new(202)]);
        assert_eq!(snapshot.summary(), Progress::new(1, 2));
        // the controller track is indexed for lookup but not displayed
        assert!(snapshot.topic(TopicId::new(101)).is_some());
        assert!(!snapshot.displays(TopicId::new(101)));
    }

    #[test]
    fn dual_track_null_slot_is_empty_not_fatal() {
        let response = phase_detail(json!({
            "phase_name": "Acceptance",
            "isVersionTabAvailable": true,
            "topics": {
                "data_1": [{ "id": 101, "title": "Stage one" }],
                "data_2": null
            }
        }));

        let context = NavContext::in_track(PhaseId::new(2), TrackVersion::Adapter);
        let snapshot = CatalogNormalizer::from_phase_detail(context, response, fixed_now());

        assert!(snapshot.order().is_empty());
        assert_eq!(snapshot.summary(), Progress::new(0, 0));
        assert_eq!(snapshot.summary().percent(), 0);
    }

    #[test]
    fn categorized_phase_yields_categories_not_topics() {
        let response = phase_detail(json!({
            "phase_name": "Action",
            "total_topics": 9,
            "completed_topics": 2,
            "isSubPhaseAvailable": true,
            "topics": { "data_1": [
                { "id": 1, "title": "Repair", "total_topics": 4, "completed_topics": 2 },
                { "id": 2, "title": "Boundaries", "total_topics": 5, "completed_topics": 0 }
            ]}
        }));

        let snapshot = CatalogNormalizer::from_phase_detail(
            NavContext::flat(PhaseId::new(4)),
            response,
            fixed_now(),
        );

        assert!(snapshot.order().is_empty());
        assert_eq!(snapshot.categories().len(), 2);
        assert_eq!(snapshot.categories()[0].title(), "Repair");
        assert_eq!(snapshot.summary(), Progress::new(2, 9));
    }

    #[test]
    fn category_detail_uses_server_counters_when_present() {
        let response: CategoryDetailResponse = serde_json::from_value(json!({
            "subtopics": [
                { "id": 41, "title": "Apology", "status": "completed" },
                { "id": 42, "title": "Restitution" }
            ],
            "parent_name": "Repair",
            "total_topics": 4,
            "completed_topics": 2,
            "parent_id": 1
        }))
        .unwrap();

        let context = NavContext::in_category(PhaseId::new(4), CategoryId::new(1));
        let snapshot = CatalogNormalizer::from_category_detail(context, response, fixed_now());

        assert_eq!(snapshot.order(), &[TopicId::new(41), TopicId::new(42)]);
        assert_eq!(snapshot.summary(), Progress::new(2, 4));
        let topic = snapshot.topic(TopicId::new(41)).unwrap();
        assert_eq!(topic.category_id(), Some(CategoryId::new(1)));
    }

    #[test]
    fn category_detail_counts_statuses_without_counters() {
        let response: CategoryDetailResponse = serde_json::from_value(json!({
            "subtopics": [
                { "id": 41, "title": "Apology", "status": "completed" },
                { "id": 42, "title": "Restitution" }
            ]
        }))
        .unwrap();

        let context = NavContext::in_category(PhaseId::new(4), CategoryId::new(1));
        let snapshot = CatalogNormalizer::from_category_detail(context, response, fixed_now());
        assert_eq!(snapshot.summary(), Progress::new(1, 2));
    }

    #[test]
    fn empty_category_is_a_normal_state() {
        let response: CategoryDetailResponse = serde_json::from_value(json!({
            "subtopics": [],
            "total_topics": 0,
            "completed_topics": 0
        }))
        .unwrap();

        let context = NavContext::in_category(PhaseId::new(4), CategoryId::new(3));
        let snapshot = CatalogNormalizer::from_category_detail(context, response, fixed_now());

        assert!(snapshot.order().is_empty());
        assert_eq!(snapshot.summary(), Progress::new(0, 0));
        assert_eq!(snapshot.summary().percent(), 0);
    }

    #[test]
    fn track_context_on_flat_phase_is_empty() {
        let response = phase_detail(json!({
            "phase_name": "Awareness",
            "topics": { "data_1": [{ "id": 1, "title": "A" }] }
        }));

        let context = NavContext::in_track(PhaseId::new(1), TrackVersion::Controller);
        let snapshot = CatalogNormalizer::from_phase_detail(context, response, fixed_now());
        assert!(snapshot.order().is_empty());
    }
}
