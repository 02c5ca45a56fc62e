//! Wire shapes for the catalog service, and their domain conversions.
//!
//! The catalog is lenient territory: absent fields default, status
//! strings normalize through `TopicStatus::from_raw`, and a data slot
//! that does not decode as the expected record shape becomes an empty
//! list rather than an error.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use journey_core::model::{
    ActionCategory, CategoryId, Phase, PhaseId, PhaseLayout, Topic, TopicId, TopicStatus,
    TrackVersion, VideoRef,
};

//
// ─── PHASE LIST ────────────────────────────────────────────────────────────────
//

/// One element of the phase-list response.
#[derive(Debug, Clone, Deserialize)]
pub struct PhaseRecord {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub total_topics: u32,
    #[serde(default)]
    pub completed_topics: u32,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default, rename = "isSubPhaseAvailable")]
    pub is_sub_phase_available: bool,
    #[serde(default, rename = "isVersionTabAvailable")]
    pub is_version_tab_available: bool,
}

impl PhaseRecord {
    /// Converts into the domain phase, resolving the layout flag pair
    /// into a single tag. An unparseable image URL is dropped with a
    /// warning.
    #[must_use]
    pub fn into_phase(self) -> Phase {
        let image_url = self.image_url.as_deref().and_then(|raw| {
            Url::parse(raw)
                .map_err(|err| log::warn!("phase {}: dropping bad image url: {err}", self.id))
                .ok()
        });
        Phase::new(
            PhaseId::new(self.id),
            self.name,
            self.description.unwrap_or_default(),
            PhaseLayout::from_flags(self.is_sub_phase_available, self.is_version_tab_available),
            TopicStatus::from_raw(self.status.as_deref()),
            self.completed_topics,
            self.total_topics,
            image_url,
        )
    }
}

//
// ─── TOPIC AND CATEGORY RECORDS ────────────────────────────────────────────────
//

#[derive(Debug, Clone, Deserialize)]
pub struct VideoRecord {
    #[serde(default)]
    pub title: Option<String>,
    pub url: String,
}

/// A topic (or subtopic) as shipped inside a list payload.
#[derive(Debug, Clone, Deserialize)]
pub struct TopicRecord {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub videos: Vec<VideoRecord>,
}

impl TopicRecord {
    /// Converts into a domain topic under the given parent linkage.
    /// Unparseable video URLs are dropped with a warning.
    #[must_use]
    pub fn into_topic(self, phase_id: PhaseId, category_id: Option<CategoryId>) -> Topic {
        let id = self.id;
        let videos = self
            .videos
            .into_iter()
            .filter_map(|v| {
                Url::parse(&v.url)
                    .map_err(|err| log::warn!("topic {id}: dropping bad video url: {err}"))
                    .ok()
                    .map(|url| VideoRef::new(v.title, url))
            })
            .collect();
        Topic::new(
            TopicId::new(self.id),
            phase_id,
            category_id,
            self.title,
            self.description.unwrap_or_default(),
            TopicStatus::from_raw(self.status.as_deref()),
            videos,
        )
    }
}

/// A category as shipped inside a categorized phase's first data slot.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryRecord {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub completed_topics: Option<u32>,
    #[serde(default)]
    pub total_topics: Option<u32>,
    #[serde(default)]
    pub status: Option<String>,
}

impl CategoryRecord {
    #[must_use]
    pub fn into_category(self, phase_id: PhaseId) -> ActionCategory {
        ActionCategory::new(
            CategoryId::new(self.id),
            phase_id,
            self.title,
            self.description.unwrap_or_default(),
            self.completed_topics,
            self.total_topics,
            TopicStatus::from_raw(self.status.as_deref()),
        )
    }
}

//
// ─── PHASE DETAIL ──────────────────────────────────────────────────────────────
//

/// The polymorphic `data_1`/`data_2` pair of a phase-detail response.
///
/// Slots are kept as raw JSON and decoded exactly once, according to the
/// phase's layout tag. A slot that is null, absent, or does not hold the
/// requested record shape yields an empty list: "no topics available"
/// is a normal state, not an error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TopicSlots {
    #[serde(default)]
    pub data_1: Option<Value>,
    #[serde(default)]
    pub data_2: Option<Value>,
}

impl TopicSlots {
    /// Topic records of a flat phase (first slot).
    #[must_use]
    pub fn flat_topics(&self) -> Vec<TopicRecord> {
        Self::topic_records(self.data_1.as_ref(), "data_1")
    }

    /// Topic records of the selected track of a dual-track phase.
    #[must_use]
    pub fn topics_for(&self, version: TrackVersion) -> Vec<TopicRecord> {
        match version {
            TrackVersion::Controller => Self::topic_records(self.data_1.as_ref(), "data_1"),
            TrackVersion::Adapter => Self::topic_records(self.data_2.as_ref(), "data_2"),
        }
    }

    /// Category records of a categorized phase (first slot).
    #[must_use]
    pub fn categories(&self) -> Vec<CategoryRecord> {
        Self::decode(self.data_1.as_ref(), "data_1")
    }

    fn topic_records(slot: Option<&Value>, name: &str) -> Vec<TopicRecord> {
        // Category records also carry id and title; their counter pair is
        // the distinguishing mark. One shape check per slot, not per item.
        if let Some(first) = slot.and_then(Value::as_array).and_then(|a| a.first()) {
            if first.get("total_topics").is_some() || first.get("completed_topics").is_some() {
                log::warn!("{name} slot holds category records, not topics; treating as empty");
                return Vec::new();
            }
        }
        Self::decode(slot, name)
    }

    fn decode<T: DeserializeOwned>(slot: Option<&Value>, name: &str) -> Vec<T> {
        let Some(value) = slot else {
            return Vec::new();
        };
        if value.is_null() {
            return Vec::new();
        }
        match serde_json::from_value(value.clone()) {
            Ok(records) => records,
            Err(err) => {
                log::warn!("treating malformed {name} slot as empty: {err}");
                Vec::new()
            }
        }
    }
}

/// Phase-only response.
#[derive(Debug, Clone, Deserialize)]
pub struct PhaseDetailResponse {
    pub phase_name: String,
    #[serde(default)]
    pub phase_description: Option<String>,
    #[serde(default)]
    pub total_topics: u32,
    #[serde(default)]
    pub completed_topics: u32,
    #[serde(default, rename = "isSubPhaseAvailable")]
    pub is_sub_phase_available: bool,
    #[serde(default, rename = "isVersionTabAvailable")]
    pub is_version_tab_available: bool,
    #[serde(default)]
    pub topics: TopicSlots,
}

impl PhaseDetailResponse {
    /// Layout tag as claimed by this response's own flags.
    #[must_use]
    pub fn layout(&self) -> PhaseLayout {
        PhaseLayout::from_flags(self.is_sub_phase_available, self.is_version_tab_available)
    }
}

/// Phase-with-category response.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryDetailResponse {
    #[serde(default)]
    pub subtopics: Vec<TopicRecord>,
    #[serde(default)]
    pub parent_name: Option<String>,
    #[serde(default)]
    pub phase_name: Option<String>,
    #[serde(default)]
    pub total_topics: Option<u32>,
    #[serde(default)]
    pub completed_topics: Option<u32>,
    #[serde(default)]
    pub parent_id: Option<u64>,
}

/// Topic detail payload.
#[derive(Debug, Clone, Deserialize)]
pub struct TopicDetailResponse {
    pub sub_topic: TopicRecord,
    #[serde(default)]
    pub next_topic_id: Option<u64>,
    #[serde(default)]
    pub completed_topics: Option<u32>,
    #[serde(default)]
    pub total_topics: Option<u32>,
    #[serde(default)]
    pub sub_topic_id: Option<u64>,
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn phase_record_resolves_layout_and_status() {
        let record: PhaseRecord = serde_json::from_value(json!({
            "id": 2,
            "name": "Acceptance",
            "description": "Two ways through",
            "total_topics": 6,
            "completed_topics": 1,
            "status": "IN_PROGRESS",
            "isVersionTabAvailable": true
        }))
        .unwrap();

        let phase = record.into_phase();
        assert_eq!(phase.id(), PhaseId::new(2));
        assert_eq!(phase.layout(), PhaseLayout::DualTrack);
        assert_eq!(phase.status(), TopicStatus::InProgress);
        assert_eq!(phase.progress().total(), 6);
    }

    #[test]
    fn topic_record_normalizes_status_and_videos() {
        let record: TopicRecord = serde_json::from_value(json!({
            "id": 11,
            "title": "Triggers",
            "description": "<p>Spot them early</p>",
            "status": "Completed",
            "videos": [
                { "title": "Intro", "url": "https://cdn.example.com/v/11.mp4" },
                { "url": "not a url" }
            ]
        }))
        .unwrap();

        let topic = record.into_topic(PhaseId::new(1), None);
        assert_eq!(topic.status(), TopicStatus::Completed);
        assert_eq!(topic.plain_description(), "Spot them early");
        // the malformed video reference is dropped, not fatal
        assert_eq!(topic.videos().len(), 1);
        assert_eq!(topic.videos()[0].title(), Some("Intro"));
    }

    #[test]
    fn missing_slot_decodes_empty() {
        let slots = TopicSlots::default();
        assert!(slots.flat_topics().is_empty());
        assert!(slots.topics_for(TrackVersion::Adapter).is_empty());
        assert!(slots.categories().is_empty());
    }

    #[test]
    fn null_slot_decodes_empty() {
        let slots: TopicSlots = serde_json::from_value(json!({
            "data_1": [{ "id": 1, "title": "A" }],
            "data_2": null
        }))
        .unwrap();
        assert_eq!(slots.topics_for(TrackVersion::Controller).len(), 1);
        assert!(slots.topics_for(TrackVersion::Adapter).is_empty());
    }

    #[test]
    fn malformed_slot_decodes_empty() {
        let slots: TopicSlots = serde_json::from_value(json!({
            "data_1": "surprise, a string"
        }))
        .unwrap();
        assert!(slots.flat_topics().is_empty());
    }

    #[test]
    fn category_shaped_slot_is_not_topics() {
        let slots: TopicSlots = serde_json::from_value(json!({
            "data_1": [
                { "id": 1, "title": "Repair", "total_topics": 4, "completed_topics": 0 }
            ]
        }))
        .unwrap();
        assert!(slots.flat_topics().is_empty());
        assert_eq!(slots.categories().len(), 1);
    }

    #[test]
    fn phase_detail_defaults_are_lenient() {
        let detail: PhaseDetailResponse = serde_json::from_value(json!({
            "phase_name": "Awareness"
        }))
        .unwrap();
        assert_eq!(detail.layout(), PhaseLayout::Flat);
        assert_eq!(detail.total_topics, 0);
        assert!(detail.topics.flat_topics().is_empty());
    }
}
