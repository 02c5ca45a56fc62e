use url::Url;

use crate::model::ids::{CategoryId, PhaseId, TopicId};
use crate::model::status::TopicStatus;
use crate::text::strip_markup;

//
// ─── VIDEO REFERENCES ──────────────────────────────────────────────────────────
//

/// A video attached to a topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoRef {
    title: Option<String>,
    url: Url,
}

impl VideoRef {
    #[must_use]
    pub fn new(title: Option<String>, url: Url) -> Self {
        let title = title
            .map(|t| t.trim().to_owned())
            .filter(|t| !t.is_empty());
        Self { title, url }
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }
}

//
// ─── TOPIC ─────────────────────────────────────────────────────────────────────
//

/// One lesson within a phase, optionally grouped under a category.
///
/// Everything except `status` is immutable after construction. `status`
/// only ever moves forward; `Completed` is terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic {
    id: TopicId,
    phase_id: PhaseId,
    category_id: Option<CategoryId>,
    title: String,
    description: String,
    status: TopicStatus,
    videos: Vec<VideoRef>,
}

impl Topic {
    #[must_use]
    pub fn new(
        id: TopicId,
        phase_id: PhaseId,
        category_id: Option<CategoryId>,
        title: impl Into<String>,
        description: impl Into<String>,
        status: TopicStatus,
        videos: Vec<VideoRef>,
    ) -> Self {
        Self {
            id,
            phase_id,
            category_id,
            title: title.into().trim().to_owned(),
            description: description.into(),
            status,
            videos,
        }
    }

    // Accessors
    #[must_use]
    pub fn id(&self) -> TopicId {
        self.id
    }

    #[must_use]
    pub fn phase_id(&self) -> PhaseId {
        self.phase_id
    }

    #[must_use]
    pub fn category_id(&self) -> Option<CategoryId> {
        self.category_id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Description exactly as the catalog shipped it, markup included.
    #[must_use]
    pub fn description_markup(&self) -> &str {
        &self.description
    }

    /// Description with markup stripped, for plain-text consumers.
    #[must_use]
    pub fn plain_description(&self) -> String {
        strip_markup(&self.description)
    }

    #[must_use]
    pub fn status(&self) -> TopicStatus {
        self.status
    }

    #[must_use]
    pub fn videos(&self) -> &[VideoRef] {
        &self.videos
    }

    /// Drives the one forward transition this workspace owns.
    ///
    /// Returns `true` if the status changed; completing an already
    /// completed topic changes nothing. Callers gate on
    /// `status().is_actionable()`; unlocking is a server transition.
    pub fn complete(&mut self) -> bool {
        if self.status.is_completed() {
            return false;
        }
        self.status = TopicStatus::Completed;
        true
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
