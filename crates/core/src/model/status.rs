use serde::{Deserialize, Serialize};

/// Lifecycle state of a topic, category, or phase as reported by the catalog.
///
/// `Completed` is terminal: nothing in this workspace ever moves a status
/// backwards from it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TopicStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
    Locked,
}

impl TopicStatus {
    /// Maps a raw catalog status string onto the enum.
    ///
    /// The catalog is inconsistent about casing and separators
    /// (`"COMPLETED"`, `"In Progress"`, `"in_progress"` all occur), so the
    /// match ignores both. Anything unrecognized, including a missing
    /// value, is `NotStarted`.
    #[must_use]
    pub fn from_raw(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::NotStarted;
        };
        let key: String = raw
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match key.as_str() {
            "inprogress" | "started" | "ongoing" => Self::InProgress,
            "completed" | "complete" | "done" => Self::Completed,
            "locked" => Self::Locked,
            _ => Self::NotStarted,
        }
    }

    #[must_use]
    pub fn is_completed(self) -> bool {
        matches!(self, Self::Completed)
    }

    /// Locked topics cannot be opened or completed until the server
    /// unlocks them.
    #[must_use]
    pub fn is_actionable(self) -> bool {
        !matches!(self, Self::Locked)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
