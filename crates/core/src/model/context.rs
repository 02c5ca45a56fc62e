use crate::model::ids::{CategoryId, PhaseId};

//
// ─── TRACK VERSION ─────────────────────────────────────────────────────────────
//

/// One of the two parallel topic tracks a dual-track phase carries.
///
/// The tracks share ordinal slots (stage N in one corresponds to stage N
/// in the other) but completion is tracked independently per track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrackVersion {
    /// Reads from the first data slot.
    Controller,
    /// Reads from the second data slot.
    Adapter,
}

impl TrackVersion {
    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Self::Controller => Self::Adapter,
            Self::Adapter => Self::Controller,
        }
    }
}

//
// ─── NAVIGATION CONTEXT ────────────────────────────────────────────────────────
//

/// Which slice of a phase is being browsed.
///
/// Exactly one scope is active at a time; a flat phase has neither a
/// category nor a track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContextScope {
    /// The phase's own topic list (or, for a categorized phase, its
    /// category overview).
    Flat,
    /// Topics of one category within the phase.
    Category(CategoryId),
    /// One track of a dual-track phase.
    Track(TrackVersion),
}

/// The `(phase, scope)` pair that selects which topic list is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NavContext {
    phase_id: PhaseId,
    scope: ContextScope,
}

impl NavContext {
    #[must_use]
    pub fn flat(phase_id: PhaseId) -> Self {
        Self {
            phase_id,
            scope: ContextScope::Flat,
        }
    }

    #[must_use]
    pub fn in_category(phase_id: PhaseId, category_id: CategoryId) -> Self {
        Self {
            phase_id,
            scope: ContextScope::Category(category_id),
        }
    }

    #[must_use]
    pub fn in_track(phase_id: PhaseId, version: TrackVersion) -> Self {
        Self {
            phase_id,
            scope: ContextScope::Track(version),
        }
    }

    #[must_use]
    pub fn phase_id(self) -> PhaseId {
        self.phase_id
    }

    #[must_use]
    pub fn scope(self) -> ContextScope {
        self.scope
    }

    #[must_use]
    pub fn category_id(self) -> Option<CategoryId> {
        match self.scope {
            ContextScope::Category(id) => Some(id),
            _ => None,
        }
    }

    #[must_use]
    pub fn track(self) -> Option<TrackVersion> {
        match self.scope {
            ContextScope::Track(version) => Some(version),
            _ => None,
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
