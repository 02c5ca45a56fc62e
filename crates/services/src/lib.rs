#![forbid(unsafe_code)]

pub mod error;
pub mod journey;

pub use journey_core::Clock;

pub use error::JourneyError;
pub use journey::{
    Advance, CatalogNormalizer, CompletionTracker, ContextSnapshot, FetchToken, JourneyOverview,
    JourneyService, JourneyState, MarkOutcome, NextTopicResolver, PhaseOverview, TopicView,
};
