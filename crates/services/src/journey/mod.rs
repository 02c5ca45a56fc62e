mod normalize;
mod resolver;
mod service;
mod state;
mod tracker;
mod view;

// Public API of the journey progression subsystem.
pub use crate::error::JourneyError;
pub use normalize::CatalogNormalizer;
pub use resolver::NextTopicResolver;
pub use service::{Advance, JourneyService};
pub use state::{ContextSnapshot, FetchToken, JourneyState};
pub use tracker::{CompletionTracker, MarkOutcome};
pub use view::{JourneyOverview, PhaseOverview, TopicView};
