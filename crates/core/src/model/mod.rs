mod category;
mod context;
mod ids;
mod phase;
mod progress;
mod status;
mod topic;

pub use category::ActionCategory;
pub use context::{ContextScope, NavContext, TrackVersion};
pub use ids::{CategoryId, PhaseId, TopicId};
pub use phase::{Phase, PhaseLayout};
pub use progress::Progress;
pub use status::TopicStatus;
pub use topic::{Topic, VideoRef};
