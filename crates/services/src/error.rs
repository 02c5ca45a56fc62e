//! Shared error types for the services crate.

use thiserror::Error;

use catalog::CatalogError;
use journey_core::model::TopicId;

/// Errors emitted by the journey progression services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum JourneyError {
    #[error("no snapshot is loaded for the requested context")]
    NoActiveContext,

    #[error("topic {0} is not part of the active context")]
    UnknownTopic(TopicId),

    #[error("topic {0} is locked")]
    TopicLocked(TopicId),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
