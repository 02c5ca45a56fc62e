#![forbid(unsafe_code)]

pub mod api;
pub mod dto;
pub mod http;
pub mod memory;

pub use api::{CatalogApi, CatalogError};
pub use dto::{
    CategoryDetailResponse, CategoryRecord, PhaseDetailResponse, PhaseRecord, TopicDetailResponse,
    TopicRecord, TopicSlots, VideoRecord,
};
pub use http::{CatalogConfig, HttpCatalog};
pub use memory::InMemoryCatalog;
