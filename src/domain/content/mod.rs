// src/domain/content/mod.rs
pub mod entity;
pub mod events;
pub mod repository;
pub mod value_objects;

pub use entity::{Approval, ContentItem, ContentUpdate, LifecycleState, NewContentItem};
pub use events::PublishEvent;
pub use repository::{ContentReadRepository, ContentWriteRepository};
pub use value_objects::{CategoryId, ContentBody, ContentId, ContentKind, ContentTitle, ImagePath};
