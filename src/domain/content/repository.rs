use crate::domain::content::entity::{ContentItem, ContentUpdate, NewContentItem};
use crate::domain::content::value_objects::{ContentId, ContentKind};
use crate::domain::errors::DomainResult;
use crate::domain::publisher::PublisherId;
use crate::domain::user::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait ContentWriteRepository: Send + Sync {
    async fn insert(&self, item: NewContentItem) -> DomainResult<ContentItem>;
    /// Applies every field of the update in one statement, or fails with
    /// `Conflict` when the row changed since `original_updated_at`.
    async fn update(&self, update: ContentUpdate) -> DomainResult<ContentItem>;
    /// Permanently removes the item together with its comments.
    async fn delete(&self, id: ContentId) -> DomainResult<()>;
}

#[async_trait]
pub trait ContentReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ContentId) -> DomainResult<Option<ContentItem>>;
    async fn list_unpublished(&self, kind: ContentKind) -> DomainResult<Vec<ContentItem>>;
    /// Published items owned by any of `publishers` or written by any of `authors`.
    async fn list_published_from(
        &self,
        kind: ContentKind,
        publishers: &[PublisherId],
        authors: &[UserId],
    ) -> DomainResult<Vec<ContentItem>>;
}
