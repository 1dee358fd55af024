use crate::domain::content::entity::ContentItem;
use crate::domain::content::value_objects::{ContentId, ContentKind};
use crate::domain::publisher::PublisherId;
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Handed from the lifecycle engine to the notifier after a successful publish.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishEvent {
    pub event_id: Uuid,
    pub content_id: ContentId,
    pub kind: ContentKind,
    pub title: String,
    pub author_id: UserId,
    pub author_display_name: String,
    pub description: String,
    pub publisher_id: Option<PublisherId>,
    pub image_path: Option<String>,
    pub published_at: DateTime<Utc>,
}

impl PublishEvent {
    /// Builds the event for a published item. Returns `None` when the item
    /// has not been published.
    pub fn for_item(
        event_id: Uuid,
        item: &ContentItem,
        author_display_name: impl Into<String>,
    ) -> Option<Self> {
        let published_at = item.published_at?;
        Some(Self {
            event_id,
            content_id: item.id,
            kind: item.kind,
            title: item.title.as_str().to_string(),
            author_id: item.author_id,
            author_display_name: author_display_name.into(),
            description: summarize(item.body.as_str()),
            publisher_id: item.publisher_id,
            image_path: item.image_path.as_ref().map(|p| p.as_str().to_string()),
            published_at,
        })
    }
}

/// Collapses runs of whitespace so the body reads as a single-line description.
fn summarize(body: &str) -> String {
    body.split_whitespace().collect::<Vec<_>>().join(" ")
}
