// src/application/commands/content/service.rs
use std::sync::Arc;

use super::locks::ContentLocks;
use crate::{
    application::{
        access::AccessResolver,
        dto::ContentDto,
        error::{ApplicationError, ApplicationResult},
        ports::{notification::PublishEventSink, time::Clock},
    },
    domain::{
        access::RoleOracle,
        content::{
            ContentId, ContentItem, ContentKind, ContentReadRepository, ContentUpdate,
            ContentWriteRepository, PublishEvent,
        },
        publisher::PublisherRepository,
        user::UserRepository,
    },
};
use uuid::Uuid;

pub struct ContentCommandService {
    pub(super) write_repo: Arc<dyn ContentWriteRepository>,
    pub(super) read_repo: Arc<dyn ContentReadRepository>,
    pub(super) publisher_repo: Arc<dyn PublisherRepository>,
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) access: Arc<AccessResolver>,
    pub(super) events: Arc<dyn PublishEventSink>,
    pub(super) locks: ContentLocks,
    pub(super) clock: Arc<dyn Clock>,
}

impl ContentCommandService {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        write_repo: Arc<dyn ContentWriteRepository>,
        read_repo: Arc<dyn ContentReadRepository>,
        publisher_repo: Arc<dyn PublisherRepository>,
        user_repo: Arc<dyn UserRepository>,
        access: Arc<AccessResolver>,
        events: Arc<dyn PublishEventSink>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            publisher_repo,
            user_repo,
            access,
            events,
            locks: ContentLocks::new(),
            clock,
        }
    }

    /// Loads an item and checks it is of the kind the caller addressed.
    pub(super) async fn load(&self, kind: ContentKind, id: ContentId) -> ApplicationResult<ContentItem> {
        self.read_repo
            .find_by_id(id)
            .await?
            .filter(|item| item.kind == kind)
            .ok_or_else(|| ApplicationError::not_found(format!("{kind} not found")))
    }

    /// Transition tail shared by the gated and the direct publish paths.
    ///
    /// Persists the published stamp and hands the event to the sink. An item
    /// that is already published is returned unchanged and emits nothing.
    pub(super) async fn complete_publish(
        &self,
        mut item: ContentItem,
        oracle: &RoleOracle,
    ) -> ApplicationResult<ContentDto> {
        let original_updated_at = item.updated_at;
        let now = self.clock.now();
        if !item.publish(now)? {
            tracing::debug!(content_id = %item.id, "already published, nothing to do");
            return Ok(item.into());
        }

        let mut update = ContentUpdate::new(item.id, original_updated_at).with_published_at(now);
        update.set_updated_at(item.updated_at);
        let updated = self.write_repo.update(update).await?;

        let author_name = self.author_display_name(&updated, oracle).await;
        if let Some(event) = PublishEvent::for_item(Uuid::new_v4(), &updated, author_name) {
            tracing::info!(
                content_id = %updated.id,
                kind = %updated.kind,
                event_id = %event.event_id,
                published_by = %oracle.user_id(),
                "content published"
            );
            self.events.emit(event);
        }

        Ok(updated.into())
    }

    async fn author_display_name(&self, item: &ContentItem, oracle: &RoleOracle) -> String {
        if oracle.is_author_of(item) {
            return oracle.user().display_name().to_string();
        }
        match self.user_repo.find_by_id(item.author_id).await {
            Ok(Some(author)) => author.display_name().to_string(),
            Ok(None) => {
                tracing::warn!(author_id = %item.author_id, "author missing while building publish event");
                format!("user {}", item.author_id)
            }
            Err(err) => {
                tracing::warn!(author_id = %item.author_id, error = %err, "author lookup failed while building publish event");
                format!("user {}", item.author_id)
            }
        }
    }
}
