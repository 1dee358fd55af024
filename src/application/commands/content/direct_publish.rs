// src/application/commands/content/direct_publish.rs
use super::ContentCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, ContentDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        access::{CanDirectPublishSpec, ContentSpecification},
        content::{ContentId, ContentKind},
    },
};

pub struct DirectPublishCommand {
    pub kind: ContentKind,
    pub id: i64,
}

impl ContentCommandService {
    /// Publish toggle for the item's journalist or any editor. Skips the
    /// publisher staff check but still refuses unapproved items.
    pub async fn direct_publish(
        &self,
        actor: &AuthenticatedUser,
        command: DirectPublishCommand,
    ) -> ApplicationResult<ContentDto> {
        let id = ContentId::new(command.id)?;
        let oracle = self.access.resolve(actor).await?;
        let _guard = self.locks.acquire(id).await;
        let item = self.load(command.kind, id).await?;

        if !CanDirectPublishSpec::new(&oracle, &item).is_satisfied() {
            return Err(ApplicationError::forbidden(format!(
                "only the author or an editor can publish this {}",
                item.kind
            )));
        }

        self.complete_publish(item, &oracle).await
    }
}
