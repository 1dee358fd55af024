// src/application/commands/content/publish.rs
use super::ContentCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, ContentDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        access::{CanPublishSpec, PublishDecision},
        content::{ContentId, ContentKind},
    },
};

pub struct PublishContentCommand {
    pub kind: ContentKind,
    pub id: i64,
}

impl ContentCommandService {
    /// Editorial publish: requires prior approval and, for publisher-owned
    /// items, an editor seat on that publisher's staff.
    pub async fn publish(
        &self,
        actor: &AuthenticatedUser,
        command: PublishContentCommand,
    ) -> ApplicationResult<ContentDto> {
        let id = ContentId::new(command.id)?;
        let oracle = self.access.resolve(actor).await?;
        let _guard = self.locks.acquire(id).await;
        let item = self.load(command.kind, id).await?;

        match CanPublishSpec::new(&oracle, &item).decide() {
            PublishDecision::Allowed => {}
            PublishDecision::NotAnEditor => {
                return Err(ApplicationError::forbidden(format!(
                    "only editors can publish {}s",
                    item.kind
                )));
            }
            PublishDecision::NotPublisherStaff => {
                return Err(ApplicationError::forbidden(format!(
                    "you are not an editor for this {}'s publisher",
                    item.kind
                )));
            }
        }

        self.complete_publish(item, &oracle).await
    }
}
