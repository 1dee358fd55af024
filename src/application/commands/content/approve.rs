// src/application/commands/content/approve.rs
use super::ContentCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, ContentDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        access::{CanApproveSpec, ContentSpecification},
        content::{ContentId, ContentKind, ContentUpdate},
    },
};

pub struct ApproveContentCommand {
    pub kind: ContentKind,
    pub id: i64,
}

impl ContentCommandService {
    /// Records editorial approval. Approving twice keeps the first approver.
    pub async fn approve(
        &self,
        actor: &AuthenticatedUser,
        command: ApproveContentCommand,
    ) -> ApplicationResult<ContentDto> {
        let id = ContentId::new(command.id)?;
        let oracle = self.access.resolve(actor).await?;
        let _guard = self.locks.acquire(id).await;
        let mut item = self.load(command.kind, id).await?;

        if !CanApproveSpec::new(&oracle, item.kind).is_satisfied() {
            return Err(ApplicationError::forbidden(format!(
                "only editors can approve {}s",
                item.kind
            )));
        }

        let original_updated_at = item.updated_at;
        if !item.approve(oracle.user_id(), self.clock.now()) {
            return Ok(item.into());
        }

        let mut update = ContentUpdate::new(id, original_updated_at);
        if let Some(approval) = item.approval {
            update = update.with_approval(approval);
        }
        update.set_updated_at(item.updated_at);
        let updated = self.write_repo.update(update).await?;

        tracing::info!(content_id = %id, kind = %updated.kind, approved_by = %oracle.user_id(), "content approved");
        Ok(updated.into())
    }
}
