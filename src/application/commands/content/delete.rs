// src/application/commands/content/delete.rs
use super::ContentCommandService;
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        access::{CanDeleteContentSpec, ContentSpecification},
        content::{ContentId, ContentKind},
    },
};

pub struct DeleteContentCommand {
    pub kind: ContentKind,
    pub id: i64,
}

impl ContentCommandService {
    pub async fn delete(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteContentCommand,
    ) -> ApplicationResult<()> {
        let id = ContentId::new(command.id)?;
        let oracle = self.access.resolve(actor).await?;
        let _guard = self.locks.acquire(id).await;
        let item = self.load(command.kind, id).await?;

        if !CanDeleteContentSpec::new(&oracle, &item).is_satisfied() {
            return Err(ApplicationError::forbidden(format!(
                "only the author or an editor can delete this {}",
                item.kind
            )));
        }

        self.write_repo.delete(id).await?;
        tracing::info!(content_id = %id, kind = %item.kind, deleted_by = %oracle.user_id(), "content deleted");
        Ok(())
    }
}
