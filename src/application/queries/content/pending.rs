use super::ContentQueryService;
use crate::{
    application::{
        dto::{AuthenticatedUser, ContentDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        access::{CanApproveSpec, ContentSpecification},
        content::ContentKind,
    },
};

pub struct PendingApprovalsQuery {
    pub kind: ContentKind,
}

impl ContentQueryService {
    /// Unpublished items the actor could act on: independent ones, plus
    /// those owned by publishers where the actor sits on the editor staff.
    pub async fn pending_approvals(
        &self,
        actor: &AuthenticatedUser,
        query: PendingApprovalsQuery,
    ) -> ApplicationResult<Vec<ContentDto>> {
        let oracle = self.access.resolve(actor).await?;
        if !CanApproveSpec::new(&oracle, query.kind).is_satisfied() {
            return Err(ApplicationError::forbidden(format!(
                "only editors can review pending {}s",
                query.kind
            )));
        }

        let items = self.read_repo.list_unpublished(query.kind).await?;
        Ok(items
            .into_iter()
            .filter(|item| {
                item.is_independent
                    || item
                        .publisher_id
                        .is_some_and(|publisher| oracle.is_editor_staff_of(publisher))
            })
            .map(Into::into)
            .collect())
    }
}
