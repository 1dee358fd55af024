use super::ContentQueryService;
use crate::{
    application::{
        dto::{AuthenticatedUser, ContentDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        access::{CanViewContentSpec, ContentSpecification},
        content::{ContentId, ContentKind},
    },
};

pub struct GetContentQuery {
    pub kind: ContentKind,
    pub id: i64,
}

impl ContentQueryService {
    /// Published items are public. Drafts are reported as missing to anyone
    /// other than their author and content managers.
    pub async fn get_content(
        &self,
        actor: Option<&AuthenticatedUser>,
        query: GetContentQuery,
    ) -> ApplicationResult<ContentDto> {
        let id = ContentId::new(query.id)?;
        let not_found = || ApplicationError::not_found(format!("{} not found", query.kind));
        let item = self
            .read_repo
            .find_by_id(id)
            .await?
            .filter(|item| item.kind == query.kind)
            .ok_or_else(not_found)?;

        if item.is_published() {
            return Ok(item.into());
        }

        let oracle = match actor {
            Some(actor) => Some(self.access.resolve(actor).await?),
            None => None,
        };
        if CanViewContentSpec::new(oracle.as_ref(), &item).is_satisfied() {
            Ok(item.into())
        } else {
            Err(not_found())
        }
    }
}
