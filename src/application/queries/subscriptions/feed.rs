use super::SubscriptionQueryService;
use crate::{
    application::{
        dto::{AuthenticatedUser, ContentDto},
        error::ApplicationResult,
    },
    domain::content::ContentKind,
};

pub struct SubscribedFeedQuery {
    /// Restrict to one kind; both kinds when `None`.
    pub kind: Option<ContentKind>,
}

impl SubscriptionQueryService {
    /// Published content from followed publishers and journalists, newest first.
    pub async fn subscribed_feed(
        &self,
        actor: &AuthenticatedUser,
        query: SubscribedFeedQuery,
    ) -> ApplicationResult<Vec<ContentDto>> {
        let publishers = self.subscription_repo.publishers_of(actor.id).await?;
        let journalists = self.subscription_repo.journalists_of(actor.id).await?;
        if publishers.is_empty() && journalists.is_empty() {
            return Ok(Vec::new());
        }

        let kinds = match query.kind {
            Some(kind) => vec![kind],
            None => vec![ContentKind::Article, ContentKind::Newsletter],
        };

        let mut items = Vec::new();
        for kind in kinds {
            items.extend(
                self.content_repo
                    .list_published_from(kind, &publishers, &journalists)
                    .await?,
            );
        }
        items.sort_by(|a, b| {
            b.published_at
                .cmp(&a.published_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(items.into_iter().map(Into::into).collect())
    }
}
