use std::collections::BTreeSet;

use super::SubscriptionQueryService;
use crate::{
    application::{
        dto::{AuthenticatedUser, SubscriptionsOverviewDto},
        error::ApplicationResult,
    },
    domain::{publisher::PublisherId, user::UserId},
};

impl SubscriptionQueryService {
    pub async fn subscribed_publishers_of(
        &self,
        user: UserId,
    ) -> ApplicationResult<BTreeSet<PublisherId>> {
        let publishers = self.subscription_repo.publishers_of(user).await?;
        Ok(publishers.into_iter().collect())
    }

    pub async fn subscribed_journalists_of(
        &self,
        user: UserId,
    ) -> ApplicationResult<BTreeSet<UserId>> {
        let journalists = self.subscription_repo.journalists_of(user).await?;
        Ok(journalists.into_iter().collect())
    }

    pub async fn overview(
        &self,
        actor: &AuthenticatedUser,
    ) -> ApplicationResult<SubscriptionsOverviewDto> {
        let publishers = self.subscribed_publishers_of(actor.id).await?;
        let journalists = self.subscribed_journalists_of(actor.id).await?;
        Ok(SubscriptionsOverviewDto {
            publishers: publishers.into_iter().map(Into::into).collect(),
            journalists: journalists.into_iter().map(Into::into).collect(),
        })
    }
}
