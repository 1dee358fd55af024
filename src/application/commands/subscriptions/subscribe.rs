// src/application/commands/subscriptions/subscribe.rs
use super::{SubscriptionCommandService, SubscriptionTargetRef};
use crate::application::{
    dto::{AuthenticatedUser, SubscriptionOutcomeDto},
    error::ApplicationResult,
};

impl SubscriptionCommandService {
    /// Follows a publisher or journalist. Subscribing twice returns the
    /// existing subscription with `already_subscribed` set.
    pub async fn subscribe(
        &self,
        actor: &AuthenticatedUser,
        target: SubscriptionTargetRef,
    ) -> ApplicationResult<SubscriptionOutcomeDto> {
        let reader = self.load_reader(actor).await?;
        let target = self.resolve_existing(target).await?;

        let (subscription, created) = self
            .subscription_repo
            .get_or_create(reader.id, target, self.clock.now())
            .await?;

        if created {
            tracing::info!(subscriber_id = %reader.id, %target, "subscription created");
        }

        Ok(SubscriptionOutcomeDto {
            subscription: subscription.into(),
            already_subscribed: !created,
        })
    }
}
