// src/application/commands/subscriptions/unsubscribe.rs
use super::{SubscriptionCommandService, SubscriptionTargetRef, service::parse_target};
use crate::application::{
    dto::{AuthenticatedUser, UnsubscribeOutcomeDto},
    error::ApplicationResult,
};

impl SubscriptionCommandService {
    pub async fn unsubscribe(
        &self,
        actor: &AuthenticatedUser,
        target: SubscriptionTargetRef,
    ) -> ApplicationResult<UnsubscribeOutcomeDto> {
        let reader = self.load_reader(actor).await?;
        let target = parse_target(target)?;
        let removed = self.subscription_repo.delete(reader.id, target).await?;
        if removed {
            tracing::info!(subscriber_id = %reader.id, %target, "subscription removed");
        }
        Ok(UnsubscribeOutcomeDto { removed })
    }
}
