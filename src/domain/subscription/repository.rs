use crate::domain::errors::DomainResult;
use crate::domain::publisher::PublisherId;
use crate::domain::subscription::entity::{Subscription, SubscriptionTarget};
use crate::domain::user::{EmailAddress, UserId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait SubscriptionRepository: Send + Sync {
    /// Returns the subscription and whether this call created it. Concurrent
    /// calls for the same pair never produce two rows.
    async fn get_or_create(
        &self,
        subscriber_id: UserId,
        target: SubscriptionTarget,
        now: DateTime<Utc>,
    ) -> DomainResult<(Subscription, bool)>;

    /// Returns `true` when a row was removed.
    async fn delete(&self, subscriber_id: UserId, target: SubscriptionTarget) -> DomainResult<bool>;

    async fn exists(&self, subscriber_id: UserId, target: SubscriptionTarget) -> DomainResult<bool>;

    async fn publishers_of(&self, subscriber_id: UserId) -> DomainResult<Vec<PublisherId>>;

    async fn journalists_of(&self, subscriber_id: UserId) -> DomainResult<Vec<UserId>>;

    /// Email addresses of every subscriber following `target`.
    async fn subscriber_emails(&self, target: SubscriptionTarget) -> DomainResult<Vec<EmailAddress>>;
}
