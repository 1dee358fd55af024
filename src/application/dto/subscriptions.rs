use crate::domain::subscription::{Subscription, SubscriptionTarget};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SubscriptionDto {
    pub id: i64,
    pub subscriber_id: i64,
    #[serde(default)]
    pub publisher_id: Option<i64>,
    #[serde(default)]
    pub journalist_id: Option<i64>,
    pub created_at: DateTime<Utc>,
}

impl From<Subscription> for SubscriptionDto {
    fn from(subscription: Subscription) -> Self {
        let (publisher_id, journalist_id) = match subscription.target {
            SubscriptionTarget::Publisher(id) => (Some(id.into()), None),
            SubscriptionTarget::Journalist(id) => (None, Some(id.into())),
        };
        Self {
            id: subscription.id.into(),
            subscriber_id: subscription.subscriber_id.into(),
            publisher_id,
            journalist_id,
            created_at: subscription.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SubscriptionOutcomeDto {
    pub subscription: SubscriptionDto,
    pub already_subscribed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UnsubscribeOutcomeDto {
    pub removed: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct SubscriptionsOverviewDto {
    pub publishers: Vec<i64>,
    pub journalists: Vec<i64>,
}
