use std::sync::Arc;

use crate::domain::{content::ContentReadRepository, subscription::SubscriptionRepository};

pub struct SubscriptionQueryService {
    pub(super) subscription_repo: Arc<dyn SubscriptionRepository>,
    pub(super) content_repo: Arc<dyn ContentReadRepository>,
}

impl SubscriptionQueryService {
    pub fn new(
        subscription_repo: Arc<dyn SubscriptionRepository>,
        content_repo: Arc<dyn ContentReadRepository>,
    ) -> Self {
        Self {
            subscription_repo,
            content_repo,
        }
    }
}
