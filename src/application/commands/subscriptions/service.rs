// src/application/commands/subscriptions/service.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        publisher::{PublisherId, PublisherRepository},
        subscription::{SubscriptionRepository, SubscriptionTarget},
        user::{Role, User, UserId, UserRepository},
    },
};

/// Raw target as addressed by a caller, before existence checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscriptionTargetRef {
    Publisher(i64),
    Journalist(i64),
}

pub struct SubscriptionCommandService {
    pub(super) subscription_repo: Arc<dyn SubscriptionRepository>,
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) publisher_repo: Arc<dyn PublisherRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl SubscriptionCommandService {
    pub fn new(
        subscription_repo: Arc<dyn SubscriptionRepository>,
        user_repo: Arc<dyn UserRepository>,
        publisher_repo: Arc<dyn PublisherRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            subscription_repo,
            user_repo,
            publisher_repo,
            clock,
        }
    }

    pub(super) async fn load_reader(&self, actor: &AuthenticatedUser) -> ApplicationResult<User> {
        let user = self
            .user_repo
            .find_by_id(actor.id)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized("unknown user"))?;
        if user.role != Role::Reader {
            return Err(ApplicationError::forbidden(
                "only readers can manage subscriptions",
            ));
        }
        Ok(user)
    }

    /// Resolves a target and checks that it exists. A journalist target must
    /// currently hold the journalist role.
    pub(super) async fn resolve_existing(
        &self,
        target: SubscriptionTargetRef,
    ) -> ApplicationResult<SubscriptionTarget> {
        match target {
            SubscriptionTargetRef::Publisher(raw) => {
                let id = PublisherId::new(raw)?;
                self.publisher_repo
                    .find_by_id(id)
                    .await?
                    .ok_or_else(|| ApplicationError::not_found("publisher not found"))?;
                Ok(SubscriptionTarget::Publisher(id))
            }
            SubscriptionTargetRef::Journalist(raw) => {
                let id = UserId::new(raw)?;
                self.user_repo
                    .find_by_id(id)
                    .await?
                    .filter(|user| user.role == Role::Journalist)
                    .ok_or_else(|| ApplicationError::not_found("journalist not found"))?;
                Ok(SubscriptionTarget::Journalist(id))
            }
        }
    }
}

pub(super) fn parse_target(target: SubscriptionTargetRef) -> ApplicationResult<SubscriptionTarget> {
    Ok(match target {
        SubscriptionTargetRef::Publisher(raw) => SubscriptionTarget::Publisher(PublisherId::new(raw)?),
        SubscriptionTargetRef::Journalist(raw) => SubscriptionTarget::Journalist(UserId::new(raw)?),
    })
}
