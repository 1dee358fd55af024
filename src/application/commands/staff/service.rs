// src/application/commands/staff/service.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        publisher::{Publisher, PublisherId, PublisherRepository, StaffRepository},
        user::{User, UserRepository},
    },
};

pub struct StaffCommandService {
    pub(super) staff_repo: Arc<dyn StaffRepository>,
    pub(super) publisher_repo: Arc<dyn PublisherRepository>,
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl StaffCommandService {
    pub fn new(
        staff_repo: Arc<dyn StaffRepository>,
        publisher_repo: Arc<dyn PublisherRepository>,
        user_repo: Arc<dyn UserRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            staff_repo,
            publisher_repo,
            user_repo,
            clock,
        }
    }

    pub(super) async fn ensure_administrator(
        &self,
        actor: &AuthenticatedUser,
    ) -> ApplicationResult<User> {
        let user = self
            .user_repo
            .find_by_id(actor.id)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized("unknown user"))?;
        if !user.is_superuser {
            return Err(ApplicationError::forbidden(
                "only administrators can manage publisher staff",
            ));
        }
        Ok(user)
    }

    pub(super) async fn load_publisher(&self, raw: i64) -> ApplicationResult<Publisher> {
        let id = PublisherId::new(raw)?;
        self.publisher_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("publisher not found"))
    }
}
