// src/application/access.rs
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        access::RoleOracle,
        publisher::{StaffRepository, StaffRole},
        user::UserRepository,
    },
};
use std::sync::Arc;

/// Loads the capability snapshot for an authenticated actor.
pub struct AccessResolver {
    user_repo: Arc<dyn UserRepository>,
    staff_repo: Arc<dyn StaffRepository>,
}

impl AccessResolver {
    pub fn new(user_repo: Arc<dyn UserRepository>, staff_repo: Arc<dyn StaffRepository>) -> Self {
        Self {
            user_repo,
            staff_repo,
        }
    }

    pub async fn resolve(&self, actor: &AuthenticatedUser) -> ApplicationResult<RoleOracle> {
        let user = self
            .user_repo
            .find_by_id(actor.id)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized("unknown user"))?;
        let editor_of = self
            .staff_repo
            .publishers_for(user.id, StaffRole::Editor)
            .await?;
        Ok(RoleOracle::new(user, editor_of))
    }
}
