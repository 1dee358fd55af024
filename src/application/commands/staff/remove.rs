// src/application/commands/staff/remove.rs
use super::StaffCommandService;
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::publisher::StaffAssignmentId,
};

impl StaffCommandService {
    pub async fn remove(&self, actor: &AuthenticatedUser, id: i64) -> ApplicationResult<()> {
        let admin = self.ensure_administrator(actor).await?;
        let id = StaffAssignmentId::new(id)?;
        let assignment = self
            .staff_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("staff assignment not found"))?;

        self.staff_repo.delete(id).await?;
        tracing::info!(
            publisher_id = %assignment.publisher_id,
            user_id = %assignment.user_id,
            role = %assignment.role,
            removed_by = %admin.id,
            "staff assignment removed"
        );
        Ok(())
    }
}
