// src/application/commands/staff/list.rs
use super::StaffCommandService;
use crate::application::{
    dto::{AuthenticatedUser, StaffAssignmentDto},
    error::ApplicationResult,
};

impl StaffCommandService {
    pub async fn list(
        &self,
        actor: &AuthenticatedUser,
        publisher_id: i64,
    ) -> ApplicationResult<Vec<StaffAssignmentDto>> {
        self.ensure_administrator(actor).await?;
        let publisher = self.load_publisher(publisher_id).await?;
        let staff = self.staff_repo.list_by_publisher(publisher.id).await?;
        Ok(staff.into_iter().map(Into::into).collect())
    }
}
