// src/application/commands/staff/assign.rs
use super::StaffCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, StaffAssignmentDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        publisher::{NewStaffAssignment, StaffRole},
        user::{Role, UserId},
    },
};

pub struct AssignStaffCommand {
    pub publisher_id: i64,
    pub user_id: i64,
    pub role: StaffRole,
}

fn matching_role(role: StaffRole) -> Role {
    match role {
        StaffRole::Editor => Role::Editor,
        StaffRole::Journalist => Role::Journalist,
    }
}

impl StaffCommandService {
    /// Adds a user to a publisher's staff. The user must already hold the
    /// global role matching the staff role; an existing assignment for the
    /// same triple is returned as is.
    pub async fn assign(
        &self,
        actor: &AuthenticatedUser,
        command: AssignStaffCommand,
    ) -> ApplicationResult<StaffAssignmentDto> {
        let admin = self.ensure_administrator(actor).await?;
        let publisher = self.load_publisher(command.publisher_id).await?;

        let user_id = UserId::new(command.user_id)?;
        let expected = matching_role(command.role);
        let user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .filter(|user| user.role == expected)
            .ok_or_else(|| ApplicationError::not_found(format!("{} not found", command.role)))?;

        let assignment = self
            .staff_repo
            .insert(NewStaffAssignment {
                publisher_id: publisher.id,
                user_id: user.id,
                role: command.role,
                joined_on: self.clock.now().date_naive(),
            })
            .await?;

        tracing::info!(
            publisher_id = %publisher.id,
            user_id = %user.id,
            role = %command.role,
            assigned_by = %admin.id,
            "staff assignment stored"
        );
        Ok(assignment.into())
    }
}
