use crate::domain::publisher::StaffAssignment;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StaffAssignmentDto {
    pub id: i64,
    pub publisher_id: i64,
    pub user_id: i64,
    /// `editor` or `journalist`.
    pub role: String,
    pub joined_on: NaiveDate,
}

impl From<StaffAssignment> for StaffAssignmentDto {
    fn from(assignment: StaffAssignment) -> Self {
        Self {
            id: assignment.id.into(),
            publisher_id: assignment.publisher_id.into(),
            user_id: assignment.user_id.into(),
            role: assignment.role.as_str().to_string(),
            joined_on: assignment.joined_on,
        }
    }
}
