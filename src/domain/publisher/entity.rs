// src/domain/publisher/entity.rs
use crate::domain::publisher::value_objects::{PublisherId, StaffAssignmentId, StaffRole};
use crate::domain::user::UserId;
use chrono::{DateTime, NaiveDate, Utc};

#[derive(Debug, Clone)]
pub struct Publisher {
    pub id: PublisherId,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// Grants `user_id` the given role scoped to a single publisher.
#[derive(Debug, Clone)]
pub struct StaffAssignment {
    pub id: StaffAssignmentId,
    pub publisher_id: PublisherId,
    pub user_id: UserId,
    pub role: StaffRole,
    pub joined_on: NaiveDate,
}

#[derive(Debug, Clone)]
pub struct NewStaffAssignment {
    pub publisher_id: PublisherId,
    pub user_id: UserId,
    pub role: StaffRole,
    pub joined_on: NaiveDate,
}
