use crate::domain::errors::DomainResult;
use crate::domain::publisher::entity::{NewStaffAssignment, Publisher, StaffAssignment};
use crate::domain::publisher::value_objects::{PublisherId, StaffAssignmentId, StaffRole};
use crate::domain::user::UserId;
use async_trait::async_trait;
use std::collections::HashSet;

#[async_trait]
pub trait PublisherRepository: Send + Sync {
    async fn find_by_id(&self, id: PublisherId) -> DomainResult<Option<Publisher>>;
}

#[async_trait]
pub trait StaffRepository: Send + Sync {
    /// Inserts the assignment unless the (publisher, user, role) triple already
    /// exists, in which case the existing row is returned.
    async fn insert(&self, assignment: NewStaffAssignment) -> DomainResult<StaffAssignment>;
    async fn find_by_id(&self, id: StaffAssignmentId) -> DomainResult<Option<StaffAssignment>>;
    async fn delete(&self, id: StaffAssignmentId) -> DomainResult<()>;
    async fn exists(
        &self,
        publisher_id: PublisherId,
        user_id: UserId,
        role: StaffRole,
    ) -> DomainResult<bool>;
    async fn list_by_publisher(&self, publisher_id: PublisherId)
    -> DomainResult<Vec<StaffAssignment>>;
    async fn publishers_for(
        &self,
        user_id: UserId,
        role: StaffRole,
    ) -> DomainResult<HashSet<PublisherId>>;
}
