pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{NewStaffAssignment, Publisher, StaffAssignment};
pub use repository::{PublisherRepository, StaffRepository};
pub use value_objects::{PublisherId, StaffAssignmentId, StaffRole};
