pub mod oracle;
pub mod specifications;

pub use oracle::RoleOracle;
pub use specifications::{
    CanApproveSpec, CanDeleteContentSpec, CanDirectPublishSpec, CanPublishSpec,
    CanViewContentSpec, ContentSpecification, PublishDecision,
};
