mod get_by_id;
mod pending;
mod service;

pub use get_by_id::GetContentQuery;
pub use pending::PendingApprovalsQuery;
pub use service::ContentQueryService;
