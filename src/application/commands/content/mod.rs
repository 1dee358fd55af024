// src/application/commands/content/mod.rs
mod approve;
mod create;
mod delete;
mod direct_publish;
mod locks;
mod publish;
mod service;
mod update;

pub use approve::ApproveContentCommand;
pub use create::{CreateContentCommand, CreateContentCommandBuilder};
pub use delete::DeleteContentCommand;
pub use direct_publish::DirectPublishCommand;
pub use locks::{ContentGuard, ContentLocks};
pub use publish::PublishContentCommand;
pub use service::ContentCommandService;
pub use update::UpdateContentCommand;
