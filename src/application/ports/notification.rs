// src/application/ports/notification.rs
use crate::domain::content::PublishEvent;
use crate::domain::user::EmailAddress;
use async_trait::async_trait;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChannelError {
    #[error("channel disabled")]
    Disabled,
    #[error("channel credentials missing or rejected: {0}")]
    Credentials(String),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("remote rejected request with status {status}: {body}")]
    Rejected { status: u16, body: String },
    #[error("io error: {0}")]
    Io(String),
    #[error("channel timed out")]
    Timeout,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub from: String,
    pub to: Vec<EmailAddress>,
    pub subject: String,
    pub body: String,
}

#[async_trait]
pub trait EmailSender: Send + Sync {
    /// Delivers one message to every recipient in `message.to`.
    async fn send(&self, message: &EmailMessage) -> Result<(), ChannelError>;
}

/// Opaque identifier returned by a media upload and attached to a post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaHandle(pub String);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostReceipt {
    pub id: Option<String>,
}

#[async_trait]
pub trait SocialChannel: Send + Sync {
    fn supports_media(&self) -> bool;

    async fn upload_media(&self, path: &Path) -> Result<MediaHandle, ChannelError>;

    async fn post(
        &self,
        text: &str,
        media: Option<&MediaHandle>,
    ) -> Result<PostReceipt, ChannelError>;
}

/// Receives publish events from the lifecycle engine. Emitting never fails
/// the caller; a sink that cannot accept an event logs and drops it.
pub trait PublishEventSink: Send + Sync {
    fn emit(&self, event: PublishEvent);
}
