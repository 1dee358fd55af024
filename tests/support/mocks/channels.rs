// tests/support/mocks/channels.rs
use async_trait::async_trait;
use newsdesk_core::application::ports::notification::{
    ChannelError, EmailMessage, EmailSender, MediaHandle, PostReceipt, PublishEventSink,
    SocialChannel,
};
use newsdesk_core::domain::content::PublishEvent;
use std::{
    path::{Path, PathBuf},
    sync::Mutex,
    time::Duration,
};

#[derive(Default)]
pub struct RecordingEventSink {
    events: Mutex<Vec<PublishEvent>>,
}

impl RecordingEventSink {
    pub fn events(&self) -> Vec<PublishEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl PublishEventSink for RecordingEventSink {
    fn emit(&self, event: PublishEvent) {
        self.events.lock().unwrap().push(event);
    }
}

#[derive(Default)]
pub struct RecordingEmailSender {
    sent: Mutex<Vec<EmailMessage>>,
    failure: Option<String>,
}

impl RecordingEmailSender {
    pub fn failing(reason: &str) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            failure: Some(reason.to_string()),
        }
    }

    pub fn sent(&self) -> Vec<EmailMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmailSender for RecordingEmailSender {
    async fn send(&self, message: &EmailMessage) -> Result<(), ChannelError> {
        if let Some(reason) = &self.failure {
            return Err(ChannelError::Transport(reason.clone()));
        }
        self.sent.lock().unwrap().push(message.clone());
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedPost {
    pub text: String,
    pub media: Option<MediaHandle>,
}

/// Social channel double. Behaviour is fixed at construction.
pub struct RecordingSocialChannel {
    posts: Mutex<Vec<RecordedPost>>,
    uploads: Mutex<Vec<PathBuf>>,
    media: bool,
    disabled: bool,
    fail_upload: bool,
    fail_post: bool,
    delay: Option<Duration>,
}

impl Default for RecordingSocialChannel {
    fn default() -> Self {
        Self {
            posts: Mutex::new(Vec::new()),
            uploads: Mutex::new(Vec::new()),
            media: true,
            disabled: false,
            fail_upload: false,
            fail_post: false,
            delay: None,
        }
    }
}

impl RecordingSocialChannel {
    pub fn without_media() -> Self {
        Self {
            media: false,
            ..Self::default()
        }
    }

    pub fn disabled() -> Self {
        Self {
            disabled: true,
            ..Self::default()
        }
    }

    pub fn failing_uploads() -> Self {
        Self {
            fail_upload: true,
            ..Self::default()
        }
    }

    pub fn failing_posts() -> Self {
        Self {
            fail_post: true,
            ..Self::default()
        }
    }

    pub fn slow(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::default()
        }
    }

    pub fn posts(&self) -> Vec<RecordedPost> {
        self.posts.lock().unwrap().clone()
    }

    pub fn uploads(&self) -> Vec<PathBuf> {
        self.uploads.lock().unwrap().clone()
    }
}

#[async_trait]
impl SocialChannel for RecordingSocialChannel {
    fn supports_media(&self) -> bool {
        self.media
    }

    async fn upload_media(&self, path: &Path) -> Result<MediaHandle, ChannelError> {
        if self.fail_upload {
            return Err(ChannelError::Rejected {
                status: 400,
                body: "unsupported media".into(),
            });
        }
        let mut uploads = self.uploads.lock().unwrap();
        uploads.push(path.to_path_buf());
        Ok(MediaHandle(format!("media-{}", uploads.len())))
    }

    async fn post(&self, text: &str, media: Option<&MediaHandle>) -> Result<PostReceipt, ChannelError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.disabled {
            return Err(ChannelError::Disabled);
        }
        if self.fail_post {
            return Err(ChannelError::Credentials("token revoked".into()));
        }
        let mut posts = self.posts.lock().unwrap();
        posts.push(RecordedPost {
            text: text.to_string(),
            media: media.cloned(),
        });
        Ok(PostReceipt {
            id: Some(format!("post-{}", posts.len())),
        })
    }
}
