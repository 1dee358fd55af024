// src/application/notifications/fanout.rs
use super::social_text::compose_post;
use crate::{
    application::ports::notification::{
        ChannelError, EmailMessage, EmailSender, MediaHandle, PostReceipt, SocialChannel,
    },
    domain::{
        content::PublishEvent,
        subscription::{SubscriptionRepository, SubscriptionTarget},
        user::EmailAddress,
    },
};
use std::{
    collections::BTreeSet,
    future::Future,
    path::{Component, Path, PathBuf},
    sync::Arc,
    time::Duration,
};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct NotifierSettings {
    pub from_email: String,
    pub site_name: String,
    /// Overrides the per-kind default hashtags when set.
    pub hashtags: Option<String>,
    pub media_root: PathBuf,
    pub channel_timeout: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelOutcome {
    Delivered,
    Skipped(String),
    Failed(String),
}

impl ChannelOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, Self::Delivered)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationReport {
    pub event_id: Uuid,
    pub recipients: usize,
    pub email: ChannelOutcome,
    pub social: ChannelOutcome,
    pub media_attached: bool,
}

/// Delivers one publish event to every channel. Channel failures never
/// escape; they are logged and recorded in the report.
pub struct FanOutNotifier {
    subscriptions: Arc<dyn SubscriptionRepository>,
    email: Arc<dyn EmailSender>,
    social: Arc<dyn SocialChannel>,
    settings: NotifierSettings,
}

impl FanOutNotifier {
    pub fn new(
        subscriptions: Arc<dyn SubscriptionRepository>,
        email: Arc<dyn EmailSender>,
        social: Arc<dyn SocialChannel>,
        settings: NotifierSettings,
    ) -> Self {
        Self {
            subscriptions,
            email,
            social,
            settings,
        }
    }

    pub async fn notify(&self, event: &PublishEvent) -> NotificationReport {
        let ((recipients, email), (social, media_attached)) =
            tokio::join!(self.email_channel(event), self.social_channel(event));

        let report = NotificationReport {
            event_id: event.event_id,
            recipients,
            email,
            social,
            media_attached,
        };
        tracing::info!(
            event_id = %report.event_id,
            content_id = %event.content_id,
            recipients = report.recipients,
            email = ?report.email,
            social = ?report.social,
            media_attached = report.media_attached,
            "publish notifications dispatched"
        );
        report
    }

    /// Distinct addresses following the author or the item's publisher.
    pub async fn recipients(&self, event: &PublishEvent) -> Result<BTreeSet<EmailAddress>, ChannelError> {
        let mut targets = vec![SubscriptionTarget::Journalist(event.author_id)];
        if let Some(publisher_id) = event.publisher_id {
            targets.push(SubscriptionTarget::Publisher(publisher_id));
        }

        let mut recipients = BTreeSet::new();
        for target in targets {
            let emails = self
                .subscriptions
                .subscriber_emails(target)
                .await
                .map_err(|err| ChannelError::Transport(format!("recipient lookup failed: {err}")))?;
            recipients.extend(emails);
        }
        Ok(recipients)
    }

    async fn email_channel(&self, event: &PublishEvent) -> (usize, ChannelOutcome) {
        let work = async {
            let recipients = self.recipients(event).await?;
            if recipients.is_empty() {
                return Ok((0, None));
            }
            let count = recipients.len();
            let message = self.email_message(event, recipients.into_iter().collect());
            self.email.send(&message).await?;
            Ok::<_, ChannelError>((count, Some(())))
        };

        match bounded(self.settings.channel_timeout, work).await {
            Ok((count, Some(()))) => (count, ChannelOutcome::Delivered),
            Ok((_, None)) => (0, ChannelOutcome::Skipped("no subscribers".into())),
            Err(err) => {
                tracing::warn!(event_id = %event.event_id, error = %err, "email notification failed");
                (0, ChannelOutcome::Failed(err.to_string()))
            }
        }
    }

    pub fn email_message(&self, event: &PublishEvent, to: Vec<EmailAddress>) -> EmailMessage {
        EmailMessage {
            from: self.settings.from_email.clone(),
            to,
            subject: format!("New {} Published: {}", event.kind.label(), event.title),
            body: format!(
                "A new {} has been published by {}.\n\nTitle: {}\n\nRead it now on {}!",
                event.kind, event.author_display_name, event.title, self.settings.site_name
            ),
        }
    }

    async fn social_channel(&self, event: &PublishEvent) -> (ChannelOutcome, bool) {
        let text = compose_post(
            event.kind,
            &event.title,
            &event.description,
            &event.author_display_name,
            self.settings.hashtags.as_deref(),
        );

        let work = async {
            let media = self.upload_media(event).await;
            let attached = media.is_some();
            let receipt: PostReceipt = self.social.post(&text, media.as_ref()).await?;
            Ok::<_, ChannelError>((receipt, attached))
        };

        match bounded(self.settings.channel_timeout, work).await {
            Ok((receipt, attached)) => {
                tracing::debug!(event_id = %event.event_id, post_id = ?receipt.id, "social post created");
                (ChannelOutcome::Delivered, attached)
            }
            Err(ChannelError::Disabled) => {
                tracing::debug!(event_id = %event.event_id, "social channel disabled");
                (ChannelOutcome::Skipped("social channel disabled".into()), false)
            }
            Err(err) => {
                tracing::warn!(event_id = %event.event_id, error = %err, "social notification failed");
                (ChannelOutcome::Failed(err.to_string()), false)
            }
        }
    }

    /// Uploads the event image when there is one and the channel accepts
    /// media. Any failure degrades to a text-only post.
    async fn upload_media(
        &self,
        event: &PublishEvent,
    ) -> Option<MediaHandle> {
        let relative = event.image_path.as_deref()?;
        if !self.social.supports_media() {
            return None;
        }
        let Some(path) = resolve_media_path(&self.settings.media_root, relative) else {
            tracing::warn!(event_id = %event.event_id, image = relative, "image path escapes the media root, posting text only");
            return None;
        };
        match tokio::fs::try_exists(&path).await {
            Ok(true) => {}
            Ok(false) => {
                tracing::warn!(event_id = %event.event_id, path = %path.display(), "image file not found, posting text only");
                return None;
            }
            Err(err) => {
                tracing::warn!(event_id = %event.event_id, error = %err, "image lookup failed, posting text only");
                return None;
            }
        }
        match self.social.upload_media(&path).await {
            Ok(handle) => Some(handle),
            Err(err) => {
                tracing::warn!(event_id = %event.event_id, error = %err, "media upload failed, posting text only");
                None
            }
        }
    }
}

/// Joins `relative` onto the media root, refusing anything that could leave it.
fn resolve_media_path(media_root: &Path, relative: &str) -> Option<PathBuf> {
    let relative = Path::new(relative);
    let contained = relative
        .components()
        .all(|part| matches!(part, Component::Normal(_) | Component::CurDir));
    contained.then(|| media_root.join(relative))
}

async fn bounded<T>(
    limit: Duration,
    work: impl Future<Output = Result<T, ChannelError>>,
) -> Result<T, ChannelError> {
    tokio::time::timeout(limit, work)
        .await
        .unwrap_or(Err(ChannelError::Timeout))
}
