// src/application/notifications/queue.rs
use super::fanout::FanOutNotifier;
use crate::{application::ports::notification::PublishEventSink, domain::content::PublishEvent};
use std::sync::Arc;
use tokio::{
    sync::mpsc::{self, error::TrySendError},
    task::JoinHandle,
};

/// Bounded hand-off between the lifecycle engine and the notifier worker.
#[derive(Clone)]
pub struct NotificationQueue {
    tx: mpsc::Sender<PublishEvent>,
}

impl NotificationQueue {
    /// Creates the queue and spawns the worker that drains it. The worker
    /// exits once every sender has been dropped and the backlog is empty.
    pub fn spawn(notifier: Arc<FanOutNotifier>, capacity: usize) -> (Self, JoinHandle<()>) {
        let (tx, mut rx) = mpsc::channel::<PublishEvent>(capacity.max(1));
        let worker = tokio::spawn(async move {
            while let Some(event) = rx.recv().await {
                notifier.notify(&event).await;
            }
            tracing::info!("notification worker stopped");
        });
        (Self { tx }, worker)
    }
}

impl PublishEventSink for NotificationQueue {
    fn emit(&self, event: PublishEvent) {
        match self.tx.try_send(event) {
            Ok(()) => {}
            Err(TrySendError::Full(event)) => {
                tracing::error!(
                    event_id = %event.event_id,
                    content_id = %event.content_id,
                    "notification queue full, dropping publish event"
                );
            }
            Err(TrySendError::Closed(event)) => {
                tracing::error!(
                    event_id = %event.event_id,
                    content_id = %event.content_id,
                    "notification worker gone, dropping publish event"
                );
            }
        }
    }
}
