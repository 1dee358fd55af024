// src/infrastructure/notifications/email.rs
use super::rejection;
use crate::application::ports::notification::{ChannelError, EmailMessage, EmailSender};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

/// Sends mail through an HTTP relay that accepts one JSON message per request.
#[derive(Clone)]
pub struct HttpEmailGateway {
    client: Client,
    endpoint: String,
    token: Option<String>,
}

#[derive(Serialize)]
struct RelayMessage<'a> {
    from: &'a str,
    to: Vec<&'a str>,
    subject: &'a str,
    text: &'a str,
}

impl HttpEmailGateway {
    pub fn new(client: Client, endpoint: impl Into<String>, token: Option<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            token,
        }
    }
}

#[async_trait]
impl EmailSender for HttpEmailGateway {
    async fn send(&self, message: &EmailMessage) -> Result<(), ChannelError> {
        let payload = RelayMessage {
            from: &message.from,
            to: message.to.iter().map(|addr| addr.as_str()).collect(),
            subject: &message.subject,
            text: &message.body,
        };

        let mut request = self.client.post(&self.endpoint).json(&payload);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        let response = request
            .send()
            .await
            .map_err(|err| ChannelError::Transport(err.to_string()))?;

        if !response.status().is_success() {
            return Err(rejection(response).await);
        }
        tracing::debug!(recipients = message.to.len(), subject = %message.subject, "email relayed");
        Ok(())
    }
}

/// Console backend used when no relay is configured.
#[derive(Default, Clone)]
pub struct LogEmailSender;

#[async_trait]
impl EmailSender for LogEmailSender {
    async fn send(&self, message: &EmailMessage) -> Result<(), ChannelError> {
        tracing::info!(
            from = %message.from,
            recipients = message.to.len(),
            subject = %message.subject,
            body = %message.body,
            "email (console backend)"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::EmailAddress;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn message() -> EmailMessage {
        EmailMessage {
            from: "desk@example.com".into(),
            to: vec![
                EmailAddress::new("a@example.com").unwrap(),
                EmailAddress::new("b@example.com").unwrap(),
            ],
            subject: "New Article Published: Budget".into(),
            body: "body".into(),
        }
    }

    #[tokio::test]
    async fn posts_one_message_for_all_recipients() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/send"))
            .and(header("authorization", "Bearer relay-token"))
            .and(body_json(serde_json::json!({
                "from": "desk@example.com",
                "to": ["a@example.com", "b@example.com"],
                "subject": "New Article Published: Budget",
                "text": "body"
            })))
            .respond_with(ResponseTemplate::new(202))
            .expect(1)
            .mount(&server)
            .await;

        let gateway = HttpEmailGateway::new(
            Client::new(),
            format!("{}/send", server.uri()),
            Some("relay-token".into()),
        );
        gateway.send(&message()).await.unwrap();
    }

    #[tokio::test]
    async fn relay_errors_are_reported() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503).set_body_string("down"))
            .mount(&server)
            .await;

        let gateway = HttpEmailGateway::new(Client::new(), server.uri(), None);
        let err = gateway.send(&message()).await.unwrap_err();
        assert!(matches!(err, ChannelError::Rejected { status: 503, ref body } if body == "down"));
    }
}
