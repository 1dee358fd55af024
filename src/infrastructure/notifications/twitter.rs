// src/infrastructure/notifications/twitter.rs
use super::rejection;
use crate::application::ports::notification::{
    ChannelError, MediaHandle, PostReceipt, SocialChannel,
};
use async_trait::async_trait;
use reqwest::{
    Client,
    multipart::{Form, Part},
};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone)]
pub struct TwitterSettings {
    pub bearer_token: String,
    /// Base URL of the v2 API, e.g. `https://api.twitter.com`.
    pub api_base: String,
    /// Base URL of the v1.1 media upload API, e.g. `https://upload.twitter.com`.
    pub upload_base: String,
}

#[derive(Clone)]
pub struct TwitterClient {
    client: Client,
    settings: TwitterSettings,
}

#[derive(Serialize)]
struct TweetRequest<'a> {
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    media: Option<TweetMedia<'a>>,
}

#[derive(Serialize)]
struct TweetMedia<'a> {
    media_ids: Vec<&'a str>,
}

#[derive(Deserialize)]
struct TweetResponse {
    data: Option<TweetData>,
}

#[derive(Deserialize)]
struct TweetData {
    id: String,
}

#[derive(Deserialize)]
struct UploadResponse {
    media_id_string: String,
}

impl TwitterClient {
    pub fn new(client: Client, settings: TwitterSettings) -> Result<Self, ChannelError> {
        if settings.bearer_token.trim().is_empty() {
            return Err(ChannelError::Credentials("bearer token is empty".into()));
        }
        Ok(Self { client, settings })
    }
}

#[async_trait]
impl SocialChannel for TwitterClient {
    fn supports_media(&self) -> bool {
        true
    }

    async fn upload_media(&self, path: &Path) -> Result<MediaHandle, ChannelError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|err| ChannelError::Io(format!("{}: {err}", path.display())))?;
        let file_name = path
            .file_name()
            .map_or_else(|| "upload".to_string(), |name| name.to_string_lossy().into_owned());
        let form = Form::new().part("media", Part::bytes(bytes).file_name(file_name));

        let response = self
            .client
            .post(format!("{}/1.1/media/upload.json", self.settings.upload_base))
            .bearer_auth(&self.settings.bearer_token)
            .multipart(form)
            .send()
            .await
            .map_err(|err| ChannelError::Transport(err.to_string()))?;

        if !response.status().is_success() {
            return Err(rejection(response).await);
        }
        let uploaded: UploadResponse = response
            .json()
            .await
            .map_err(|err| ChannelError::Transport(err.to_string()))?;
        Ok(MediaHandle(uploaded.media_id_string))
    }

    async fn post(
        &self,
        text: &str,
        media: Option<&MediaHandle>,
    ) -> Result<PostReceipt, ChannelError> {
        let body = TweetRequest {
            text,
            media: media.map(|handle| TweetMedia {
                media_ids: vec![handle.0.as_str()],
            }),
        };

        let response = self
            .client
            .post(format!("{}/2/tweets", self.settings.api_base))
            .bearer_auth(&self.settings.bearer_token)
            .json(&body)
            .send()
            .await
            .map_err(|err| ChannelError::Transport(err.to_string()))?;

        if !response.status().is_success() {
            return Err(rejection(response).await);
        }
        let created: TweetResponse = response
            .json()
            .await
            .map_err(|err| ChannelError::Transport(err.to_string()))?;
        Ok(PostReceipt {
            id: created.data.map(|data| data.id),
        })
    }
}

/// Stand-in used when social posting is turned off or unconfigured.
#[derive(Default, Clone)]
pub struct DisabledSocialChannel;

#[async_trait]
impl SocialChannel for DisabledSocialChannel {
    fn supports_media(&self) -> bool {
        false
    }

    async fn upload_media(&self, _path: &Path) -> Result<MediaHandle, ChannelError> {
        Err(ChannelError::Disabled)
    }

    async fn post(
        &self,
        _text: &str,
        _media: Option<&MediaHandle>,
    ) -> Result<PostReceipt, ChannelError> {
        Err(ChannelError::Disabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> TwitterClient {
        TwitterClient::new(
            Client::new(),
            TwitterSettings {
                bearer_token: "secret".into(),
                api_base: server.uri(),
                upload_base: server.uri(),
            },
        )
        .unwrap()
    }

    #[tokio::test]
    async fn text_only_post() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/2/tweets"))
            .and(header("authorization", "Bearer secret"))
            .and(body_json(serde_json::json!({ "text": "hello" })))
            .respond_with(
                ResponseTemplate::new(201)
                    .set_body_json(serde_json::json!({ "data": { "id": "99", "text": "hello" } })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let receipt = client_for(&server).post("hello", None).await.unwrap();
        assert_eq!(receipt.id.as_deref(), Some("99"));
    }

    #[tokio::test]
    async fn upload_then_attach_media() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/1.1/media/upload.json"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "media_id_string": "m-1" })),
            )
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/2/tweets"))
            .and(body_json(serde_json::json!({
                "text": "with image",
                "media": { "media_ids": ["m-1"] }
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({ "data": { "id": "7" } })))
            .expect(1)
            .mount(&server)
            .await;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"\x89PNG fake").unwrap();

        let client = client_for(&server);
        let handle = client.upload_media(file.path()).await.unwrap();
        assert_eq!(handle, MediaHandle("m-1".into()));
        client.post("with image", Some(&handle)).await.unwrap();
    }

    #[tokio::test]
    async fn unauthorized_maps_to_credentials_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_string("bad token"))
            .mount(&server)
            .await;

        let err = client_for(&server).post("hello", None).await.unwrap_err();
        assert!(matches!(err, ChannelError::Credentials(_)));
    }

    #[tokio::test]
    async fn missing_file_is_an_io_error() {
        let server = MockServer::start().await;
        let err = client_for(&server)
            .upload_media(Path::new("/definitely/not/here.png"))
            .await
            .unwrap_err();
        assert!(matches!(err, ChannelError::Io(_)));
    }

    #[test]
    fn empty_token_is_rejected() {
        let result = TwitterClient::new(
            Client::new(),
            TwitterSettings {
                bearer_token: " ".into(),
                api_base: "http://localhost".into(),
                upload_base: "http://localhost".into(),
            },
        );
        assert!(matches!(result, Err(ChannelError::Credentials(_))));
    }
}
