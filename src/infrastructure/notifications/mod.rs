pub mod email;
pub mod twitter;

pub use email::{HttpEmailGateway, LogEmailSender};
pub use twitter::{DisabledSocialChannel, TwitterClient, TwitterSettings};

use crate::application::ports::notification::ChannelError;

pub(crate) async fn rejection(response: reqwest::Response) -> ChannelError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    if status == 401 || status == 403 {
        ChannelError::Credentials(format!("status {status}: {body}"))
    } else {
        ChannelError::Rejected { status, body }
    }
}
