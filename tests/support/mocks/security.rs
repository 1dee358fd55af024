// tests/support/mocks/security.rs
use async_trait::async_trait;
use newsdesk_core::application::{
    ApplicationResult, dto::AuthenticatedUser, error::ApplicationError,
    ports::security::TokenManager,
};
use newsdesk_core::domain::user::UserId;

/// Accepts tokens of the form `user-<id>` and nothing else.
#[derive(Clone, Copy, Default)]
pub struct StaticTokenManager;

pub fn bearer(user_id: i64) -> String {
    format!("Bearer user-{user_id}")
}

#[async_trait]
impl TokenManager for StaticTokenManager {
    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let id = token
            .strip_prefix("user-")
            .and_then(|raw| raw.parse::<i64>().ok())
            .and_then(|raw| UserId::new(raw).ok())
            .ok_or_else(|| ApplicationError::unauthorized("invalid token"))?;
        Ok(AuthenticatedUser {
            id,
            username: format!("user{id}"),
        })
    }
}
