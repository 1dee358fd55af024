// src/application/ports/security.rs
use crate::application::{ApplicationResult, dto::AuthenticatedUser};
use async_trait::async_trait;

/// Verifies bearer tokens minted by the identity service. Tokens only carry
/// identity; roles, groups and staff assignments are always read from storage.
#[async_trait]
pub trait TokenManager: Send + Sync {
    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser>;
}
