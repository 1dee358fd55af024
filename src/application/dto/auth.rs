use crate::domain::user::UserId;

/// Identity proven by a bearer token. Capabilities are not part of the token
/// and are resolved from storage when an operation needs them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub id: UserId,
    pub username: String,
}
