// src/domain/user/entity.rs
use crate::domain::user::value_objects::{
    EDITORS_GROUP, EmailAddress, GroupName, Role, UserId, Username,
};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub username: Username,
    pub email: EmailAddress,
    pub full_name: Option<String>,
    pub role: Role,
    pub groups: Vec<GroupName>,
    pub is_superuser: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Name shown to subscribers: the full name when present, otherwise the username.
    pub fn display_name(&self) -> &str {
        match self.full_name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name,
            _ => self.username.as_str(),
        }
    }

    pub fn belongs_to(&self, group: &str) -> bool {
        self.groups.iter().any(|g| g.as_str() == group)
    }

    pub fn in_editors_group(&self) -> bool {
        self.belongs_to(EDITORS_GROUP)
    }
}
