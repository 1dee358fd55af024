// src/domain/access/oracle.rs
use crate::domain::content::ContentItem;
use crate::domain::publisher::PublisherId;
use crate::domain::user::{Role, User, UserId};
use std::collections::HashSet;

/// Capability view of one actor, captured once per lifecycle operation.
///
/// Built from the user's role, group membership and the publishers where the
/// user is assigned as editor staff. Every query is a pure read of that
/// snapshot, so repeated calls within one operation always agree and the
/// value can be shared across tasks without locking.
#[derive(Debug, Clone)]
pub struct RoleOracle {
    user: User,
    editor_staff_of: HashSet<PublisherId>,
}

impl RoleOracle {
    pub fn new(user: User, editor_staff_of: HashSet<PublisherId>) -> Self {
        Self {
            user,
            editor_staff_of,
        }
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn user_id(&self) -> UserId {
        self.user.id
    }

    pub fn role(&self) -> Role {
        self.user.role
    }

    fn editor_equivalent(&self) -> bool {
        self.user.role == Role::Editor || self.user.in_editors_group()
    }

    pub fn can_approve(&self) -> bool {
        self.editor_equivalent()
    }

    pub fn can_manage_content(&self) -> bool {
        self.editor_equivalent()
    }

    pub fn is_editor_staff_of(&self, publisher_id: PublisherId) -> bool {
        self.editor_staff_of.contains(&publisher_id)
    }

    /// Global role check only; group membership does not count here.
    pub fn holds_editor_role(&self) -> bool {
        self.user.role == Role::Editor
    }

    pub fn holds_journalist_role(&self) -> bool {
        self.user.role == Role::Journalist
    }

    pub fn is_reader(&self) -> bool {
        self.user.role == Role::Reader
    }

    pub fn is_administrator(&self) -> bool {
        self.user.is_superuser
    }

    pub fn is_author_of(&self, item: &ContentItem) -> bool {
        item.author_id == self.user.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::{EmailAddress, GroupName, Username};
    use chrono::Utc;

    fn user(role: Role, groups: &[&str]) -> User {
        User {
            id: UserId::new(10).unwrap(),
            username: Username::new("someone").unwrap(),
            email: EmailAddress::new("someone@example.com").unwrap(),
            full_name: None,
            role,
            groups: groups.iter().map(|g| GroupName::new(*g).unwrap()).collect(),
            is_superuser: false,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn editors_by_role_or_group_can_approve() {
        let by_role = RoleOracle::new(user(Role::Editor, &[]), HashSet::new());
        let by_group = RoleOracle::new(user(Role::Journalist, &["Editors"]), HashSet::new());
        let plain = RoleOracle::new(user(Role::Journalist, &["Sports"]), HashSet::new());

        assert!(by_role.can_approve() && by_role.can_manage_content());
        assert!(by_group.can_approve() && by_group.can_manage_content());
        assert!(!plain.can_approve() && !plain.can_manage_content());
    }

    #[test]
    fn group_membership_does_not_grant_the_editor_role() {
        let oracle = RoleOracle::new(user(Role::Journalist, &["Editors"]), HashSet::new());
        assert!(!oracle.holds_editor_role());
    }

    #[test]
    fn staff_scope_is_per_publisher() {
        let assigned = PublisherId::new(1).unwrap();
        let other = PublisherId::new(2).unwrap();
        let oracle = RoleOracle::new(user(Role::Editor, &[]), HashSet::from([assigned]));

        assert!(oracle.is_editor_staff_of(assigned));
        assert!(!oracle.is_editor_staff_of(other));
    }
}
