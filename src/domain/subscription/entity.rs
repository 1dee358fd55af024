// src/domain/subscription/entity.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::publisher::PublisherId;
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub i64);

impl SubscriptionId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "subscription id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<SubscriptionId> for i64 {
    fn from(value: SubscriptionId) -> Self {
        value.0
    }
}

/// What a reader follows: exactly one publisher or exactly one journalist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubscriptionTarget {
    Publisher(PublisherId),
    Journalist(UserId),
}

impl SubscriptionTarget {
    /// Rebuilds a target from the two nullable storage columns.
    pub fn from_columns(
        publisher_id: Option<PublisherId>,
        journalist_id: Option<UserId>,
    ) -> DomainResult<Self> {
        match (publisher_id, journalist_id) {
            (Some(publisher), None) => Ok(Self::Publisher(publisher)),
            (None, Some(journalist)) => Ok(Self::Journalist(journalist)),
            (Some(_), Some(_)) => Err(DomainError::Validation(
                "subscription cannot target both a publisher and a journalist".into(),
            )),
            (None, None) => Err(DomainError::Validation(
                "subscription must target a publisher or a journalist".into(),
            )),
        }
    }

    pub fn publisher_id(&self) -> Option<PublisherId> {
        match self {
            Self::Publisher(id) => Some(*id),
            Self::Journalist(_) => None,
        }
    }

    pub fn journalist_id(&self) -> Option<UserId> {
        match self {
            Self::Journalist(id) => Some(*id),
            Self::Publisher(_) => None,
        }
    }
}

impl fmt::Display for SubscriptionTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Publisher(id) => write!(f, "publisher {id}"),
            Self::Journalist(id) => write!(f, "journalist {id}"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Subscription {
    pub id: SubscriptionId,
    pub subscriber_id: UserId,
    pub target: SubscriptionTarget,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_target_column_is_required() {
        let publisher = PublisherId::new(1).unwrap();
        let journalist = UserId::new(2).unwrap();

        assert_eq!(
            SubscriptionTarget::from_columns(Some(publisher), None).unwrap(),
            SubscriptionTarget::Publisher(publisher)
        );
        assert_eq!(
            SubscriptionTarget::from_columns(None, Some(journalist)).unwrap(),
            SubscriptionTarget::Journalist(journalist)
        );
        assert!(matches!(
            SubscriptionTarget::from_columns(Some(publisher), Some(journalist)),
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            SubscriptionTarget::from_columns(None, None),
            Err(DomainError::Validation(_))
        ));
    }
}
