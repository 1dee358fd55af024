// src/infrastructure/repositories/postgres_subscription.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::publisher::PublisherId;
use crate::domain::subscription::{
    Subscription, SubscriptionId, SubscriptionRepository, SubscriptionTarget,
};
use crate::domain::user::{EmailAddress, UserId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresSubscriptionRepository {
    pool: PgPool,
}

impl PostgresSubscriptionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct SubscriptionRow {
    id: i64,
    subscriber_id: i64,
    publisher_id: Option<i64>,
    journalist_id: Option<i64>,
    created_at: DateTime<Utc>,
}

impl TryFrom<SubscriptionRow> for Subscription {
    type Error = DomainError;

    fn try_from(row: SubscriptionRow) -> Result<Self, Self::Error> {
        Ok(Subscription {
            id: SubscriptionId::new(row.id)?,
            subscriber_id: UserId::new(row.subscriber_id)?,
            target: SubscriptionTarget::from_columns(
                row.publisher_id.map(PublisherId::new).transpose()?,
                row.journalist_id.map(UserId::new).transpose()?,
            )?,
            created_at: row.created_at,
        })
    }
}

fn target_columns(target: SubscriptionTarget) -> (Option<i64>, Option<i64>) {
    (
        target.publisher_id().map(i64::from),
        target.journalist_id().map(i64::from),
    )
}

#[async_trait]
impl SubscriptionRepository for PostgresSubscriptionRepository {
    async fn get_or_create(
        &self,
        subscriber_id: UserId,
        target: SubscriptionTarget,
        now: DateTime<Utc>,
    ) -> DomainResult<(Subscription, bool)> {
        let (publisher_id, journalist_id) = target_columns(target);

        let inserted = sqlx::query_as::<_, SubscriptionRow>(
            "INSERT INTO subscriptions (subscriber_id, publisher_id, journalist_id, created_at)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT DO NOTHING
             RETURNING id, subscriber_id, publisher_id, journalist_id, created_at",
        )
        .bind(i64::from(subscriber_id))
        .bind(publisher_id)
        .bind(journalist_id)
        .bind(now)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        if let Some(row) = inserted {
            return Ok((Subscription::try_from(row)?, true));
        }

        // Lost the race or already subscribed; a fresh statement sees the committed row.
        let existing = sqlx::query_as::<_, SubscriptionRow>(
            "SELECT id, subscriber_id, publisher_id, journalist_id, created_at
             FROM subscriptions
             WHERE subscriber_id = $1
               AND publisher_id IS NOT DISTINCT FROM $2
               AND journalist_id IS NOT DISTINCT FROM $3",
        )
        .bind(i64::from(subscriber_id))
        .bind(publisher_id)
        .bind(journalist_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::Conflict("subscription changed concurrently, please retry".into()))?;

        Ok((Subscription::try_from(existing)?, false))
    }

    async fn delete(&self, subscriber_id: UserId, target: SubscriptionTarget) -> DomainResult<bool> {
        let (publisher_id, journalist_id) = target_columns(target);
        let result = sqlx::query(
            "DELETE FROM subscriptions
             WHERE subscriber_id = $1
               AND publisher_id IS NOT DISTINCT FROM $2
               AND journalist_id IS NOT DISTINCT FROM $3",
        )
        .bind(i64::from(subscriber_id))
        .bind(publisher_id)
        .bind(journalist_id)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(result.rows_affected() > 0)
    }

    async fn exists(&self, subscriber_id: UserId, target: SubscriptionTarget) -> DomainResult<bool> {
        let (publisher_id, journalist_id) = target_columns(target);
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM subscriptions
              WHERE subscriber_id = $1
                AND publisher_id IS NOT DISTINCT FROM $2
                AND journalist_id IS NOT DISTINCT FROM $3)",
        )
        .bind(i64::from(subscriber_id))
        .bind(publisher_id)
        .bind(journalist_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)
    }

    async fn publishers_of(&self, subscriber_id: UserId) -> DomainResult<Vec<PublisherId>> {
        let ids = sqlx::query_scalar::<_, i64>(
            "SELECT publisher_id FROM subscriptions
             WHERE subscriber_id = $1 AND publisher_id IS NOT NULL
             ORDER BY publisher_id",
        )
        .bind(i64::from(subscriber_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        ids.into_iter().map(PublisherId::new).collect()
    }

    async fn journalists_of(&self, subscriber_id: UserId) -> DomainResult<Vec<UserId>> {
        let ids = sqlx::query_scalar::<_, i64>(
            "SELECT journalist_id FROM subscriptions
             WHERE subscriber_id = $1 AND journalist_id IS NOT NULL
             ORDER BY journalist_id",
        )
        .bind(i64::from(subscriber_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        ids.into_iter().map(UserId::new).collect()
    }

    async fn subscriber_emails(&self, target: SubscriptionTarget) -> DomainResult<Vec<EmailAddress>> {
        let (publisher_id, journalist_id) = target_columns(target);
        let emails = sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT lower(u.email) FROM subscriptions s
             JOIN users u ON u.id = s.subscriber_id
             WHERE s.publisher_id IS NOT DISTINCT FROM $1
               AND s.journalist_id IS NOT DISTINCT FROM $2
               AND u.email <> ''",
        )
        .bind(publisher_id)
        .bind(journalist_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(emails
            .into_iter()
            .filter_map(|raw| match EmailAddress::new(raw) {
                Ok(email) => Some(email),
                Err(err) => {
                    tracing::warn!(error = %err, "skipping subscriber with unusable email address");
                    None
                }
            })
            .collect())
    }
}
