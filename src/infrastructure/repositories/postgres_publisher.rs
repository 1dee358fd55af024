// src/infrastructure/repositories/postgres_publisher.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::publisher::{
    NewStaffAssignment, Publisher, PublisherId, PublisherRepository, StaffAssignment,
    StaffAssignmentId, StaffRepository, StaffRole,
};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{FromRow, PgPool};
use std::collections::HashSet;

#[derive(Clone)]
pub struct PostgresPublisherRepository {
    pool: PgPool,
}

impl PostgresPublisherRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresStaffRepository {
    pool: PgPool,
}

impl PostgresStaffRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PublisherRow {
    id: i64,
    name: String,
    description: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<PublisherRow> for Publisher {
    type Error = DomainError;

    fn try_from(row: PublisherRow) -> Result<Self, Self::Error> {
        Ok(Publisher {
            id: PublisherId::new(row.id)?,
            name: row.name,
            description: row.description,
            created_at: row.created_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct StaffRow {
    id: i64,
    publisher_id: i64,
    user_id: i64,
    role: String,
    joined_on: NaiveDate,
}

impl TryFrom<StaffRow> for StaffAssignment {
    type Error = DomainError;

    fn try_from(row: StaffRow) -> Result<Self, Self::Error> {
        Ok(StaffAssignment {
            id: StaffAssignmentId::new(row.id)?,
            publisher_id: PublisherId::new(row.publisher_id)?,
            user_id: UserId::new(row.user_id)?,
            role: row.role.parse::<StaffRole>()?,
            joined_on: row.joined_on,
        })
    }
}

#[async_trait]
impl PublisherRepository for PostgresPublisherRepository {
    async fn find_by_id(&self, id: PublisherId) -> DomainResult<Option<Publisher>> {
        let row = sqlx::query_as::<_, PublisherRow>(
            "SELECT id, name, description, created_at FROM publishers WHERE id = $1",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Publisher::try_from).transpose()
    }
}

#[async_trait]
impl StaffRepository for PostgresStaffRepository {
    async fn insert(&self, assignment: NewStaffAssignment) -> DomainResult<StaffAssignment> {
        let NewStaffAssignment {
            publisher_id,
            user_id,
            role,
            joined_on,
        } = assignment;

        // The no-op update makes RETURNING yield the existing row on conflict.
        let row = sqlx::query_as::<_, StaffRow>(
            "INSERT INTO publisher_staff (publisher_id, user_id, role, joined_on)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT ON CONSTRAINT publisher_staff_member_key
             DO UPDATE SET role = EXCLUDED.role
             RETURNING id, publisher_id, user_id, role, joined_on",
        )
        .bind(i64::from(publisher_id))
        .bind(i64::from(user_id))
        .bind(role.as_str())
        .bind(joined_on)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        StaffAssignment::try_from(row)
    }

    async fn find_by_id(&self, id: StaffAssignmentId) -> DomainResult<Option<StaffAssignment>> {
        let row = sqlx::query_as::<_, StaffRow>(
            "SELECT id, publisher_id, user_id, role, joined_on FROM publisher_staff WHERE id = $1",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(StaffAssignment::try_from).transpose()
    }

    async fn delete(&self, id: StaffAssignmentId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM publisher_staff WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("staff assignment not found".into()));
        }
        Ok(())
    }

    async fn exists(
        &self,
        publisher_id: PublisherId,
        user_id: UserId,
        role: StaffRole,
    ) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM publisher_staff
              WHERE publisher_id = $1 AND user_id = $2 AND role = $3)",
        )
        .bind(i64::from(publisher_id))
        .bind(i64::from(user_id))
        .bind(role.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)
    }

    async fn list_by_publisher(
        &self,
        publisher_id: PublisherId,
    ) -> DomainResult<Vec<StaffAssignment>> {
        let rows = sqlx::query_as::<_, StaffRow>(
            "SELECT id, publisher_id, user_id, role, joined_on FROM publisher_staff
             WHERE publisher_id = $1 ORDER BY role, joined_on, id",
        )
        .bind(i64::from(publisher_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(StaffAssignment::try_from).collect()
    }

    async fn publishers_for(
        &self,
        user_id: UserId,
        role: StaffRole,
    ) -> DomainResult<HashSet<PublisherId>> {
        let ids = sqlx::query_scalar::<_, i64>(
            "SELECT publisher_id FROM publisher_staff WHERE user_id = $1 AND role = $2",
        )
        .bind(i64::from(user_id))
        .bind(role.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        ids.into_iter().map(PublisherId::new).collect()
    }
}
