// src/infrastructure/repositories/postgres_content.rs
use super::map_sqlx;
use crate::domain::content::{
    Approval, CategoryId, ContentBody, ContentId, ContentItem, ContentKind, ContentReadRepository,
    ContentTitle, ContentUpdate, ContentWriteRepository, ImagePath, NewContentItem,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::publisher::PublisherId;
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const RETURNING_COLUMNS: &str = "id, kind, title, body, author_id, publisher_id, category_id, image_path, \
     is_independent, approved_by, approved_at, published_at, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresContentWriteRepository {
    pool: PgPool,
}

impl PostgresContentWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresContentReadRepository {
    pool: PgPool,
}

impl PostgresContentReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ContentRow {
    id: i64,
    kind: String,
    title: String,
    body: String,
    author_id: i64,
    publisher_id: Option<i64>,
    category_id: Option<i64>,
    image_path: Option<String>,
    is_independent: bool,
    approved_by: Option<i64>,
    approved_at: Option<DateTime<Utc>>,
    published_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ContentRow> for ContentItem {
    type Error = DomainError;

    fn try_from(row: ContentRow) -> Result<Self, Self::Error> {
        let approval = match (row.approved_by, row.approved_at) {
            (Some(by), Some(at)) => Some(Approval {
                approved_by: UserId::new(by)?,
                approved_at: at,
            }),
            (None, None) => None,
            _ => {
                return Err(DomainError::Persistence(format!(
                    "content {} has a partial approval record",
                    row.id
                )));
            }
        };

        Ok(ContentItem {
            id: ContentId::new(row.id)?,
            kind: row.kind.parse::<ContentKind>()?,
            title: ContentTitle::new(row.title)?,
            body: ContentBody::new(row.body)?,
            author_id: UserId::new(row.author_id)?,
            publisher_id: row.publisher_id.map(PublisherId::new).transpose()?,
            category_id: row.category_id.map(CategoryId::new).transpose()?,
            image_path: row.image_path.map(ImagePath::new).transpose()?,
            is_independent: row.is_independent,
            approval,
            published_at: row.published_at,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl ContentWriteRepository for PostgresContentWriteRepository {
    async fn insert(&self, item: NewContentItem) -> DomainResult<ContentItem> {
        let NewContentItem {
            kind,
            title,
            body,
            author_id,
            publisher_id,
            category_id,
            image_path,
            is_independent,
            created_at,
        } = item;

        let row = sqlx::query_as::<_, ContentRow>(&format!(
            "INSERT INTO content_items
                (kind, title, body, author_id, publisher_id, category_id, image_path, is_independent, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $9)
             RETURNING {RETURNING_COLUMNS}"
        ))
        .bind(kind.as_str())
        .bind(title.into_inner())
        .bind(body.into_inner())
        .bind(i64::from(author_id))
        .bind(publisher_id.map(i64::from))
        .bind(category_id.map(i64::from))
        .bind(image_path.map(ImagePath::into_inner))
        .bind(is_independent)
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        ContentItem::try_from(row)
    }

    async fn update(&self, update: ContentUpdate) -> DomainResult<ContentItem> {
        let ContentUpdate {
            id,
            title,
            body,
            category_id,
            image_path,
            approval,
            published_at,
            original_updated_at,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE content_items SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(title) = title {
            builder.push(", title = ");
            builder.push_bind(title.into_inner());
        }

        if let Some(body) = body {
            builder.push(", body = ");
            builder.push_bind(body.into_inner());
        }

        if let Some(category_id) = category_id {
            builder.push(", category_id = ");
            builder.push_bind(category_id.map(i64::from));
        }

        if let Some(image_path) = image_path {
            builder.push(", image_path = ");
            builder.push_bind(image_path.map(ImagePath::into_inner));
        }

        if let Some(approval) = approval {
            builder.push(", approved_by = ");
            builder.push_bind(i64::from(approval.approved_by));
            builder.push(", approved_at = ");
            builder.push_bind(approval.approved_at);
        }

        if let Some(published_at) = published_at {
            builder.push(", published_at = ");
            builder.push_bind(published_at);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(" AND updated_at = ");
        builder.push_bind(original_updated_at);
        builder.push(" RETURNING ");
        builder.push(RETURNING_COLUMNS);

        let maybe_row = builder
            .build_query_as::<ContentRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let row = maybe_row
            .ok_or_else(|| DomainError::Conflict("content update conflict, please retry".into()))?;

        ContentItem::try_from(row)
    }

    async fn delete(&self, id: ContentId) -> DomainResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        sqlx::query("DELETE FROM comments WHERE content_id = $1")
            .bind(i64::from(id))
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        let result = sqlx::query("DELETE FROM content_items WHERE id = $1")
            .bind(i64::from(id))
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("content not found".into()));
        }

        tx.commit().await.map_err(map_sqlx)
    }
}

#[async_trait]
impl ContentReadRepository for PostgresContentReadRepository {
    async fn find_by_id(&self, id: ContentId) -> DomainResult<Option<ContentItem>> {
        let row = sqlx::query_as::<_, ContentRow>(&format!(
            "SELECT {RETURNING_COLUMNS} FROM content_items WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(ContentItem::try_from).transpose()
    }

    async fn list_unpublished(&self, kind: ContentKind) -> DomainResult<Vec<ContentItem>> {
        let rows = sqlx::query_as::<_, ContentRow>(&format!(
            "SELECT {RETURNING_COLUMNS} FROM content_items
             WHERE kind = $1 AND published_at IS NULL
             ORDER BY created_at DESC, id DESC"
        ))
        .bind(kind.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(ContentItem::try_from).collect()
    }

    async fn list_published_from(
        &self,
        kind: ContentKind,
        publishers: &[PublisherId],
        authors: &[UserId],
    ) -> DomainResult<Vec<ContentItem>> {
        if publishers.is_empty() && authors.is_empty() {
            return Ok(Vec::new());
        }
        let publisher_ids: Vec<i64> = publishers.iter().copied().map(i64::from).collect();
        let author_ids: Vec<i64> = authors.iter().copied().map(i64::from).collect();

        let rows = sqlx::query_as::<_, ContentRow>(&format!(
            "SELECT {RETURNING_COLUMNS} FROM content_items
             WHERE kind = $1 AND published_at IS NOT NULL
               AND (publisher_id = ANY($2) OR author_id = ANY($3))
             ORDER BY published_at DESC, id DESC"
        ))
        .bind(kind.as_str())
        .bind(publisher_ids)
        .bind(author_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(ContentItem::try_from).collect()
    }
}
