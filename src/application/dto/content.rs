use crate::domain::content::{ContentItem, LifecycleState};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContentDto {
    pub id: i64,
    /// `article` or `newsletter`.
    pub kind: String,
    pub title: String,
    pub body: String,
    pub author_id: i64,
    #[serde(default)]
    pub publisher_id: Option<i64>,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub image_path: Option<String>,
    pub is_independent: bool,
    /// `draft`, `approved` or `published`.
    pub state: String,
    pub approved: bool,
    #[serde(default)]
    pub approved_by: Option<i64>,
    #[serde(default)]
    pub approved_at: Option<DateTime<Utc>>,
    pub published: bool,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn state_name(state: LifecycleState) -> &'static str {
    match state {
        LifecycleState::Draft => "draft",
        LifecycleState::Approved => "approved",
        LifecycleState::Published => "published",
    }
}

impl From<ContentItem> for ContentDto {
    fn from(item: ContentItem) -> Self {
        let state = state_name(item.state()).to_string();
        Self {
            id: item.id.into(),
            kind: item.kind.as_str().to_string(),
            title: item.title.into_inner(),
            body: item.body.into_inner(),
            author_id: item.author_id.into(),
            publisher_id: item.publisher_id.map(Into::into),
            category_id: item.category_id.map(Into::into),
            image_path: item.image_path.map(|p| p.into_inner()),
            is_independent: item.is_independent,
            state,
            approved: item.approval.is_some(),
            approved_by: item.approval.map(|a| a.approved_by.into()),
            approved_at: item.approval.map(|a| a.approved_at),
            published: item.published_at.is_some(),
            published_at: item.published_at,
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}
