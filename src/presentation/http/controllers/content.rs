// src/presentation/http/controllers/content.rs
use crate::application::{
    commands::content::{
        ApproveContentCommand, CreateContentCommand, DeleteContentCommand, DirectPublishCommand,
        PublishContentCommand, UpdateContentCommand,
    },
    dto::ContentDto,
    queries::content::{GetContentQuery, PendingApprovalsQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, MaybeAuthenticated};
use crate::presentation::http::state::{ContentScope, HttpState};
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::{Deserialize, Deserializer};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateContentRequest {
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub publisher_id: Option<i64>,
    /// Articles only.
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub image_path: Option<String>,
    #[serde(default)]
    pub is_independent: bool,
}

/// Partial edit. An explicit `null` clears `category_id` or `image_path`;
/// an omitted field is left untouched.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateContentRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<i64>)]
    pub category_id: Option<Option<i64>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub image_path: Option<Option<String>>,
}

fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[utoipa::path(
    post,
    path = "/api/v1/{kind}",
    params(("kind" = String, Path, description = "`articles` or `newsletters`")),
    request_body = CreateContentRequest,
    responses(
        (status = 201, description = "Draft created.", body = ContentDto),
        (status = 400, description = "Invalid input.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Only journalists can write content.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Publisher not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Content"
)]
pub async fn create_content(
    Extension(state): Extension<HttpState>,
    Extension(ContentScope(kind)): Extension<ContentScope>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreateContentRequest>,
) -> HttpResult<(StatusCode, Json<ContentDto>)> {
    let command = CreateContentCommand {
        kind,
        title: payload.title,
        body: payload.body,
        publisher_id: payload.publisher_id,
        category_id: payload.category_id,
        image_path: payload.image_path,
        is_independent: payload.is_independent,
    };

    let created = state
        .services
        .content_commands
        .create(&user, command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get,
    path = "/api/v1/{kind}/pending",
    params(("kind" = String, Path, description = "`articles` or `newsletters`")),
    responses(
        (status = 200, description = "Unpublished items awaiting editorial action.", body = [ContentDto]),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Forbidden.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Content"
)]
pub async fn list_pending(
    Extension(state): Extension<HttpState>,
    Extension(ContentScope(kind)): Extension<ContentScope>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<Vec<ContentDto>>> {
    state
        .services
        .content_queries
        .pending_approvals(&user, PendingApprovalsQuery { kind })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/{kind}/{id}",
    params(
        ("kind" = String, Path, description = "`articles` or `newsletters`"),
        ("id" = i64, Path, description = "Content identifier")
    ),
    responses(
        (status = 200, description = "Content item.", body = ContentDto),
        (status = 404, description = "Not found or not visible.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Content"
)]
pub async fn get_content(
    Extension(state): Extension<HttpState>,
    Extension(ContentScope(kind)): Extension<ContentScope>,
    MaybeAuthenticated(user): MaybeAuthenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<ContentDto>> {
    state
        .services
        .content_queries
        .get_content(user.as_ref(), GetContentQuery { kind, id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/{kind}/{id}",
    params(
        ("kind" = String, Path, description = "`articles` or `newsletters`"),
        ("id" = i64, Path, description = "Content identifier")
    ),
    request_body = UpdateContentRequest,
    responses(
        (status = 200, description = "Draft updated.", body = ContentDto),
        (status = 400, description = "Invalid input.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Only the author can edit.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Not found.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Concurrent modification.", body = crate::presentation::http::error::ErrorResponse),
        (status = 412, description = "Item already published.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Content"
)]
pub async fn update_content(
    Extension(state): Extension<HttpState>,
    Extension(ContentScope(kind)): Extension<ContentScope>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateContentRequest>,
) -> HttpResult<Json<ContentDto>> {
    let command = UpdateContentCommand {
        kind,
        id,
        title: payload.title,
        body: payload.body,
        category_id: payload.category_id,
        image_path: payload.image_path,
    };

    state
        .services
        .content_commands
        .update(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/{kind}/{id}",
    params(
        ("kind" = String, Path, description = "`articles` or `newsletters`"),
        ("id" = i64, Path, description = "Content identifier")
    ),
    responses(
        (status = 204, description = "Deleted together with its comments."),
        (status = 403, description = "Forbidden.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Content"
)]
pub async fn delete_content(
    Extension(state): Extension<HttpState>,
    Extension(ContentScope(kind)): Extension<ContentScope>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<StatusCode> {
    state
        .services
        .content_commands
        .delete(&user, DeleteContentCommand { kind, id })
        .await
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/api/v1/{kind}/{id}/approve",
    params(
        ("kind" = String, Path, description = "`articles` or `newsletters`"),
        ("id" = i64, Path, description = "Content identifier")
    ),
    responses(
        (status = 200, description = "Item approved.", body = ContentDto),
        (status = 403, description = "Caller cannot approve this kind.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Content"
)]
pub async fn approve_content(
    Extension(state): Extension<HttpState>,
    Extension(ContentScope(kind)): Extension<ContentScope>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<ContentDto>> {
    state
        .services
        .content_commands
        .approve(&user, ApproveContentCommand { kind, id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/{kind}/{id}/publish",
    params(
        ("kind" = String, Path, description = "`articles` or `newsletters`"),
        ("id" = i64, Path, description = "Content identifier")
    ),
    responses(
        (status = 200, description = "Item published; subscribers are notified asynchronously.", body = ContentDto),
        (status = 403, description = "Caller is not an editor of the owning publisher.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Not found.", body = crate::presentation::http::error::ErrorResponse),
        (status = 412, description = "Item is not approved.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Content"
)]
pub async fn publish_content(
    Extension(state): Extension<HttpState>,
    Extension(ContentScope(kind)): Extension<ContentScope>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<ContentDto>> {
    state
        .services
        .content_commands
        .publish(&user, PublishContentCommand { kind, id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/{kind}/{id}/direct-publish",
    params(
        ("kind" = String, Path, description = "`articles` or `newsletters`"),
        ("id" = i64, Path, description = "Content identifier")
    ),
    responses(
        (status = 200, description = "Item published.", body = ContentDto),
        (status = 403, description = "Caller is neither an editor nor the author.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Not found.", body = crate::presentation::http::error::ErrorResponse),
        (status = 412, description = "Item is not approved.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Content"
)]
pub async fn direct_publish_content(
    Extension(state): Extension<HttpState>,
    Extension(ContentScope(kind)): Extension<ContentScope>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<ContentDto>> {
    state
        .services
        .content_commands
        .direct_publish(&user, DirectPublishCommand { kind, id })
        .await
        .into_http()
        .map(Json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_null_clears_while_omission_keeps() {
        let cleared: UpdateContentRequest =
            serde_json::from_str(r#"{"category_id": null}"#).unwrap();
        assert_eq!(cleared.category_id, Some(None));
        assert_eq!(cleared.image_path, None);

        let set: UpdateContentRequest =
            serde_json::from_str(r#"{"image_path": "media/a.png"}"#).unwrap();
        assert_eq!(set.image_path, Some(Some("media/a.png".to_string())));
    }
}
