// src/presentation/http/controllers/subscriptions.rs
use crate::application::{
    commands::subscriptions::SubscriptionTargetRef,
    dto::{ContentDto, SubscriptionOutcomeDto, SubscriptionsOverviewDto, UnsubscribeOutcomeDto},
    queries::subscriptions::SubscribedFeedQuery,
};
use crate::domain::content::ContentKind;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FeedParams {
    /// `article` or `newsletter`; both kinds when omitted.
    #[serde(default)]
    #[param(value_type = Option<String>)]
    pub kind: Option<ContentKind>,
}

#[utoipa::path(
    get,
    path = "/api/v1/subscriptions",
    responses(
        (status = 200, description = "Publishers and journalists the caller follows.", body = SubscriptionsOverviewDto),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Subscriptions"
)]
pub async fn overview(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<SubscriptionsOverviewDto>> {
    state
        .services
        .subscription_queries
        .overview(&user)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/subscriptions/feed",
    params(FeedParams),
    responses(
        (status = 200, description = "Published content from followed sources, newest first.", body = [ContentDto]),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Subscriptions"
)]
pub async fn feed(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Query(params): Query<FeedParams>,
) -> HttpResult<Json<Vec<ContentDto>>> {
    state
        .services
        .subscription_queries
        .subscribed_feed(&user, SubscribedFeedQuery { kind: params.kind })
        .await
        .into_http()
        .map(Json)
}

async fn subscribe_to(
    state: &HttpState,
    user: &crate::application::dto::AuthenticatedUser,
    target: SubscriptionTargetRef,
) -> HttpResult<Json<SubscriptionOutcomeDto>> {
    state
        .services
        .subscription_commands
        .subscribe(user, target)
        .await
        .into_http()
        .map(Json)
}

async fn unsubscribe_from(
    state: &HttpState,
    user: &crate::application::dto::AuthenticatedUser,
    target: SubscriptionTargetRef,
) -> HttpResult<Json<UnsubscribeOutcomeDto>> {
    state
        .services
        .subscription_commands
        .unsubscribe(user, target)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/subscriptions/publishers/{id}",
    params(("id" = i64, Path, description = "Publisher identifier")),
    responses(
        (status = 200, description = "Subscription created or already present.", body = SubscriptionOutcomeDto),
        (status = 403, description = "Only readers can subscribe.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Publisher not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Subscriptions"
)]
pub async fn subscribe_publisher(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<SubscriptionOutcomeDto>> {
    subscribe_to(&state, &user, SubscriptionTargetRef::Publisher(id)).await
}

#[utoipa::path(
    delete,
    path = "/api/v1/subscriptions/publishers/{id}",
    params(("id" = i64, Path, description = "Publisher identifier")),
    responses(
        (status = 200, description = "Whether a subscription was removed.", body = UnsubscribeOutcomeDto),
        (status = 403, description = "Only readers can unsubscribe.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Subscriptions"
)]
pub async fn unsubscribe_publisher(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<UnsubscribeOutcomeDto>> {
    unsubscribe_from(&state, &user, SubscriptionTargetRef::Publisher(id)).await
}

#[utoipa::path(
    post,
    path = "/api/v1/subscriptions/journalists/{id}",
    params(("id" = i64, Path, description = "Journalist user identifier")),
    responses(
        (status = 200, description = "Subscription created or already present.", body = SubscriptionOutcomeDto),
        (status = 403, description = "Only readers can subscribe.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Journalist not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Subscriptions"
)]
pub async fn subscribe_journalist(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<SubscriptionOutcomeDto>> {
    subscribe_to(&state, &user, SubscriptionTargetRef::Journalist(id)).await
}

#[utoipa::path(
    delete,
    path = "/api/v1/subscriptions/journalists/{id}",
    params(("id" = i64, Path, description = "Journalist user identifier")),
    responses(
        (status = 200, description = "Whether a subscription was removed.", body = UnsubscribeOutcomeDto),
        (status = 403, description = "Only readers can unsubscribe.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Subscriptions"
)]
pub async fn unsubscribe_journalist(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<UnsubscribeOutcomeDto>> {
    unsubscribe_from(&state, &user, SubscriptionTargetRef::Journalist(id)).await
}
