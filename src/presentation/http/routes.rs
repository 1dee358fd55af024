// src/presentation/http/routes.rs
use crate::domain::content::ContentKind;
use crate::presentation::http::state::{ContentScope, HttpState};
use crate::presentation::http::{
    controllers::{content, staff, subscriptions},
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Json, Router,
    http::{HeaderValue, Method, StatusCode},
    routing::{get, post},
};
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

const HEALTH_DB_TIMEOUT: Duration = Duration::from_secs(2);

pub fn build_router(state: HttpState, allowed_origins: &[String]) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(origin_policy(allowed_origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .nest("/api/v1/articles", content_routes(ContentKind::Article))
        .nest("/api/v1/newsletters", content_routes(ContentKind::Newsletter))
        .route("/api/v1/subscriptions", get(subscriptions::overview))
        .route("/api/v1/subscriptions/feed", get(subscriptions::feed))
        .route(
            "/api/v1/subscriptions/publishers/{id}",
            post(subscriptions::subscribe_publisher).delete(subscriptions::unsubscribe_publisher),
        )
        .route(
            "/api/v1/subscriptions/journalists/{id}",
            post(subscriptions::subscribe_journalist)
                .delete(subscriptions::unsubscribe_journalist),
        )
        .route(
            "/api/v1/publishers/{id}/staff",
            get(staff::list_staff).post(staff::assign_staff),
        )
        .route("/api/v1/staff/{id}", axum::routing::delete(staff::remove_staff))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

/// Any origin when the list is empty or contains `*`; otherwise the listed
/// origins that parse as header values.
fn origin_policy(allowed_origins: &[String]) -> AllowOrigin {
    if allowed_origins.is_empty() || allowed_origins.iter().any(|o| o == "*") {
        return AllowOrigin::any();
    }
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    AllowOrigin::list(origins)
}

/// Same lifecycle routes for both kinds; the handlers read the kind from
/// the [`ContentScope`] extension.
fn content_routes(kind: ContentKind) -> Router {
    Router::new()
        .route("/", post(content::create_content))
        .route("/pending", get(content::list_pending))
        .route(
            "/{id}",
            get(content::get_content)
                .put(content::update_content)
                .delete(content::delete_content),
        )
        .route("/{id}/approve", post(content::approve_content))
        .route("/{id}/publish", post(content::publish_content))
        .route("/{id}/direct-publish", post(content::direct_publish_content))
        .layer(Extension(ContentScope(kind)))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = StatusResponse),
        (status = 503, description = "Database unreachable.", body = StatusResponse)
    ),
    tag = "System"
)]
pub async fn health(
    Extension(state): Extension<HttpState>,
) -> (StatusCode, Json<StatusResponse>) {
    let Some(pool) = state.db_pool.as_ref() else {
        return (StatusCode::OK, Json(StatusResponse::new("ok")));
    };

    let probe = sqlx::query_scalar::<_, i32>("SELECT 1").fetch_one(pool);
    match tokio::time::timeout(HEALTH_DB_TIMEOUT, probe).await {
        Ok(Ok(_)) => (StatusCode::OK, Json(StatusResponse::new("ok"))),
        Ok(Err(err)) => {
            tracing::warn!(error = %err, "health check database probe failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(StatusResponse::new("database_unavailable")),
            )
        }
        Err(_) => {
            tracing::warn!("health check database probe timed out");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(StatusResponse::new("database_timeout")),
            )
        }
    }
}
