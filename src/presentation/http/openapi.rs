// src/presentation/http/openapi.rs
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, env};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
    server::Server,
};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::content::create_content,
        crate::presentation::http::controllers::content::list_pending,
        crate::presentation::http::controllers::content::get_content,
        crate::presentation::http::controllers::content::update_content,
        crate::presentation::http::controllers::content::delete_content,
        crate::presentation::http::controllers::content::approve_content,
        crate::presentation::http::controllers::content::publish_content,
        crate::presentation::http::controllers::content::direct_publish_content,
        crate::presentation::http::controllers::subscriptions::overview,
        crate::presentation::http::controllers::subscriptions::feed,
        crate::presentation::http::controllers::subscriptions::subscribe_publisher,
        crate::presentation::http::controllers::subscriptions::unsubscribe_publisher,
        crate::presentation::http::controllers::subscriptions::subscribe_journalist,
        crate::presentation::http::controllers::subscriptions::unsubscribe_journalist,
        crate::presentation::http::controllers::staff::list_staff,
        crate::presentation::http::controllers::staff::assign_staff,
        crate::presentation::http::controllers::staff::remove_staff,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::content::CreateContentRequest,
            crate::presentation::http::controllers::content::UpdateContentRequest,
            crate::presentation::http::controllers::staff::AssignStaffRequest,
            crate::application::dto::ContentDto,
            crate::application::dto::StaffAssignmentDto,
            crate::application::dto::SubscriptionDto,
            crate::application::dto::SubscriptionOutcomeDto,
            crate::application::dto::UnsubscribeOutcomeDto,
            crate::application::dto::SubscriptionsOverviewDto
        )
    ),
    tags(
        (name = "Content", description = "Article and newsletter lifecycle"),
        (name = "Subscriptions", description = "Reader subscriptions and feed"),
        (name = "Staff", description = "Publisher staff roster"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    security(("bearerAuth" = [])),
    info(
        title = "Newsdesk API",
        description = "Editorial workflow: approval, publishing and subscriber notification",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        let mut http = Http::new(HttpAuthScheme::Bearer);
        http.bearer_format = Some("Biscuit".into());
        components.add_security_scheme("bearerAuth", SecurityScheme::Http(http));

        let servers = openapi.servers.get_or_insert_with(Vec::new);
        servers.clear();

        let mut urls: Vec<String> = env::var("PUBLIC_API_URLS")
            .ok()
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|segment| !segment.is_empty())
                    .map(|segment| segment.trim_end_matches('/').to_string())
                    .collect()
            })
            .unwrap_or_default();

        if urls.is_empty() {
            urls.push("http://localhost:3000".to_string());
        }

        let mut seen = HashSet::new();
        for url in urls {
            if seen.insert(url.clone()) {
                servers.push(Server::new(url));
            }
        }
    }
}

pub async fn serve_openapi() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}

pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    Router::new()
        .route("/openapi.json", get(serve_openapi))
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi))
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}
