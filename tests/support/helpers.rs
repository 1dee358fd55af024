// tests/support/helpers.rs
use super::builders::Newsroom;
use axum::body::{self, Body};
use axum::http::{Request, Response, StatusCode, header};
use newsdesk_core::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use tower::util::ServiceExt as _;

pub fn make_test_router(newsroom: &Newsroom) -> axum::Router {
    let state = HttpState {
        services: newsroom.services.clone(),
        db_pool: None,
    };
    build_router(state, &[])
}

pub fn request(method: &str, uri: &str, auth: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(auth) = auth {
        builder = builder.header(header::AUTHORIZATION, auth);
    }
    match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn send(router: &axum::Router, req: Request<Body>) -> Response<Body> {
    router.clone().oneshot(req).await.unwrap()
}

pub async fn json_body(resp: Response<Body>) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    serde_json::from_slice(&bytes).unwrap_or(Value::Null)
}

/// Asserts the status and, for error responses, the shared error envelope.
pub async fn expect_status(resp: Response<Body>, status: StatusCode) -> Value {
    assert_eq!(resp.status(), status);
    let json = json_body(resp).await;
    if status.is_client_error() || status.is_server_error() {
        assert!(json.get("error").is_some(), "missing error field: {json}");
        assert!(json.get("message").is_some(), "missing message field: {json}");
    }
    json
}
