// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use activity_signups::config::Config;
use activity_signups::db::ActivityStore;
use activity_signups::routes::create_router;
use activity_signups::services::CatalogService;
use activity_signups::AppState;
use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use std::sync::Arc;
use tower::ServiceExt;

/// Create a test app seeded with the built-in catalog.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    let catalog = CatalogService::builtin().expect("Built-in catalog should parse");
    let config = Config {
        static_dir: concat!(env!("CARGO_MANIFEST_DIR"), "/static").into(),
        ..Config::default()
    };

    let state = Arc::new(AppState {
        config,
        activities: ActivityStore::new(catalog.into_activities()),
    });

    (create_router(state.clone()), state)
}

/// Build a roster URI such as `/activities/Chess%20Club/signup?email=...`.
#[allow(dead_code)]
pub fn roster_uri(activity: &str, action: &str, email: &str) -> String {
    format!(
        "/activities/{}/{}?email={}",
        urlencoding::encode(activity),
        action,
        urlencoding::encode(email)
    )
}

/// Send a bodiless request through the router.
#[allow(dead_code)]
pub async fn send(app: axum::Router, method: Method, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Read a response body as JSON.
#[allow(dead_code)]
pub async fn json_body(response: Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}
