#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use mercato_api::auth::jwt::{generate_access_token, JwtConfig};
use mercato_api::config::ServerConfig;
use mercato_api::router::build_app_router;
use mercato_api::routes;
use mercato_api::state::AppState;

/// Team identifier used by tests that need a valid `X-Team-Id`.
pub const TEAM_ID: &str = "TM1";

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default),
/// a 30-second request timeout and a fixed JWT secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        default_locale: "en".to_string(),
        supported_locales: vec!["en".to_string(), "id".to_string()],
        jwt: JwtConfig {
            secret: "integration-test-secret-long-enough-for-hmac".to_string(),
            access_token_expiry_mins: 15,
        },
    }
}

/// Build the full application router with all middleware layers, exactly as
/// `main.rs` does.
pub fn build_test_app() -> Router {
    let config = test_config();
    let table = routes::route_table().expect("route table should be valid");

    let state = AppState {
        config: Arc::new(config.clone()),
        routes: Arc::new(table),
    };

    build_app_router(state, &config)
}

/// Issue an access token for `user_id` signed with the test secret.
pub fn token_for(user_id: &str) -> String {
    generate_access_token(user_id, &test_config().jwt).expect("token generation should succeed")
}

/// Send a GET request without credentials.
pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None, None, None).await
}

/// Send a GET request as `user_id`.
pub async fn get_auth(app: Router, uri: &str, user_id: &str) -> Response {
    send(app, Method::GET, uri, Some(user_id), None, None).await
}

/// Send a request scoped to [`TEAM_ID`] as `user_id`, with an optional
/// JSON body.
pub async fn send_team(
    app: Router,
    method: Method,
    uri: &str,
    user_id: &str,
    body: Option<Value>,
) -> Response {
    send(app, method, uri, Some(user_id), Some(TEAM_ID), body).await
}

/// Send an arbitrary request. `user_id` adds a Bearer token, `team_id`
/// adds `X-Team-Id`, and `body` is sent as JSON.
pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    user_id: Option<&str>,
    team_id: Option<&str>,
    body: Option<Value>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(user_id) = user_id {
        builder = builder.header("authorization", format!("Bearer {}", token_for(user_id)));
    }
    if let Some(team_id) = team_id {
        builder = builder.header("x-team-id", team_id);
    }

    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
