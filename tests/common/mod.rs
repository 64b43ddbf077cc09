#![allow(dead_code)]

use axum::{Router, middleware, routing::get};
use axum_test::TestServer;
use form_builder::api::handlers::health_handler;
use form_builder::api::middleware::auth;
use form_builder::api::routes::protected_routes;
use form_builder::routes::app_router;
use form_builder::state::AppState;
use form_builder::utils::token::hash_token;
use serde_json::{Value, json};
use sqlx::PgPool;
use std::sync::Arc;

pub const SIGNING_SECRET: &str = "test-signing-secret";

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(Arc::new(pool), SIGNING_SECRET.to_string())
}

/// Issues an API token for `user_id` and returns the raw bearer value.
pub async fn create_user_token(pool: &PgPool, user_id: &str) -> String {
    let raw = format!("token-for-{user_id}");
    sqlx::query("INSERT INTO api_tokens (name, user_id, token_hash) VALUES ($1, $2, $3)")
        .bind(format!("{user_id} test token"))
        .bind(user_id)
        .bind(hash_token(SIGNING_SECRET, &raw))
        .execute(pool)
        .await
        .unwrap();
    raw
}

/// Public health route plus the protected API behind Bearer authentication.
///
/// Rate limiting is left out: it keys on the socket peer address, which the
/// in-memory transport does not provide.
pub fn make_server(pool: PgPool) -> TestServer {
    let state = create_test_state(pool);
    let api = protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));
    let app = Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api)
        .with_state(state);
    TestServer::new(app).unwrap()
}

/// The full application router, rate limiting included.
///
/// Runs behind the proxy-aware limiter, so requests must carry an
/// `X-Forwarded-For` header to be keyed.
pub fn make_app_server(pool: PgPool) -> TestServer {
    let app = Router::new().fallback_service(app_router(create_test_state(pool), true));
    TestServer::new(app).unwrap()
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

pub fn sample_form() -> Value {
    json!({
        "title": "Customer feedback",
        "description": "Tell us how we did",
        "fields": [
            { "id": "name", "type": "text", "label": "Name", "required": true },
            {
                "id": "rating",
                "type": "select",
                "label": "Rating",
                "options": [
                    { "value": "5", "label": "Great" },
                    { "value": "1", "label": "Bad" }
                ]
            }
        ],
        "settings": { "submitLabel": "Send" }
    })
}

pub async fn count_rows(pool: &PgPool, table: &str, form_id: &str) -> i64 {
    let column = if table == "forms" { "id" } else { "form_id" };
    sqlx::query_scalar(&format!(
        "SELECT COUNT(*) FROM {table} WHERE {column} = $1"
    ))
    .bind(form_id)
    .fetch_one(pool)
    .await
    .unwrap()
}
