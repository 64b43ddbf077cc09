mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};
use sqlx::PgPool;

// ─── Auth ────────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_missing_token_is_unauthorized(pool: PgPool) {
    let server = common::make_server(pool);

    let response = server.get("/api/forms").await;

    response.assert_status_unauthorized();
    assert_eq!(response.header("WWW-Authenticate"), "Bearer");
    let body = response.json::<Value>();
    assert_eq!(body["error"]["code"], "unauthorized");
}

#[sqlx::test]
async fn test_unknown_token_is_unauthorized(pool: PgPool) {
    let server = common::make_server(pool);

    server
        .get("/api/forms")
        .add_header("Authorization", common::bearer("not-a-real-token"))
        .await
        .assert_status_unauthorized();
}

#[sqlx::test]
async fn test_revoked_token_is_unauthorized(pool: PgPool) {
    let token = common::create_user_token(&pool, "alice").await;
    sqlx::query("UPDATE api_tokens SET revoked_at = NOW() WHERE user_id = 'alice'")
        .execute(&pool)
        .await
        .unwrap();

    let server = common::make_server(pool);

    server
        .get("/api/forms")
        .add_header("Authorization", common::bearer(&token))
        .await
        .assert_status_unauthorized();
}

// ─── Create / read ───────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_create_form(pool: PgPool) {
    let alice = common::create_user_token(&pool, "alice").await;
    let server = common::make_server(pool);

    let response = server
        .post("/api/forms")
        .add_header("Authorization", common::bearer(&alice))
        .json(&common::sample_form())
        .await;

    response.assert_status(StatusCode::CREATED);

    let body = response.json::<Value>();
    assert!(!body["id"].as_str().unwrap().is_empty());
    assert_eq!(body["title"], "Customer feedback");
    assert_eq!(body["createdBy"], "alice");
    assert_eq!(body["published"], false);
    assert!(body["publishedAt"].is_null());
    assert_eq!(body["createdAt"], body["updatedAt"]);
    assert_eq!(body["settings"]["submitLabel"], "Send");

    let fields = body["fields"].as_array().unwrap();
    assert_eq!(fields.len(), 2);
    assert_eq!(fields[0]["id"], "name");
    assert_eq!(fields[1]["id"], "rating");
    assert_eq!(fields[1]["options"][0]["label"], "Great");
}

#[sqlx::test]
async fn test_create_form_generates_field_ids(pool: PgPool) {
    let alice = common::create_user_token(&pool, "alice").await;
    let server = common::make_server(pool);

    let response = server
        .post("/api/forms")
        .add_header("Authorization", common::bearer(&alice))
        .json(&json!({
            "title": "Survey",
            "fields": [
                { "type": "text", "label": "Name", "required": true },
                { "type": "email", "label": "Email" }
            ]
        }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let body = response.json::<Value>();
    assert_eq!(body["description"], "");
    let first = body["fields"][0]["id"].as_str().unwrap();
    let second = body["fields"][1]["id"].as_str().unwrap();
    assert!(!first.is_empty());
    assert!(!second.is_empty());
    assert_ne!(first, second);
    assert_eq!(body["fields"][0]["required"], true);
    assert_eq!(body["fields"][1]["required"], false);
}

#[sqlx::test]
async fn test_create_form_validation(pool: PgPool) {
    let alice = common::create_user_token(&pool, "alice").await;
    let server = common::make_server(pool);

    let response = server
        .post("/api/forms")
        .add_header("Authorization", common::bearer(&alice))
        .json(&json!({ "title": "" }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<Value>()["error"]["code"], "validation_error");
}

#[sqlx::test]
async fn test_create_form_duplicate_field_ids(pool: PgPool) {
    let alice = common::create_user_token(&pool, "alice").await;
    let server = common::make_server(pool);

    server
        .post("/api/forms")
        .add_header("Authorization", common::bearer(&alice))
        .json(&json!({
            "title": "Survey",
            "fields": [
                { "id": "x", "type": "text", "label": "A" },
                { "id": "x", "type": "text", "label": "B" }
            ]
        }))
        .await
        .assert_status_bad_request();
}

#[sqlx::test]
async fn test_get_form_owner_forbidden_missing(pool: PgPool) {
    let alice = common::create_user_token(&pool, "alice").await;
    let bob = common::create_user_token(&pool, "bob").await;
    let server = common::make_server(pool);

    let created = server
        .post("/api/forms")
        .add_header("Authorization", common::bearer(&alice))
        .json(&common::sample_form())
        .await
        .json::<Value>();
    let form_id = created["id"].as_str().unwrap();

    let response = server
        .get(&format!("/api/forms/{form_id}"))
        .add_header("Authorization", common::bearer(&alice))
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), created);

    let response = server
        .get(&format!("/api/forms/{form_id}"))
        .add_header("Authorization", common::bearer(&bob))
        .await;
    response.assert_status_forbidden();
    assert_eq!(response.json::<Value>()["error"]["code"], "forbidden");

    server
        .get("/api/forms/does-not-exist")
        .add_header("Authorization", common::bearer(&alice))
        .await
        .assert_status_not_found();
}

#[sqlx::test]
async fn test_list_forms_scoped_to_caller(pool: PgPool) {
    let alice = common::create_user_token(&pool, "alice").await;
    let bob = common::create_user_token(&pool, "bob").await;
    let server = common::make_server(pool);

    for title in ["First", "Second"] {
        server
            .post("/api/forms")
            .add_header("Authorization", common::bearer(&alice))
            .json(&json!({ "title": title }))
            .await
            .assert_status(StatusCode::CREATED);
    }
    server
        .post("/api/forms")
        .add_header("Authorization", common::bearer(&bob))
        .json(&json!({ "title": "Bob's" }))
        .await
        .assert_status(StatusCode::CREATED);

    let forms = server
        .get("/api/forms")
        .add_header("Authorization", common::bearer(&alice))
        .await
        .json::<Vec<Value>>();

    assert_eq!(forms.len(), 2);
    assert!(forms.iter().all(|f| f["createdBy"] == "alice"));

    let page = server
        .get("/api/forms?skip=1&limit=1")
        .add_header("Authorization", common::bearer(&alice))
        .await
        .json::<Vec<Value>>();
    assert_eq!(page.len(), 1);

    let empty = server
        .get("/api/forms?limit=0")
        .add_header("Authorization", common::bearer(&alice))
        .await
        .json::<Vec<Value>>();
    assert!(empty.is_empty());
}

#[sqlx::test]
async fn test_list_forms_limit_too_large(pool: PgPool) {
    let alice = common::create_user_token(&pool, "alice").await;
    let server = common::make_server(pool);

    server
        .get("/api/forms?limit=1001")
        .add_header("Authorization", common::bearer(&alice))
        .await
        .assert_status_bad_request();
}

// ─── Update ──────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_update_form_partial(pool: PgPool) {
    let alice = common::create_user_token(&pool, "alice").await;
    let server = common::make_server(pool);

    let created = server
        .post("/api/forms")
        .add_header("Authorization", common::bearer(&alice))
        .json(&common::sample_form())
        .await
        .json::<Value>();
    let form_id = created["id"].as_str().unwrap();

    let response = server
        .patch(&format!("/api/forms/{form_id}"))
        .add_header("Authorization", common::bearer(&alice))
        .json(&json!({ "title": "Renamed" }))
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["title"], "Renamed");
    assert_eq!(body["description"], created["description"]);
    assert_eq!(body["fields"], created["fields"]);
    assert_eq!(body["settings"], created["settings"]);
    assert_eq!(body["createdAt"], created["createdAt"]);
    assert_ne!(body["updatedAt"], created["updatedAt"]);
}

#[sqlx::test]
async fn test_update_form_replaces_fields(pool: PgPool) {
    let alice = common::create_user_token(&pool, "alice").await;
    let server = common::make_server(pool.clone());

    let created = server
        .post("/api/forms")
        .add_header("Authorization", common::bearer(&alice))
        .json(&common::sample_form())
        .await
        .json::<Value>();
    let form_id = created["id"].as_str().unwrap();

    let body = server
        .patch(&format!("/api/forms/{form_id}"))
        .add_header("Authorization", common::bearer(&alice))
        .json(&json!({
            "fields": [{ "id": "comment", "type": "textarea", "label": "Comment" }]
        }))
        .await
        .json::<Value>();

    let fields = body["fields"].as_array().unwrap();
    assert_eq!(fields.len(), 1);
    assert_eq!(fields[0]["id"], "comment");
    assert_eq!(common::count_rows(&pool, "form_fields", form_id).await, 1);
}

#[sqlx::test]
async fn test_publish_sets_published_at_once(pool: PgPool) {
    let alice = common::create_user_token(&pool, "alice").await;
    let server = common::make_server(pool);

    let created = server
        .post("/api/forms")
        .add_header("Authorization", common::bearer(&alice))
        .json(&common::sample_form())
        .await
        .json::<Value>();
    let form_id = created["id"].as_str().unwrap();
    let path = format!("/api/forms/{form_id}");

    let published = server
        .patch(&path)
        .add_header("Authorization", common::bearer(&alice))
        .json(&json!({ "published": true }))
        .await
        .json::<Value>();
    assert_eq!(published["published"], true);
    assert!(published["publishedAt"].is_string());

    let unpublished = server
        .patch(&path)
        .add_header("Authorization", common::bearer(&alice))
        .json(&json!({ "published": false }))
        .await
        .json::<Value>();
    assert_eq!(unpublished["published"], false);
    assert_eq!(unpublished["publishedAt"], published["publishedAt"]);

    let republished = server
        .patch(&path)
        .add_header("Authorization", common::bearer(&alice))
        .json(&json!({ "published": true }))
        .await
        .json::<Value>();
    assert_eq!(republished["publishedAt"], published["publishedAt"]);
}

#[sqlx::test]
async fn test_update_form_not_owner(pool: PgPool) {
    let alice = common::create_user_token(&pool, "alice").await;
    let bob = common::create_user_token(&pool, "bob").await;
    let server = common::make_server(pool);

    let created = server
        .post("/api/forms")
        .add_header("Authorization", common::bearer(&alice))
        .json(&common::sample_form())
        .await
        .json::<Value>();
    let form_id = created["id"].as_str().unwrap();

    server
        .patch(&format!("/api/forms/{form_id}"))
        .add_header("Authorization", common::bearer(&bob))
        .json(&json!({ "title": "Hijacked" }))
        .await
        .assert_status_forbidden();

    let unchanged = server
        .get(&format!("/api/forms/{form_id}"))
        .add_header("Authorization", common::bearer(&alice))
        .await
        .json::<Value>();
    assert_eq!(unchanged["title"], "Customer feedback");
}

#[sqlx::test]
async fn test_update_missing_form(pool: PgPool) {
    let alice = common::create_user_token(&pool, "alice").await;
    let server = common::make_server(pool);

    server
        .patch("/api/forms/missing")
        .add_header("Authorization", common::bearer(&alice))
        .json(&json!({ "title": "Nope" }))
        .await
        .assert_status_not_found();
}

// ─── Delete ──────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_delete_form_cascades(pool: PgPool) {
    let alice = common::create_user_token(&pool, "alice").await;
    let server = common::make_server(pool.clone());

    let created = server
        .post("/api/forms")
        .add_header("Authorization", common::bearer(&alice))
        .json(&common::sample_form())
        .await
        .json::<Value>();
    let form_id = created["id"].as_str().unwrap();

    server
        .patch(&format!("/api/forms/{form_id}"))
        .add_header("Authorization", common::bearer(&alice))
        .json(&json!({ "published": true }))
        .await
        .assert_status_ok();
    server
        .post(&format!("/api/forms/{form_id}/submissions"))
        .add_header("Authorization", common::bearer(&alice))
        .json(&json!({ "values": { "name": "Alice" } }))
        .await
        .assert_status_ok();

    server
        .delete(&format!("/api/forms/{form_id}"))
        .add_header("Authorization", common::bearer(&alice))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    assert_eq!(common::count_rows(&pool, "forms", form_id).await, 0);
    assert_eq!(common::count_rows(&pool, "form_fields", form_id).await, 0);
    assert_eq!(common::count_rows(&pool, "form_submissions", form_id).await, 0);

    server
        .get(&format!("/api/forms/{form_id}"))
        .add_header("Authorization", common::bearer(&alice))
        .await
        .assert_status_not_found();
}

#[sqlx::test]
async fn test_delete_form_not_owner(pool: PgPool) {
    let alice = common::create_user_token(&pool, "alice").await;
    let bob = common::create_user_token(&pool, "bob").await;
    let server = common::make_server(pool.clone());

    let created = server
        .post("/api/forms")
        .add_header("Authorization", common::bearer(&alice))
        .json(&common::sample_form())
        .await
        .json::<Value>();
    let form_id = created["id"].as_str().unwrap();

    server
        .delete(&format!("/api/forms/{form_id}"))
        .add_header("Authorization", common::bearer(&bob))
        .await
        .assert_status_forbidden();

    assert_eq!(common::count_rows(&pool, "forms", form_id).await, 1);
}
