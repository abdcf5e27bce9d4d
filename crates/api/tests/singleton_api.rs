//! HTTP-level integration tests for singleton resources.

mod common;

use axum::http::StatusCode;
use common::{admin_token, body_json, get, post_json_auth, put_json_auth};
use serde_json::json;
use sqlx::PgPool;

fn about_payload(title: &str) -> serde_json::Value {
    json!({
        "title": title,
        "description": "Serving the region since 1952",
        "mission": "Compassionate care",
        "vision": "Health for everyone",
    })
}

/// Before the first save the singleton is 404.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_about_content_absent_is_404(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/api/about-content").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}

/// First POST inserts (201), second replaces (200); one row at id 1.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_repeated_save_keeps_single_row(pool: PgPool) {
    let token = admin_token(&pool).await;
    let app = common::build_test_app(pool.clone());

    let first = post_json_auth(
        app.clone(),
        "/api/site-settings",
        json!({ "hospitalName": "Riverside", "facebookUrl": "https://facebook.com/riverside" }),
        &token,
    )
    .await;
    assert_eq!(first.status(), StatusCode::CREATED);
    assert_eq!(body_json(first).await["id"], 1);

    let second = post_json_auth(
        app.clone(),
        "/api/site-settings",
        json!({ "hospitalName": "Riverside General" }),
        &token,
    )
    .await;
    assert_eq!(second.status(), StatusCode::OK);
    let json = body_json(second).await;
    assert_eq!(json["id"], 1);
    assert_eq!(json["hospitalName"], "Riverside General");
    // A save is a full replacement; omitted optional fields are cleared.
    assert_eq!(json["facebookUrl"], serde_json::Value::Null);

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM site_settings")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);

    let fetched = body_json(get(app, "/api/site-settings").await).await;
    assert_eq!(fetched["hospitalName"], "Riverside General");
}

/// PUT on an absent singleton is 404 and creates nothing.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_put_absent_is_404(pool: PgPool) {
    let token = admin_token(&pool).await;
    let app = common::build_test_app(pool);

    let response = put_json_auth(
        app.clone(),
        "/api/about-content",
        json!({ "title": "About" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    assert_eq!(
        get(app, "/api/about-content").await.status(),
        StatusCode::NOT_FOUND
    );
}

/// PUT patches an existing singleton, also when addressed as `/1`.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_put_patches_existing(pool: PgPool) {
    let token = admin_token(&pool).await;
    let app = common::build_test_app(pool);

    let response =
        post_json_auth(app.clone(), "/api/about-content", about_payload("About us"), &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = put_json_auth(
        app.clone(),
        "/api/about-content",
        json!({ "mission": "Care first" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["mission"], "Care first");
    assert_eq!(json["title"], "About us");

    let response = put_json_auth(
        app.clone(),
        "/api/about-content/1",
        json!({ "vision": "Healthy city" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["vision"], "Healthy city");

    let response =
        put_json_auth(app, "/api/about-content/2", json!({ "vision": "x" }), &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Contact e-mail is validated.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_contact_info_rejects_bad_email(pool: PgPool) {
    let token = admin_token(&pool).await;
    let app = common::build_test_app(pool);

    let response = post_json_auth(
        app,
        "/api/contact-info",
        json!({ "address": "1 Main St", "phone": "+1 555 0100", "email": "front-desk" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["error"].as_str().unwrap().contains("email"));
}
