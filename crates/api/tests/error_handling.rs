//! Error response shape across the API.

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{admin_token, body_json, get};
use sqlx::PgPool;

/// Malformed JSON is a 400 in the standard `{error, code}` shape.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_malformed_json_is_400(pool: PgPool) {
    let token = admin_token(&pool).await;
    let app = common::build_test_app(pool);

    let request = Request::post("/api/services")
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {token}"))
        .body(Body::from("{\"name\": "))
        .unwrap();
    let response = common::send(app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["error"].as_str().unwrap().starts_with("Invalid JSON body"));
}

/// A JSON array body is rejected by schema validation.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_non_object_body_is_400(pool: PgPool) {
    let token = admin_token(&pool).await;
    let app = common::build_test_app(pool);

    let response =
        common::post_json_auth(app, "/api/services", serde_json::json!([1, 2]), &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

/// Unknown ids are 404 with the entity named.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unknown_id_names_entity(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/api/facilities/987654").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Facility with id 987654 not found");
}

/// Every response carries a request id.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_request_id_is_propagated(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/api/services").await;
    assert!(response.headers().contains_key("x-request-id"));
}

/// A non-numeric id is a 400 in the standard shape, not a plain-text
/// rejection.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_non_numeric_id_is_400(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/api/services/abc").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["error"]
        .as_str()
        .unwrap()
        .starts_with("Invalid path parameter"));
}

/// The by-link lookup without `?link=` is a 400 in the standard shape.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_missing_link_query_is_400(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/api/news-events/by-link").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["error"]
        .as_str()
        .unwrap()
        .starts_with("Invalid query string"));
}
