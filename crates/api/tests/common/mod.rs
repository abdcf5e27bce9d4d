#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::postgres::PgConnectOptions;
use sqlx::PgPool;
use tower::ServiceExt;

use medsite_api::auth::jwt::{generate_access_token, JwtConfig};
use medsite_api::config::{DatabaseConfig, ServerConfig};
use medsite_api::router::build_app_router;
use medsite_api::state::AppState;
use medsite_db::models::admin::CreateAdminUser;
use medsite_db::models::session::CreateSession;
use medsite_db::repositories::{AdminUserRepo, SessionRepo};

/// Boundary used by [`multipart_body`].
pub const BOUNDARY: &str = "medsite-test-boundary";

/// Build a test `ServerConfig` with safe defaults and the given upload dir.
pub fn test_config(upload_dir: &Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:9002".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 5,
        upload_dir: upload_dir.to_path_buf(),
        database: DatabaseConfig {
            connect_options: PgConnectOptions::new_without_pgpass(),
            max_connections: 5,
        },
        jwt: JwtConfig {
            secret: "integration-test-secret".to_string(),
            access_token_expiry_mins: 15,
            refresh_token_expiry_days: 7,
        },
        admin: None,
    }
}

fn default_upload_dir() -> PathBuf {
    std::env::temp_dir().join("medsite-test-uploads")
}

/// Build the full application router (same middleware stack as production)
/// around the given pool.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_uploads(pool, &default_upload_dir())
}

/// Like [`build_test_app`] but storing uploads in `upload_dir`.
pub fn build_test_app_with_uploads(pool: PgPool, upload_dir: &Path) -> Router {
    let config = test_config(upload_dir);
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Create an admin with an active session and return a valid access token.
pub async fn admin_token(pool: &PgPool) -> String {
    let username = format!("admin-{}", uuid::Uuid::new_v4().simple());
    let admin = AdminUserRepo::create(
        pool,
        &CreateAdminUser {
            username,
            // Never verified: tests authenticate with a minted token.
            password_hash: "unused".to_string(),
        },
    )
    .await
    .expect("admin creation should succeed");

    let session = SessionRepo::create(
        pool,
        &CreateSession {
            admin_user_id: admin.id,
            refresh_token_hash: uuid::Uuid::new_v4().simple().to_string(),
            expires_at: chrono::Utc::now() + chrono::Duration::days(1),
            user_agent: None,
        },
    )
    .await
    .expect("session creation should succeed");

    let jwt = test_config(&default_upload_dir()).jwt;
    generate_access_token(admin.id, session.id, &jwt).expect("token generation should succeed")
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be JSON")
}

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.expect("request should complete")
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::get(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    json_request(app, "POST", uri, body, None).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    json_request(app, "POST", uri, body, Some(token)).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    json_request(app, "PUT", uri, body, Some(token)).await
}

pub async fn post_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::post(uri)
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::delete(uri)
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

async fn json_request(
    app: Router,
    method: &str,
    uri: &str,
    body: serde_json::Value,
    token: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let request = builder.body(Body::from(body.to_string())).unwrap();
    send(app, request).await
}

/// A file part for [`multipart_body`]: `(field name, file name, content type, bytes)`.
pub type FilePart<'a> = (&'a str, &'a str, &'a str, Vec<u8>);

/// Encode file parts as a `multipart/form-data` body using [`BOUNDARY`].
pub fn multipart_body(parts: Vec<FilePart<'_>>) -> Vec<u8> {
    let mut body = Vec::new();
    for (field, file_name, content_type, bytes) in parts {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\n\
                 Content-Disposition: form-data; name=\"{field}\"; filename=\"{file_name}\"\r\n\
                 Content-Type: {content_type}\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(&bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

pub async fn upload_auth(app: Router, parts: Vec<FilePart<'_>>, token: &str) -> Response<Body> {
    let request = Request::post("/api/upload")
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .header("authorization", format!("Bearer {token}"))
        .body(Body::from(multipart_body(parts)))
        .unwrap();
    send(app, request).await
}
