//! Client behavior against an in-process stub of the content API.

use std::sync::{Arc, Mutex};

use assert_matches::assert_matches;
use axum::extract::{Multipart, Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;

use medsite_client::types::{AboutContent, Service, SiteSettings, DEFAULT_ICON_NAME};
use medsite_client::{ApiClient, ClientConfig, ClientError};

/// `(_t query value, cache-control, pragma)` per site-settings read.
type Seen = Arc<Mutex<Vec<(Option<String>, Option<String>, Option<String>)>>>;

async fn spawn(router: Router) -> ApiClient {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    ApiClient::new(ClientConfig::new(format!("http://{addr}/"))).unwrap()
}

fn not_found(message: &str) -> axum::response::Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": message, "code": "NOT_FOUND" })),
    )
        .into_response()
}

async fn site_settings(
    State(seen): State<Seen>,
    Query(query): Query<std::collections::HashMap<String, String>>,
    headers: HeaderMap,
) -> Json<serde_json::Value> {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };
    seen.lock().unwrap().push((
        query.get("_t").cloned(),
        header("cache-control"),
        header("pragma"),
    ));
    Json(json!({
        "id": 1,
        "hospitalName": "St. Example",
        "logoUrl": null,
        "facebookUrl": null,
        "tiktokUrl": null,
        "telegramUrl": null,
        "createdAt": "2026-10-01T08:00:00Z",
        "updatedAt": "2026-10-01T08:00:00Z"
    }))
}

async fn upload(mut multipart: Multipart) -> impl IntoResponse {
    let field = multipart.next_field().await.unwrap().unwrap();
    let name = field.name().unwrap_or_default().to_string();
    let file_name = field.file_name().unwrap_or_default().to_string();
    let content_type = field.content_type().unwrap_or_default().to_string();
    let bytes = field.bytes().await.unwrap();
    assert_eq!(name, "file");
    assert_eq!(content_type, "image/png");
    (
        StatusCode::CREATED,
        Json(json!({
            "url": "/uploads/abc.png",
            "fileType": "image",
            "fileName": file_name,
            "fileSize": bytes.len(),
        })),
    )
}

async fn logout(headers: HeaderMap) -> StatusCode {
    match headers.get("authorization").and_then(|v| v.to_str().ok()) {
        Some("Bearer token-123") => StatusCode::NO_CONTENT,
        _ => StatusCode::UNAUTHORIZED,
    }
}

fn stub_api(seen: Seen) -> Router {
    Router::new()
        .route("/api/site-settings", get(site_settings))
        .route(
            "/api/about-content",
            get(|| async { not_found("About content not found") }),
        )
        .route(
            "/api/services",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }).post(|| async {
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({
                        "error": "Missing required fields: name",
                        "code": "VALIDATION_ERROR"
                    })),
                )
            }),
        )
        .route(
            "/api/services/{id}",
            get(|Path(id): Path<i64>| async move {
                not_found(&format!("Service with id {id} not found"))
            }),
        )
        .route(
            "/api/departments",
            get(|| async { Json(json!({ "unexpected": "shape" })) }),
        )
        .route(
            "/api/news-events/by-link",
            get(
                |Query(q): Query<std::collections::HashMap<String, String>>| async move {
                    if q.get("link").map(String::as_str) == Some("/open-day") {
                        Json(json!({
                            "id": 4,
                            "title": "Open Day",
                            "date": "2026-11-02",
                            "summary": "Tours",
                            "fullContent": "Tours of every ward.",
                            "image": "/uploads/open-day.jpg",
                            "link": "/open-day",
                            "hint": null
                        }))
                        .into_response()
                    } else if q.get("link").map(String::as_str) == Some("/broken") {
                        (StatusCode::INTERNAL_SERVER_ERROR, "database unavailable").into_response()
                    } else {
                        not_found("News event not found")
                    }
                },
            ),
        )
        .route("/api/upload", post(upload))
        .route("/api/auth/logout", post(logout))
        .with_state(seen)
}

#[tokio::test]
async fn absent_singleton_falls_back_to_default() {
    let client = spawn(stub_api(Seen::default())).await;

    let about = client.get_about_content().await;

    assert_eq!(about, AboutContent::default());
    assert_eq!(client.fallback_count(), 1);
}

#[tokio::test]
async fn reads_carry_cache_busting_param_and_no_cache_headers() {
    let seen = Seen::default();
    let client = spawn(stub_api(seen.clone())).await;

    let settings: SiteSettings = client.get_site_settings().await;
    assert_eq!(settings.hospital_name, "St. Example");
    assert!(settings.created_at.is_some());
    assert_eq!(client.fallback_count(), 0);

    let seen = seen.lock().unwrap();
    let (t, cache_control, pragma) = &seen[0];
    let t: i64 = t.as_deref().expect("_t param").parse().expect("numeric _t");
    assert!(t > 0);
    assert!(cache_control.as_deref().unwrap().contains("no-cache"));
    assert_eq!(pragma.as_deref(), Some("no-cache"));
}

#[tokio::test]
async fn collection_fault_yields_empty_list() {
    let client = spawn(stub_api(Seen::default())).await;

    assert!(client.get_services().await.is_empty());
    // Wrong body shape counts as a fault too.
    assert!(client.get_departments().await.is_empty());
    assert_eq!(client.fallback_count(), 2);
}

#[tokio::test]
async fn missing_record_is_none_without_fallback() {
    let client = spawn(stub_api(Seen::default())).await;

    assert!(client.get_service(42).await.is_none());
    assert_eq!(client.fallback_count(), 0);
}

#[tokio::test]
async fn write_errors_carry_server_message() {
    let client = spawn(stub_api(Seen::default())).await;
    let service = Service {
        id: 0,
        name: String::new(),
        description: "d".into(),
        detailed_description: "dd".into(),
        icon_name: DEFAULT_ICON_NAME.into(),
        created_at: None,
        updated_at: None,
    };

    let err = client.create_service(&service).await.unwrap_err();

    assert_matches!(
        err,
        ClientError::Api { status: 400, ref message } if message == "Missing required fields: name"
    );
    assert_eq!(client.fallback_count(), 0);
}

#[tokio::test]
async fn news_lookup_by_link() {
    let client = spawn(stub_api(Seen::default())).await;

    let event = client.get_news_event_by_link("/open-day").await.unwrap();
    assert_eq!(event.title, "Open Day");
    assert_eq!(event.date.to_string(), "2026-11-02");

    assert!(client.get_news_event_by_link("/nope").await.is_none());
    assert_eq!(client.fallback_count(), 0);
}

#[tokio::test]
async fn news_lookup_fault_counts_as_fallback() {
    let client = spawn(stub_api(Seen::default())).await;

    assert!(client.get_news_event_by_link("/broken").await.is_none());
    assert_eq!(client.fallback_count(), 1);
}

#[tokio::test]
async fn upload_sends_single_file_part() {
    let client = spawn(stub_api(Seen::default())).await;

    let uploaded = client
        .upload_file("scan.png", "image/png", vec![7u8; 64])
        .await
        .unwrap();

    assert_eq!(uploaded.url, "/uploads/abc.png");
    assert_eq!(uploaded.file_name, "scan.png");
    assert_eq!(uploaded.file_size, 64);
}

#[tokio::test]
async fn token_is_sent_as_bearer() {
    let client = spawn(stub_api(Seen::default())).await;

    assert_matches!(
        client.logout().await,
        Err(ClientError::Api { status: 401, .. })
    );
    client.with_token("token-123").logout().await.unwrap();
}
