//! Tests for `AppError` and `PageError` → HTTP response mapping.
//!
//! These call `IntoResponse` directly; no server or database is involved.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use tripwise_api::error::{AppError, PageError};

async fn error_to_json(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn page_to_html(err: PageError) -> (StatusCode, String) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

fn connection_refused() -> sqlx::Error {
    sqlx::Error::Io(std::io::Error::new(
        std::io::ErrorKind::ConnectionRefused,
        "connect to 10.0.0.5:5432 refused",
    ))
}

// ---------------------------------------------------------------------------
// AppError
// ---------------------------------------------------------------------------

#[tokio::test]
async fn bad_request_error_returns_400() {
    let (status, json) = error_to_json(AppError::BadRequest("limit too big".into())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["error"], "limit too big");
}

#[tokio::test]
async fn row_not_found_returns_404() {
    let (status, json) = error_to_json(AppError::Database(sqlx::Error::RowNotFound)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
}

#[tokio::test]
async fn unreachable_database_returns_503() {
    for err in [
        sqlx::Error::PoolTimedOut,
        sqlx::Error::PoolClosed,
        connection_refused(),
    ] {
        let (status, json) = error_to_json(AppError::Database(err)).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(json["code"], "DATABASE_UNAVAILABLE");
        assert!(!json["error"].as_str().unwrap().contains("10.0.0.5"));
    }
}

#[tokio::test]
async fn other_database_errors_return_500_and_sanitize_message() {
    let err = AppError::Database(sqlx::Error::Protocol("relation \"hotels\" secret".into()));
    let (status, json) = error_to_json(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
}

// ---------------------------------------------------------------------------
// PageError
// ---------------------------------------------------------------------------

#[tokio::test]
async fn page_database_error_renders_unavailable_page() {
    let (status, html) = page_to_html(PageError::Database(connection_refused())).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(html.contains("Search temporarily unavailable"));
    assert!(!html.contains("10.0.0.5"));
}

#[tokio::test]
async fn page_template_error_renders_server_error_page() {
    let err = minijinja::Error::new(minijinja::ErrorKind::TemplateNotFound, "results.html");
    let (status, html) = page_to_html(PageError::Template(err)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(html.contains("Something went wrong"));
}
