#![allow(missing_docs)]

use axum::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
    CONTENT_TYPE,
};
use axum_test::{TestResponse, TestServer};
use serde_json::json;
use tempfile::TempDir;

use crate::{AppState, INDEX_FILE, TransactionCreated, TransactionId, build_router};

pub(crate) const INDEX_HTML: &str = "<!doctype html><title>Finance Tracker</title>";

/// Create a server whose asset directory is an empty temporary directory.
///
/// The directory is deleted when the returned [TempDir] is dropped, so keep it alive for
/// the duration of the test.
#[track_caller]
pub(crate) fn get_test_server_without_frontend() -> (TestServer, TempDir) {
    let assets = TempDir::new().expect("Could not create temporary asset directory.");
    let server = TestServer::try_new(build_router(AppState::new(assets.path())))
        .expect("Could not create test server.");

    (server, assets)
}

/// Create a server whose asset directory contains [INDEX_HTML] as `index.html`.
#[track_caller]
pub(crate) fn get_test_server() -> (TestServer, TempDir) {
    let (server, assets) = get_test_server_without_frontend();
    std::fs::write(assets.path().join(INDEX_FILE), INDEX_HTML)
        .expect("Could not write index.html.");

    (server, assets)
}

/// Create a transaction through the API and return its ID.
pub(crate) async fn create_transaction(
    server: &TestServer,
    description: &str,
    amount: f64,
) -> TransactionId {
    let kind = if amount < 0.0 { "expense" } else { "income" };

    server
        .post(crate::endpoints::TRANSACTIONS_API)
        .json(&json!({
            "description": description,
            "amount": amount,
            "type": kind,
            "date": "2024-01-01",
        }))
        .await
        .json::<TransactionCreated>()
        .id
}

#[track_caller]
pub(crate) fn assert_cors_headers(response: &TestResponse) {
    assert_eq!(response.header(ACCESS_CONTROL_ALLOW_ORIGIN), "*");
    assert_eq!(
        response.header(ACCESS_CONTROL_ALLOW_METHODS),
        "GET, POST, PUT, DELETE, OPTIONS"
    );
    assert_eq!(response.header(ACCESS_CONTROL_ALLOW_HEADERS), "Content-Type");
}

#[track_caller]
pub(crate) fn assert_content_type(response: &TestResponse, content_type: &str) {
    assert_eq!(response.header(CONTENT_TYPE), content_type);
}
