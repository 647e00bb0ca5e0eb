use axum::http::StatusCode;

use crate::common;

#[tokio::test]
async fn health_reports_seeded_counts() {
    let app = common::test_app();

    let (status, body) = common::get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["accounts"], 2);
    assert_eq!(body["clients"], 3);
    assert!(body["uptime_seconds"].is_u64());
}

#[tokio::test]
async fn unknown_route_is_404() {
    let app = common::test_app();

    let (status, _) = common::get(&app, "/api/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn docs_ui_is_served() {
    let app = common::test_app();

    let (status, _) = common::get(&app, "/docs").await;
    assert_eq!(status, StatusCode::OK);
}
