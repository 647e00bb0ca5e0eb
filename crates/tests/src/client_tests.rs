use axum::http::StatusCode;

use crate::common;

#[tokio::test]
async fn dashboard_uses_camel_case_schema() {
    let app = common::test_app();

    let (status, body) = common::get(&app, "/api/client/dashboard").await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(body["projectName"], "Dashboard Redesign");
    assert_eq!(body["clientName"], "Client User");
    assert_eq!(body["balance"], 1250.0);
    assert_eq!(body["documents"][0]["type"], "pdf");
    assert!(body.get("project_name").is_none());
}

#[tokio::test]
async fn timeline_is_chronological() {
    let app = common::test_app();

    let (_, body) = common::get(&app, "/api/client/dashboard").await;
    let statuses: Vec<&str> = body["timeline"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["status"].as_str().unwrap())
        .collect();
    assert_eq!(statuses, vec!["completed", "active", "pending"]);
}
