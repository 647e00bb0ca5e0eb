use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common;

#[tokio::test]
async fn clients_returns_seeded_roster_in_order() {
    let app = common::test_app();

    let (status, body) = common::get(&app, "/api/admin/clients").await;
    assert_eq!(status, StatusCode::OK);

    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec!["Venturemond Demo Corp", "Northwind Traders", "Globex"]
    );
    assert_eq!(body[1]["status"], "Pending");
    assert_eq!(body[0]["avatar"], "V");
}

#[tokio::test]
async fn stats_are_derived_from_roster() {
    let app = common::test_app();

    let (_, roster) = common::get(&app, "/api/admin/clients").await;
    let roster = roster.as_array().unwrap();
    let pending = roster.iter().filter(|c| c["status"] == "Pending").count();

    let (status, stats) = common::get(&app, "/api/admin/stats").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["clients"], json!(roster.len()));
    assert_eq!(stats["pending"], json!(pending));
    assert!(stats["revenue"].is_number());
}
