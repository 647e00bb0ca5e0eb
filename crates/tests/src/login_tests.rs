use axum::http::StatusCode;

use crate::common;

#[tokio::test]
async fn admin_login_redirects_to_admin_dashboard() {
    let app = common::test_app();

    let (status, body) = common::post_json(
        &app,
        "/api/login",
        r#"{"username":"admin","password":"admin123"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["role"], "admin");
    assert_eq!(body["redirect"], "/admin");
    assert!(body.get("message").is_none());
}

#[tokio::test]
async fn client_login_by_email_alias() {
    let app = common::test_app();

    let (status, body) = common::post_json(
        &app,
        "/api/login",
        r#"{"username":"client@venturemond.com","password":"client123"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["role"], "client");
    assert_eq!(body["redirect"], "/client");
}

#[tokio::test]
async fn wrong_password_is_401_with_message() {
    let app = common::test_app();

    let (status, body) = common::post_json(
        &app,
        "/api/login",
        r#"{"username":"admin","password":"client123"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Incorrect username or password");
    assert!(body.get("role").is_none());
}

#[tokio::test]
async fn blank_fields_are_422() {
    let app = common::test_app();

    for payload in [
        r#"{"username":"","password":"admin123"}"#,
        r#"{"username":"admin","password":""}"#,
        r#"{"username":"   ","password":"x"}"#,
    ] {
        let (status, body) = common::post_json(&app, "/api/login", payload).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{payload}");
        assert_eq!(body["success"], false);
    }
}

#[tokio::test]
async fn missing_fields_are_rejected_by_extractor() {
    let app = common::test_app();

    let (status, _) = common::post_json(&app, "/api/login", r#"{"username":"admin"}"#).await;
    assert!(status.is_client_error());
}
