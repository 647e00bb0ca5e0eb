use pretty_assertions::assert_eq;
use server::api::{HttpApi, RemoteApi};
use shared_types::{ClientStatus, FetchError, LoginRequest, LoginResponse, Role};

use crate::common;

#[tokio::test]
async fn login_round_trip_against_live_server() {
    let api = HttpApi::new(common::spawn_server().await);

    let accepted = api
        .login(&LoginRequest::new("admin", "admin123"))
        .await
        .unwrap();
    assert_eq!(accepted, LoginResponse::accepted(Role::Admin));

    let rejected = api
        .login(&LoginRequest::new("admin", "wrong"))
        .await
        .unwrap();
    assert!(!rejected.success);
    assert_eq!(
        rejected.message.as_deref(),
        Some("Incorrect username or password")
    );
}

#[tokio::test]
async fn dashboard_endpoints_decode_into_typed_schemas() {
    let api = HttpApi::new(format!("{}/", common::spawn_server().await));

    let stats = api.admin_stats().await.unwrap();
    let clients = api.admin_clients().await.unwrap();
    assert_eq!(stats.clients, clients.len() as i64);
    assert_eq!(clients[2].status, ClientStatus::Delayed);

    let project = api.client_dashboard().await.unwrap();
    assert_eq!(project.client_name, "Client User");
    assert_eq!(project.timeline.len(), 3);
}

#[tokio::test]
async fn closed_port_is_a_transport_error() {
    let api = HttpApi::new(common::closed_port_url().await);

    let err = api
        .login(&LoginRequest::new("admin", "admin123"))
        .await
        .unwrap_err();
    assert!(err.is_transport(), "{err:?}");

    let err = api.admin_stats().await.unwrap_err();
    assert!(matches!(err, FetchError::Transport(_)));
}

#[tokio::test]
async fn non_json_endpoint_is_a_status_error_not_transport() {
    let base = common::spawn_server().await;
    let api = HttpApi::new(format!("{base}/missing"));

    let err = api.admin_stats().await.unwrap_err();
    assert_eq!(
        err,
        FetchError::Status {
            status: 404,
            message: None
        }
    );
}

#[tokio::test]
async fn host_without_login_route_yields_parse_error() {
    let base = common::spawn_server().await;
    let api = HttpApi::new(format!("{base}/static"));

    let err = api
        .login(&LoginRequest::new("admin", "admin123"))
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::Parse(_)), "{err:?}");
}
