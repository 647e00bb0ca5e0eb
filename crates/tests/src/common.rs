use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use server::state::AppState;
use tower::ServiceExt;

/// The demo backend router with freshly seeded state.
pub fn test_app() -> Router {
    let state = AppState::seeded().expect("Failed to seed demo state");
    server::openapi::api_router(state)
}

/// Serve [`test_app`] on an ephemeral loopback port and return its base URL.
pub async fn spawn_server() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind loopback listener");
    let addr = listener.local_addr().expect("Listener has no address");
    let app = test_app();

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Test server failed");
    });

    format!("http://{addr}")
}

/// A loopback URL with nothing listening on it.
pub async fn closed_port_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind loopback listener");
    let addr = listener.local_addr().expect("Listener has no address");
    drop(listener);
    format!("http://{addr}")
}

/// POST a JSON body.
pub async fn post_json(app: &Router, uri: &str, body: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    send(app, req).await
}

/// GET a route.
pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    send(app, req).await
}

/// Send a request through the router and parse the response.
async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(req)
        .await
        .expect("Failed to send request");

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

    (status, value)
}
