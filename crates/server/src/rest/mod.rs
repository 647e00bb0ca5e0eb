pub mod admin;
pub mod auth;
pub mod client;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub use admin::*;
pub use auth::*;
pub use client::*;

/// Build the REST router for the endpoints the dashboards call.
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/api/login", post(auth::login))
        .route("/api/admin/stats", get(admin::get_admin_stats))
        .route("/api/admin/clients", get(admin::list_admin_clients))
        .route("/api/client/dashboard", get(client::get_client_dashboard))
}
