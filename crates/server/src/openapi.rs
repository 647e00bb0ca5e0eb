use axum::Router;
use shared_types::{
    AppError, AppErrorKind, ClientDashboardData, ClientRecord, ClientStatus, DashboardStats,
    DocumentKind, DocumentRecord, LoginRequest, LoginResponse, Role, TimelineEntry,
    TimelineStatus,
};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::health;
use crate::rest;
use crate::state::AppState;

/// OpenAPI documentation for the demo backend.
#[derive(OpenApi)]
#[openapi(
    paths(
        rest::login,
        rest::get_admin_stats,
        rest::list_admin_clients,
        rest::get_client_dashboard,
        health::health_check,
    ),
    components(schemas(
        AppError,
        AppErrorKind,
        LoginRequest,
        LoginResponse,
        Role,
        DashboardStats,
        ClientRecord,
        ClientStatus,
        ClientDashboardData,
        DocumentRecord,
        DocumentKind,
        TimelineEntry,
        TimelineStatus,
        health::HealthResponse,
    )),
    tags(
        (name = "auth", description = "Demo credential check"),
        (name = "admin", description = "Agency-wide dashboard data"),
        (name = "client", description = "Client project dashboard data"),
        (name = "health", description = "Liveness"),
    )
)]
pub struct ApiDoc;

/// REST routes plus `/health` and the Scalar docs UI at `/docs`, with state
/// applied so the result can be merged into the Dioxus router.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .merge(rest::api_router())
        .route("/health", axum::routing::get(health::health_check))
        .with_state(state)
        .merge(Scalar::with_url("/docs", ApiDoc::openapi()))
}
