use axum::{extract::State, Json};
use shared_types::{AppError, ClientDashboardData};
use std::sync::Arc;

use crate::portfolio::Portfolio;

// ---------------------------------------------------------------------------
// GET /api/client/dashboard
// ---------------------------------------------------------------------------

/// The client's project aggregate: header names, balance, files, milestones.
#[utoipa::path(
    get,
    path = "/api/client/dashboard",
    responses(
        (status = 200, description = "Client project overview", body = ClientDashboardData),
        (status = 404, description = "No active project", body = AppError)
    ),
    tag = "client"
)]
#[tracing::instrument(skip(portfolio))]
pub async fn get_client_dashboard(
    State(portfolio): State<Arc<Portfolio>>,
) -> Result<Json<ClientDashboardData>, AppError> {
    portfolio
        .client_project()
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::not_found("No active project"))
}
