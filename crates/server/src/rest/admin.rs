use axum::{extract::State, Json};
use shared_types::{ClientRecord, DashboardStats};
use std::sync::Arc;

use crate::portfolio::Portfolio;

// ---------------------------------------------------------------------------
// GET /api/admin/stats
// ---------------------------------------------------------------------------

/// Headline numbers for the admin overview.
#[utoipa::path(
    get,
    path = "/api/admin/stats",
    responses(
        (status = 200, description = "Agency statistics", body = DashboardStats)
    ),
    tag = "admin"
)]
#[tracing::instrument(skip(portfolio))]
pub async fn get_admin_stats(State(portfolio): State<Arc<Portfolio>>) -> Json<DashboardStats> {
    Json(portfolio.stats())
}

// ---------------------------------------------------------------------------
// GET /api/admin/clients
// ---------------------------------------------------------------------------

/// The full client roster, in display order.
#[utoipa::path(
    get,
    path = "/api/admin/clients",
    responses(
        (status = 200, description = "Client roster", body = Vec<ClientRecord>)
    ),
    tag = "admin"
)]
#[tracing::instrument(skip(portfolio))]
pub async fn list_admin_clients(
    State(portfolio): State<Arc<Portfolio>>,
) -> Json<Vec<ClientRecord>> {
    Json(portfolio.clients().to_vec())
}
