use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::OnceLock;
use std::time::Instant;

use crate::state::AppState;

static STARTED: OnceLock<Instant> = OnceLock::new();

/// Mark backend startup. Later calls keep the first instant.
pub fn record_start_time() {
    STARTED.get_or_init(Instant::now);
}

/// Liveness report, including how much demo data was seeded.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub uptime_seconds: u64,
    pub version: String,
    pub accounts: usize,
    pub clients: usize,
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Backend is up", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let uptime_seconds = STARTED.get().map_or(0, |t| t.elapsed().as_secs());

    Json(HealthResponse {
        status: "ok".to_string(),
        uptime_seconds,
        version: env!("CARGO_PKG_VERSION").to_string(),
        accounts: state.accounts.len(),
        clients: state.portfolio.clients().len(),
    })
}
