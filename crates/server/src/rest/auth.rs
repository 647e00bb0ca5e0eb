use axum::{extract::State, http::StatusCode, Json};
use shared_types::{LoginRequest, LoginResponse};
use std::sync::Arc;

use crate::accounts::AccountStore;

// ---------------------------------------------------------------------------
// POST /api/login
// ---------------------------------------------------------------------------

/// Check a username (or e-mail alias) and password against the seeded
/// accounts. Issues no token; the client records the role itself.
#[utoipa::path(
    post,
    path = "/api/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login accepted", body = LoginResponse),
        (status = 401, description = "Incorrect username or password", body = LoginResponse),
        (status = 422, description = "Username or password missing", body = LoginResponse)
    ),
    tag = "auth"
)]
#[tracing::instrument(skip(accounts, payload), fields(username = %payload.username))]
pub async fn login(
    State(accounts): State<Arc<AccountStore>>,
    Json(payload): Json<LoginRequest>,
) -> (StatusCode, Json<LoginResponse>) {
    if payload.username.trim().is_empty() || payload.password.is_empty() {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(LoginResponse::rejected("Username and password are required")),
        );
    }

    match accounts.authenticate(&payload.username, &payload.password) {
        Some(account) => {
            tracing::info!(role = %account.role, "login accepted");
            (StatusCode::OK, Json(LoginResponse::accepted(account.role)))
        }
        None => {
            tracing::info!("login rejected");
            (
                StatusCode::UNAUTHORIZED,
                Json(LoginResponse::rejected("Incorrect username or password")),
            )
        }
    }
}
