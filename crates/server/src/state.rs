use axum::extract::FromRef;
use shared_types::AppError;
use std::sync::Arc;

use crate::accounts::AccountStore;
use crate::portfolio::Portfolio;

/// Shared application state passed to Axum handlers via `State`.
/// Handlers extract the piece they need through `FromRef`.
#[derive(Clone)]
pub struct AppState {
    pub accounts: Arc<AccountStore>,
    pub portfolio: Arc<Portfolio>,
}

impl AppState {
    pub fn new(accounts: AccountStore, portfolio: Portfolio) -> Self {
        Self {
            accounts: Arc::new(accounts),
            portfolio: Arc::new(portfolio),
        }
    }

    /// State backed by the seeded demo accounts and portfolio.
    pub fn seeded() -> Result<Self, AppError> {
        Ok(Self::new(AccountStore::seeded()?, Portfolio::seeded()))
    }
}

impl FromRef<AppState> for Arc<AccountStore> {
    fn from_ref(state: &AppState) -> Self {
        state.accounts.clone()
    }
}

impl FromRef<AppState> for Arc<Portfolio> {
    fn from_ref(state: &AppState) -> Self {
        state.portfolio.clone()
    }
}
