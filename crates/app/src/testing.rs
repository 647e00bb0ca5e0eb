//! Scripted [`RemoteApi`] for unit tests.

use server::api::RemoteApi;
use shared_types::{
    ClientDashboardData, ClientRecord, DashboardStats, FetchError, LoginRequest, LoginResponse,
};
use std::cell::Cell;

fn down() -> FetchError {
    FetchError::Transport("connection refused".into())
}

/// Answers every call with a canned result and counts the calls made.
pub struct ScriptedApi {
    login: Result<LoginResponse, FetchError>,
    stats: Result<DashboardStats, FetchError>,
    clients: Result<Vec<ClientRecord>, FetchError>,
    dashboard: Result<ClientDashboardData, FetchError>,
    calls: Cell<usize>,
}

impl Default for ScriptedApi {
    fn default() -> Self {
        Self {
            login: Err(down()),
            stats: Err(down()),
            clients: Err(down()),
            dashboard: Err(down()),
            calls: Cell::new(0),
        }
    }
}

impl ScriptedApi {
    pub fn login_with(mut self, reply: Result<LoginResponse, FetchError>) -> Self {
        self.login = reply;
        self
    }

    pub fn stats_with(mut self, reply: Result<DashboardStats, FetchError>) -> Self {
        self.stats = reply;
        self
    }

    pub fn clients_with(mut self, reply: Result<Vec<ClientRecord>, FetchError>) -> Self {
        self.clients = reply;
        self
    }

    pub fn dashboard_with(mut self, reply: Result<ClientDashboardData, FetchError>) -> Self {
        self.dashboard = reply;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    fn answer<T: Clone>(&self, reply: &Result<T, FetchError>) -> Result<T, FetchError> {
        self.calls.set(self.calls.get() + 1);
        reply.clone()
    }
}

impl RemoteApi for ScriptedApi {
    async fn login(&self, _request: &LoginRequest) -> Result<LoginResponse, FetchError> {
        self.answer(&self.login)
    }

    async fn admin_stats(&self) -> Result<DashboardStats, FetchError> {
        self.answer(&self.stats)
    }

    async fn admin_clients(&self) -> Result<Vec<ClientRecord>, FetchError> {
        self.answer(&self.clients)
    }

    async fn client_dashboard(&self) -> Result<ClientDashboardData, FetchError> {
        self.answer(&self.dashboard)
    }
}
