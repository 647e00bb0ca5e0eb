pub mod admin;
pub mod client;
pub mod login;
pub mod not_found;
mod shell;

use dioxus::prelude::*;
use shared_types::Role;

use admin::AdminDashboard;
use client::ClientDashboard;
use login::Login;
use not_found::NotFound;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Login {},
    #[route("/admin")]
    AdminDashboard {},
    #[route("/client")]
    ClientDashboard {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

impl Route {
    /// Landing page for a role after login.
    pub fn dashboard(role: Role) -> Self {
        match role {
            Role::Admin => Route::AdminDashboard {},
            Role::Client => Route::ClientDashboard {},
        }
    }

    /// Accept a server-supplied redirect only when it names a dashboard.
    pub fn dashboard_from_path(path: &str) -> Option<Self> {
        path.parse::<Route>()
            .ok()
            .filter(|route| matches!(route, Route::AdminDashboard {} | Route::ClientDashboard {}))
    }
}
