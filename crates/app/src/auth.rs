use dioxus::prelude::*;
use server::api::RemoteApi;
use shared_types::{
    AuthError, FetchError, LoginRequest, Role, Session, FALLBACK_LOGIN_FAILED,
    INVALID_CREDENTIALS,
};

use crate::routes::Route;
use crate::session::SessionStore;

/// Where the login flow currently stands.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthPhase {
    Unauthenticated { error: Option<String> },
    Authenticating,
    Authenticated(Role),
}

impl Default for AuthPhase {
    fn default() -> Self {
        AuthPhase::Unauthenticated { error: None }
    }
}

/// Global authentication state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthState {
    pub phase: Signal<AuthPhase>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            phase: Signal::new(AuthPhase::default()),
        }
    }

    pub fn is_authenticating(&self) -> bool {
        matches!(*self.phase.read(), AuthPhase::Authenticating)
    }

    pub fn error(&self) -> Option<String> {
        match &*self.phase.read() {
            AuthPhase::Unauthenticated { error } => error.clone(),
            _ => None,
        }
    }

    pub fn begin(&mut self) {
        self.phase.set(AuthPhase::Authenticating);
    }

    pub fn succeed(&mut self, role: Role) {
        self.phase.set(AuthPhase::Authenticated(role));
    }

    pub fn fail(&mut self, error: &AuthError) {
        self.phase.set(AuthPhase::Unauthenticated {
            error: Some(error.message().to_string()),
        });
    }

    pub fn reset(&mut self) {
        self.phase.set(AuthPhase::default());
    }

    /// Give up on an in-flight attempt whose result will never be applied.
    /// Only `Authenticating` changes; a settled phase is kept.
    pub fn abandon(&mut self) {
        if matches!(*self.phase.peek(), AuthPhase::Authenticating) {
            self.reset();
        }
    }
}

/// Abandon any in-flight login when the calling view unmounts, so the next
/// visit to the form does not find it stuck in `Authenticating`.
pub fn use_abandon_on_unmount(auth: AuthState) {
    use_drop(move || {
        let mut auth = auth;
        auth.abandon();
    });
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

/// A login that produced a session.
#[derive(Debug, Clone, PartialEq)]
pub struct LoginOutcome {
    pub session: Session,
    pub destination: Route,
}

/// Persist a session for `role` and pick where to go next.
fn admit(store: &dyn SessionStore, role: Role, destination: Route) -> LoginOutcome {
    let session = Session::new(role);
    store.set(session);
    LoginOutcome {
        session,
        destination,
    }
}

/// Authenticate against the backend, falling back to the built-in demo
/// accounts when no login answer comes back: the request fails outright, or
/// the reply is not a login body (e.g. an HTML 404 from a static host).
///
/// A session is written to `store` only on `Ok`.
pub async fn login<A: RemoteApi>(
    api: &A,
    store: &dyn SessionStore,
    request: &LoginRequest,
) -> Result<LoginOutcome, AuthError> {
    match api.login(request).await {
        Ok(reply) if reply.success => {
            let Some(role) = reply.role.as_deref().and_then(Role::parse) else {
                tracing::warn!(role = ?reply.role, "login accepted with unknown role");
                return Err(AuthError::Rejected(INVALID_CREDENTIALS.to_string()));
            };
            let destination = reply
                .redirect
                .as_deref()
                .and_then(Route::dashboard_from_path)
                .unwrap_or_else(|| Route::dashboard(role));
            tracing::info!(%role, "login accepted");
            Ok(admit(store, role, destination))
        }
        Ok(reply) => {
            let message = reply
                .message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| INVALID_CREDENTIALS.to_string());
            Err(AuthError::Rejected(message))
        }
        Err(FetchError::Transport(reason) | FetchError::Parse(reason)) => {
            tracing::warn!(%reason, "no login answer from backend, trying local demo accounts");
            match request.fallback_role() {
                Some(role) => Ok(admit(store, role, Route::dashboard(role))),
                None => Err(AuthError::Rejected(FALLBACK_LOGIN_FAILED.to_string())),
            }
        }
        Err(err) => {
            tracing::warn!(%err, "login response unusable");
            Err(AuthError::Rejected(INVALID_CREDENTIALS.to_string()))
        }
    }
}

/// Credential-free entry for the demo: write a session for `role` directly.
pub fn quick_access(store: &dyn SessionStore, role: Role) -> LoginOutcome {
    tracing::info!(%role, "quick access");
    admit(store, role, Route::dashboard(role))
}

/// Drop the stored session, whatever it held, and return the login route.
pub fn sign_out(store: &dyn SessionStore) -> Route {
    store.clear();
    Route::Login {}
}
