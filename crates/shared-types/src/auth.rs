use crate::session::Role;
use serde::{Deserialize, Serialize};

/// Inline message when the server rejects a login without saying why.
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Inline message when the server is unreachable and the local fallback
/// accounts do not match either.
pub const FALLBACK_LOGIN_FAILED: &str = "Login failed. Check backend or credentials.";

/// Accounts accepted locally when `/api/login` cannot be reached.
pub const FALLBACK_ACCOUNTS: &[(&str, &str, Role)] = &[
    ("admin", "admin123", Role::Admin),
    ("client", "client123", Role::Client),
];

/// Username/password pair typed into the login form. Never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Match against [`FALLBACK_ACCOUNTS`]. Comparison is exact.
    pub fn fallback_role(&self) -> Option<Role> {
        FALLBACK_ACCOUNTS
            .iter()
            .find(|(user, pass, _)| *user == self.username && *pass == self.password)
            .map(|(_, _, role)| *role)
    }
}

/// Body of `POST /api/login`, returned for both success and rejection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct LoginResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl LoginResponse {
    pub fn accepted(role: Role) -> Self {
        Self {
            success: true,
            role: Some(role.as_str().to_string()),
            redirect: Some(role.dashboard_path().to_string()),
            message: None,
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            role: None,
            redirect: None,
            message: Some(message.into()),
        }
    }
}
