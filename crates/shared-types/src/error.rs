use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorization of errors returned by the demo backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum AppErrorKind {
    NotFound,
    InternalError,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::NotFound => write!(f, "NotFound"),
            AppErrorKind::InternalError => write!(f, "InternalError"),
        }
    }
}

/// JSON error body of the demo backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
}

impl AppError {
    fn new(kind: AppErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::NotFound, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::InternalError, message)
    }

    #[cfg_attr(not(feature = "server"), allow(dead_code))]
    fn status_code_u16(&self) -> u16 {
        match self.kind {
            AppErrorKind::NotFound => 404,
            AppErrorKind::InternalError => 500,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}

#[cfg(feature = "server")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = axum::http::StatusCode::from_u16(self.status_code_u16())
            .unwrap_or(axum::http::StatusCode::INTERNAL_SERVER_ERROR);
        (status, axum::Json(self)).into_response()
    }
}

/// Why a remote call produced no usable data.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    /// The request never completed (connection refused, DNS, CORS, ...).
    Transport(String),
    /// The server answered with a non-success status. `message` is taken
    /// from an [`AppError`] body when one is present.
    Status { status: u16, message: Option<String> },
    /// The server answered 2xx but the body did not match the schema.
    Parse(String),
}

impl FetchError {
    pub fn is_transport(&self) -> bool {
        matches!(self, FetchError::Transport(_))
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Transport(reason) => write!(f, "Backend unreachable: {reason}"),
            FetchError::Status {
                status,
                message: Some(message),
            } => write!(f, "Request failed ({status}): {message}"),
            FetchError::Status {
                status,
                message: None,
            } => write!(f, "Request failed ({status})"),
            FetchError::Parse(reason) => write!(f, "Unexpected response: {reason}"),
        }
    }
}

impl std::error::Error for FetchError {}

/// A login attempt that ended without a session. The message is shown inline
/// under the form.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthError {
    Rejected(String),
}

impl AuthError {
    pub fn message(&self) -> &str {
        match self {
            AuthError::Rejected(message) => message,
        }
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for AuthError {}
