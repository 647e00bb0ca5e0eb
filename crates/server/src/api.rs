use dioxus::prelude::*;
use serde::de::DeserializeOwned;
use shared_types::{
    AppError, ClientDashboardData, ClientRecord, DashboardStats, FeatureFlags, FetchError,
    LoginRequest, LoginResponse,
};

/// Backend address for native clients when `API_BASE_URL` is not set.
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8080";

/// Get the current feature flags. Needs no session; flags are not sensitive.
#[server]
pub async fn get_feature_flags() -> Result<FeatureFlags, ServerFnError> {
    Ok(crate::config::feature_flags().clone())
}

/// The four remote calls the views depend on.
///
/// Every method makes exactly one attempt. Callers decide what a failure
/// means; nothing here substitutes data.
#[allow(async_fn_in_trait)]
pub trait RemoteApi {
    /// `POST /api/login`. `Ok` means the server answered with a login body,
    /// whether or not it accepted the credentials.
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, FetchError>;

    /// `GET /api/admin/stats`.
    async fn admin_stats(&self) -> Result<DashboardStats, FetchError>;

    /// `GET /api/admin/clients`.
    async fn admin_clients(&self) -> Result<Vec<ClientRecord>, FetchError>;

    /// `GET /api/client/dashboard`.
    async fn client_dashboard(&self) -> Result<ClientDashboardData, FetchError>;
}

/// [`RemoteApi`] over HTTP with `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Resolve the backend address for the current platform: the page origin
    /// in the browser, `API_BASE_URL` (or `.env`) elsewhere.
    pub fn from_env() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let origin = web_sys::window()
                .and_then(|w| w.location().origin().ok())
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
            Self::new(origin)
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = dotenvy::dotenv();
            let base = std::env::var("API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());
            Self::new(base)
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");

        let response = self.client.get(&url).send().await.map_err(transport)?;
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(transport)?;

        if !(200..300).contains(&status) {
            return Err(status_error(status, &body));
        }
        decode(&body)
    }
}

impl RemoteApi for HttpApi {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, FetchError> {
        let url = self.url("/api/login");
        tracing::debug!(%url, username = %request.username, "POST");

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(transport)?;
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(transport)?;

        classify_login(status, &body)
    }

    async fn admin_stats(&self) -> Result<DashboardStats, FetchError> {
        self.get_json("/api/admin/stats").await
    }

    async fn admin_clients(&self) -> Result<Vec<ClientRecord>, FetchError> {
        self.get_json("/api/admin/clients").await
    }

    async fn client_dashboard(&self) -> Result<ClientDashboardData, FetchError> {
        self.get_json("/api/client/dashboard").await
    }
}

fn transport(err: reqwest::Error) -> FetchError {
    FetchError::Transport(err.to_string())
}

/// Build a `Status` error, lifting the message out of an [`AppError`] body
/// when the server sent one.
fn status_error(status: u16, body: &[u8]) -> FetchError {
    let message = serde_json::from_slice::<AppError>(body)
        .ok()
        .map(|e| e.message);
    FetchError::Status { status, message }
}

/// Validate a response body against the endpoint schema.
pub fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, FetchError> {
    serde_json::from_slice(body).map_err(|e| FetchError::Parse(e.to_string()))
}

/// Interpret a completed `/api/login` exchange. A non-2xx status can never
/// count as success, whatever the body claims.
pub fn classify_login(status: u16, body: &[u8]) -> Result<LoginResponse, FetchError> {
    let mut reply: LoginResponse = decode(body)?;
    if !(200..300).contains(&status) {
        reply.success = false;
    }
    Ok(reply)
}
