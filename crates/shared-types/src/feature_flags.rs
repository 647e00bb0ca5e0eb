use serde::{Deserialize, Serialize};

fn enabled() -> bool {
    true
}

/// Feature flags controlling the demo conveniences.
///
/// Loaded from `config.toml` at server startup and exposed to clients via a
/// server function. Both flags default to `true`, so a missing or partial
/// config file keeps the demo behaviour (mock data on failure, quick-access
/// buttons on the login screen).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct FeatureFlags {
    /// Substitute the fixed demo dataset when a dashboard load fails.
    #[serde(default = "enabled")]
    pub demo_fallback: bool,
    /// Show the credential-free quick-access buttons on the login screen.
    #[serde(default = "enabled")]
    pub quick_access: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            demo_fallback: true,
            quick_access: true,
        }
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub features: FeatureFlags,
}
