use shared_types::{AppConfig, FeatureFlags};
use std::sync::OnceLock;

static FLAGS: OnceLock<FeatureFlags> = OnceLock::new();

/// Path to the config file, relative to the working directory.
const CONFIG_PATH: &str = "config.toml";

/// Load `.env` from the working directory into the process environment.
/// Variables already set are kept. Call before anything reads the
/// environment, such as [`crate::portfolio::Portfolio::seeded`].
pub fn load_environment() {
    match dotenvy::dotenv() {
        Ok(path) => tracing::info!(path = %path.display(), "loaded environment file"),
        Err(e) if e.not_found() => tracing::debug!("no .env file, using process environment"),
        Err(e) => tracing::warn!("failed to read .env: {e}"),
    }
}

/// Load a specific environment file. Returns whether it was read.
pub fn load_environment_from(path: &std::path::Path) -> bool {
    dotenvy::from_path(path).is_ok()
}

/// Read `config.toml`, parse feature flags, and store them in the global
/// `OnceLock`. Only the first call has effect.
///
/// A missing or unparseable file leaves every flag at its default (on).
pub fn load_feature_flags() {
    FLAGS.get_or_init(|| match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => {
            let flags = parse_flags(&contents);
            tracing::info!(?flags, "feature flags loaded");
            flags
        }
        Err(e) => {
            tracing::warn!("{CONFIG_PATH} not found ({e}), using default feature flags");
            FeatureFlags::default()
        }
    });
}

fn parse_flags(contents: &str) -> FeatureFlags {
    match toml::from_str::<AppConfig>(contents) {
        Ok(config) => config.features,
        Err(e) => {
            tracing::warn!("failed to parse {CONFIG_PATH}: {e}, using default feature flags");
            FeatureFlags::default()
        }
    }
}

/// Get the loaded feature flags, or the defaults if
/// `load_feature_flags()` hasn't run.
pub fn feature_flags() -> &'static FeatureFlags {
    static DEFAULT: FeatureFlags = FeatureFlags {
        demo_fallback: true,
        quick_access: true,
    };
    FLAGS.get().unwrap_or(&DEFAULT)
}
