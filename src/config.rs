//! Runtime configuration for the client core.
//!
//! Endpoint routing is a strategy fixed at startup from an explicit
//! [`RuntimeMode`], never inferred from ambient globals: development
//! builds go through the local dev-server proxy, production builds hit
//! the configured base URL directly.

/// Application-level constants
pub const APP_NAME: &str = "Baro";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Resource paths, identical in every environment; only the host differs.
pub const GUIDANCE_PATH: &str = "/api/emergency/guidance";
pub const HOSPITALS_PATH: &str = "/api/emergency/hospitals";

/// Development builds route through the shell dev server, which proxies
/// API paths to the backend.
const DEV_PROXY_BASE: &str = "http://localhost:1420";

/// Environment variable holding the production API base URL.
pub const ENV_API_BASE_URL: &str = "BARO_API_BASE_URL";
/// Environment variable selecting the runtime mode.
pub const ENV_MODE: &str = "BARO_MODE";

/// Which endpoint-routing strategy the build runs under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeMode {
    Development,
    Production,
}

/// Resolved API configuration. Constructed once at startup; clients
/// resolve their endpoints from it once, at construction.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    mode: RuntimeMode,
    base_url: String,
}

impl ApiConfig {
    pub fn new(mode: RuntimeMode, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { mode, base_url }
    }

    /// Shell startup path: mode from `BARO_MODE` (`development`/`dev`,
    /// anything else is production), base URL from `BARO_API_BASE_URL`.
    pub fn from_env() -> Self {
        let mode = match std::env::var(ENV_MODE).as_deref() {
            Ok("development") | Ok("dev") => RuntimeMode::Development,
            _ => RuntimeMode::Production,
        };
        let base_url = std::env::var(ENV_API_BASE_URL).unwrap_or_default();
        tracing::info!(?mode, base_url = %base_url, "API configuration loaded");
        Self::new(mode, base_url)
    }

    pub fn mode(&self) -> RuntimeMode {
        self.mode
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolve a resource path against this configuration.
    pub fn endpoint(&self, path: &str) -> String {
        match self.mode {
            RuntimeMode::Development => format!("{DEV_PROXY_BASE}{path}"),
            RuntimeMode::Production => format!("{}{}", self.base_url, path),
        }
    }
}

/// Default tracing filter: crate debug, everything else info.
pub fn default_log_filter() -> String {
    format!("info,{}=debug", env!("CARGO_PKG_NAME"))
}
