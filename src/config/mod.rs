use once_cell::sync::Lazy;
use std::env;

/// Default token lifetime: 360000 seconds (100 hours).
const DEFAULT_TOKEN_TTL_SECS: i64 = 360_000;

const DEFAULT_PORT: u16 = 5000;

#[derive(Clone)]
pub struct AppConfig {
    pub port: u16,
    pub security: SecurityConfig,
    pub github: GithubConfig,
}

#[derive(Clone)]
pub struct SecurityConfig {
    /// Shared secret for signing bearer tokens. Loaded once at startup,
    /// never logged and never serialized into a response.
    pub token_secret: String,
    pub token_ttl_secs: i64,
}

#[derive(Clone)]
pub struct GithubConfig {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("DEVLINK_PORT")
                .ok()
                .or_else(|| env::var("PORT").ok())
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            security: SecurityConfig {
                token_secret: env::var("JWT_SECRET")
                    .unwrap_or_else(|_| "devlink-dev-secret".to_string()),
                token_ttl_secs: env::var("JWT_TTL_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(DEFAULT_TOKEN_TTL_SECS),
            },
            github: GithubConfig {
                client_id: env::var("GITHUB_CLIENT_ID").ok(),
                client_secret: env::var("GITHUB_CLIENT_SECRET").ok(),
            },
        }
    }
}

impl std::fmt::Debug for SecurityConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecurityConfig")
            .field("token_secret", &"<redacted>")
            .field("token_ttl_secs", &self.token_ttl_secs)
            .finish()
    }
}

impl std::fmt::Debug for GithubConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GithubConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &self.client_secret.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

// Global singleton config - initialized once at startup
pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

// Convenience function for accessing config
pub fn config() -> &'static AppConfig {
    &CONFIG
}
