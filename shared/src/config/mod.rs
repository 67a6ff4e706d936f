//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `auth` - Verification code, session and bearer token settings
//! - `cache` - Key-value store (Redis or in-memory) configuration
//! - `environment` - Environment detection
//! - `server` - HTTP server bind address
//! - `sms` - SMS provider selection and credentials
//!
//! Every section is read from environment variables. A `.env` file in the
//! working directory is loaded first when present.

pub mod auth;
pub mod cache;
pub mod environment;
pub mod server;
pub mod sms;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use auth::AuthConfig;
pub use cache::{CacheConfig, CacheType};
pub use environment::Environment;
pub use server::ServerConfig;
pub use sms::{SmsConfig, SmsProvider};

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Cache configuration
    pub cache: CacheConfig,

    /// SMS provider configuration
    pub sms: SmsConfig,

    /// Verification and token configuration
    pub auth: AuthConfig,
}

impl AppConfig {
    /// Load configuration from environment
    ///
    /// Reads `.env` if present, then every section's variables.
    pub fn from_env() -> Self {
        load_dotenv();

        Self {
            environment: Environment::from_env(),
            server: ServerConfig::from_env(),
            cache: CacheConfig::from_env(),
            sms: SmsConfig::from_env(),
            auth: AuthConfig::from_env(),
        }
    }
}

/// Load `.env` from the working directory into the process environment.
/// Variables already set are left alone.
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

/// Read an environment variable and parse it, falling back to `default`
/// when the variable is unset or malformed.
pub(crate) fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    parse_or(key, std::env::var(key).ok(), default)
}

/// Read an environment variable, treating an empty or all-whitespace value
/// as unset
pub(crate) fn non_blank_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Parse `raw` as the value of `key`; a malformed value is logged and
/// replaced by `default`
pub(crate) fn parse_or<T: std::str::FromStr>(key: &str, raw: Option<String>, default: T) -> T {
    let Some(raw) = raw else {
        return default;
    };

    match raw.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            tracing::warn!(key, value = %raw, "Ignoring malformed configuration value; using default");
            default
        }
    }
}
