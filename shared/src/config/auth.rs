//! Authentication configuration: verification codes, sessions and bearer tokens

use serde::{Deserialize, Serialize};

use super::{env_or, non_blank_env};

const DEFAULT_JWT_SECRET: &str = "xerxes-development-secret-change-me";

/// Verification and token configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Secret key for signing bearer tokens (HS256)
    #[serde(skip_serializing)]
    pub jwt_secret: String,

    /// Token issuer claim
    pub issuer: String,

    /// Lifetime of a verification code in seconds
    pub verification_code_ttl: u64,

    /// Lifetime of a session record in seconds
    pub session_ttl: u64,

    /// Lifetime of an access token in seconds
    pub access_token_ttl: i64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: String::from(DEFAULT_JWT_SECRET),
            issuer: String::from("xerxes"),
            verification_code_ttl: 600,  // 10 minutes
            session_ttl: 86400,          // 24 hours
            access_token_ttl: 86400,     // 24 hours
        }
    }
}

impl AuthConfig {
    /// Create a new configuration with the given signing secret
    pub fn new(jwt_secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            ..Default::default()
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            jwt_secret: non_blank_env("JWT_SECRET").unwrap_or(defaults.jwt_secret),
            issuer: non_blank_env("JWT_ISSUER").unwrap_or(defaults.issuer),
            verification_code_ttl: env_or("VERIFICATION_CODE_TTL_SECS", defaults.verification_code_ttl),
            session_ttl: env_or("SESSION_TTL_SECS", defaults.session_ttl),
            access_token_ttl: env_or("ACCESS_TOKEN_TTL_SECS", defaults.access_token_ttl),
        }
    }

    /// Check if using default secret (security warning); a blank secret
    /// counts as the default
    pub fn is_using_default_secret(&self) -> bool {
        self.jwt_secret == DEFAULT_JWT_SECRET || self.jwt_secret.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_config_default() {
        let config = AuthConfig::default();
        assert_eq!(config.verification_code_ttl, 600);
        assert_eq!(config.session_ttl, 86400);
        assert_eq!(config.access_token_ttl, 86400);
        assert!(config.is_using_default_secret());
    }

    #[test]
    fn test_custom_secret() {
        let config = AuthConfig::new("s3cret");
        assert!(!config.is_using_default_secret());
        assert_eq!(config.issuer, "xerxes");
    }

    #[test]
    fn test_blank_secret_counts_as_default() {
        assert!(AuthConfig::new("").is_using_default_secret());
        assert!(AuthConfig::new("  \t").is_using_default_secret());
    }

    #[test]
    fn test_blank_secret_env_is_treated_as_unset() {
        for blank in ["", "   "] {
            std::env::set_var("JWT_SECRET", blank);
            let config = AuthConfig::from_env();
            assert_eq!(config.jwt_secret, DEFAULT_JWT_SECRET);
            assert!(config.is_using_default_secret());
        }

        std::env::set_var("JWT_SECRET", "real-secret");
        assert!(!AuthConfig::from_env().is_using_default_secret());

        std::env::remove_var("JWT_SECRET");
    }
}
