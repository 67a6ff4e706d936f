//! Configuration for the data repository

use std::time::Duration;

use xerxes_shared::AuthConfig;

/// Expiry settings applied by the data repository
#[derive(Debug, Clone)]
pub struct DataRepositoryConfig {
    /// Lifetime of a stored verification code
    pub verification_code_ttl: Duration,
    /// Lifetime of a session record after its last write
    pub session_ttl: Duration,
}

impl Default for DataRepositoryConfig {
    fn default() -> Self {
        Self {
            verification_code_ttl: Duration::from_secs(600),
            session_ttl: Duration::from_secs(86_400),
        }
    }
}

impl From<&AuthConfig> for DataRepositoryConfig {
    fn from(config: &AuthConfig) -> Self {
        Self {
            verification_code_ttl: Duration::from_secs(config.verification_code_ttl),
            session_ttl: Duration::from_secs(config.session_ttl),
        }
    }
}
