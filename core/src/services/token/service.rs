//! Token service implementation

use chrono::{TimeZone, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use tracing::debug;

use crate::domain::entities::token::{AuthToken, Claims};
use crate::domain::entities::user::User;
use crate::errors::{AuthError, DomainError, DomainResult};

use super::config::TokenServiceConfig;

/// Mints and validates bearer tokens
pub struct TokenService {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    pub fn new(config: TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(config.algorithm);
        validation.set_issuer(&[config.issuer.as_str()]);
        validation.validate_exp = true;
        // Tokens are rejected as soon as `exp` passes
        validation.leeway = 0;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Issue an access token for `user`
    pub fn issue(&self, user: &User) -> DomainResult<AuthToken> {
        let mut claims = Claims::for_user(user, self.config.access_token_expiry_seconds);
        claims.iss = self.config.issuer.clone();

        let access_token = self.encode_jwt(&claims)?;
        let expires_at = Utc
            .timestamp_opt(claims.exp, 0)
            .single()
            .ok_or_else(|| DomainError::Internal {
                message: format!("token expiry out of range: {}", claims.exp),
            })?;

        debug!(user_id = %user.id, exp = claims.exp, "Issued access token");

        Ok(AuthToken::bearer(
            access_token,
            self.config.access_token_expiry_seconds,
            expires_at,
        ))
    }

    /// Validate a token's signature, issuer and expiry and return its claims
    pub fn validate(&self, token: &str) -> DomainResult<Claims> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                debug!(error = %e, "Rejected access token");
                DomainError::Auth(AuthError::InvalidToken)
            })
    }

    fn encode_jwt(&self, claims: &Claims) -> DomainResult<String> {
        let header = Header::new(self.config.algorithm);
        encode(&header, claims, &self.encoding_key).map_err(|e| DomainError::Internal {
            message: format!("failed to sign token: {}", e),
        })
    }
}
