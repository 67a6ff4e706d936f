//! Token entities for bearer authentication.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::user::User;

/// Access token lifetime (24 hours)
pub const ACCESS_TOKEN_EXPIRY_SECONDS: i64 = 86_400;

/// JWT issuer
pub const JWT_ISSUER: &str = "xerxes";

/// Token type reported to clients
pub const TOKEN_TYPE: &str = "Bearer";

/// Claims structure for JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Identifier of the authenticated user
    pub user_id: String,

    /// Phone number the user verified with
    pub phone_number: String,

    /// Expiration timestamp (unix seconds)
    pub exp: i64,

    /// Issued at timestamp (unix seconds)
    pub iat: i64,

    /// Issuer
    pub iss: String,
}

impl Claims {
    /// Creates claims for `user` valid for `ttl_seconds` from now
    pub fn for_user(user: &User, ttl_seconds: i64) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::seconds(ttl_seconds);

        Self {
            user_id: user.id.clone(),
            phone_number: user.phone_number.clone(),
            exp: expiry.timestamp(),
            iat: now.timestamp(),
            iss: JWT_ISSUER.to_string(),
        }
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }
}

/// Access token handed to a client after successful verification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthToken {
    pub access_token: String,

    /// Always `"Bearer"`
    pub token_type: String,

    /// Lifetime in seconds
    pub expires_in: i64,

    pub expires_at: DateTime<Utc>,

    /// Never issued; omitted from JSON when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
}

impl AuthToken {
    /// Wraps an encoded access token as a bearer token
    pub fn bearer(access_token: String, expires_in: i64, expires_at: DateTime<Utc>) -> Self {
        Self {
            access_token,
            token_type: TOKEN_TYPE.to_string(),
            expires_in,
            expires_at,
            refresh_token: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_for_user() {
        let user = User::new("5551234567");
        let claims = Claims::for_user(&user, ACCESS_TOKEN_EXPIRY_SECONDS);

        assert_eq!(claims.user_id, user.id);
        assert_eq!(claims.phone_number, "5551234567");
        assert_eq!(claims.iss, JWT_ISSUER);
        assert_eq!(claims.exp - claims.iat, ACCESS_TOKEN_EXPIRY_SECONDS);
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_expired_claims() {
        let user = User::new("5551234567");
        let claims = Claims::for_user(&user, -60);
        assert!(claims.is_expired());
    }

    #[test]
    fn test_refresh_token_omitted_when_absent() {
        let token = AuthToken::bearer("abc".to_string(), 86_400, Utc::now());
        let value = serde_json::to_value(&token).unwrap();

        assert_eq!(value["token_type"], "Bearer");
        assert_eq!(value["expires_in"], 86_400);
        assert!(value.get("refresh_token").is_none());
    }
}
