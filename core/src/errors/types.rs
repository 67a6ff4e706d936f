//! Authentication error types

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// No code is stored for the phone number, or it has expired
    #[error("Invalid or expired verification code")]
    CodeInvalidOrExpired,

    /// A code is stored but the supplied one does not match
    #[error("Invalid verification code")]
    InvalidCode,

    /// The request carried no bearer token
    #[error("Missing bearer token")]
    MissingToken,

    /// The bearer token failed signature, issuer or expiry checks
    #[error("Invalid or expired token")]
    InvalidToken,
}

impl AuthError {
    pub fn error_code(&self) -> &'static str {
        match self {
            AuthError::CodeInvalidOrExpired => "VERIFICATION_CODE_EXPIRED",
            AuthError::InvalidCode => "INVALID_VERIFICATION_CODE",
            AuthError::MissingToken => "MISSING_TOKEN",
            AuthError::InvalidToken => "INVALID_TOKEN",
        }
    }
}
