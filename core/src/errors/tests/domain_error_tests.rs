//! Tests for the domain error taxonomy

use crate::errors::{AuthError, DomainError};

#[test]
fn test_auth_error_converts_into_domain_error() {
    let err: DomainError = AuthError::InvalidCode.into();
    assert!(matches!(err, DomainError::Auth(AuthError::InvalidCode)));
    assert_eq!(err.to_string(), "Invalid verification code");
}

#[test]
fn test_error_messages() {
    assert_eq!(
        DomainError::validation("phone_number is required").to_string(),
        "Validation error: phone_number is required"
    );
    assert_eq!(
        DomainError::storage("connection refused").to_string(),
        "Storage error: connection refused"
    );
    assert_eq!(
        DomainError::from(AuthError::CodeInvalidOrExpired).to_string(),
        "Invalid or expired verification code"
    );
}

#[test]
fn test_error_codes() {
    assert_eq!(DomainError::validation("x").error_code(), "VALIDATION_ERROR");
    assert_eq!(DomainError::storage("x").error_code(), "STORAGE_ERROR");
    assert_eq!(
        DomainError::Delivery { message: "x".into() }.error_code(),
        "DELIVERY_ERROR"
    );
    assert_eq!(
        DomainError::Internal { message: "x".into() }.error_code(),
        "INTERNAL_ERROR"
    );
    assert_eq!(
        DomainError::from(AuthError::MissingToken).error_code(),
        "MISSING_TOKEN"
    );
    assert_eq!(
        DomainError::from(AuthError::InvalidToken).error_code(),
        "INVALID_TOKEN"
    );
}
