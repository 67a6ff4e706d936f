use std::collections::HashMap;

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use validator::ValidationErrors;
use xerxes_core::errors::DomainError;

use crate::dto::ErrorResponse;

/// HTTP status for a domain failure
pub fn status_for(error: &DomainError) -> StatusCode {
    match error {
        DomainError::Validation { .. } => StatusCode::BAD_REQUEST,
        DomainError::Auth(_) => StatusCode::UNAUTHORIZED,
        DomainError::Storage { .. } | DomainError::Delivery { .. } | DomainError::Internal { .. } => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// Handle domain errors and convert them to appropriate HTTP responses
pub fn handle_domain_error(error: &DomainError) -> HttpResponse {
    let status = status_for(error);
    if status.is_server_error() {
        log::error!("Domain Error: {:?}", error);
    } else {
        log::warn!("Request rejected: {}", error);
    }

    ErrorResponse::new(error.error_code(), error.to_string()).to_response(status)
}

/// 400 response listing the failing fields
pub fn handle_validation_errors(errors: &ValidationErrors) -> HttpResponse {
    let details: HashMap<String, serde_json::Value> = errors
        .field_errors()
        .into_iter()
        .map(|(field, errors)| {
            let messages: Vec<String> = errors
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                })
                .collect();
            (field.to_string(), serde_json::json!(messages))
        })
        .collect();

    let message = if details.is_empty() {
        "Request validation failed".to_string()
    } else {
        let mut fields: Vec<&String> = details.keys().collect();
        fields.sort();
        format!(
            "Invalid or missing fields: {}",
            fields.iter().map(|f| f.as_str()).collect::<Vec<_>>().join(", ")
        )
    };

    ErrorResponse::new("VALIDATION_ERROR", message)
        .with_details(details)
        .to_response(StatusCode::BAD_REQUEST)
}

/// Wrapper so domain errors can be returned from extractors and handlers
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        ApiError(error)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        status_for(&self.0)
    }

    fn error_response(&self) -> HttpResponse {
        handle_domain_error(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use xerxes_core::errors::AuthError;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            status_for(&DomainError::validation("phone number is required")),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_for(&DomainError::Auth(AuthError::InvalidCode)),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            status_for(&DomainError::storage("connection refused")),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status_for(&DomainError::Delivery {
                message: "provider down".to_string()
            }),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[actix_web::test]
    async fn test_error_body_uses_domain_code() {
        let response = handle_domain_error(&DomainError::Auth(AuthError::CodeInvalidOrExpired));
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let body = actix_web::body::to_bytes(response.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "VERIFICATION_CODE_EXPIRED");
        assert_eq!(json["message"], "Invalid or expired verification code");
        assert!(json["timestamp"].is_string());
    }
}
