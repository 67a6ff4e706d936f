//! Bearer token authentication
//!
//! Handlers that need an authenticated caller take an [`AuthContext`]
//! argument. The extractor reads `Authorization: Bearer <token>`, validates
//! the token with the [`TokenService`] registered as app data and rejects
//! the request with a 401 JSON body when either step fails.

use std::future::{ready, Ready};

use actix_web::{dev::Payload, http::header::AUTHORIZATION, web, FromRequest, HttpRequest};
use xerxes_core::domain::entities::Claims;
use xerxes_core::errors::{AuthError, DomainError};
use xerxes_core::services::token::TokenService;

use crate::handlers::ApiError;

/// Identity of the caller, taken from a validated access token
#[derive(Debug, Clone, PartialEq)]
pub struct AuthContext {
    pub user_id: String,
    pub phone_number: String,
}

impl From<Claims> for AuthContext {
    fn from(claims: Claims) -> Self {
        Self {
            user_id: claims.user_id,
            phone_number: claims.phone_number,
        }
    }
}

impl FromRequest for AuthContext {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(authenticate(req))
    }
}

fn authenticate(req: &HttpRequest) -> Result<AuthContext, ApiError> {
    let token = extract_bearer_token(req).ok_or(DomainError::Auth(AuthError::MissingToken))?;

    let token_service = req
        .app_data::<web::Data<TokenService>>()
        .ok_or_else(|| DomainError::Internal {
            message: "token service is not configured".to_string(),
        })?;

    let claims = token_service.validate(token)?;
    Ok(AuthContext::from(claims))
}

/// Extracts the Bearer token from the Authorization header
fn extract_bearer_token(req: &HttpRequest) -> Option<&str> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}
