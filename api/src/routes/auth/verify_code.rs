use actix_web::{web, HttpResponse};
use validator::Validate;
use xerxes_core::repositories::KeyValueStore;
use xerxes_core::services::verification::SmsServiceTrait;
use xerxes_shared::phone::mask_phone_number;

use crate::dto::VerifyCodeRequest;
use crate::handlers::{handle_domain_error, handle_validation_errors};
use crate::routes::AppState;

/// Handler for POST /auth/verify
///
/// Checks the code sent to a phone number. The first successful
/// verification for a number creates its user; later ones log the same
/// user in again.
///
/// # Request Body
///
/// ```json
/// { "phone_number": "555-123-4567", "code": "123456" }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "user": {
///         "id": "3f2a...",
///         "phone_number": "555-123-4567",
///         "created_at": "2024-01-01T00:00:00Z",
///         "last_login": "2024-01-01T00:00:00Z",
///         "is_verified": true
///     },
///     "token": {
///         "access_token": "eyJhbGciOiJIUzI1NiIs...",
///         "token_type": "Bearer",
///         "expires_in": 86400,
///         "expires_at": "2024-01-02T00:00:00Z"
///     }
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: missing `phone_number` or `code`, malformed JSON
/// - 401 Unauthorized: wrong, expired or never-sent code
/// - 500 Internal Server Error: the user could not be stored or the token signed
pub async fn verify_code<S, M>(
    state: web::Data<AppState<S, M>>,
    request: web::Json<VerifyCodeRequest>,
) -> HttpResponse
where
    S: KeyValueStore + 'static,
    M: SmsServiceTrait + 'static,
{
    let request = request.into_inner();

    if let Err(errors) = request.validate() {
        log::warn!("Validation failed for verify_code request: {}", errors);
        return handle_validation_errors(&errors);
    }

    let masked = mask_phone_number(&request.phone_number);
    log::info!("Processing verify_code request for phone: {}", masked);

    match state
        .verification_service
        .verify_code_and_login(&request.phone_number, &request.code)
        .await
    {
        Ok(response) => {
            log::info!("User {} logged in with phone: {}", response.user.id, masked);
            HttpResponse::Ok().json(response)
        }
        Err(error) => handle_domain_error(&error),
    }
}
