use actix_web::{web, HttpResponse};
use validator::Validate;
use xerxes_core::repositories::KeyValueStore;
use xerxes_core::services::verification::SmsServiceTrait;
use xerxes_shared::phone::mask_phone_number;

use crate::dto::SendCodeRequest;
use crate::handlers::{handle_domain_error, handle_validation_errors};
use crate::routes::AppState;

/// Handler for POST /auth/send-code
///
/// Sends a verification code to the specified phone number.
///
/// # Request Body
///
/// ```json
/// { "phone_number": "555-123-4567" }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// { "message": "Verification code sent successfully", "success": true }
/// ```
///
/// ## Errors
/// - 400 Bad Request: missing or empty `phone_number`, malformed JSON
/// - 500 Internal Server Error: the code could not be stored or sent
pub async fn send_code<S, M>(
    state: web::Data<AppState<S, M>>,
    request: web::Json<SendCodeRequest>,
) -> HttpResponse
where
    S: KeyValueStore + 'static,
    M: SmsServiceTrait + 'static,
{
    let request = request.into_inner();

    if let Err(errors) = request.validate() {
        log::warn!("Validation failed for send_code request: {}", errors);
        return handle_validation_errors(&errors);
    }

    log::info!(
        "Processing send_code request for phone: {}",
        mask_phone_number(&request.phone_number)
    );

    match state
        .verification_service
        .send_verification_code(&request.phone_number)
        .await
    {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(error) => handle_domain_error(&error),
    }
}
