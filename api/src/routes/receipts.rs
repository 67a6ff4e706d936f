//! Receipt endpoints
//!
//! Both routes require the bearer token returned by `/auth/verify`; the
//! receipts belong to the user named in that token.

use actix_web::{web, HttpResponse};
use validator::Validate;
use xerxes_core::repositories::KeyValueStore;
use xerxes_core::services::verification::SmsServiceTrait;

use crate::dto::CreateReceiptRequest;
use crate::handlers::{handle_domain_error, handle_validation_errors};
use crate::middleware::AuthContext;
use crate::routes::AppState;

/// Handler for POST /receipts
///
/// Stores a receipt for the caller. Line totals are recomputed from
/// quantity and price; the header amounts are kept as sent.
pub async fn create_receipt<S, M>(
    auth: AuthContext,
    state: web::Data<AppState<S, M>>,
    request: web::Json<CreateReceiptRequest>,
) -> HttpResponse
where
    S: KeyValueStore + 'static,
    M: SmsServiceTrait + 'static,
{
    let request = request.into_inner();

    if let Err(errors) = request.validate() {
        log::warn!("Validation failed for create_receipt request: {}", errors);
        return handle_validation_errors(&errors);
    }

    match state
        .receipt_service
        .create_receipt(&auth.user_id, request.into())
        .await
    {
        Ok(receipt) => {
            log::info!("Created receipt {} for user {}", receipt.id, auth.user_id);
            HttpResponse::Ok().json(receipt)
        }
        Err(error) => handle_domain_error(&error),
    }
}

/// Handler for GET /receipts
///
/// Lists the caller's receipts, oldest first.
pub async fn list_receipts<S, M>(auth: AuthContext, state: web::Data<AppState<S, M>>) -> HttpResponse
where
    S: KeyValueStore + 'static,
    M: SmsServiceTrait + 'static,
{
    match state.receipt_service.list_receipts(&auth.user_id).await {
        Ok(receipts) => HttpResponse::Ok().json(receipts),
        Err(error) => handle_domain_error(&error),
    }
}
