//! Application factory
//!
//! Builds the actix-web `App` with its routes, middleware and shared state.
//! `main` calls this once per worker; integration tests call it directly.

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{error, middleware::Logger, web, App, HttpRequest, HttpResponse};
use xerxes_core::repositories::KeyValueStore;
use xerxes_core::services::verification::SmsServiceTrait;
use xerxes_shared::Environment;

use crate::dto::ErrorResponse;
use crate::middleware::create_cors;
use crate::routes::{auth, health, receipts, AppState};

/// Create and configure the application with all dependencies
pub fn create_app<S, M>(
    app_state: web::Data<AppState<S, M>>,
    environment: Environment,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    S: KeyValueStore + 'static,
    M: SmsServiceTrait + 'static,
{
    // The bearer extractor looks the token service up on its own
    let token_service = web::Data::from(app_state.token_service.clone());

    App::new()
        .app_data(app_state)
        .app_data(token_service)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .wrap(create_cors(environment))
        .wrap(Logger::default())
        .route("/health", web::get().to(health::health_check))
        .route("/goodbyeworld", web::get().to(health::goodbye_world))
        .service(
            web::scope("/auth")
                .route("/send-code", web::post().to(auth::send_code::<S, M>))
                .route("/verify", web::post().to(auth::verify_code::<S, M>)),
        )
        .service(
            web::resource("/receipts")
                .route(web::post().to(receipts::create_receipt::<S, M>))
                .route(web::get().to(receipts::list_receipts::<S, M>)),
        )
        .default_service(web::route().to(not_found))
}

/// Malformed or mistyped JSON bodies become 400 with the standard error body
fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    log::warn!("Rejected request body: {}", err);

    let response = ErrorResponse::new("VALIDATION_ERROR", format!("Invalid request body: {}", err))
        .to_response(StatusCode::BAD_REQUEST);
    error::InternalError::from_response(err, response).into()
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    ErrorResponse::new("NOT_FOUND", "The requested resource was not found")
        .to_response(StatusCode::NOT_FOUND)
}
