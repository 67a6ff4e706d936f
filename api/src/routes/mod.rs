//! HTTP route handlers and the state they share

pub mod auth;
pub mod health;
pub mod receipts;

use std::sync::Arc;

use xerxes_core::repositories::{DataRepository, KeyValueStore};
use xerxes_core::services::receipt::ReceiptService;
use xerxes_core::services::token::TokenService;
use xerxes_core::services::verification::{SmsServiceTrait, VerificationService};
use xerxes_shared::AuthConfig;

/// Application state that holds shared services
pub struct AppState<S, M>
where
    S: KeyValueStore,
    M: SmsServiceTrait,
{
    pub verification_service: Arc<VerificationService<S, M>>,
    pub receipt_service: Arc<ReceiptService<S>>,
    pub token_service: Arc<TokenService>,
}

impl<S, M> AppState<S, M>
where
    S: KeyValueStore,
    M: SmsServiceTrait,
{
    /// Wire the services over one store and one SMS sender
    pub fn new(store: Arc<S>, sms_service: Arc<M>, auth: &AuthConfig) -> Self {
        let repository = Arc::new(DataRepository::with_config(store, auth.into()));
        let token_service = Arc::new(TokenService::new(auth.into()));
        let verification_service = Arc::new(VerificationService::new(
            repository.clone(),
            sms_service,
            token_service.clone(),
        ));
        let receipt_service = Arc::new(ReceiptService::new(repository));

        Self {
            verification_service,
            receipt_service,
            token_service,
        }
    }
}
