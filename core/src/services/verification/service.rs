//! Main verification service implementation

use std::sync::Arc;
use std::time::Duration;

use constant_time_eq::constant_time_eq;
use xerxes_shared::phone::mask_phone_number;

use crate::domain::entities::user::User;
use crate::domain::entities::verification_code::generate_code;
use crate::domain::value_objects::{AuthResponse, VerificationResponse};
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::{DataRepository, KeyValueStore};
use crate::services::token::TokenService;

use super::traits::SmsServiceTrait;

/// Verification service for sending codes and logging users in
pub struct VerificationService<S: KeyValueStore, M: SmsServiceTrait> {
    repository: Arc<DataRepository<S>>,
    sms_service: Arc<M>,
    token_service: Arc<TokenService>,
}

impl<S: KeyValueStore, M: SmsServiceTrait> VerificationService<S, M> {
    pub fn new(
        repository: Arc<DataRepository<S>>,
        sms_service: Arc<M>,
        token_service: Arc<TokenService>,
    ) -> Self {
        Self {
            repository,
            sms_service,
            token_service,
        }
    }

    /// Send a verification code to a phone number
    ///
    /// This method:
    /// 1. Generates a new 6-digit code
    /// 2. Stores it, replacing any previous code for the number
    /// 3. Sends it via SMS
    ///
    /// A delivery failure leaves the stored code in place.
    pub async fn send_verification_code(&self, phone: &str) -> DomainResult<VerificationResponse> {
        if phone.trim().is_empty() {
            return Err(DomainError::validation("phone_number is required"));
        }
        let masked = mask_phone_number(phone);

        let code = generate_code();
        tracing::info!(phone = %masked, event = "otp_generated", "Generated new verification code");

        self.repository
            .store_verification_code(phone, &code)
            .await
            .map_err(|e| {
                tracing::error!(
                    phone = %masked,
                    error = %e,
                    event = "otp_storage_failed",
                    "Failed to store verification code"
                );
                e
            })?;

        let message = self.verification_message(&code);
        let message_id = self
            .sms_service
            .send_sms(phone, &message)
            .await
            .map_err(|e| {
                tracing::error!(
                    phone = %masked,
                    error = %e,
                    event = "otp_delivery_failed",
                    "Failed to send verification code"
                );
                DomainError::Delivery {
                    message: format!("Failed to send SMS: {}", e),
                }
            })?;

        tracing::info!(
            phone = %masked,
            message_id = %message_id,
            event = "otp_sent",
            "Verification code sent"
        );

        Ok(VerificationResponse::sent())
    }

    /// Check a submitted code and log the user in
    ///
    /// On success the user is created or refreshed, a token is issued and the
    /// stored code is cleared. A wrong code leaves the stored code untouched.
    pub async fn verify_code_and_login(&self, phone: &str, code: &str) -> DomainResult<AuthResponse> {
        if phone.trim().is_empty() || code.trim().is_empty() {
            return Err(DomainError::validation("phone_number and code are required"));
        }
        let masked = mask_phone_number(phone);

        let stored_code = match self.repository.get_verification_code(phone).await {
            Ok(Some(stored)) => stored,
            Ok(None) => {
                tracing::info!(phone = %masked, event = "otp_missing", "No live verification code");
                return Err(AuthError::CodeInvalidOrExpired.into());
            }
            Err(e) => {
                tracing::warn!(
                    phone = %masked,
                    error = %e,
                    event = "otp_lookup_failed",
                    "Verification code lookup failed"
                );
                return Err(AuthError::CodeInvalidOrExpired.into());
            }
        };

        if !constant_time_eq(stored_code.as_bytes(), code.as_bytes()) {
            tracing::warn!(phone = %masked, event = "otp_mismatch", "Verification code mismatch");
            return Err(AuthError::InvalidCode.into());
        }

        let user = match self.repository.get_user(phone).await? {
            Some(mut existing) => {
                existing.record_login();
                existing
            }
            None => {
                tracing::info!(phone = %masked, event = "user_created", "Creating user on first login");
                User::new(phone)
            }
        };
        self.repository.store_user(&user).await?;

        let token = self.token_service.issue(&user)?;

        if let Err(e) = self.repository.clear_verification_code(phone).await {
            tracing::warn!(
                phone = %masked,
                error = %e,
                event = "otp_clear_failed",
                "Failed to clear verification code after login"
            );
        }

        tracing::info!(
            phone = %masked,
            user_id = %user.id,
            event = "otp_verified",
            "User logged in"
        );

        Ok(AuthResponse::new(user, token))
    }

    fn verification_message(&self, code: &str) -> String {
        format!(
            "Your verification code is: {}. Valid for {}.",
            code,
            describe_validity(self.repository.config().verification_code_ttl)
        )
    }
}

/// Human wording for a code lifetime: seconds below a minute, otherwise
/// whole minutes rounded up
pub(crate) fn describe_validity(ttl: Duration) -> String {
    let secs = ttl.as_secs();
    if secs < 60 {
        return plural(secs, "second");
    }
    plural((secs + 59) / 60, "minute")
}

fn plural(count: u64, unit: &str) -> String {
    if count == 1 {
        format!("1 {}", unit)
    } else {
        format!("{} {}s", count, unit)
    }
}
