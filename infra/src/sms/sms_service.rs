//! SMS Service Interface
//!
//! Defines the trait for SMS providers. Providers receive the destination as
//! the client submitted it and normalize it themselves before dispatch.

use async_trait::async_trait;

use crate::InfrastructureError;

/// SMS provider abstraction
#[async_trait]
pub trait SmsService: Send + Sync {
    /// Send a text message, returning the provider's message ID
    async fn send_sms(&self, phone_number: &str, message: &str) -> Result<String, InfrastructureError>;

    /// Human-readable provider name for logs
    fn provider_name(&self) -> &str;

    /// Check whether the provider can currently accept messages
    async fn is_available(&self) -> bool {
        true
    }
}
