//! Traits for SMS service integration

use async_trait::async_trait;

/// Trait for SMS service integration
#[async_trait]
pub trait SmsServiceTrait: Send + Sync {
    /// Send `message` to `phone`, returning the provider's message id
    ///
    /// Implementations normalize the destination number before dispatch.
    async fn send_sms(&self, phone: &str, message: &str) -> Result<String, String>;
}
