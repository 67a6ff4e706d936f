//! SMS Service Trait Adapter
//!
//! Implements the core SmsServiceTrait for any infrastructure SMS provider,
//! bridging the provider implementation with the core domain trait.

use std::sync::Arc;

use async_trait::async_trait;
use xerxes_core::services::verification::SmsServiceTrait;

use crate::sms::sms_service::SmsService;

/// Adapter that implements the core SmsServiceTrait for an SMS provider
#[derive(Clone)]
pub struct SmsServiceAdapter {
    inner: Arc<dyn SmsService>,
}

impl SmsServiceAdapter {
    pub fn new(inner: Arc<dyn SmsService>) -> Self {
        Self { inner }
    }

    pub fn provider_name(&self) -> &str {
        self.inner.provider_name()
    }

    pub async fn is_available(&self) -> bool {
        self.inner.is_available().await
    }
}

#[async_trait]
impl SmsServiceTrait for SmsServiceAdapter {
    async fn send_sms(&self, phone: &str, message: &str) -> Result<String, String> {
        self.inner
            .send_sms(phone, message)
            .await
            .map_err(|e| e.to_string())
    }
}
