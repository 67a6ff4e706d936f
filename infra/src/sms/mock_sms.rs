//! Mock SMS Service Implementation
//!
//! A mock implementation of the SMS service for development and testing.
//! Messages are logged (and optionally printed) instead of sent, and kept in
//! memory so tests can read them back.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{info, warn};
use uuid::Uuid;
use xerxes_shared::phone::{format_phone_number, is_valid_e164, mask_phone_number, DEFAULT_COUNTRY_CODE};

use super::sms_service::SmsService;
use crate::InfrastructureError;

/// A message accepted by the mock provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentSms {
    /// Normalized destination
    pub to: String,
    pub message: String,
    pub message_id: String,
}

/// Mock SMS service
///
/// Clones share the message log and the failure switch.
#[derive(Clone)]
pub struct MockSmsService {
    message_count: Arc<AtomicU64>,
    sent: Arc<Mutex<Vec<SentSms>>>,
    simulate_failure: Arc<AtomicBool>,
    console_output: bool,
    country_code: String,
}

impl MockSmsService {
    pub fn new() -> Self {
        Self::with_options(true, false)
    }

    pub fn with_options(console_output: bool, simulate_failure: bool) -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            sent: Arc::new(Mutex::new(Vec::new())),
            simulate_failure: Arc::new(AtomicBool::new(simulate_failure)),
            console_output,
            country_code: DEFAULT_COUNTRY_CODE.to_string(),
        }
    }

    /// Use `country_code` for bare national numbers
    pub fn with_country_code(mut self, country_code: impl Into<String>) -> Self {
        self.country_code = country_code.into();
        self
    }

    pub fn get_message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }

    pub fn set_simulate_failure(&self, simulate: bool) {
        self.simulate_failure.store(simulate, Ordering::SeqCst);
    }

    /// Every message accepted so far, oldest first
    pub async fn sent_messages(&self) -> Vec<SentSms> {
        self.sent.lock().await.clone()
    }

    /// Most recent message sent to the normalized form of `phone_number`
    pub async fn last_message_to(&self, phone_number: &str) -> Option<SentSms> {
        let to = format_phone_number(phone_number, &self.country_code);
        self.sent
            .lock()
            .await
            .iter()
            .rev()
            .find(|sms| sms.to == to)
            .cloned()
    }
}

impl Default for MockSmsService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SmsService for MockSmsService {
    async fn send_sms(&self, phone_number: &str, message: &str) -> Result<String, InfrastructureError> {
        let to = format_phone_number(phone_number, &self.country_code);
        let masked_phone = mask_phone_number(&to);

        if !is_valid_e164(&to) {
            return Err(InfrastructureError::Sms(format!(
                "Invalid phone number format: {}",
                masked_phone
            )));
        }

        if self.simulate_failure.load(Ordering::SeqCst) {
            warn!("Mock SMS service simulating failure for phone: {}", masked_phone);
            return Err(InfrastructureError::Sms(
                "Simulated SMS sending failure".to_string(),
            ));
        }

        let message_id = format!("mock_{}", Uuid::new_v4());
        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;

        if self.console_output {
            // Console output for development - show full message
            println!("\n{}", "=".repeat(60));
            println!("MOCK SMS SERVICE - MESSAGE #{}", count);
            println!("{}", "=".repeat(60));
            println!("To: {}", to);
            println!("Message ID: {}", message_id);
            println!("Content: {}", message);
            println!("{}\n", "=".repeat(60));
        }

        info!(
            target: "sms_service",
            provider = "mock",
            phone = %masked_phone,
            message_id = %message_id,
            message_length = message.len(),
            "SMS sent successfully (mock)"
        );

        self.sent.lock().await.push(SentSms {
            to,
            message: message.to_string(),
            message_id: message_id.clone(),
        });

        Ok(message_id)
    }

    fn provider_name(&self) -> &str {
        "Mock"
    }

    async fn is_available(&self) -> bool {
        !self.simulate_failure.load(Ordering::SeqCst)
    }
}
