//! Unit tests for the core trait adapter

use std::sync::Arc;

use xerxes_core::services::verification::SmsServiceTrait;

use crate::sms::{MockSmsService, SmsServiceAdapter};

#[tokio::test]
async fn test_adapter_forwards_messages() {
    let mock = MockSmsService::with_options(false, false);
    let adapter = SmsServiceAdapter::new(Arc::new(mock.clone()));

    let message_id = adapter.send_sms("5551234567", "hello").await.unwrap();

    assert_eq!(adapter.provider_name(), "Mock");
    assert_eq!(mock.sent_messages().await[0].message_id, message_id);
}

#[tokio::test]
async fn test_adapter_maps_errors_to_strings() {
    let mock = MockSmsService::with_options(false, true);
    let adapter = SmsServiceAdapter::new(Arc::new(mock));

    let err = adapter.send_sms("5551234567", "hello").await.unwrap_err();
    assert!(err.contains("Simulated SMS sending failure"));
    assert!(!adapter.is_available().await);
}
