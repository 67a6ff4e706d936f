//! Shared setup for the API integration tests

#![allow(dead_code)]

use std::sync::Arc;

use actix_web::web;
use xerxes_api::AppState;
use xerxes_core::repositories::KeyValueStore;
use xerxes_infra::cache::InMemoryStore;
use xerxes_infra::sms::{MockSmsService, SmsServiceAdapter};
use xerxes_shared::AuthConfig;

pub const PHONE: &str = "5551234567";

pub type TestState = AppState<InMemoryStore, SmsServiceAdapter>;

pub struct TestContext {
    pub store: InMemoryStore,
    pub sms: MockSmsService,
    pub state: web::Data<TestState>,
}

pub fn test_context() -> TestContext {
    let store = InMemoryStore::new();
    let sms = MockSmsService::with_options(false, false);
    let adapter = SmsServiceAdapter::new(Arc::new(sms.clone()));
    let state = web::Data::new(AppState::new(
        Arc::new(store.clone()),
        Arc::new(adapter),
        &AuthConfig::new("integration-test-secret"),
    ));

    TestContext { store, sms, state }
}

/// The code currently stored for `phone`, read straight from the store
pub async fn stored_code(store: &InMemoryStore, phone: &str) -> Option<String> {
    store
        .get(&format!("verification:{}", phone))
        .await
        .expect("in-memory reads do not fail")
}
