//! Verification service module for SMS-based authentication
//!
//! This module provides the verification code workflow:
//! - Code generation, storage and delivery by SMS
//! - Code comparison and user upsert on login
//! - Access token issuance for the verified user

mod service;
mod traits;


pub use service::VerificationService;
pub use traits::SmsServiceTrait;
