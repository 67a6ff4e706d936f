//! # Infrastructure Layer
//!
//! Concrete implementations of the storage and notification seams defined by
//! `xerxes_core`:
//!
//! - **Cache**: a Redis client and a process-local store, both exposed
//!   through the core `KeyValueStore` trait
//! - **SMS**: SMS providers (AWS SNS, mock) exposed through the core
//!   `SmsServiceTrait`
//!
//! ## Features
//!
//! - `aws-sns`: Enable the AWS SNS SMS provider (default)

/// Cache module - Redis client and in-memory store
pub mod cache;

/// SMS service module - External SMS providers
pub mod sms;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Redis cache error
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// An operation did not complete within its deadline
    #[error("Timed out: {0}")]
    Timeout(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// SMS service error
    #[error("SMS service error: {0}")]
    Sms(String),
}
