//! Shared utilities and common types for the Xerxes server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types loaded from the environment
//! - Phone number utilities (normalization for SMS providers, log masking)

pub mod config;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, Environment,
    AuthConfig, CacheConfig, CacheType, ServerConfig, SmsConfig, SmsProvider,
};
pub use utils::phone;
