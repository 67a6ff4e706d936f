//! Token service module for JWT management
//!
//! Issues HS256-signed access tokens after a successful verification and
//! validates them on authenticated requests. Tokens are stateless and never
//! persisted.

mod config;
mod service;


pub use config::TokenServiceConfig;
pub use service::TokenService;
