//! # Xerxes Core
//!
//! Core business logic and domain layer for the Xerxes backend.
//! This crate contains domain entities, business services, the key-value
//! repository and its storage seam, and the error types shared by the
//! upper layers.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
