//! Value objects representing immutable domain concepts.

pub mod auth_response;
pub mod verification_response;

// Re-export commonly used types
pub use auth_response::AuthResponse;
pub use verification_response::VerificationResponse;
