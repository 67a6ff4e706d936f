//! Business services containing domain logic and use cases.

pub mod receipt;
pub mod token;
pub mod verification;

// Re-export commonly used types
pub use receipt::ReceiptService;
pub use token::{TokenService, TokenServiceConfig};
pub use verification::{SmsServiceTrait, VerificationService};
