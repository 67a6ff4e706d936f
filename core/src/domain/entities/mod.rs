//! Domain entities representing core business objects.

pub mod receipt;
pub mod token;
pub mod user;
pub mod verification_code;

// Re-export commonly used types
pub use receipt::{Receipt, ReceiptCreation, ReceiptItem, Store};
pub use token::{AuthToken, Claims, ACCESS_TOKEN_EXPIRY_SECONDS, JWT_ISSUER, TOKEN_TYPE};
pub use user::User;
pub use verification_code::{generate_code, is_well_formed, CODE_LENGTH};
