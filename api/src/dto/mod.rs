//! Request and response bodies for the HTTP layer

pub mod auth;
pub mod error;
pub mod receipt;

pub use auth::{SendCodeRequest, VerifyCodeRequest};
pub use error::ErrorResponse;
pub use receipt::{CreateReceiptRequest, ReceiptItemRequest};
