//! Phone verification endpoints
//!
//! - `POST /auth/send-code` sends a one-time code by SMS
//! - `POST /auth/verify` exchanges the code for a user and bearer token

pub mod send_code;
pub mod verify_code;

pub use send_code::send_code;
pub use verify_code::verify_code;
