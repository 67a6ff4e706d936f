//! Acknowledgement returned after a verification code has been sent.

use serde::{Deserialize, Serialize};

/// Message sent back when a code was stored and delivered
pub const CODE_SENT_MESSAGE: &str = "Verification code sent successfully";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VerificationResponse {
    pub message: String,
    pub success: bool,
}

impl VerificationResponse {
    /// Successful send acknowledgement
    pub fn sent() -> Self {
        Self {
            message: CODE_SENT_MESSAGE.to_string(),
            success: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sent_serialization() {
        let json = serde_json::to_string(&VerificationResponse::sent()).unwrap();
        assert_eq!(
            json,
            r#"{"message":"Verification code sent successfully","success":true}"#
        );
    }
}
