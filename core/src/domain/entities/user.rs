//! User entity representing a phone-verified account.

use chrono::{DateTime, Utc};
use rand::rngs::OsRng;
use rand::RngCore;
use serde::{Deserialize, Serialize};

/// Number of random bytes behind a user identifier
const USER_ID_BYTES: usize = 16;

/// User entity, keyed by phone number in storage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Opaque identifier (32 lowercase hex characters)
    pub id: String,

    /// Phone number exactly as submitted at verification time
    pub phone_number: String,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp of the user's last successful verification
    pub last_login: DateTime<Utc>,

    /// Whether the user's phone number has been verified
    pub is_verified: bool,
}

impl User {
    /// Creates a user for a phone number that has just passed verification
    pub fn new(phone_number: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Self::generate_id(),
            phone_number: phone_number.into(),
            created_at: now,
            last_login: now,
            is_verified: true,
        }
    }

    /// Generates a fresh random identifier
    pub fn generate_id() -> String {
        let mut bytes = [0u8; USER_ID_BYTES];
        OsRng.fill_bytes(&mut bytes);
        hex::encode(bytes)
    }

    /// Records a successful verification for an existing user
    pub fn record_login(&mut self) {
        self.last_login = Utc::now();
        self.is_verified = true;
    }
}
