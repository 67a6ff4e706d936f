//! Authentication response value object for API responses.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{AuthToken, User};

/// Result of a successful verification: the upserted user and a fresh token
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthResponse {
    pub user: User,
    pub token: AuthToken,
}

impl AuthResponse {
    pub fn new(user: User, token: AuthToken) -> Self {
        Self { user, token }
    }
}
