//! Data repository implementation

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};
use xerxes_shared::phone::mask_phone_number;

use crate::domain::entities::{Receipt, User};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::store::KeyValueStore;

use super::config::DataRepositoryConfig;
use super::keys;

/// Domain operations over a [`KeyValueStore`], with JSON-encoded records
pub struct DataRepository<S: KeyValueStore> {
    store: Arc<S>,
    config: DataRepositoryConfig,
}

impl<S: KeyValueStore> DataRepository<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self::with_config(store, DataRepositoryConfig::default())
    }

    pub fn with_config(store: Arc<S>, config: DataRepositoryConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &DataRepositoryConfig {
        &self.config
    }

    /// Store a verification code, replacing any live one for the phone
    pub async fn store_verification_code(&self, phone: &str, code: &str) -> DomainResult<()> {
        self.store
            .set(
                &keys::verification_code(phone),
                code,
                Some(self.config.verification_code_ttl),
            )
            .await
            .map_err(|e| DomainError::storage(format!("failed to store verification code: {}", e)))?;

        debug!(
            phone = %mask_phone_number(phone),
            ttl_secs = self.config.verification_code_ttl.as_secs(),
            "Stored verification code"
        );
        Ok(())
    }

    pub async fn get_verification_code(&self, phone: &str) -> DomainResult<Option<String>> {
        self.store
            .get(&keys::verification_code(phone))
            .await
            .map_err(|e| DomainError::storage(format!("failed to get verification code: {}", e)))
    }

    pub async fn clear_verification_code(&self, phone: &str) -> DomainResult<()> {
        self.store
            .delete(&keys::verification_code(phone))
            .await
            .map(|_| ())
            .map_err(|e| DomainError::storage(format!("failed to clear verification code: {}", e)))
    }

    /// Write the user profile (no expiry), then the session copy (session TTL)
    ///
    /// The two writes are not atomic. If the session write fails the profile
    /// has already been updated.
    pub async fn store_user(&self, user: &User) -> DomainResult<()> {
        let data = encode(user)?;

        self.store
            .set(&keys::user_profile(&user.phone_number), &data, None)
            .await
            .map_err(|e| DomainError::storage(format!("failed to store user: {}", e)))?;

        self.store
            .set(
                &keys::user_session(&user.phone_number),
                &data,
                Some(self.config.session_ttl),
            )
            .await
            .map_err(|e| DomainError::storage(format!("failed to store session: {}", e)))?;

        debug!(user_id = %user.id, "Stored user profile and session");
        Ok(())
    }

    /// Look up a user profile by phone number
    ///
    /// A record that no longer deserializes is reported as absent.
    pub async fn get_user(&self, phone: &str) -> DomainResult<Option<User>> {
        let raw = self
            .store
            .get(&keys::user_profile(phone))
            .await
            .map_err(|e| DomainError::storage(format!("failed to get user: {}", e)))?;

        Ok(raw.and_then(|data| {
            decode::<User>(&data)
                .map_err(|e| {
                    warn!(phone = %mask_phone_number(phone), error = %e, "Discarding unreadable user profile");
                })
                .ok()
        }))
    }

    pub async fn get_session(&self, phone: &str) -> DomainResult<Option<User>> {
        let raw = self
            .store
            .get(&keys::user_session(phone))
            .await
            .map_err(|e| DomainError::storage(format!("failed to get session: {}", e)))?;

        Ok(raw.and_then(|data| decode::<User>(&data).ok()))
    }

    /// Write the receipt, then index it under its owner
    pub async fn store_receipt(&self, receipt: &Receipt) -> DomainResult<()> {
        let data = encode(receipt)?;

        self.store
            .set(&keys::receipt(&receipt.id), &data, None)
            .await
            .map_err(|e| DomainError::storage(format!("failed to store receipt: {}", e)))?;

        self.store
            .set_add(&keys::user_receipts(&receipt.user_id), &receipt.id)
            .await
            .map_err(|e| {
                DomainError::storage(format!("failed to add receipt to user list: {}", e))
            })?;

        debug!(receipt_id = %receipt.id, user_id = %receipt.user_id, "Stored receipt");
        Ok(())
    }

    pub async fn get_receipt(&self, id: &str) -> DomainResult<Option<Receipt>> {
        let raw = self
            .store
            .get(&keys::receipt(id))
            .await
            .map_err(|e| DomainError::storage(format!("failed to get receipt: {}", e)))?;

        match raw {
            Some(data) => decode(&data).map(Some).map_err(|e| DomainError::Internal {
                message: format!("failed to decode receipt {}: {}", id, e),
            }),
            None => Ok(None),
        }
    }

    /// All receipts indexed under a user, oldest first
    ///
    /// Best-effort: receipts that are missing, unreadable or fail to load are
    /// skipped. Only a failure to read the index itself is an error.
    pub async fn get_user_receipts(&self, user_id: &str) -> DomainResult<Vec<Receipt>> {
        let ids = self
            .store
            .set_members(&keys::user_receipts(user_id))
            .await
            .map_err(|e| DomainError::storage(format!("failed to get user receipt IDs: {}", e)))?;

        let mut receipts = Vec::with_capacity(ids.len());
        for id in ids {
            match self.get_receipt(&id).await {
                Ok(Some(receipt)) => receipts.push(receipt),
                Ok(None) => {
                    warn!(receipt_id = %id, user_id = %user_id, "Indexed receipt not found, skipping");
                }
                Err(e) => {
                    warn!(receipt_id = %id, user_id = %user_id, error = %e, "Failed to load receipt, skipping");
                }
            }
        }

        receipts.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(receipts)
    }
}

fn encode<T: Serialize>(value: &T) -> DomainResult<String> {
    serde_json::to_string(value).map_err(|e| DomainError::Internal {
        message: format!("failed to encode record: {}", e),
    })
}

fn decode<T: DeserializeOwned>(data: &str) -> Result<T, serde_json::Error> {
    serde_json::from_str(data)
}
