//! Receipt creation and listing for authenticated users

use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::domain::entities::receipt::{Receipt, ReceiptCreation, ReceiptItem};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{DataRepository, KeyValueStore};

pub struct ReceiptService<S: KeyValueStore> {
    repository: Arc<DataRepository<S>>,
}

impl<S: KeyValueStore> ReceiptService<S> {
    pub fn new(repository: Arc<DataRepository<S>>) -> Self {
        Self { repository }
    }

    /// Create and store a receipt owned by `user_id`
    ///
    /// Line totals are recomputed from quantity and price. Subtotal, tax and
    /// total are stored as submitted.
    pub async fn create_receipt(
        &self,
        user_id: &str,
        creation: ReceiptCreation,
    ) -> DomainResult<Receipt> {
        validate(&creation)?;

        let items = creation
            .items
            .into_iter()
            .map(|item| ReceiptItem::new(item.name, item.quantity, item.price))
            .collect();

        let receipt = Receipt {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            store_id: creation.store_id,
            items,
            subtotal: creation.subtotal,
            tax: creation.tax,
            total: creation.total,
            created_at: Utc::now(),
            metadata: creation.metadata,
        };

        self.repository.store_receipt(&receipt).await?;
        info!(receipt_id = %receipt.id, user_id = %user_id, items = receipt.items.len(), "Created receipt");

        Ok(receipt)
    }

    /// Receipts owned by `user_id`, oldest first
    pub async fn list_receipts(&self, user_id: &str) -> DomainResult<Vec<Receipt>> {
        self.repository.get_user_receipts(user_id).await
    }
}

fn validate(creation: &ReceiptCreation) -> DomainResult<()> {
    if creation.store_id.trim().is_empty() {
        return Err(DomainError::validation("store_id is required"));
    }
    if creation.items.is_empty() {
        return Err(DomainError::validation("at least one item is required"));
    }
    for (index, item) in creation.items.iter().enumerate() {
        if item.name.trim().is_empty() {
            return Err(DomainError::validation(format!("items[{}].name is required", index)));
        }
        if item.quantity <= 0 {
            return Err(DomainError::validation(format!(
                "items[{}].quantity must be positive",
                index
            )));
        }
    }
    Ok(())
}
