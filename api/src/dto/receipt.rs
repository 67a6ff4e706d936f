use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use validator::Validate;
use xerxes_core::domain::entities::{ReceiptCreation, ReceiptItem};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ReceiptItemRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "item name is required"))]
    pub name: String,

    #[validate(range(min = 1, message = "quantity must be positive"))]
    pub quantity: i32,

    #[serde(default)]
    pub price: f64,
}

/// Body of `POST /receipts`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateReceiptRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "store_id is required"))]
    pub store_id: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "at least one item is required"), nested)]
    pub items: Vec<ReceiptItemRequest>,

    #[serde(default)]
    pub subtotal: f64,

    #[serde(default)]
    pub tax: f64,

    #[serde(default)]
    pub total: f64,

    #[serde(default)]
    pub metadata: HashMap<String, String>,
}

impl From<CreateReceiptRequest> for ReceiptCreation {
    fn from(request: CreateReceiptRequest) -> Self {
        ReceiptCreation {
            store_id: request.store_id,
            items: request
                .items
                .into_iter()
                .map(|item| ReceiptItem::new(item.name, item.quantity, item.price))
                .collect(),
            subtotal: request.subtotal,
            tax: request.tax,
            total: request.total,
            metadata: request.metadata,
        }
    }
}
