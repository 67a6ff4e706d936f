//! Receipt entities.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single line on a receipt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceiptItem {
    pub name: String,
    pub quantity: i32,
    pub price: f64,
    /// `quantity * price`, recomputed when a receipt is created
    #[serde(default)]
    pub total: f64,
}

impl ReceiptItem {
    pub fn new(name: impl Into<String>, quantity: i32, price: f64) -> Self {
        let mut item = Self {
            name: name.into(),
            quantity,
            price,
            total: 0.0,
        };
        item.total = item.line_total();
        item
    }

    pub fn line_total(&self) -> f64 {
        f64::from(self.quantity) * self.price
    }
}

/// A stored receipt owned by a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    pub id: String,
    pub user_id: String,
    pub store_id: String,
    pub items: Vec<ReceiptItem>,
    pub subtotal: f64,
    pub tax: f64,
    pub total: f64,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub metadata: HashMap<String, String>,
}

/// Data needed to create a receipt
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReceiptCreation {
    pub store_id: String,
    pub items: Vec<ReceiptItem>,
    pub subtotal: f64,
    pub tax: f64,
    pub total: f64,
    #[serde(default)]
    pub metadata: HashMap<String, String>,
}

/// Store where receipts are issued
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Store {
    pub id: String,
    pub name: String,
    pub address: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_total_is_computed() {
        let item = ReceiptItem::new("Coffee", 3, 2.5);
        assert_eq!(item.total, 7.5);
    }

    #[test]
    fn test_item_total_defaults_when_missing() {
        let item: ReceiptItem =
            serde_json::from_str(r#"{"name":"Tea","quantity":2,"price":1.25}"#).unwrap();
        assert_eq!(item.total, 0.0);
        assert_eq!(item.line_total(), 2.5);
    }

    #[test]
    fn test_empty_metadata_is_omitted() {
        let receipt = Receipt {
            id: "r1".to_string(),
            user_id: "u1".to_string(),
            store_id: "s1".to_string(),
            items: vec![ReceiptItem::new("Bread", 1, 3.0)],
            subtotal: 3.0,
            tax: 0.3,
            total: 3.3,
            created_at: Utc::now(),
            metadata: HashMap::new(),
        };

        let value = serde_json::to_value(&receipt).unwrap();
        assert!(value.get("metadata").is_none());
        assert_eq!(value["items"][0]["total"], 3.0);
    }
}
