//! Sale payloads: the write-once [`SaleRequest`] built at checkout and the
//! [`Sale`] records the backend reports back.

use crate::model::ProductId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Name shown for sales recorded without a customer.
pub const WALK_IN_CUSTOMER: &str = "Walk-in Customer";

/// One line of a sale as sent to `POST /sales/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleItem {
    pub product_id: ProductId,
    pub quantity: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub price_at_sale: Decimal,
}

impl SaleItem {
    pub fn subtotal(&self) -> Decimal {
        self.price_at_sale * Decimal::from(self.quantity)
    }
}

/// Body of `POST /sales/`.
///
/// Built from the cart at checkout time and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SaleRequest {
    pub items: Vec<SaleItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
}

impl SaleRequest {
    pub fn new(items: Vec<SaleItem>, customer_name: Option<&str>) -> Self {
        Self {
            items,
            customer_name: normalize_customer_name(customer_name),
        }
    }

    pub fn total(&self) -> Decimal {
        self.items.iter().map(SaleItem::subtotal).sum()
    }
}

/// Blank names are sent as "no customer".
fn normalize_customer_name(name: Option<&str>) -> Option<String> {
    name.map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
}

/// A recorded sale as listed by `GET /sales/`.
///
/// Every field is optional on the wire so that whatever the backend echoes
/// after `POST /sales/` can be decoded without failing a committed sale.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Sale {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,
    #[serde(default, deserialize_with = "crate::model::null_as_default")]
    pub status: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "crate::model::null_as_default")]
    pub items: Vec<SaleItem>,
}

impl Sale {
    pub fn customer_label(&self) -> &str {
        match self.customer_name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => WALK_IN_CUSTOMER,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status.eq_ignore_ascii_case("completed")
    }
}
