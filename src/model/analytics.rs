//! Read-only aggregates served under `/analytics`.
//!
//! The backend owns these shapes and adds fields over time, so every field is
//! defaulted and [`DashboardStats`] keeps whatever it does not recognise.

use crate::model::ProductId;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// `GET /analytics/dashboard`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DashboardStats {
    #[serde(default)]
    pub total_products: u64,
    #[serde(default)]
    pub total_sales: u64,
    #[serde(default, with = "rust_decimal::serde::float")]
    pub total_revenue: Decimal,
    #[serde(default)]
    pub low_stock_count: u64,
    #[serde(flatten)]
    pub other: BTreeMap<String, Value>,
}

/// `GET /analytics/sales/report`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SalesReport {
    #[serde(default, with = "rust_decimal::serde::float")]
    pub total_sales: Decimal,
    #[serde(default)]
    pub count: u64,
    #[serde(default, with = "rust_decimal::serde::float")]
    pub average_sale: Decimal,
}

/// One bucket of `GET /analytics/revenue`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RevenuePoint {
    pub date: String,
    #[serde(default, with = "rust_decimal::serde::float")]
    pub revenue: Decimal,
    #[serde(default)]
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CategoryBreakdown {
    pub category: String,
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub total_stock: u64,
    #[serde(default, with = "rust_decimal::serde::float")]
    pub total_value: Decimal,
}

/// `GET /analytics/products`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProductAnalytics {
    #[serde(default, deserialize_with = "crate::model::null_as_default")]
    pub categories: Vec<CategoryBreakdown>,
}

/// One entry of `GET /analytics/products/top-selling`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TopSellingProduct {
    #[serde(alias = "product_id")]
    pub id: ProductId,
    pub name: String,
    #[serde(default, alias = "total_sold", alias = "total_quantity")]
    pub quantity_sold: u64,
    #[serde(default, with = "rust_decimal::serde::float")]
    pub revenue: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn dashboard_keeps_unknown_counters() {
        let stats: DashboardStats = serde_json::from_value(json!({
            "total_products": 40,
            "total_revenue": 1520.75,
            "pending_orders": 3,
        }))
        .unwrap();

        assert_eq!(stats.total_products, 40);
        assert_eq!(stats.total_sales, 0);
        assert_eq!(stats.total_revenue, Decimal::new(152075, 2));
        assert_eq!(stats.other.get("pending_orders"), Some(&json!(3)));
    }

    #[test]
    fn top_selling_accepts_backend_aliases() {
        let top: TopSellingProduct = serde_json::from_value(json!({
            "product_id": 9,
            "name": "Oat Milk",
            "total_sold": 31,
        }))
        .unwrap();
        assert_eq!(top.id, ProductId(9));
        assert_eq!(top.quantity_sold, 31);
    }
}
