use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: u64,
    pub name: String,
    #[serde(default, deserialize_with = "crate::model::null_as_default")]
    pub email: String,
}

/// Totals from `GET /customers/analytics`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CustomerAnalytics {
    #[serde(default, with = "rust_decimal::serde::float")]
    pub total_sales: Decimal,
    #[serde(default)]
    pub count: u64,
}
