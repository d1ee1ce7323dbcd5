/// Represents a product in the inventory.
///
/// Products are owned by the backend. The client only ever holds a read-only
/// copy fetched through [`ProductClient`](crate::clients::ProductClient) and
/// cached by the [`Catalog`](crate::catalog::Catalog).
///
/// See also:
/// - Create/update payload ([`ProductDraft`])
/// - Category listing ([`CategoryCount`])
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Low-stock threshold the backend applies when none was configured.
pub const DEFAULT_LOW_STOCK_THRESHOLD: u32 = 5;

fn default_low_stock_threshold() -> u32 {
    DEFAULT_LOW_STOCK_THRESHOLD
}

/// Type-safe identifier for Products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(default, deserialize_with = "crate::model::null_as_default")]
    pub category: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub stock_quantity: u32,
    #[serde(default = "default_low_stock_threshold")]
    pub low_stock_threshold: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `id` - Backend identifier
    /// * `name` - Product name
    /// * `price` - Unit price
    /// * `stock_quantity` - Available stock quantity
    ///
    /// The category is left blank and the low-stock threshold takes the
    /// backend default.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Decimal,
        stock_quantity: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: String::new(),
            price,
            stock_quantity,
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
            description: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_low_stock_threshold(mut self, threshold: u32) -> Self {
        self.low_stock_threshold = threshold;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// A product is flagged for restocking once stock drops to its threshold.
    pub fn is_low_stock(&self) -> bool {
        self.stock_quantity <= self.low_stock_threshold
    }

    pub fn is_in_stock(&self) -> bool {
        self.stock_quantity > 0
    }
}

/// Payload for creating or replacing a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub stock_quantity: u32,
    pub low_stock_threshold: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ProductDraft {
    pub fn new(name: impl Into<String>, price: Decimal, stock_quantity: u32) -> Self {
        Self {
            name: name.into(),
            category: String::new(),
            price,
            stock_quantity,
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
            description: None,
        }
    }

    /// Local checks run before anything is sent to the backend.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Product name is required".to_string());
        }
        if self.price.is_sign_negative() {
            return Err(format!("Price cannot be negative: {}", self.price));
        }
        Ok(())
    }
}

impl From<&Product> for ProductDraft {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            category: product.category.clone(),
            price: product.price,
            stock_quantity: product.stock_quantity,
            low_stock_threshold: product.low_stock_threshold,
            description: product.description.clone(),
        }
    }
}

/// One entry of `GET /products/categories`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub name: String,
    #[serde(default)]
    pub count: u64,
}

/// Envelope returned by `GET /products/categories`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CategoryList {
    #[serde(default, deserialize_with = "crate::model::null_as_default")]
    pub categories: Vec<CategoryCount>,
}
