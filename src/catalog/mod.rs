//! # Catalog
//!
//! The product listing shown by the products view and the sales terminal.
//!
//! [`Catalog`] keeps the last fetched listing in a `watch` channel so every
//! view sees the same snapshot; it is refreshed after each successful sale
//! and each product edit. [`ProductEditor`] performs the admin-only writes.

mod editor;
mod filter;

pub use editor::ProductEditor;
pub use filter::ProductFilter;

use crate::clients::{ProductClient, ResourceApi};
use crate::gateway::ApiError;
use crate::model::{CategoryCount, Product, ProductId};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{info, instrument};

#[derive(Clone)]
pub struct Catalog {
    client: ProductClient,
    listing: Arc<watch::Sender<Vec<Product>>>,
}

impl Catalog {
    pub fn new(client: ProductClient) -> Self {
        let (sender, _) = watch::channel(Vec::new());
        Self {
            client,
            listing: Arc::new(sender),
        }
    }

    pub fn client(&self) -> &ProductClient {
        &self.client
    }

    /// Re-fetches the full listing and publishes it.
    #[instrument(skip(self))]
    pub async fn refresh(&self) -> Result<usize, ApiError> {
        let products = self.client.list().await?;
        let count = products.len();
        self.listing.send_replace(products);
        info!(count, "Catalog refreshed");
        Ok(count)
    }

    /// The last fetched listing.
    pub fn products(&self) -> Vec<Product> {
        self.listing.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Vec<Product>> {
        self.listing.subscribe()
    }

    pub fn find(&self, id: ProductId) -> Option<Product> {
        self.listing.borrow().iter().find(|p| p.id == id).cloned()
    }

    /// Case-insensitive name search over the cached listing.
    pub fn search_local(&self, term: &str) -> Vec<Product> {
        let term = term.trim().to_lowercase();
        self.listing
            .borrow()
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&term))
            .cloned()
            .collect()
    }

    pub fn filter_local(&self, filter: &ProductFilter) -> Vec<Product> {
        self.listing
            .borrow()
            .iter()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect()
    }

    pub fn low_stock(&self) -> Vec<Product> {
        self.listing
            .borrow()
            .iter()
            .filter(|p| p.is_low_stock())
            .cloned()
            .collect()
    }

    /// Server-side filtered query. Does not touch the cached listing.
    pub async fn query(&self, filter: &ProductFilter) -> Result<Vec<Product>, ApiError> {
        self.client.search(filter).await
    }

    pub async fn categories(&self) -> Result<Vec<CategoryCount>, ApiError> {
        self.client.categories().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::mock::MockTransport;
    use crate::gateway::{ApiClient, Method};
    use crate::session::SessionContext;
    use serde_json::json;

    fn catalog(mock: &MockTransport) -> Catalog {
        let api = ApiClient::new(Arc::new(mock.clone()), SessionContext::new());
        Catalog::new(ProductClient::new(api))
    }

    #[tokio::test]
    async fn refresh_publishes_listing() {
        let mock = MockTransport::new();
        mock.expect(Method::Get, "/products/").return_json(
            200,
            json!([
                {"id": 1, "name": "Oat Milk", "category": "Dairy", "price": 3.99,
                 "stock_quantity": 2, "low_stock_threshold": 5},
                {"id": 2, "name": "Rye Bread", "category": null, "price": 4.5,
                 "stock_quantity": 12},
            ]),
        );
        let catalog = catalog(&mock);
        let mut watcher = catalog.subscribe();

        assert_eq!(catalog.refresh().await, Ok(2));

        assert!(watcher.has_changed().unwrap());
        assert_eq!(watcher.borrow_and_update().len(), 2);
        assert_eq!(catalog.search_local("MILK").len(), 1);
        assert_eq!(catalog.low_stock().len(), 1);
        assert_eq!(catalog.find(ProductId(2)).unwrap().category, "");
        mock.verify();
    }

    #[tokio::test]
    async fn query_sends_filter_params() {
        let mock = MockTransport::new();
        mock.expect(Method::Get, "/products/").return_json(200, json!([]));
        mock.expect(Method::Get, "/products/categories").return_json(
            200,
            json!({"categories": [{"name": "Dairy", "count": 4}]}),
        );
        let catalog = catalog(&mock);

        let filter = ProductFilter::new().search("milk").low_stock_only();
        catalog.query(&filter).await.unwrap();
        let categories = catalog.categories().await.unwrap();

        let sent = &mock.requests()[0];
        assert_eq!(sent.query_value("search"), Some("milk"));
        assert_eq!(sent.query_value("low_stock_only"), Some("true"));
        assert_eq!(sent.query_value("category"), None);
        assert_eq!(categories[0].name, "Dairy");
        assert_eq!(categories[0].count, 4);
        mock.verify();
    }
}
