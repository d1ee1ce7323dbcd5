use crate::catalog::ProductFilter;
use crate::clients::ResourceApi;
use crate::gateway::{ApiClient, ApiError};
use crate::model::{CategoryCount, CategoryList, Product, ProductDraft, ProductId};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for `/products`.
#[derive(Clone)]
pub struct ProductClient {
    api: ApiClient,
}

impl ProductClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Server-side filtered listing. An empty filter is a plain list.
    #[instrument(skip(self))]
    pub async fn search(&self, filter: &ProductFilter) -> Result<Vec<Product>, ApiError> {
        if filter.is_empty() {
            return self.list().await;
        }
        debug!("Sending request");
        self.api
            .get_with_query(Self::COLLECTION, filter.to_query())
            .await
    }

    #[instrument(skip(self, draft), fields(name = %draft.name))]
    pub async fn create_product(&self, draft: &ProductDraft) -> Result<Product, ApiError> {
        debug!(?draft, "create_product called");
        self.api.post_json(Self::COLLECTION, draft).await
    }

    #[instrument(skip(self, draft))]
    pub async fn update_product(
        &self,
        id: ProductId,
        draft: &ProductDraft,
    ) -> Result<Product, ApiError> {
        debug!(?draft, "update_product called");
        self.api.put_json(&Self::item_path(&id), draft).await
    }

    /// Category names with their product counts.
    #[instrument(skip(self))]
    pub async fn categories(&self) -> Result<Vec<CategoryCount>, ApiError> {
        debug!("Sending request");
        let envelope: CategoryList = self.api.get("/products/categories").await?;
        Ok(envelope.categories)
    }
}

#[async_trait]
impl ResourceApi for ProductClient {
    type Item = Product;
    type Id = ProductId;

    const COLLECTION: &'static str = "/products/";

    fn api(&self) -> &ApiClient {
        &self.api
    }
}
