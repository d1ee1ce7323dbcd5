use crate::clients::ResourceApi;
use crate::gateway::{ApiClient, ApiError};
use crate::model::{Customer, CustomerAnalytics};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for `/customers`.
#[derive(Clone)]
pub struct CustomerClient {
    api: ApiClient,
}

impl CustomerClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    #[instrument(skip(self))]
    pub async fn analytics(&self) -> Result<CustomerAnalytics, ApiError> {
        debug!("Sending request");
        self.api.get("/customers/analytics").await
    }
}

#[async_trait]
impl ResourceApi for CustomerClient {
    type Item = Customer;
    type Id = u64;

    const COLLECTION: &'static str = "/customers/";

    fn api(&self) -> &ApiClient {
        &self.api
    }
}
