use crate::clients::ResourceApi;
use crate::gateway::{ApiClient, ApiError};
use crate::model::{Sale, SaleRequest};
use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, instrument, warn};

/// Client for `/sales`.
#[derive(Clone)]
pub struct SalesClient {
    api: ApiClient,
}

impl SalesClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Records a sale.
    ///
    /// Any 2xx means the sale was committed. The echoed sale is decoded
    /// leniently: `None` if the backend answered with an unexpected shape.
    #[instrument(skip(self, request), fields(items = request.items.len()))]
    pub async fn create_sale(&self, request: &SaleRequest) -> Result<Option<Sale>, ApiError> {
        debug!(?request, "create_sale called");
        let echoed: Value = self.api.post_json(Self::COLLECTION, request).await?;
        match serde_json::from_value(echoed) {
            Ok(sale) => Ok(Some(sale)),
            Err(e) => {
                warn!(error = %e, "Sale committed but response was not a sale record");
                Ok(None)
            }
        }
    }
}

#[async_trait]
impl ResourceApi for SalesClient {
    type Item = Sale;
    type Id = u64;

    const COLLECTION: &'static str = "/sales/";

    fn api(&self) -> &ApiClient {
        &self.api
    }
}
