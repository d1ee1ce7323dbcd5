use crate::gateway::{ApiClient, ApiError};
use crate::model::{
    DashboardStats, Product, ProductAnalytics, RevenuePoint, SalesReport, TopSellingProduct,
};
use crate::reports::DateRange;
use tracing::{debug, instrument};

/// Client for the read-only `/analytics` endpoints.
#[derive(Clone)]
pub struct AnalyticsClient {
    api: ApiClient,
}

impl AnalyticsClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    #[instrument(skip(self))]
    pub async fn dashboard(&self) -> Result<DashboardStats, ApiError> {
        debug!("Sending request");
        self.api.get("/analytics/dashboard").await
    }

    #[instrument(skip(self))]
    pub async fn low_stock(&self) -> Result<Vec<Product>, ApiError> {
        debug!("Sending request");
        self.api.get("/analytics/products/low-stock").await
    }

    #[instrument(skip(self))]
    pub async fn top_selling(&self, limit: u32) -> Result<Vec<TopSellingProduct>, ApiError> {
        debug!("Sending request");
        self.api
            .get_with_query(
                "/analytics/products/top-selling",
                vec![("limit".to_string(), limit.to_string())],
            )
            .await
    }

    #[instrument(skip(self))]
    pub async fn sales_report(&self, range: &DateRange) -> Result<SalesReport, ApiError> {
        debug!("Sending request");
        self.api
            .get_with_query("/analytics/sales/report", range.to_query())
            .await
    }

    #[instrument(skip(self))]
    pub async fn revenue(&self, range: &DateRange) -> Result<Vec<RevenuePoint>, ApiError> {
        debug!("Sending request");
        self.api
            .get_with_query("/analytics/revenue", range.to_query())
            .await
    }

    #[instrument(skip(self))]
    pub async fn products(&self) -> Result<ProductAnalytics, ApiError> {
        debug!("Sending request");
        self.api.get("/analytics/products").await
    }
}
