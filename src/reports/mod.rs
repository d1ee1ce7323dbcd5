//! # Reports & Dashboards
//!
//! Read-only aggregates, each fetched with its requests issued concurrently.

mod range;

pub use range::DateRange;

use crate::clients::{AnalyticsClient, CustomerClient, ResourceApi, SalesClient};
use crate::gateway::ApiError;
use crate::model::{
    Customer, CustomerAnalytics, DashboardStats, Product, ProductAnalytics, RevenuePoint, Sale,
    SalesReport, TopSellingProduct,
};
use crate::session::{can_view_admin, SessionContext};
use tracing::{info, instrument};

/// The reports view: sales summary, revenue series and, for unbounded
/// ranges, the per-category product breakdown.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportBundle {
    pub sales: SalesReport,
    pub revenue: Vec<RevenuePoint>,
    pub products: Option<ProductAnalytics>,
}

impl ReportBundle {
    #[instrument(skip(analytics))]
    pub async fn load(analytics: &AnalyticsClient, range: &DateRange) -> Result<Self, ApiError> {
        if range.is_unbounded() {
            let (sales, revenue, products) = tokio::try_join!(
                analytics.sales_report(range),
                analytics.revenue(range),
                analytics.products(),
            )?;
            info!(points = revenue.len(), "Reports loaded");
            return Ok(Self {
                sales,
                revenue,
                products: Some(products),
            });
        }

        let (sales, revenue) =
            tokio::try_join!(analytics.sales_report(range), analytics.revenue(range))?;
        info!(points = revenue.len(), "Reports loaded");
        Ok(Self {
            sales,
            revenue,
            products: None,
        })
    }
}

/// The admin view: customer totals, customers and recent sales.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminOverview {
    pub analytics: CustomerAnalytics,
    pub customers: Vec<Customer>,
    pub sales: Vec<Sale>,
}

impl AdminOverview {
    /// Fails with [`ApiError::Forbidden`] for non-admins without any request.
    #[instrument(skip_all)]
    pub async fn load(
        session: &SessionContext,
        customers: &CustomerClient,
        sales: &SalesClient,
    ) -> Result<Self, ApiError> {
        if !can_view_admin(session.current_user().as_ref()) {
            return Err(ApiError::Forbidden(
                "the admin view requires the admin role".to_string(),
            ));
        }

        let (analytics, customer_list, sale_list) =
            tokio::try_join!(customers.analytics(), customers.list(), sales.list())?;
        info!(
            customers = customer_list.len(),
            sales = sale_list.len(),
            "Admin overview loaded"
        );
        Ok(Self {
            analytics,
            customers: customer_list,
            sales: sale_list,
        })
    }
}

/// The dashboard: headline counters, low-stock alerts, best sellers.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    pub stats: DashboardStats,
    pub low_stock: Vec<Product>,
    pub top_selling: Vec<TopSellingProduct>,
}

impl DashboardSummary {
    #[instrument(skip(analytics))]
    pub async fn load(analytics: &AnalyticsClient, top_limit: u32) -> Result<Self, ApiError> {
        let (stats, low_stock, top_selling) = tokio::try_join!(
            analytics.dashboard(),
            analytics.low_stock(),
            analytics.top_selling(top_limit),
        )?;
        Ok(Self {
            stats,
            low_stock,
            top_selling,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::mock::MockTransport;
    use crate::gateway::{ApiClient, Method};
    use crate::model::{Role, User};
    use serde_json::json;
    use std::sync::Arc;

    fn api(mock: &MockTransport) -> ApiClient {
        ApiClient::new(Arc::new(mock.clone()), SessionContext::new())
    }

    #[tokio::test]
    async fn dashboard_loads_all_three_panels() {
        let mock = MockTransport::new();
        mock.expect(Method::Get, "/analytics/dashboard")
            .return_json(200, json!({"total_products": 12, "low_stock_count": 1}));
        mock.expect(Method::Get, "/analytics/products/low-stock").return_json(
            200,
            json!([{"id": 4, "name": "Oat Milk", "price": 3.99, "stock_quantity": 2}]),
        );
        mock.expect(Method::Get, "/analytics/products/top-selling")
            .return_json(200, json!([{"id": 1, "name": "Espresso Beans", "quantity_sold": 30}]));
        let analytics = AnalyticsClient::new(api(&mock));

        let summary = DashboardSummary::load(&analytics, 5).await.unwrap();

        assert_eq!(summary.stats.total_products, 12);
        assert_eq!(summary.low_stock.len(), 1);
        assert_eq!(summary.top_selling[0].quantity_sold, 30);
        let top = mock.requests_to(Method::Get, "/analytics/products/top-selling");
        assert_eq!(top[0].query_value("limit"), Some("5"));
        mock.verify();
    }

    #[tokio::test]
    async fn unbounded_reports_include_product_breakdown() {
        let mock = MockTransport::new();
        mock.expect(Method::Get, "/analytics/sales/report")
            .return_json(200, json!({"total_sales": 99.5, "count": 3}));
        mock.expect(Method::Get, "/analytics/revenue").return_json(200, json!([]));
        mock.expect(Method::Get, "/analytics/products").return_json(
            200,
            json!({"categories": [{"category": "Dairy", "count": 4}]}),
        );
        let analytics = AnalyticsClient::new(api(&mock));

        let bundle = ReportBundle::load(&analytics, &DateRange::all_time())
            .await
            .unwrap();

        assert_eq!(bundle.sales.count, 3);
        assert_eq!(bundle.products.unwrap().categories[0].category, "Dairy");
        assert!(mock.requests()[0].query.is_empty());
        mock.verify();
    }

    #[tokio::test]
    async fn admin_overview_refused_for_employees() {
        let mock = MockTransport::new();
        let api = api(&mock);
        api.session()
            .sign_in(User::new(2, "Bo", "bo@example.com", Role::Employee));

        let result = AdminOverview::load(
            api.session(),
            &CustomerClient::new(api.clone()),
            &SalesClient::new(api.clone()),
        )
        .await;

        assert!(matches!(result, Err(ApiError::Forbidden(_))));
        assert!(mock.requests().is_empty());
    }
}
