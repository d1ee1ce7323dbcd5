//! Typed clients for each backend resource, built on [`ApiClient`](crate::gateway::ApiClient).

mod analytics;
mod auth;
mod customer;
mod product;
mod resource;
mod sales;

pub use analytics::AnalyticsClient;
pub use auth::AuthClient;
pub use customer::CustomerClient;
pub use product::ProductClient;
pub use resource::ResourceApi;
pub use sales::SalesClient;
