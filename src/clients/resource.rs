use crate::gateway::{ApiClient, ApiError};
use async_trait::async_trait;
use serde::de::{DeserializeOwned, IgnoredAny};
use std::fmt::{Debug, Display};

/// Shared collection operations for resource clients.
///
/// Implementors name their collection path and get `list` and `remove`
/// for free.
#[async_trait]
pub trait ResourceApi: Send + Sync {
    type Item: DeserializeOwned + Send + 'static;
    type Id: Display + Debug + Send + Sync + 'static;

    /// Collection path with trailing slash, e.g. `/products/`.
    const COLLECTION: &'static str;

    /// Access the shared gateway client.
    fn api(&self) -> &ApiClient;

    fn item_path(id: &Self::Id) -> String {
        format!("{}{}", Self::COLLECTION, id)
    }

    /// Fetch the whole collection.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<Self::Item>, ApiError> {
        tracing::debug!("Sending request");
        self.api().get(Self::COLLECTION).await
    }

    /// Delete an item by ID.
    #[tracing::instrument(skip(self))]
    async fn remove(&self, id: Self::Id) -> Result<(), ApiError> {
        tracing::debug!("Sending request");
        self.api()
            .delete::<IgnoredAny>(&Self::item_path(&id))
            .await
            .map(|_| ())
    }
}
