use crate::catalog::Catalog;
use crate::clients::ResourceApi;
use crate::gateway::ApiError;
use crate::model::{Product, ProductDraft, ProductId};
use crate::session::{can_manage_products, SessionContext};
use tracing::{info, instrument, warn};

/// Admin-only product writes.
///
/// The role check runs before anything goes over the wire, and every
/// successful write re-fetches the catalog.
#[derive(Clone)]
pub struct ProductEditor {
    catalog: Catalog,
    session: SessionContext,
}

impl ProductEditor {
    pub fn new(catalog: Catalog, session: SessionContext) -> Self {
        Self { catalog, session }
    }

    fn authorize(&self) -> Result<(), ApiError> {
        if can_manage_products(self.session.current_user().as_ref()) {
            Ok(())
        } else {
            warn!("Product write rejected: admin role required");
            Err(ApiError::Forbidden(
                "managing products requires the admin role".to_string(),
            ))
        }
    }

    #[instrument(skip(self, draft), fields(name = %draft.name))]
    pub async fn create(&self, draft: &ProductDraft) -> Result<Product, ApiError> {
        self.authorize()?;
        draft.validate().map_err(ApiError::Validation)?;

        let product = self.catalog.client().create_product(draft).await?;
        info!(product_id = %product.id, "Product created");
        self.refresh_after_write().await;
        Ok(product)
    }

    #[instrument(skip(self, draft))]
    pub async fn update(&self, id: ProductId, draft: &ProductDraft) -> Result<Product, ApiError> {
        self.authorize()?;
        draft.validate().map_err(ApiError::Validation)?;

        let product = self.catalog.client().update_product(id, draft).await?;
        info!("Product updated");
        self.refresh_after_write().await;
        Ok(product)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: ProductId) -> Result<(), ApiError> {
        self.authorize()?;

        self.catalog.client().remove(id).await?;
        info!("Product deleted");
        self.refresh_after_write().await;
        Ok(())
    }

    async fn refresh_after_write(&self) {
        if let Err(e) = self.catalog.refresh().await {
            warn!(error = %e, "Catalog refresh after product write failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::ProductClient;
    use crate::gateway::mock::MockTransport;
    use crate::gateway::{ApiClient, Method};
    use crate::model::{Role, User};
    use rust_decimal::Decimal;
    use serde_json::json;
    use std::sync::Arc;

    fn editor(mock: &MockTransport, role: Option<Role>) -> ProductEditor {
        let session = SessionContext::new();
        if let Some(role) = role {
            session.sign_in(User::new(1, "Ada", "ada@example.com", role));
        }
        let api = ApiClient::new(Arc::new(mock.clone()), session.clone());
        ProductEditor::new(Catalog::new(ProductClient::new(api)), session)
    }

    #[tokio::test]
    async fn employees_are_stopped_before_the_network() {
        let mock = MockTransport::new();
        let editor = editor(&mock, Some(Role::Employee));

        let result = editor.delete(ProductId(3)).await;

        assert!(matches!(result, Err(ApiError::Forbidden(_))));
        assert!(mock.requests().is_empty());
    }

    #[tokio::test]
    async fn invalid_drafts_are_rejected_locally() {
        let mock = MockTransport::new();
        let editor = editor(&mock, Some(Role::Admin));

        let draft = ProductDraft::new("  ", Decimal::new(100, 2), 1);
        let result = editor.create(&draft).await;

        assert!(matches!(result, Err(ApiError::Validation(_))));
        assert!(mock.requests().is_empty());
    }

    #[tokio::test]
    async fn admin_update_refreshes_catalog() {
        let mock = MockTransport::new();
        let updated = json!({"id": 3, "name": "Oat Milk", "price": 4.25, "stock_quantity": 9});
        mock.expect(Method::Put, "/products/3").return_json(200, updated.clone());
        mock.expect(Method::Get, "/products/").return_json(200, json!([updated]));
        let editor = editor(&mock, Some(Role::Admin));

        let draft = ProductDraft::new("Oat Milk", Decimal::new(425, 2), 9);
        let product = editor.update(ProductId(3), &draft).await.unwrap();

        assert_eq!(product.price, Decimal::new(425, 2));
        assert_eq!(editor.catalog.products().len(), 1);
        let sent = mock.requests_to(Method::Put, "/products/3");
        assert_eq!(sent[0].json().unwrap()["price"], json!(4.25));
        mock.verify();
    }
}
