use crate::cart::message::{CartRequest, CartSnapshot, CheckoutReceipt, Reply};
use crate::cart::CartError;
use crate::model::{Product, ProductId};
use rust_decimal::Decimal;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

/// Cloneable handle to a running [`CartEngine`](crate::cart::CartEngine).
///
/// Dropping the last handle stops the engine.
#[derive(Clone)]
pub struct CartHandle {
    sender: mpsc::Sender<CartRequest>,
}

impl CartHandle {
    pub(crate) fn new(sender: mpsc::Sender<CartRequest>) -> Self {
        Self { sender }
    }

    /// Adds one unit of `product`. Returns the line's new quantity.
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub async fn add_item(&self, product: Product) -> Result<u32, CartError> {
        self.request(|respond_to| CartRequest::Add {
            product,
            respond_to,
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn update_quantity(
        &self,
        product_id: ProductId,
        quantity: u32,
    ) -> Result<(), CartError> {
        self.request(|respond_to| CartRequest::UpdateQuantity {
            product_id,
            quantity,
            respond_to,
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn remove_item(&self, product_id: ProductId) -> Result<(), CartError> {
        self.request(|respond_to| CartRequest::Remove {
            product_id,
            respond_to,
        })
        .await
    }

    pub async fn snapshot(&self) -> Result<CartSnapshot, CartError> {
        self.request(|respond_to| CartRequest::Snapshot { respond_to })
            .await
    }

    pub async fn total(&self) -> Result<Decimal, CartError> {
        Ok(self.snapshot().await?.total)
    }

    /// Submits the cart as a sale. Blank customer names are sent as none.
    ///
    /// On success the cart is empty and the catalog has been refreshed; on
    /// failure the cart is exactly as it was.
    #[instrument(skip(self))]
    pub async fn checkout(&self, customer_name: Option<&str>) -> Result<CheckoutReceipt, CartError> {
        debug!("Sending checkout to cart engine");
        let customer_name = customer_name.map(str::to_string);
        self.request(|respond_to| CartRequest::Checkout {
            customer_name,
            respond_to,
        })
        .await
    }

    async fn request<T>(
        &self,
        make: impl FnOnce(Reply<T>) -> CartRequest,
    ) -> Result<T, CartError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(make(respond_to))
            .await
            .map_err(|_| CartError::EngineClosed)?;
        response.await.map_err(|_| CartError::EngineDropped)?
    }
}
