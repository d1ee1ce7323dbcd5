use crate::gateway::ApiError;
use crate::model::ProductId;
use thiserror::Error;

/// Errors that can occur while building or checking out a cart.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    #[error("Out of stock: {name}")]
    OutOfStock { product_id: ProductId, name: String },

    #[error("Not enough stock for product {product_id}: requested {requested}, available {ceiling}")]
    InsufficientStock {
        product_id: ProductId,
        requested: u32,
        ceiling: u32,
    },

    #[error("Product {0} is not in the cart")]
    NotInCart(ProductId),

    #[error("Cart is empty")]
    EmptyCart,

    #[error("A checkout is already in progress")]
    CheckoutInProgress,

    #[error("Failed to complete sale: {0}")]
    Submission(#[from] ApiError),

    #[error("Cart engine closed")]
    EngineClosed,

    #[error("Cart engine dropped response channel")]
    EngineDropped,
}

impl CartError {
    /// Rejections the user can fix by changing the cart.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            CartError::OutOfStock { .. }
                | CartError::InsufficientStock { .. }
                | CartError::NotInCart(_)
                | CartError::EmptyCart
        )
    }
}
