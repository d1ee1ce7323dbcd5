use crate::cart::reducer::{CartLine, CartState};
use crate::cart::CartError;
use crate::model::{display_amount, Product, ProductId, Sale, SaleRequest};
use rust_decimal::Decimal;
use tokio::sync::oneshot;

/// One-shot reply channel used by the cart engine.
pub type Reply<T> = oneshot::Sender<Result<T, CartError>>;

/// Requests handled by the cart engine, one at a time, in arrival order.
#[derive(Debug)]
pub enum CartRequest {
    Add {
        product: Product,
        respond_to: Reply<u32>,
    },
    UpdateQuantity {
        product_id: ProductId,
        quantity: u32,
        respond_to: Reply<()>,
    },
    Remove {
        product_id: ProductId,
        respond_to: Reply<()>,
    },
    Snapshot {
        respond_to: Reply<CartSnapshot>,
    },
    Checkout {
        customer_name: Option<String>,
        respond_to: Reply<CheckoutReceipt>,
    },
}

/// Read-only copy of the cart for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct CartSnapshot {
    pub lines: Vec<CartLine>,
    pub total: Decimal,
    pub state: CartState,
    pub checkout_pending: bool,
}

impl CartSnapshot {
    pub fn display_total(&self) -> String {
        display_amount(self.total)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Result of a committed sale.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutReceipt {
    /// What was submitted.
    pub request: SaleRequest,
    pub total: Decimal,
    /// The backend's record of the sale, when it echoed one back.
    pub sale: Option<Sale>,
}
