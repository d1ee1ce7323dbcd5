//! # Cart Engine
//!
//! The actor that owns a [`Cart`] for one sales session.
//!
//! Requests are processed sequentially, so no locking is needed around the
//! cart. Checkout is the only request that does I/O: the sale is submitted
//! from a spawned task and its outcome comes back on an internal channel.
//! While that is in flight the engine keeps answering snapshots but rejects
//! mutations and further checkouts with [`CartError::CheckoutInProgress`].

use crate::cart::message::{CartRequest, CartSnapshot, CheckoutReceipt, Reply};
use crate::cart::reducer::Cart;
use crate::cart::{CartError, CartHandle};
use crate::catalog::Catalog;
use crate::clients::SalesClient;
use crate::gateway::ApiError;
use crate::model::{Sale, SaleRequest};
use tokio::sync::mpsc;
use tracing::{debug, info, info_span, warn, Instrument};

/// Dependencies used at checkout, injected when the engine starts.
#[derive(Clone)]
pub struct CheckoutContext {
    pub sales: SalesClient,
    /// Refreshed after every committed sale.
    pub catalog: Catalog,
}

struct PendingCheckout {
    request: SaleRequest,
    respond_to: Reply<CheckoutReceipt>,
}

struct CheckoutOutcome {
    result: Result<Option<Sale>, ApiError>,
}

pub struct CartEngine {
    receiver: mpsc::Receiver<CartRequest>,
    cart: Cart,
    pending: Option<PendingCheckout>,
    outcome_tx: mpsc::Sender<CheckoutOutcome>,
    outcomes: mpsc::Receiver<CheckoutOutcome>,
}

impl CartEngine {
    pub fn new(buffer_size: usize) -> (Self, CartHandle) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let (outcome_tx, outcomes) = mpsc::channel(1);
        let engine = Self {
            receiver,
            cart: Cart::new(),
            pending: None,
            outcome_tx,
            outcomes,
        };
        (engine, CartHandle::new(sender))
    }

    /// Runs the engine until every [`CartHandle`] is dropped.
    ///
    /// A checkout still in flight at that point is awaited before returning.
    pub async fn run(mut self, context: CheckoutContext) {
        info!("Cart engine started");

        loop {
            tokio::select! {
                msg = self.receiver.recv() => match msg {
                    Some(msg) => self.handle(msg, &context),
                    None => break,
                },
                Some(outcome) = self.outcomes.recv() => self.finish_checkout(outcome),
            }
        }

        if self.pending.is_some() {
            debug!("Draining in-flight checkout");
            if let Some(outcome) = self.outcomes.recv().await {
                self.finish_checkout(outcome);
            }
        }

        info!(lines = self.cart.len(), "Cart engine shutdown");
    }

    fn handle(&mut self, msg: CartRequest, context: &CheckoutContext) {
        match msg {
            CartRequest::Snapshot { respond_to } => {
                let _ = respond_to.send(Ok(self.snapshot()));
            }
            CartRequest::Add {
                product,
                respond_to,
            } => {
                debug!(product_id = %product.id, "Add");
                let result = self
                    .ensure_idle()
                    .and_then(|()| self.cart.add_item(&product));
                match &result {
                    Ok(quantity) => {
                        info!(product_id = %product.id, quantity, lines = self.cart.len(), "Added")
                    }
                    Err(e) => warn!(product_id = %product.id, error = %e, "Add rejected"),
                }
                let _ = respond_to.send(result);
            }
            CartRequest::UpdateQuantity {
                product_id,
                quantity,
                respond_to,
            } => {
                debug!(%product_id, quantity, "UpdateQuantity");
                let result = self
                    .ensure_idle()
                    .and_then(|()| self.cart.update_quantity(product_id, quantity));
                if let Err(e) = &result {
                    warn!(%product_id, quantity, error = %e, "Update rejected");
                }
                let _ = respond_to.send(result);
            }
            CartRequest::Remove {
                product_id,
                respond_to,
            } => {
                debug!(%product_id, "Remove");
                let result = self.ensure_idle().map(|()| {
                    if self.cart.remove_item(product_id).is_some() {
                        info!(%product_id, lines = self.cart.len(), "Removed");
                    }
                });
                let _ = respond_to.send(result);
            }
            CartRequest::Checkout {
                customer_name,
                respond_to,
            } => self.start_checkout(customer_name, respond_to, context),
        }
    }

    fn ensure_idle(&self) -> Result<(), CartError> {
        if self.pending.is_some() {
            Err(CartError::CheckoutInProgress)
        } else {
            Ok(())
        }
    }

    fn start_checkout(
        &mut self,
        customer_name: Option<String>,
        respond_to: Reply<CheckoutReceipt>,
        context: &CheckoutContext,
    ) {
        let request = match self
            .ensure_idle()
            .and_then(|()| self.cart.to_sale_request(customer_name.as_deref()))
        {
            Ok(request) => request,
            Err(e) => {
                warn!(error = %e, "Checkout rejected");
                let _ = respond_to.send(Err(e));
                return;
            }
        };

        info!(lines = request.items.len(), total = %request.total(), "Submitting sale");
        let sales = context.sales.clone();
        let catalog = context.catalog.clone();
        let outcome_tx = self.outcome_tx.clone();
        let submitted = request.clone();

        tokio::spawn(
            async move {
                let result = sales.create_sale(&submitted).await;
                if result.is_ok() {
                    if let Err(e) = catalog.refresh().await {
                        warn!(error = %e, "Catalog refresh after sale failed");
                    }
                }
                let _ = outcome_tx.send(CheckoutOutcome { result }).await;
            }
            .instrument(info_span!("checkout")),
        );

        self.pending = Some(PendingCheckout {
            request,
            respond_to,
        });
    }

    fn finish_checkout(&mut self, outcome: CheckoutOutcome) {
        let Some(pending) = self.pending.take() else {
            warn!("Checkout outcome arrived with nothing pending");
            return;
        };

        match outcome.result {
            Ok(sale) => {
                let total = pending.request.total();
                self.cart.clear();
                info!(%total, sale_id = ?sale.as_ref().and_then(|s| s.id), "Sale completed");
                let _ = pending.respond_to.send(Ok(CheckoutReceipt {
                    request: pending.request,
                    total,
                    sale,
                }));
            }
            Err(e) => {
                warn!(error = %e, lines = self.cart.len(), "Sale failed, cart kept");
                let _ = pending.respond_to.send(Err(CartError::Submission(e)));
            }
        }
    }

    fn snapshot(&self) -> CartSnapshot {
        CartSnapshot {
            lines: self.cart.lines().to_vec(),
            total: self.cart.total(),
            state: self.cart.state(),
            checkout_pending: self.pending.is_some(),
        }
    }
}
