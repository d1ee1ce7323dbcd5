//! # POS Terminal
//!
//! Headless walk through one sales session against a running backend:
//!
//! 1. Resolve the session (optionally logging in with `POS_EMAIL` / `POS_PASSWORD`).
//! 2. Load the catalog.
//! 3. Put the first in-stock product in the cart and show the total.
//! 4. Check out when `POS_CHECKOUT=1`, then shut down.

use inventory_pos::config::PosConfig;
use inventory_pos::lifecycle::{setup_tracing, PosSystem};
use inventory_pos::model::display_amount;
use inventory_pos::session::{guard, Navigation, View};
use std::env;
use tracing::{error, info, info_span, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = PosConfig::from_env().map_err(|e| e.to_string())?;
    let system = PosSystem::new(&config).map_err(|e| e.to_string())?;

    let mut state = system.start().await;
    if !state.is_authenticated() {
        if let (Ok(email), Ok(password)) = (env::var("POS_EMAIL"), env::var("POS_PASSWORD")) {
            match system.session.login(&email, &password).await {
                Ok(user) => {
                    info!(user = %user.name, role = %user.role, "Signed in");
                    if let Err(e) = system.catalog.refresh().await {
                        warn!(error = %e, "Catalog load failed");
                    }
                }
                Err(e) => error!(error = %e, "{}", e.notice()),
            }
            state = system.session.context().state();
        }
    }

    match guard(View::Sales, &state) {
        Navigation::Render(_) => {}
        other => {
            warn!(?other, "Sales view unavailable");
            return system.shutdown().await;
        }
    }

    let span = info_span!("sales_session");
    async {
        let Some(product) = system
            .catalog
            .products()
            .into_iter()
            .find(|p| p.is_in_stock())
        else {
            warn!("No product in stock");
            return;
        };

        if let Err(e) = system.cart.add_item(product).await {
            warn!(error = %e, "Could not add product");
            return;
        }
        match system.cart.snapshot().await {
            Ok(snapshot) => info!(lines = snapshot.lines.len(), total = %snapshot.display_total(), "Cart ready"),
            Err(e) => error!(error = %e, "Cart unavailable"),
        }

        if env::var("POS_CHECKOUT").as_deref() == Ok("1") {
            let customer = env::var("POS_CUSTOMER").ok();
            match system.cart.checkout(customer.as_deref()).await {
                Ok(receipt) => info!(total = %display_amount(receipt.total), "Sale completed"),
                Err(e) => error!(error = %e, "Checkout failed"),
            }
        }
    }
    .instrument(span)
    .await;

    system.shutdown().await
}
