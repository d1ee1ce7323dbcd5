//! # Inventory POS
//!
//! > **Client core for a point-of-sale and inventory terminal.**
//!
//! The terminal talks to a REST backend that owns products, sales, customers
//! and analytics. This crate owns everything on the client side: the session,
//! who may do what, the product catalog, and the sales cart with its checkout
//! flow.
//!
//! ## 🏗️ Design
//!
//! ### One engine per cart
//! The cart lives inside an actor ([`cart::CartEngine`]). Views talk to it
//! through a cloneable [`cart::CartHandle`]; requests are handled one at a
//! time, so there are no locks around cart state. Checkout is submitted from
//! a spawned task and the engine refuses to change the cart or start another
//! checkout until the backend has answered.
//!
//! ### Money is exact
//! Prices and totals are [`rust_decimal::Decimal`]. They are rounded to two
//! places only for display ([`model::display_amount`]).
//!
//! ### One place for role checks
//! [`session::capability`] decides what a user may do; the route guard and
//! the product editor both ask it.
//!
//! ### Observability
//! `tracing` everywhere, set up by [`lifecycle::setup_tracing`].
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. Wire types ([`model`])
//! `serde` structs for products, sales, users, customers and analytics.
//!
//! ### 2. The network edge ([`gateway`])
//! - **Role**: Sends requests, maps statuses to [`gateway::ApiError`], and
//!   marks the session expired on 401.
//! - **Key items**: [`Transport`](gateway::Transport),
//!   [`ApiClient`](gateway::ApiClient), [`MockTransport`](gateway::mock::MockTransport).
//!
//! ### 3. The interface ([`clients`])
//! One typed client per backend resource.
//!
//! ### 4. Session & access ([`session`])
//! - **Key items**: [`AuthSession`](session::AuthSession),
//!   [`guard`](session::guard), [`allows`](session::allows).
//!
//! ### 5. Catalog ([`catalog`]) and cart ([`cart`])
//! The product listing with filters and admin edits; the cart reducer and
//! its engine.
//!
//! ### 6. Reports ([`reports`])
//! Dashboard, reports and admin overviews, each loaded concurrently.
//!
//! ### 7. The orchestrator ([`lifecycle`]) and [`config`]
//! [`PosSystem`](lifecycle::PosSystem) wires every piece to one transport.
//!
//! ## 🚀 Quick Start
//!
//! ```ignore
//! lifecycle::setup_tracing();
//! let system = PosSystem::new(&PosConfig::from_env()?)?;
//! system.start().await;
//!
//! let product = system.catalog.products().remove(0);
//! system.cart.add_item(product).await?;
//! let receipt = system.cart.checkout(Some("Jane")).await?;
//! println!("Charged {}", display_amount(receipt.total));
//!
//! system.shutdown().await?;
//! ```

pub mod cart;
pub mod catalog;
pub mod clients;
pub mod config;
pub mod gateway;
pub mod lifecycle;
pub mod model;
pub mod reports;
pub mod session;
