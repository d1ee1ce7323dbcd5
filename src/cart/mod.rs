//! # Sales Cart
//!
//! - [`Cart`]: the pure reducer (add, update, remove, totals, sale payload)
//! - [`CartEngine`]: the actor that serializes cart requests and runs checkout
//! - [`CartHandle`]: the cloneable client views talk to
//!
//! ```ignore
//! let (engine, cart) = cart::new(32);
//! tokio::spawn(engine.run(CheckoutContext { sales, catalog }));
//!
//! cart.add_item(product).await?;
//! let receipt = cart.checkout(Some("Jane")).await?;
//! ```

pub mod actor;
mod error;
mod handle;
pub mod message;
pub mod reducer;

pub use actor::{CartEngine, CheckoutContext};
pub use error::CartError;
pub use handle::CartHandle;
pub use message::{CartSnapshot, CheckoutReceipt};
pub use reducer::{Cart, CartLine, CartState};

/// Creates an engine and its handle. Spawn the engine with
/// [`CartEngine::run`].
pub fn new(buffer_size: usize) -> (CartEngine, CartHandle) {
    CartEngine::new(buffer_size)
}
