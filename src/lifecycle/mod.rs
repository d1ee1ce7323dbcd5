//! Wiring and lifecycle of the terminal: building every client, starting the
//! cart engine, tracing setup and shutdown.

pub mod pos_system;
pub mod tracing;

pub use pos_system::*;
pub use tracing::*;
