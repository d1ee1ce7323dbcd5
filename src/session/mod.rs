//! # Session & Access Control
//!
//! - [`SessionContext`]: the observable session state, shared with the gateway
//! - [`AuthSession`]: login, registration, logout and identity resolution
//! - [`capability`]: role checks in one place
//! - [`routes`]: which view to render, wait on, or redirect to

pub mod capability;
mod context;
mod provider;
pub mod routes;

pub use capability::{allows, can_manage_products, can_view_admin, Capability};
pub use context::{SessionContext, SessionState};
pub use provider::AuthSession;
pub use routes::{guard, Navigation, View};
