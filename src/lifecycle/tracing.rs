//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing` subscriber filtered by
//! `RUST_LOG`. Module paths are hidden; spans such as `checkout` or
//! `refresh` show inline instead.
//!
//! ```bash
//! # Lifecycle, sales and catalog refreshes
//! RUST_LOG=info cargo run
//!
//! # Every request with method and path, plus full payloads at entry points
//! RUST_LOG=debug cargo run
//!
//! # Only the cart engine
//! RUST_LOG=inventory_pos::cart=debug cargo run
//! ```
//!
//! A checkout at `info` reads roughly:
//!
//! ```text
//! INFO Cart engine started
//! INFO Added product_id=1 quantity=1 lines=1
//! INFO Submitting sale lines=2 total=23.50
//! INFO checkout:refresh: Catalog refreshed count=12
//! INFO Sale completed total=23.50 sale_id=Some(41)
//! ```
//!
//! Passwords are never recorded; the login and registration spans skip them.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
