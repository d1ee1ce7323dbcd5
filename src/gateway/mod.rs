//! # API Gateway
//!
//! Everything that crosses the network goes through here.
//!
//! - [`Transport`]: the raw request/response seam ([`HttpTransport`] in
//!   production, [`mock::MockTransport`] in tests)
//! - [`ApiClient`]: JSON encoding, status mapping and the 401 hook into the
//!   session
//! - [`ApiError`]: the failure taxonomy shared by every client

mod client;
mod error;
mod http;
pub mod mock;
mod transport;

pub use client::ApiClient;
pub use error::{ApiError, ErrorClass};
pub use http::HttpTransport;
pub use transport::{ApiRequest, Method, RawResponse, RequestBody, Transport};
