//! # Mock Transport
//!
//! Scripted [`Transport`] for testing clients and the cart engine without a
//! backend.
//!
//! Queue expectations, hand the mock to an
//! [`ApiClient`](crate::gateway::ApiClient), then call [`MockTransport::verify`].
//! Each request consumes the oldest expectation with the same method and path,
//! so concurrent requests need not arrive in queue order.
//!
//! ```ignore
//! let mock = MockTransport::new();
//! mock.expect(Method::Get, "/products/").return_json(200, json!([]));
//!
//! let api = ApiClient::new(Arc::new(mock.clone()), SessionContext::new());
//! // ... exercise the client ...
//! mock.verify();
//! ```

use crate::gateway::{ApiError, ApiRequest, Method, RawResponse, Transport};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::oneshot;

enum Reply {
    Respond(RawResponse),
    Fail(ApiError),
}

struct Expectation {
    method: Method,
    path: String,
    reply: Reply,
    gate: Option<oneshot::Receiver<()>>,
}

#[derive(Default)]
struct MockState {
    expectations: Mutex<VecDeque<Expectation>>,
    requests: Mutex<Vec<ApiRequest>>,
    unexpected: Mutex<Vec<String>>,
}

/// A transport that answers from a queue of expectations.
///
/// Unexpected requests fail with [`ApiError::Transport`] instead of panicking,
/// so a stray call inside a spawned task cannot hang a test; [`verify`]
/// reports them.
///
/// [`verify`]: MockTransport::verify
#[derive(Clone, Default)]
pub struct MockTransport {
    state: Arc<MockState>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects a request with the given method and path.
    pub fn expect(&self, method: Method, path: impl Into<String>) -> ExpectationBuilder {
        ExpectationBuilder {
            state: self.state.clone(),
            method,
            path: path.into(),
            gate: None,
        }
    }

    /// Every request received so far, in arrival order.
    pub fn requests(&self) -> Vec<ApiRequest> {
        lock(&self.state.requests).clone()
    }

    pub fn requests_to(&self, method: Method, path: &str) -> Vec<ApiRequest> {
        lock(&self.state.requests)
            .iter()
            .filter(|r| r.method == method && r.path == path)
            .cloned()
            .collect()
    }

    pub fn remaining(&self) -> usize {
        lock(&self.state.expectations).len()
    }

    /// Verifies that all expectations were met and nothing unexpected arrived.
    pub fn verify(&self) {
        let unexpected = lock(&self.state.unexpected);
        if !unexpected.is_empty() {
            panic!("Unexpected requests: {:?}", *unexpected);
        }
        let remaining = self.remaining();
        if remaining != 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, ApiError> {
        lock(&self.state.requests).push(request.clone());
        let expectation = {
            let mut queue = lock(&self.state.expectations);
            queue
                .iter()
                .position(|exp| exp.method == request.method && exp.path == request.path)
                .and_then(|index| queue.remove(index))
        };

        let Some(expectation) = expectation else {
            let message = format!("no expectation for {:?} {}", request.method, request.path);
            lock(&self.state.unexpected).push(message.clone());
            return Err(ApiError::Transport(message));
        };

        if let Some(gate) = expectation.gate {
            // A dropped sender releases the request as well.
            let _ = gate.await;
        }

        match expectation.reply {
            Reply::Respond(response) => Ok(response),
            Reply::Fail(error) => Err(error),
        }
    }
}

/// Builder returned by [`MockTransport::expect`].
pub struct ExpectationBuilder {
    state: Arc<MockState>,
    method: Method,
    path: String,
    gate: Option<oneshot::Receiver<()>>,
}

impl ExpectationBuilder {
    /// Holds the response until `gate` fires, keeping the request in flight.
    pub fn wait_for(mut self, gate: oneshot::Receiver<()>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn return_json(self, status: u16, body: Value) {
        self.push(Reply::Respond(RawResponse::json(status, &body)));
    }

    pub fn return_status(self, status: u16) {
        self.push(Reply::Respond(RawResponse::new(status, "")));
    }

    pub fn return_error(self, error: ApiError) {
        self.push(Reply::Fail(error));
    }

    fn push(self, reply: Reply) {
        lock(&self.state.expectations).push_back(Expectation {
            method: self.method,
            path: self.path,
            reply,
            gate: self.gate,
        });
    }
}
