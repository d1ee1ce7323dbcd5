use crate::gateway::{ApiError, ApiRequest, Method, RawResponse, RequestBody, Transport};
use crate::session::SessionContext;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

/// Typed access to the backend.
///
/// Wraps a [`Transport`] with JSON encoding, response decoding and status
/// mapping. A 401 from any endpoint marks the shared [`SessionContext`] as
/// expired and is returned as [`ApiError::Unauthorized`]; deciding where to
/// navigate is left to the session owner.
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
    session: SessionContext,
}

impl ApiClient {
    pub fn new(transport: Arc<dyn Transport>, session: SessionContext) -> Self {
        Self { transport, session }
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.execute(ApiRequest::new(Method::Get, path)).await
    }

    pub async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Vec<(String, String)>,
    ) -> Result<T, ApiError> {
        self.execute(ApiRequest::new(Method::Get, path).with_query(query))
            .await
    }

    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = encode(body)?;
        self.execute(ApiRequest::new(Method::Post, path).with_body(RequestBody::Json(body)))
            .await
    }

    pub async fn post_form<T: DeserializeOwned>(
        &self,
        path: &str,
        form: Vec<(String, String)>,
    ) -> Result<T, ApiError> {
        self.execute(ApiRequest::new(Method::Post, path).with_body(RequestBody::Form(form)))
            .await
    }

    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.execute(ApiRequest::new(Method::Post, path)).await
    }

    pub async fn put_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = encode(body)?;
        self.execute(ApiRequest::new(Method::Put, path).with_body(RequestBody::Json(body)))
            .await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.execute(ApiRequest::new(Method::Delete, path)).await
    }

    /// Sends a prepared request and decodes the response.
    pub async fn execute<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, ApiError> {
        let method = request.method;
        let path = request.path.clone();
        debug!(?method, %path, "Sending request");

        let response = self.transport.send(request).await?;
        self.handle_response(response, method, &path)
    }

    fn handle_response<T: DeserializeOwned>(
        &self,
        response: RawResponse,
        method: Method,
        path: &str,
    ) -> Result<T, ApiError> {
        match response.status {
            200..=299 => decode(&response.body),
            401 => {
                if self.session.mark_expired() {
                    warn!(?method, %path, "Session expired");
                }
                Err(ApiError::Unauthorized)
            }
            403 => Err(ApiError::Forbidden(detail_message(&response))),
            404 => Err(ApiError::NotFound(path.to_string())),
            status => {
                let message = detail_message(&response);
                warn!(?method, %path, status, %message, "Request failed");
                Err(ApiError::Api { status, message })
            }
        }
    }
}

fn encode<B: Serialize + ?Sized>(body: &B) -> Result<Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    // 204 and friends carry no body; treat that as JSON null.
    let body = if body.trim().is_empty() { "null" } else { body };
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Pulls a readable message out of an error body.
///
/// The backend reports failures as `{"detail": "..."}`, or as a list of
/// `{"msg": "..."}` entries for rejected input.
fn detail_message(response: &RawResponse) -> String {
    let fallback = || format!("HTTP {}", response.status);
    let Ok(value) = serde_json::from_str::<Value>(&response.body) else {
        let text = response.body.trim();
        return if text.is_empty() { fallback() } else { text.to_string() };
    };

    match value.get("detail") {
        Some(Value::String(detail)) => detail.clone(),
        Some(Value::Array(entries)) => {
            let messages: Vec<&str> = entries
                .iter()
                .filter_map(|entry| entry.get("msg").and_then(Value::as_str))
                .collect();
            if messages.is_empty() {
                fallback()
            } else {
                messages.join("; ")
            }
        }
        Some(other) => other.to_string(),
        None => fallback(),
    }
}
