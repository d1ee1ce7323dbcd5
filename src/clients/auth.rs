use crate::gateway::{ApiClient, ApiError};
use crate::model::{Registration, User};
use serde::de::IgnoredAny;
use tracing::{debug, instrument};

/// Client for `/auth`. Session state itself is handled by
/// [`AuthSession`](crate::session::AuthSession).
#[derive(Clone)]
pub struct AuthClient {
    api: ApiClient,
}

impl AuthClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Form-encoded credential login; the backend answers with a session cookie.
    #[instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &str) -> Result<(), ApiError> {
        debug!("Sending request");
        let form = vec![
            ("username".to_string(), email.to_string()),
            ("password".to_string(), password.to_string()),
        ];
        self.api
            .post_form::<IgnoredAny>("/auth/login", form)
            .await
            .map(|_| ())
    }

    #[instrument(skip(self, registration))]
    pub async fn register(&self, registration: &Registration) -> Result<(), ApiError> {
        debug!("Sending request");
        self.api
            .post_json::<_, IgnoredAny>("/auth/register", registration)
            .await
            .map(|_| ())
    }

    #[instrument(skip(self))]
    pub async fn logout(&self) -> Result<(), ApiError> {
        debug!("Sending request");
        self.api
            .post_empty::<IgnoredAny>("/auth/logout")
            .await
            .map(|_| ())
    }

    #[instrument(skip(self))]
    pub async fn me(&self) -> Result<User, ApiError> {
        debug!("Sending request");
        self.api.get("/auth/me").await
    }
}
