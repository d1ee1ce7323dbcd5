use crate::clients::AuthClient;
use crate::gateway::ApiError;
use crate::model::{Registration, User};
use crate::session::{SessionContext, SessionState};
use tracing::{debug, info, instrument, warn};

/// Owns the session lifecycle: resolve on startup, login, register, logout.
#[derive(Clone)]
pub struct AuthSession {
    auth: AuthClient,
    context: SessionContext,
}

impl AuthSession {
    pub fn new(auth: AuthClient, context: SessionContext) -> Self {
        Self { auth, context }
    }

    pub fn context(&self) -> &SessionContext {
        &self.context
    }

    pub fn current_user(&self) -> Option<User> {
        self.context.current_user()
    }

    /// Asks the backend who we are. Any failure resolves to anonymous.
    #[instrument(skip(self))]
    pub async fn init(&self) -> SessionState {
        self.context.begin_resolving();
        match self.auth.me().await {
            Ok(user) => {
                info!(user_id = user.id, role = %user.role, "Session resolved");
                self.context.sign_in(user);
            }
            Err(e) => {
                debug!(error = %e, "No active session");
                self.context.sign_out();
            }
        }
        self.context.state()
    }

    /// Submits credentials, then re-resolves the identity from the backend.
    #[instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &str) -> Result<User, ApiError> {
        self.auth.login(email, password).await?;
        match self.init().await {
            SessionState::Authenticated(user) => Ok(user),
            _ => {
                warn!("Login accepted but no session was established");
                Err(ApiError::Unauthorized)
            }
        }
    }

    /// Creates an account. Does not sign in.
    #[instrument(skip(self, registration), fields(email = %registration.email))]
    pub async fn register(&self, registration: &Registration) -> Result<(), ApiError> {
        self.auth.register(registration).await?;
        info!("Account registered");
        Ok(())
    }

    /// Ends the session. Local identity is cleared even if the backend call fails.
    #[instrument(skip(self))]
    pub async fn logout(&self) -> Result<(), ApiError> {
        let result = self.auth.logout().await;
        self.context.sign_out();
        if let Err(e) = &result {
            warn!(error = %e, "Logout request failed; local session cleared anyway");
        }
        result
    }
}
