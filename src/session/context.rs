use crate::model::User;
use std::sync::Arc;
use tokio::sync::watch;

/// Where the session currently stands.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionState {
    /// The identity check is still in flight; views should wait.
    #[default]
    Resolving,
    Anonymous,
    Authenticated(User),
    /// A request came back 401 while signed in.
    Expired,
}

impl SessionState {
    pub fn user(&self) -> Option<&User> {
        match self {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }

    pub fn is_resolving(&self) -> bool {
        matches!(self, SessionState::Resolving)
    }
}

/// Shared, observable session state.
///
/// Cloned into the [`ApiClient`](crate::gateway::ApiClient) so a 401 anywhere
/// is visible to everything that subscribed.
#[derive(Clone)]
pub struct SessionContext {
    state: Arc<watch::Sender<SessionState>>,
}

impl SessionContext {
    pub fn new() -> Self {
        let (sender, _) = watch::channel(SessionState::Resolving);
        Self {
            state: Arc::new(sender),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    pub fn current_user(&self) -> Option<User> {
        self.state.borrow().user().cloned()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_authenticated()
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    pub(crate) fn begin_resolving(&self) {
        self.state.send_replace(SessionState::Resolving);
    }

    pub(crate) fn sign_in(&self, user: User) {
        self.state.send_replace(SessionState::Authenticated(user));
    }

    pub(crate) fn sign_out(&self) {
        self.state.send_replace(SessionState::Anonymous);
    }

    /// Moves an authenticated session to [`SessionState::Expired`].
    ///
    /// Returns `false` when there was no signed-in user to expire.
    pub fn mark_expired(&self) -> bool {
        self.state.send_if_modified(|state| {
            if state.is_authenticated() {
                *state = SessionState::Expired;
                true
            } else {
                false
            }
        })
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Role;

    #[tokio::test]
    async fn subscribers_see_expiry() {
        let context = SessionContext::new();
        let mut watcher = context.subscribe();
        context.sign_in(User::new(2, "Bo", "bo@example.com", Role::Admin));
        watcher.borrow_and_update();

        assert!(context.mark_expired());
        watcher.changed().await.unwrap();
        assert_eq!(*watcher.borrow(), SessionState::Expired);
    }

    #[test]
    fn expiry_needs_a_signed_in_user() {
        let context = SessionContext::new();
        assert!(!context.mark_expired());
        assert!(context.state().is_resolving());

        context.sign_out();
        assert!(!context.mark_expired());
        assert_eq!(context.state(), SessionState::Anonymous);
    }
}
