//! Route guard for the views of the terminal.

use crate::session::capability::{allows, Capability};
use crate::session::SessionState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Login,
    Register,
    Dashboard,
    Products,
    Sales,
    Reports,
    Admin,
}

impl View {
    pub const ALL: [View; 7] = [
        View::Login,
        View::Register,
        View::Dashboard,
        View::Products,
        View::Sales,
        View::Reports,
        View::Admin,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            View::Login => "/login",
            View::Register => "/register",
            View::Dashboard => "/",
            View::Products => "/products",
            View::Sales => "/sales",
            View::Reports => "/reports",
            View::Admin => "/admin",
        }
    }

    pub fn from_path(path: &str) -> Option<View> {
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };
        View::ALL.into_iter().find(|view| view.path() == path)
    }

    /// `None` for the public views.
    pub fn required_capability(&self) -> Option<Capability> {
        match self {
            View::Login | View::Register => None,
            View::Dashboard | View::Products | View::Sales => Some(Capability::UseTerminal),
            View::Reports => Some(Capability::ViewReports),
            View::Admin => Some(Capability::ViewAdmin),
        }
    }
}

/// Outcome of guarding a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// Session still resolving; show a loading indicator.
    Wait,
    Render(View),
    Redirect(View),
}

/// Decides what to show for `view` given the current session.
///
/// Protected views wait while the session resolves, send signed-out or
/// expired sessions to the login view, and send users lacking the capability
/// back to the dashboard.
pub fn guard(view: View, session: &SessionState) -> Navigation {
    let Some(capability) = view.required_capability() else {
        return Navigation::Render(view);
    };

    match session {
        SessionState::Resolving => Navigation::Wait,
        SessionState::Anonymous | SessionState::Expired => Navigation::Redirect(View::Login),
        SessionState::Authenticated(user) if allows(Some(user), capability) => {
            Navigation::Render(view)
        }
        SessionState::Authenticated(_) => Navigation::Redirect(View::Dashboard),
    }
}
