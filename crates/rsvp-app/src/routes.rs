//! # Routes
//!
//! Client-side screens and the authentication gate in front of the control
//! panel.
//!
//! | Path | Route |
//! |---|---|
//! | `/` | redirects to `/rsvp` |
//! | `/login` | [`Route::Login`] |
//! | `/rsvp`, `/rsvp/{id}` | [`Route::Rsvp`] |
//! | `/control_panel` | [`Route::ControlPanel`] (gated) |

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::views::AuthState;

/// A client-side screen.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Route {
    /// Administrator login
    Login,
    /// Guest RSVP form, optionally for a specific invitation private id
    Rsvp(Option<String>),
    /// Administrative control panel
    ControlPanel,
}

impl Default for Route {
    fn default() -> Self {
        Route::Rsvp(None)
    }
}

impl Route {
    /// Parse a path. Unknown paths yield `None`.
    pub fn parse(path: &str) -> Option<Self> {
        let trimmed = path.trim().trim_end_matches('/');
        let mut segments = trimmed.split('/').filter(|segment| !segment.is_empty());

        match (segments.next(), segments.next(), segments.next()) {
            (None, _, _) => Some(Route::default()),
            (Some("login"), None, _) => Some(Route::Login),
            (Some("control_panel"), None, _) => Some(Route::ControlPanel),
            (Some("rsvp"), None, _) => Some(Route::Rsvp(None)),
            (Some("rsvp"), Some(id), None) => Some(Route::Rsvp(Some(id.to_string()))),
            _ => None,
        }
    }

    /// Path for this route.
    pub fn path(&self) -> String {
        match self {
            Route::Login => "/login".to_string(),
            Route::Rsvp(None) => "/rsvp".to_string(),
            Route::Rsvp(Some(id)) => format!("/rsvp/{id}"),
            Route::ControlPanel => "/control_panel".to_string(),
        }
    }

    /// Whether this route needs an authenticated session.
    pub fn requires_auth(&self) -> bool {
        matches!(self, Route::ControlPanel)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Apply the authentication gate: gated routes resolve to [`Route::Login`]
/// while unauthenticated.
pub fn resolve_route(route: Route, auth: &AuthState) -> Route {
    if route.requires_auth() && !auth.is_authenticated {
        Route::Login
    } else {
        route
    }
}
