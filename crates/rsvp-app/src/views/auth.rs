//! # Auth View State
//!
//! Login status of the administrator. The token itself lives in the
//! session store; this slice only tracks what the views need.

use serde::{Deserialize, Serialize};

/// Authentication status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthState {
    /// A login request is in flight
    pub is_fetching: bool,
    /// A session token is held
    pub is_authenticated: bool,
    /// Last login failure text, empty when none
    pub error_message: String,
    /// Logged-in username, when known
    pub user: Option<String>,
}

impl AuthState {
    /// Startup state derived from whether a token was persisted.
    pub fn from_session(token: Option<&str>, username: Option<String>) -> Self {
        let is_authenticated = token.is_some_and(|token| !token.is_empty());
        Self {
            is_fetching: false,
            is_authenticated,
            error_message: String::new(),
            user: if is_authenticated { username } else { None },
        }
    }
}

/// Login request body.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// Administrator username
    pub username: String,
    /// Administrator password
    pub password: String,
    /// Anti-bot challenge token, if the deployment requires one
    #[serde(rename = "reCAPTCHA", default, skip_serializing_if = "String::is_empty")]
    pub recaptcha: String,
}

impl Credentials {
    /// Credentials without an anti-bot token.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            recaptcha: String::new(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish_non_exhaustive()
    }
}

/// Successful login response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionGrant {
    /// Username echoed by the server
    #[serde(default)]
    pub username: String,
    /// Opaque session token
    #[serde(default)]
    pub auth_token: String,
}
