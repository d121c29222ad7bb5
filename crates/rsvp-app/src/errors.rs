//! Categorized application errors
//!
//! Provides structured error types that enable:
//! - Classification of every REST outcome (session, input, server, network)
//! - Notice routing: which failures reach the banner and which only the log
//! - Fixed user-facing texts shared by every workflow

use std::fmt;
use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;

// ============================================================================
// User-facing texts
// ============================================================================

/// Shown for any non-2xx outcome without a more specific message.
pub const GENERIC_SERVER_ERROR: &str = "Server error encountered, please try again later.";

/// Shown when an authenticated call is rejected with 401.
pub const INVALID_SESSION_ERROR: &str = "Your session has expired. Please login again.";

/// Shown when a login is rejected with 401.
pub const INVALID_CREDENTIALS_ERROR: &str = "Oops, username and/or password were not correct.";

/// Fallback for a 400 whose body carries no message.
pub const INVALID_REQUEST_ERROR: &str = "JSON request was invalid";

// ============================================================================
// Error Categories
// ============================================================================

/// High-level error categories for frontend error handling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Session missing or expired (re-login needed)
    Session,
    /// Request rejected as invalid (correctable by user)
    Input,
    /// Server-side failure
    Server,
    /// The request never completed or the reply was unreadable
    Network,
}

/// How a failure reaches the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NoticeLevel {
    /// Shown in the notice banner
    Banner,
    /// Written to diagnostics only
    LogOnly,
}

impl ErrorCategory {
    /// Check if this error category is user-correctable.
    #[must_use]
    pub fn is_user_correctable(&self) -> bool {
        matches!(self, Self::Input | Self::Session)
    }

    /// Where failures of this category are reported.
    #[must_use]
    pub fn notice_level(&self) -> NoticeLevel {
        match self {
            Self::Network => NoticeLevel::LogOnly,
            Self::Session | Self::Input | Self::Server => NoticeLevel::Banner,
        }
    }

    /// Get a short label for this category.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Session => "Session",
            Self::Input => "Input",
            Self::Server => "Server",
            Self::Network => "Network",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ============================================================================
// API errors
// ============================================================================

/// Outcome of a REST call that did not succeed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// 401: the session token was missing, expired or rejected
    #[error("session is invalid or expired")]
    InvalidSession,

    /// 400: the server rejected the request body
    #[error("request rejected: {message}")]
    Validation {
        /// Server-supplied explanation
        message: String,
    },

    /// Any other non-2xx status
    #[error("server returned status {status}")]
    Server {
        /// HTTP status code
        status: u16,
    },

    /// The request never completed
    #[error("transport failure: {message}")]
    Transport {
        /// Underlying cause
        message: String,
    },

    /// A 2xx reply whose body was not the expected JSON
    #[error("unexpected response body: {message}")]
    Decode {
        /// Underlying cause
        message: String,
    },
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: String,
}

impl ApiError {
    /// Classify a non-2xx status and its body.
    pub fn from_status(status: u16, body: &str) -> Self {
        match status {
            400 => {
                let message = serde_json::from_str::<ErrorBody>(body)
                    .ok()
                    .map(|body| body.error)
                    .filter(|message| !message.trim().is_empty())
                    .unwrap_or_else(|| INVALID_REQUEST_ERROR.to_string());
                ApiError::Validation { message }
            }
            401 => ApiError::InvalidSession,
            status => ApiError::Server { status },
        }
    }

    /// Category of this error.
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        match self {
            ApiError::InvalidSession => ErrorCategory::Session,
            ApiError::Validation { .. } => ErrorCategory::Input,
            ApiError::Server { .. } => ErrorCategory::Server,
            ApiError::Transport { .. } | ApiError::Decode { .. } => ErrorCategory::Network,
        }
    }

    /// Text for the notice banner, `None` for diagnostics-only failures.
    pub fn notice_message(&self) -> Option<String> {
        match self {
            ApiError::InvalidSession => Some(INVALID_SESSION_ERROR.to_string()),
            ApiError::Validation { message } => Some(message.clone()),
            ApiError::Server { .. } => Some(GENERIC_SERVER_ERROR.to_string()),
            ApiError::Transport { .. } | ApiError::Decode { .. } => None,
        }
    }
}

/// Failure of the login workflow.
#[derive(Debug, Error)]
pub enum LoginError {
    /// The login request failed
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The server accepted the login but returned no token
    #[error("login response carried no session token")]
    MissingToken,

    /// The token could not be persisted
    #[error("login succeeded but the session could not be saved: {0}")]
    Persist(#[from] SessionError),
}

// ============================================================================
// Session store errors
// ============================================================================

/// Failure reading or writing the persisted session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Filesystem failure
    #[error("session file {path}: {source}")]
    Io {
        /// File involved
        path: PathBuf,
        /// Underlying cause
        #[source]
        source: std::io::Error,
    },

    /// The session file is not valid JSON
    #[error("session file {path} is malformed: {source}")]
    Malformed {
        /// File involved
        path: PathBuf,
        /// Underlying cause
        #[source]
        source: serde_json::Error,
    },
}

// ============================================================================
// Configuration errors
// ============================================================================

/// Failure loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file exists but cannot be read
    #[error("cannot read config file {path}: {source}")]
    Read {
        /// File involved
        path: PathBuf,
        /// Underlying cause
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for this schema
    #[error("cannot parse config file {path}: {source}")]
    Parse {
        /// File involved
        path: PathBuf,
        /// Underlying cause
        #[source]
        source: toml::de::Error,
    },

    /// An environment override could not be parsed
    #[error("environment variable {name} has invalid value {value:?}")]
    Env {
        /// Variable name
        name: &'static str,
        /// Raw value
        value: String,
    },

    /// A value failed validation
    #[error("invalid configuration: {field} {reason}")]
    Invalid {
        /// Field name
        field: &'static str,
        /// What is wrong
        reason: &'static str,
    },
}
