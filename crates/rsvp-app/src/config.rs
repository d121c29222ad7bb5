//! Application configuration
//!
//! Loaded in layers: defaults, then an optional TOML file, then `RSVP_*`
//! environment overrides, then validation.
//!
//! ```toml
//! api_base_url = "https://wedding.example.com"
//! public_base_url = "https://wedding.example.com"
//! notice_duration_ms = 10000
//! request_timeout_secs = 30
//!
//! [invitation_message]
//! event_line = "we are delighted to invite you to our wedding."
//! sign_off = "The happy couple"
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Text used to compose the shareable invitation message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvitationMessage {
    /// Sentence following the greeting
    pub event_line: String,
    /// Signature line
    pub sign_off: String,
}

impl Default for InvitationMessage {
    fn default() -> Self {
        Self {
            event_line: "you are cordially invited to our wedding celebration.".to_string(),
            sign_off: "The Bride and Groom".to_string(),
        }
    }
}

/// Client configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL the `/api/...` paths are joined to
    pub api_base_url: String,
    /// Base URL of the guest-facing site, used for private links
    pub public_base_url: String,
    /// How long a notice stays up
    pub notice_duration_ms: u64,
    /// Per-request timeout
    pub request_timeout_secs: u64,
    /// Where the session is persisted; platform data dir when unset
    pub session_file: Option<PathBuf>,
    /// Shareable invitation text
    pub invitation_message: InvitationMessage,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8080".to_string(),
            public_base_url: "http://localhost:8080".to_string(),
            notice_duration_ms: 10_000,
            request_timeout_secs: 30,
            session_file: None,
            invitation_message: InvitationMessage::default(),
        }
    }
}

impl AppConfig {
    /// Load from defaults, `path` (if given and present) and the process
    /// environment, then validate.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::load_from_file(path)?,
            None => Self::default(),
        };
        config.merge_with_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Read a TOML file over the defaults. A missing file yields defaults.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply `RSVP_*` overrides from the process environment.
    pub fn merge_with_env(&mut self) -> Result<(), ConfigError> {
        self.merge_with_lookup(|name| std::env::var(name).ok())
    }

    /// Apply `RSVP_*` overrides from an arbitrary lookup.
    pub fn merge_with_lookup<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("RSVP_API_BASE_URL") {
            self.api_base_url = url;
        }
        if let Some(url) = lookup("RSVP_PUBLIC_BASE_URL") {
            self.public_base_url = url;
        }
        if let Some(raw) = lookup("RSVP_NOTICE_DURATION_MS") {
            self.notice_duration_ms = parse_number("RSVP_NOTICE_DURATION_MS", raw)?;
        }
        if let Some(raw) = lookup("RSVP_REQUEST_TIMEOUT_SECS") {
            self.request_timeout_secs = parse_number("RSVP_REQUEST_TIMEOUT_SECS", raw)?;
        }
        if let Some(path) = lookup("RSVP_SESSION_FILE") {
            self.session_file = Some(PathBuf::from(path));
        }
        Ok(())
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_url("api_base_url", &self.api_base_url)?;
        validate_url("public_base_url", &self.public_base_url)?;
        if self.notice_duration_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "notice_duration_ms",
                reason: "must be greater than zero",
            });
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                field: "request_timeout_secs",
                reason: "must be greater than zero",
            });
        }
        Ok(())
    }

    /// Notice lifetime.
    pub fn notice_duration(&self) -> Duration {
        Duration::from_millis(self.notice_duration_ms)
    }

    /// Per-request timeout.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Session file location, resolved under the platform data directory
    /// when not configured.
    pub fn session_file_path(&self) -> PathBuf {
        self.session_file.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("rsvp")
                .join("session.json")
        })
    }

    /// Default config file location under the platform config directory.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("rsvp").join("config.toml"))
    }
}

fn parse_number(name: &'static str, raw: String) -> Result<u64, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::Env { name, value: raw })
}

fn validate_url(field: &'static str, url: &str) -> Result<(), ConfigError> {
    if url.trim().is_empty() {
        return Err(ConfigError::Invalid {
            field,
            reason: "must not be empty",
        });
    }
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(ConfigError::Invalid {
            field,
            reason: "must start with http:// or https://",
        });
    }
    Ok(())
}
