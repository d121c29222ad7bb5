//! # Transport
//!
//! The HTTP seam. Workflows never touch an HTTP client directly: they go
//! through [`ApiClient`], which wraps an injected [`HttpTransport`] and an
//! injected [`crate::session::SessionStore`]. Tests replace the transport
//! with a scripted implementation.

mod client;
mod http_client;

pub use client::{Access, ApiClient, AUTH_HEADER};
pub use http_client::ReqwestTransport;

use std::fmt;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// HTTP method used by the REST API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// GET
    Get,
    /// POST
    Post,
    /// PUT
    Put,
    /// DELETE
    Delete,
}

impl HttpMethod {
    /// Method name as sent on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One outgoing request.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// Method
    pub method: HttpMethod,
    /// Path beginning with `/api/`
    pub path: String,
    /// Header name/value pairs
    pub headers: Vec<(String, String)>,
    /// JSON body, if any
    pub body: Option<Value>,
}

impl ApiRequest {
    /// Request without headers or body.
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Add a header.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Attach a JSON body.
    #[must_use]
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Value of a header, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Status and raw body of a completed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    /// HTTP status code
    pub status: u16,
    /// Raw body text
    pub body: String,
}

impl ApiResponse {
    /// Response with a JSON body.
    pub fn json(status: u16, body: &Value) -> Self {
        Self {
            status,
            body: body.to_string(),
        }
    }

    /// Response with no body.
    pub fn empty(status: u16) -> Self {
        Self {
            status,
            body: String::new(),
        }
    }

    /// Whether the status is 2xx.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The request did not complete.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    /// Client could not be constructed
    #[error("failed to build HTTP client: {0}")]
    Setup(String),
    /// Connection, timeout or body read failure
    #[error("request failed: {0}")]
    Request(String),
}

/// Sends requests to the REST backend.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Send one request and return whatever status came back.
    ///
    /// Non-2xx statuses are `Ok`; only failures to complete the exchange
    /// are `Err`.
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError>;
}
