//! Typed REST client over an injected transport and session store.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{ApiRequest, ApiResponse, HttpMethod, HttpTransport};
use crate::errors::ApiError;
use crate::session::SessionStore;

/// Custom header carrying the session token on admin calls.
pub const AUTH_HEADER: &str = "X-Auth-Header";

/// Whether a call carries the session token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Guest-facing endpoint, no token
    Public,
    /// Admin endpoint, token read from the session store at call time
    Authenticated,
}

/// REST client used by every workflow.
///
/// Cheap to clone; clones share the transport and session store.
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn HttpTransport>,
    session: Arc<dyn SessionStore>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient").finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Create a client from its providers.
    pub fn new(transport: Arc<dyn HttpTransport>, session: Arc<dyn SessionStore>) -> Self {
        Self { transport, session }
    }

    /// The injected session store.
    pub fn session(&self) -> &Arc<dyn SessionStore> {
        &self.session
    }

    /// GET and decode a JSON reply.
    pub async fn get<T: DeserializeOwned>(&self, path: &str, access: Access) -> Result<T, ApiError> {
        let response = self.execute(HttpMethod::Get, path, None, access).await?;
        decode(path, &response)
    }

    /// POST a JSON body and decode a JSON reply.
    pub async fn post<B, T>(&self, path: &str, body: &B, access: Access) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let body = encode(body)?;
        let response = self.execute(HttpMethod::Post, path, Some(body), access).await?;
        decode(path, &response)
    }

    /// POST a JSON body and ignore the reply body.
    pub async fn post_unit<B>(&self, path: &str, body: &B, access: Access) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized + Sync,
    {
        let body = encode(body)?;
        self.execute(HttpMethod::Post, path, Some(body), access)
            .await
            .map(|_| ())
    }

    /// PUT a JSON body and decode a JSON reply.
    pub async fn put<B, T>(&self, path: &str, body: &B, access: Access) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let body = encode(body)?;
        let response = self.execute(HttpMethod::Put, path, Some(body), access).await?;
        decode(path, &response)
    }

    /// DELETE and ignore the reply body.
    pub async fn delete(&self, path: &str, access: Access) -> Result<(), ApiError> {
        self.execute(HttpMethod::Delete, path, None, access)
            .await
            .map(|_| ())
    }

    /// Send one request and classify the outcome.
    ///
    /// Every request carries `Content-Type: application/json`.
    /// Authenticated requests also carry [`AUTH_HEADER`] when a token is held.
    pub async fn execute(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<serde_json::Value>,
        access: Access,
    ) -> Result<ApiResponse, ApiError> {
        let mut request =
            ApiRequest::new(method, path).with_header("Content-Type", "application/json");
        if access == Access::Authenticated {
            if let Some(token) = self.session.token() {
                request = request.with_header(AUTH_HEADER, token);
            }
        }
        if let Some(body) = body {
            request = request.with_body(body);
        }

        let response = self
            .transport
            .send(request)
            .await
            .map_err(|e| ApiError::Transport {
                message: e.to_string(),
            })?;

        if response.is_success() {
            Ok(response)
        } else {
            tracing::debug!(%method, path, status = response.status, "request rejected");
            Err(ApiError::from_status(response.status, &response.body))
        }
    }
}

fn encode<B: Serialize + ?Sized>(body: &B) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::Decode {
        message: format!("encoding request body: {e}"),
    })
}

fn decode<T: DeserializeOwned>(path: &str, response: &ApiResponse) -> Result<T, ApiError> {
    serde_json::from_str(&response.body).map_err(|e| ApiError::Decode {
        message: format!("{path}: {e}"),
    })
}
