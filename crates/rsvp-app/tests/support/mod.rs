//! Shared test infrastructure for rsvp-app integration tests.
//!
//! - [`MockTransport`]: replays scripted responses and records requests
//! - [`TestEnv`]: an AppCore wired to the mock and an in-memory session

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Arc;

use async_lock::RwLock;
use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::Value;

use rsvp_app::transport::{ApiRequest, ApiResponse, HttpMethod, TransportError};
use rsvp_app::{AppConfig, AppCore, HttpTransport, MemorySessionStore, SessionStore, ViewState};

// ============================================================================
// Mock transport
// ============================================================================

/// Scripted transport. Responses are consumed in order; an exhausted script
/// answers with a transport failure.
#[derive(Default)]
pub struct MockTransport {
    script: Mutex<VecDeque<Result<ApiResponse, TransportError>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Queue a JSON response.
    pub fn respond(&self, status: u16, body: Value) {
        self.script.lock().push_back(Ok(ApiResponse::json(status, &body)));
    }

    /// Queue an empty-bodied response.
    pub fn respond_empty(&self, status: u16) {
        self.script.lock().push_back(Ok(ApiResponse::empty(status)));
    }

    /// Queue a failure to complete the request.
    pub fn fail(&self, message: &str) {
        self.script
            .lock()
            .push_back(Err(TransportError::Request(message.to_string())));
    }

    /// Everything sent so far.
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().len()
    }

    pub fn last_request(&self) -> Option<ApiRequest> {
        self.requests.lock().last().cloned()
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        self.requests.lock().push(request);
        self.script
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Request("no scripted response".into())))
    }
}

/// Shorthand for asserting on a recorded request.
pub fn assert_request(request: &ApiRequest, method: HttpMethod, path: &str) {
    assert_eq!(request.method, method, "method of {}", request.path);
    assert_eq!(request.path, path);
}

// ============================================================================
// Test environment
// ============================================================================

pub struct TestEnv {
    pub app_core: Arc<RwLock<AppCore>>,
    pub transport: Arc<MockTransport>,
    pub session: Arc<MemorySessionStore>,
}

impl TestEnv {
    /// Logged-in administrator.
    pub fn logged_in() -> Self {
        Self::with_session(MemorySessionStore::with_session("token-123", "admin"))
    }

    /// Nobody logged in.
    pub fn anonymous() -> Self {
        Self::with_session(MemorySessionStore::new())
    }

    pub fn with_session(session: MemorySessionStore) -> Self {
        let transport = MockTransport::new();
        let session = Arc::new(session);
        let core = AppCore::new(
            AppConfig::default(),
            transport.clone() as Arc<dyn HttpTransport>,
            session.clone() as Arc<dyn SessionStore>,
        );
        Self {
            app_core: Arc::new(RwLock::new(core)),
            transport,
            session,
        }
    }

    pub async fn state(&self) -> ViewState {
        self.app_core.read().await.snapshot()
    }
}
