//! # AppCore
//!
//! The state container. Owns the root [`ViewState`], the REST client, the
//! configuration and the notice expiry timer. Every state change goes
//! through [`AppCore::dispatch`], which runs the reducer and publishes the
//! new snapshot to subscribers.
//!
//! Frontends share it as `Arc<RwLock<AppCore>>` and drive it through
//! [`crate::workflows`].

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use super::action::Action;
use super::reducer::reduce;
use crate::config::AppConfig;
use crate::session::SessionStore;
use crate::transport::{ApiClient, HttpTransport};
use crate::views::{AuthState, ViewState};

/// Application core shared by every frontend.
pub struct AppCore {
    config: AppConfig,
    api: ApiClient,
    state: ViewState,
    publisher: watch::Sender<ViewState>,
    notice_timer: Option<JoinHandle<()>>,
    notice_generation: u64,
}

impl std::fmt::Debug for AppCore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppCore")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("notice_generation", &self.notice_generation)
            .finish_non_exhaustive()
    }
}

impl AppCore {
    /// Assemble the core from its providers.
    ///
    /// Auth state starts from whatever the session store already holds.
    pub fn new(
        config: AppConfig,
        transport: Arc<dyn HttpTransport>,
        session: Arc<dyn SessionStore>,
    ) -> Self {
        let auth = AuthState::from_session(session.token().as_deref(), session.username());
        let state = ViewState::with_auth(auth);
        let (publisher, _) = watch::channel(state.clone());

        Self {
            config,
            api: ApiClient::new(transport, session),
            state,
            publisher,
            notice_timer: None,
            notice_generation: 0,
        }
    }

    /// Configuration in use.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// REST client. Clone it out of the lock before awaiting a request.
    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Injected session store.
    pub fn session(&self) -> &Arc<dyn SessionStore> {
        self.api.session()
    }

    /// Current state.
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Owned copy of the current state.
    pub fn snapshot(&self) -> ViewState {
        self.state.clone()
    }

    /// Receive every published state.
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.publisher.subscribe()
    }

    /// Reduce one action into the state and publish the result.
    pub fn dispatch(&mut self, action: Action) {
        tracing::trace!(action = action.name(), "dispatch");
        let previous = std::mem::take(&mut self.state);
        self.state = reduce(previous, action);
        self.publisher.send_replace(self.state.clone());
    }

    /// Reduce several actions in order.
    pub fn dispatch_all(&mut self, actions: impl IntoIterator<Item = Action>) {
        for action in actions {
            self.dispatch(action);
        }
    }

    // ─── Notice timer ────────────────────────────────────────

    /// Allocate the generation for the next notice.
    pub(crate) fn next_notice_generation(&mut self) -> u64 {
        self.notice_generation += 1;
        self.notice_generation
    }

    /// Install the expiry timer for the current notice, cancelling the
    /// previous one.
    pub(crate) fn replace_notice_timer(&mut self, timer: Option<JoinHandle<()>>) {
        if let Some(previous) = std::mem::replace(&mut self.notice_timer, timer) {
            previous.abort();
        }
    }

    /// Cancel the expiry timer, if any.
    pub(crate) fn cancel_notice_timer(&mut self) {
        self.replace_notice_timer(None);
    }
}

impl Drop for AppCore {
    fn drop(&mut self) {
        self.cancel_notice_timer();
    }
}
