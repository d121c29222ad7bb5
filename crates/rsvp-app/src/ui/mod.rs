//! UI-facing facade for rsvp-app.
//!
//! This module exposes the narrow surface that frontends should use:
//! - workflows and event handlers (commands)
//! - view models (read)
//! - core types (AppCore, AppConfig)

use async_lock::RwLock;
use std::sync::Arc;

use tokio::sync::watch;

use crate::views::ViewState;
use crate::AppCore;

/// UI wrapper around `AppCore` to discourage direct access to internals.
#[derive(Clone)]
pub struct UiAppCore {
    inner: Arc<RwLock<AppCore>>,
}

impl UiAppCore {
    /// Wrap a shared core.
    pub fn new(inner: Arc<RwLock<AppCore>>) -> Self {
        Self { inner }
    }

    /// Wrap a freshly built core.
    pub fn from_core(core: AppCore) -> Self {
        Self::new(Arc::new(RwLock::new(core)))
    }

    /// Shared core handle, as the workflows take it.
    pub fn raw(&self) -> &Arc<RwLock<AppCore>> {
        &self.inner
    }

    /// Current state snapshot.
    pub async fn snapshot(&self) -> ViewState {
        self.inner.read().await.snapshot()
    }

    /// Receiver that sees every published snapshot.
    pub async fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.inner.read().await.subscribe()
    }
}

impl From<Arc<RwLock<AppCore>>> for UiAppCore {
    fn from(inner: Arc<RwLock<AppCore>>) -> Self {
        Self::new(inner)
    }
}

/// Commands: workflows and UI event handlers.
pub mod workflows {
    pub use crate::workflows::categories;
    pub use crate::workflows::guest;
    pub use crate::workflows::invitations;
    pub use crate::workflows::notice;
    pub use crate::workflows::rsvps;
    pub use crate::workflows::session;
    pub use crate::workflows::system;

    pub use crate::presentation::events;
}

/// Types frontends need to name.
pub mod types {
    pub use crate::config::{AppConfig, InvitationMessage};
    pub use crate::core::{Action, AppCore};
    pub use crate::errors::{
        ApiError, ConfigError, ErrorCategory, LoginError, NoticeLevel, SessionError,
        GENERIC_SERVER_ERROR, INVALID_CREDENTIALS_ERROR, INVALID_SESSION_ERROR,
    };
    pub use crate::presentation::{
        Acknowledgment, CategoryRow, ControlPanelView, DeleteModal, FieldErrors, FormView,
        GuestPage, GuestView, InvitationRow, NoticeBanner, RsvpRow, SelectionError, SubmitError,
    };
    pub use crate::routes::{resolve_route, Route};
    pub use crate::session::{FileSessionStore, MemorySessionStore, SessionStore};
    pub use crate::transport::{HttpTransport, ReqwestTransport};
    // Display formatting utilities
    pub use crate::presentation::format::{format_timestamp, private_link, share_message};
    pub use crate::views::{
        AuthState, Category, CategoryDraft, Credentials, FormMode, GuestRsvp, Invitation,
        InvitationDraft, InvitationStatus, OperationResult, ResourceId, Rsvp, RsvpDraft,
        SessionGrant, ViewState,
    };
}
