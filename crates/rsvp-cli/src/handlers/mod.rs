//! # CLI Command Handlers
//!
//! Handlers sit between CLI argument parsing and the rsvp-app workflows:
//!
//! ```text
//! CLI Args → Handlers → Events/Workflows → ViewState → View models → Text
//! ```
//!
//! ## Handler Pattern
//!
//! ```ignore
//! pub async fn handle_command(ctx: &HandlerContext, args: &CommandArgs) -> Result<String> {
//!     // 1. Gate on the route (admin commands need a session)
//!     // 2. Drive events / workflows
//!     // 3. Render the resulting view models
//! }
//! ```
//!
//! Handlers return their output instead of printing so `main` owns stdout.
//! A failed request comes back as an error whose message is the notice the
//! workflow already raised.

use anyhow::{anyhow, Result};

use rsvp_app::presentation::{ControlPanelView, GuestView, NoticeBanner, SubmitError};
use rsvp_app::routes::Route;
use rsvp_app::ui::UiAppCore;
use rsvp_app::views::ViewState;
use rsvp_app::workflows::navigate;

use crate::render;

pub mod categories;
pub mod guest;
pub mod invitations;
pub mod rsvps;
pub mod session;
pub mod status;

/// Shared context for all handlers.
pub struct HandlerContext {
    app: UiAppCore,
    json: bool,
}

impl HandlerContext {
    pub fn new(app: UiAppCore, json: bool) -> Self {
        Self { app, json }
    }

    pub fn app(&self) -> &UiAppCore {
        &self.app
    }

    /// Whether view models are printed as JSON.
    pub fn json(&self) -> bool {
        self.json
    }

    pub async fn state(&self) -> ViewState {
        self.app.snapshot().await
    }

    pub async fn public_base_url(&self) -> String {
        self.app.raw().read().await.config().public_base_url.clone()
    }

    pub async fn control_panel(&self) -> ControlPanelView {
        let state = self.state().await;
        ControlPanelView::from_state(&state, &self.public_base_url().await)
    }

    pub async fn guest_view(&self) -> GuestView {
        GuestView::from_state(&self.state().await)
    }

    /// Current notice, if any.
    pub async fn notice(&self) -> Option<NoticeBanner> {
        self.state().await.notice.current().map(NoticeBanner::from)
    }

    /// Refuse admin commands without a session.
    pub async fn require_login(&self) -> Result<()> {
        match navigate(self.app.raw(), Route::ControlPanel).await {
            Route::ControlPanel => Ok(()),
            _ => Err(anyhow!("Please log in first: rsvp login <username>")),
        }
    }

    /// Turn a workflow result into handler output: the notice on success,
    /// the notice as the error message on failure.
    pub async fn outcome<E>(&self, result: Result<(), E>) -> Result<String>
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        let notice = self.notice().await;
        match result {
            Ok(()) => Ok(notice.map(|banner| render::notice(&banner)).unwrap_or_default()),
            Err(error) => match notice.filter(|banner| !banner.success) {
                Some(banner) => Err(anyhow::Error::new(error).context(render::notice(&banner))),
                None => Err(error.into()),
            },
        }
    }

    /// Like [`Self::outcome`], rendering validation failures per field.
    pub async fn submitted(&self, result: Result<(), SubmitError>) -> Result<String> {
        match result {
            Err(SubmitError::Invalid(errors)) => Err(anyhow!(render::field_errors(&errors))),
            other => self.outcome(other).await,
        }
    }
}

/// Join non-empty output blocks.
pub(crate) fn join(blocks: impl IntoIterator<Item = String>) -> String {
    blocks
        .into_iter()
        .filter(|block| !block.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
