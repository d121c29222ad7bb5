//! Notice Workflow - the operation-result banner
//!
//! A notice stays up for the configured duration. Each flash cancels the
//! previous expiry timer and schedules its own, tagged with the notice's
//! generation, so an older timer can never clear a newer notice.

use std::sync::Arc;

use async_lock::RwLock;

use super::session::logout_user;
use crate::core::{Action, AppCore};
use crate::errors::{ApiError, GENERIC_SERVER_ERROR};
use crate::views::OperationResult;

/// What a 401 on an authenticated call does beyond the notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPolicy {
    /// Show the invalid-session notice only
    NoticeOnly,
    /// Show the notice and log out
    ForceLogout,
}

/// Show a notice and schedule its removal
///
/// **What it does**: Sets the banner, cancels the previous expiry timer and
/// starts a new one
/// **Returns**: Nothing; the banner is part of view state
pub async fn flash_notice(app_core: &Arc<RwLock<AppCore>>, message: impl Into<String>, success: bool) {
    let result = OperationResult {
        message: message.into(),
        success,
    };

    let mut core = app_core.write().await;
    let generation = core.next_notice_generation();
    let duration = core.config().notice_duration();
    core.dispatch(Action::SetOperationResult { result, generation });

    let timer = match tokio::runtime::Handle::try_current() {
        Ok(handle) => {
            let weak = Arc::downgrade(app_core);
            Some(handle.spawn(async move {
                tokio::time::sleep(duration).await;
                if let Some(app_core) = weak.upgrade() {
                    app_core.write().await.dispatch(Action::UnsetOperationResult {
                        generation: Some(generation),
                    });
                }
            }))
        }
        Err(_) => {
            tracing::warn!("no tokio runtime, notice will not expire on its own");
            None
        }
    };
    core.replace_notice_timer(timer);
}

/// Clear the notice now
///
/// **What it does**: Cancels the expiry timer and removes the banner
pub async fn clear_notice(app_core: &Arc<RwLock<AppCore>>) {
    let mut core = app_core.write().await;
    core.cancel_notice_timer();
    core.dispatch(Action::UnsetOperationResult { generation: None });
}

/// Surface a failed admin request.
///
/// Session, validation and server errors reach the banner; transport and
/// decode failures only reach the log.
pub(crate) async fn report_failure(
    app_core: &Arc<RwLock<AppCore>>,
    error: &ApiError,
    policy: SessionPolicy,
    operation: &'static str,
) {
    match error.notice_message() {
        Some(message) => {
            tracing::debug!(operation, %error, "request failed");
            flash_notice(app_core, message, false).await;
            if *error == ApiError::InvalidSession && policy == SessionPolicy::ForceLogout {
                logout_user(app_core).await;
            }
        }
        None => {
            tracing::warn!(operation, %error, "request did not complete");
        }
    }
}

/// Surface a failed guest request: any surfaced failure shows the generic
/// text, with no session handling.
pub(crate) async fn report_guest_failure(
    app_core: &Arc<RwLock<AppCore>>,
    error: &ApiError,
    operation: &'static str,
) {
    if error.notice_message().is_some() {
        tracing::debug!(operation, %error, "guest request failed");
        flash_notice(app_core, GENERIC_SERVER_ERROR, false).await;
    } else {
        tracing::warn!(operation, %error, "guest request did not complete");
    }
}
