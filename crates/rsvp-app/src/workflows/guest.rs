//! Guest Workflow - the unauthenticated RSVP page
//!
//! Guest calls never carry the session token and never trigger session
//! handling. Any surfaced failure shows the generic error.

use std::sync::Arc;

use async_lock::RwLock;

use super::notice::report_guest_failure;
use super::state_helpers::{api_client, dispatch};
use crate::core::{Action, AppCore};
use crate::errors::ApiError;
use crate::transport::Access;
use crate::views::{GuestRsvp, GuestRsvpSubmission};

const GUEST_RSVPS_PATH: &str = "/api/p_rsvps";

/// Load the guest page
///
/// **What it does**: With no private id, sets client defaults (attending,
/// one guest, no special diet) without touching the network. Otherwise
/// GET `/api/p_rsvps/{id}`. An id that is not a single path segment of
/// `[A-Za-z0-9_-]` is refused before any request and shows the generic error.
pub async fn fetch_guest_rsvp(
    app_core: &Arc<RwLock<AppCore>>,
    private_id: Option<&str>,
) -> Result<(), ApiError> {
    let Some(private_id) = private_id.filter(|id| !id.trim().is_empty()) else {
        dispatch(app_core, Action::SetGuestRsvp(GuestRsvp::unanswered())).await;
        return Ok(());
    };

    if !is_path_segment(private_id) {
        let error = ApiError::Validation {
            message: format!("invitation id {private_id:?} is not valid"),
        };
        report_guest_failure(app_core, &error, "fetch_guest_rsvp").await;
        return Err(error);
    }

    let api = api_client(app_core).await;
    let path = format!("{GUEST_RSVPS_PATH}/{private_id}");

    match api.get::<GuestRsvp>(&path, Access::Public).await {
        Ok(mut rsvp) => {
            if rsvp.invitation_private_id.is_empty() {
                rsvp.invitation_private_id = private_id.to_string();
            }
            dispatch(app_core, Action::SetGuestRsvp(rsvp)).await;
            Ok(())
        }
        Err(error) => {
            report_guest_failure(app_core, &error, "fetch_guest_rsvp").await;
            Err(error)
        }
    }
}

/// Submit a guest reply
///
/// **What it does**: POST `/api/p_rsvps` and shows the stored reply, which
/// the server marks completed
pub async fn submit_guest_rsvp(
    app_core: &Arc<RwLock<AppCore>>,
    submission: &GuestRsvpSubmission,
) -> Result<(), ApiError> {
    let api = api_client(app_core).await;

    match api
        .post::<_, GuestRsvp>(GUEST_RSVPS_PATH, submission, Access::Public)
        .await
    {
        Ok(rsvp) => {
            dispatch(app_core, Action::SetGuestRsvp(rsvp)).await;
            Ok(())
        }
        Err(error) => {
            report_guest_failure(app_core, &error, "submit_guest_rsvp").await;
            Err(error)
        }
    }
}

/// Submit a reply addressed by an invitation's private id
///
/// **What it does**: Same as [`submit_guest_rsvp`] with the private id
/// forced onto the submission. If the invitation already has a reply the
/// server returns it unchanged.
pub async fn submit_private_rsvp(
    app_core: &Arc<RwLock<AppCore>>,
    private_id: &str,
    submission: GuestRsvpSubmission,
) -> Result<(), ApiError> {
    let submission = GuestRsvpSubmission {
        invitation_private_id: private_id.to_string(),
        ..submission
    };
    submit_guest_rsvp(app_core, &submission).await
}

fn is_path_segment(id: &str) -> bool {
    id.bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}
