//! RSVP Workflow - Portable Business Logic
//!
//! Admin CRUD over `/api/rsvps`. A 401 only surfaces the invalid-session
//! notice; it does not log out.

use std::sync::Arc;

use async_lock::RwLock;

use super::notice::SessionPolicy;
use super::resource::{self, AdminResource};
use super::state_helpers::dispatch;
use crate::core::{Action, AppCore};
use crate::errors::ApiError;
use crate::views::{ConfirmationSignal, FormMode, FormSignal, ResourceId, Rsvp, RsvpDraft};

pub(crate) struct Rsvps;

impl AdminResource for Rsvps {
    type Item = Rsvp;
    type Draft = RsvpDraft;

    const NAME: &'static str = "RSVP";
    const PATH: &'static str = "/api/rsvps";
    const MUTATION_POLICY: SessionPolicy = SessionPolicy::NoticeOnly;

    fn set_list(items: Vec<Rsvp>) -> Action {
        Action::SetRsvps(items)
    }
    fn set_created(item: Rsvp) -> Action {
        Action::SetRsvpCreated(item)
    }
    fn set_updated(item: Rsvp) -> Action {
        Action::SetRsvpUpdated(item)
    }
    fn set_deleted(id: ResourceId) -> Action {
        Action::SetRsvpDeleted(id)
    }
    fn form(signal: FormSignal<RsvpDraft>) -> Action {
        Action::RsvpForm(signal)
    }
    fn delete_confirmation(signal: ConfirmationSignal) -> Action {
        Action::RsvpDeleteConfirmation(signal)
    }
    fn assign_id(draft: &mut RsvpDraft, id: ResourceId) {
        draft.id = Some(id);
    }
}

/// Fetch all RSVPs
pub async fn fetch_rsvps(app_core: &Arc<RwLock<AppCore>>) -> Result<(), ApiError> {
    resource::fetch_list::<Rsvps>(app_core).await
}

/// Create an RSVP on a guest's behalf
///
/// **What it does**: POST `/api/rsvps`; on success closes the form, flashes
/// "RSVP was created successfully." and prepends the result
pub async fn submit_rsvp_create(
    app_core: &Arc<RwLock<AppCore>>,
    draft: &RsvpDraft,
) -> Result<(), ApiError> {
    resource::submit_create::<Rsvps>(app_core, draft).await
}

/// Update an RSVP
pub async fn submit_rsvp_edit(
    app_core: &Arc<RwLock<AppCore>>,
    id: ResourceId,
    draft: RsvpDraft,
) -> Result<(), ApiError> {
    resource::submit_edit::<Rsvps>(app_core, id, draft).await
}

/// Delete an RSVP
pub async fn submit_rsvp_delete(
    app_core: &Arc<RwLock<AppCore>>,
    id: ResourceId,
) -> Result<(), ApiError> {
    resource::submit_delete::<Rsvps>(app_core, id).await
}

/// Toggle the RSVP form.
pub async fn toggle_rsvp_form(app_core: &Arc<RwLock<AppCore>>, mode: FormMode, initial: RsvpDraft) {
    dispatch(app_core, Action::RsvpForm(FormSignal::Toggle { mode, initial })).await;
}

/// Toggle the RSVP delete confirmation.
pub async fn toggle_rsvp_delete_confirmation(app_core: &Arc<RwLock<AppCore>>, id: ResourceId) {
    dispatch(
        app_core,
        Action::RsvpDeleteConfirmation(ConfirmationSignal::Toggle(id)),
    )
    .await;
}
