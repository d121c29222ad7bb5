//! UI event handlers.
//!
//! These sit between a frontend's input events and the workflows: they run
//! form validation before anything is sent, pick create vs. edit from the
//! open form, and enforce the control panel's guards (a category that still
//! holds invitations cannot be deleted).

use std::sync::Arc;

use async_lock::RwLock;
use thiserror::Error;

use super::validation::{
    validate_category, validate_guest_rsvp, validate_invitation, validate_rsvp, FieldErrors,
};
use crate::core::AppCore;
use crate::errors::ApiError;
use crate::views::{
    CategoryDraft, FormMode, GuestRsvp, GuestRsvpSubmission, InvitationDraft, ResourceId,
    RsvpDraft,
};
use crate::workflows::state_helpers::current_state;
use crate::workflows::{
    submit_category_create, submit_category_delete, submit_category_edit, submit_guest_rsvp,
    submit_invitation_create, submit_invitation_delete, submit_invitation_edit,
    submit_private_rsvp, submit_rsvp_create, submit_rsvp_delete, submit_rsvp_edit,
    toggle_category_delete_confirmation, toggle_category_form,
    toggle_invitation_delete_confirmation, toggle_invitation_form, toggle_rsvp_delete_confirmation,
    toggle_rsvp_form,
};

/// Why a form was not submitted.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// Client-side validation failed; nothing was sent
    #[error("form is invalid: {0}")]
    Invalid(FieldErrors),

    /// Edit form without a record id; nothing was sent
    #[error("no record selected for editing")]
    MissingId,

    /// The request was sent and failed
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Why a record could not be selected for editing or deletion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// The id is not in the loaded list
    #[error("{resource} {id} is not loaded")]
    NotLoaded {
        /// Resource name for messages
        resource: &'static str,
        /// Requested id
        id: ResourceId,
    },

    /// Only empty categories can be deleted
    #[error("category {id} still holds {total} invitation(s)")]
    CategoryInUse {
        /// Category id
        id: ResourceId,
        /// Invitations still assigned to it
        total: u32,
    },
}

/// Edit target: the draft's own id, else the id the form was opened with.
fn edit_target(
    mode: Option<FormMode>,
    draft_id: Option<ResourceId>,
    initial_id: Option<ResourceId>,
) -> Result<Option<ResourceId>, SubmitError> {
    let mode = mode.unwrap_or(if draft_id.is_some() {
        FormMode::Edit
    } else {
        FormMode::Create
    });
    match mode {
        FormMode::Create => Ok(None),
        FormMode::Edit => draft_id.or(initial_id).map(Some).ok_or(SubmitError::MissingId),
    }
}

// ============================================================================
// Categories
// ============================================================================

/// Open the category form empty.
pub async fn open_category_create(app_core: &Arc<RwLock<AppCore>>) {
    toggle_category_form(app_core, FormMode::Create, CategoryDraft::default()).await;
}

/// Open the category form prefilled with a loaded category.
pub async fn open_category_edit(
    app_core: &Arc<RwLock<AppCore>>,
    id: ResourceId,
) -> Result<(), SelectionError> {
    let state = current_state(app_core).await;
    let category = state.categories.get(id).ok_or(SelectionError::NotLoaded {
        resource: "category",
        id,
    })?;
    toggle_category_form(app_core, FormMode::Edit, CategoryDraft::from(category)).await;
    Ok(())
}

/// Validate and submit the category form.
pub async fn submit_category_form(
    app_core: &Arc<RwLock<AppCore>>,
    draft: CategoryDraft,
) -> Result<(), SubmitError> {
    validate_category(&draft).into_result().map_err(SubmitError::Invalid)?;

    let state = current_state(app_core).await;
    let form = &state.category_form;
    let initial_id = form.initial_values().and_then(|initial| initial.id);

    match edit_target(form.mode(), draft.id, initial_id)? {
        Some(id) => submit_category_edit(app_core, id, draft).await?,
        None => submit_category_create(app_core, &draft).await?,
    }
    Ok(())
}

/// Open the delete confirmation for a category.
///
/// Refused while the category still holds invitations.
pub async fn request_category_delete(
    app_core: &Arc<RwLock<AppCore>>,
    id: ResourceId,
) -> Result<(), SelectionError> {
    let state = current_state(app_core).await;
    let category = state.categories.get(id).ok_or(SelectionError::NotLoaded {
        resource: "category",
        id,
    })?;
    if !category.is_deletable() {
        return Err(SelectionError::CategoryInUse {
            id,
            total: category.total,
        });
    }
    toggle_category_delete_confirmation(app_core, id).await;
    Ok(())
}

/// Delete the category the confirmation is open for. No-op when closed.
pub async fn confirm_category_delete(app_core: &Arc<RwLock<AppCore>>) -> Result<(), ApiError> {
    let target = current_state(app_core).await.category_delete.target();
    match target {
        Some(id) => submit_category_delete(app_core, id).await,
        None => Ok(()),
    }
}

/// Close the category delete confirmation without deleting.
pub async fn cancel_category_delete(app_core: &Arc<RwLock<AppCore>>) {
    if let Some(id) = current_state(app_core).await.category_delete.target() {
        toggle_category_delete_confirmation(app_core, id).await;
    }
}

// ============================================================================
// Invitations
// ============================================================================

/// Open an empty invitation form.
pub async fn open_invitation_create(app_core: &Arc<RwLock<AppCore>>) {
    toggle_invitation_form(app_core, FormMode::Create, InvitationDraft::default()).await;
}

/// Open the invitation form prefilled with a loaded invitation.
pub async fn open_invitation_edit(
    app_core: &Arc<RwLock<AppCore>>,
    id: ResourceId,
) -> Result<(), SelectionError> {
    let state = current_state(app_core).await;
    let invitation = state.invitations.get(id).ok_or(SelectionError::NotLoaded {
        resource: "invitation",
        id,
    })?;
    toggle_invitation_form(app_core, FormMode::Edit, InvitationDraft::from(invitation)).await;
    Ok(())
}

/// Validate and submit the invitation form.
pub async fn submit_invitation_form(
    app_core: &Arc<RwLock<AppCore>>,
    draft: InvitationDraft,
) -> Result<(), SubmitError> {
    validate_invitation(&draft).into_result().map_err(SubmitError::Invalid)?;

    let state = current_state(app_core).await;
    let form = &state.invitation_form;
    let initial_id = form.initial_values().and_then(|initial| initial.id);

    match edit_target(form.mode(), draft.id, initial_id)? {
        Some(id) => submit_invitation_edit(app_core, id, draft).await?,
        None => submit_invitation_create(app_core, &draft).await?,
    }
    Ok(())
}

/// Ask to delete a loaded invitation; opens the confirmation.
pub async fn request_invitation_delete(
    app_core: &Arc<RwLock<AppCore>>,
    id: ResourceId,
) -> Result<(), SelectionError> {
    if !current_state(app_core).await.invitations.contains(id) {
        return Err(SelectionError::NotLoaded {
            resource: "invitation",
            id,
        });
    }
    toggle_invitation_delete_confirmation(app_core, id).await;
    Ok(())
}

/// Delete the invitation the open confirmation targets. No-op when closed.
pub async fn confirm_invitation_delete(app_core: &Arc<RwLock<AppCore>>) -> Result<(), ApiError> {
    let target = current_state(app_core).await.invitation_delete.target();
    match target {
        Some(id) => submit_invitation_delete(app_core, id).await,
        None => Ok(()),
    }
}

// ============================================================================
// RSVPs
// ============================================================================

/// Open an empty RSVP form.
pub async fn open_rsvp_create(app_core: &Arc<RwLock<AppCore>>) {
    toggle_rsvp_form(app_core, FormMode::Create, RsvpDraft::default()).await;
}

/// Open the RSVP form prefilled with a loaded reply.
pub async fn open_rsvp_edit(
    app_core: &Arc<RwLock<AppCore>>,
    id: ResourceId,
) -> Result<(), SelectionError> {
    let state = current_state(app_core).await;
    let rsvp = state
        .rsvps
        .get(id)
        .ok_or(SelectionError::NotLoaded { resource: "RSVP", id })?;
    toggle_rsvp_form(app_core, FormMode::Edit, RsvpDraft::from(rsvp)).await;
    Ok(())
}

/// Validate and submit the admin RSVP form.
pub async fn submit_rsvp_form(
    app_core: &Arc<RwLock<AppCore>>,
    draft: RsvpDraft,
) -> Result<(), SubmitError> {
    validate_rsvp(&draft).into_result().map_err(SubmitError::Invalid)?;

    let state = current_state(app_core).await;
    let form = &state.rsvp_form;
    let initial_id = form.initial_values().and_then(|initial| initial.id);

    match edit_target(form.mode(), draft.id, initial_id)? {
        Some(id) => submit_rsvp_edit(app_core, id, draft).await?,
        None => submit_rsvp_create(app_core, &draft).await?,
    }
    Ok(())
}

/// Ask to delete a loaded RSVP; opens the confirmation.
pub async fn request_rsvp_delete(
    app_core: &Arc<RwLock<AppCore>>,
    id: ResourceId,
) -> Result<(), SelectionError> {
    if !current_state(app_core).await.rsvps.contains(id) {
        return Err(SelectionError::NotLoaded { resource: "RSVP", id });
    }
    toggle_rsvp_delete_confirmation(app_core, id).await;
    Ok(())
}

/// Delete the RSVP the open confirmation targets. No-op when closed.
pub async fn confirm_rsvp_delete(app_core: &Arc<RwLock<AppCore>>) -> Result<(), ApiError> {
    let target = current_state(app_core).await.rsvp_delete.target();
    match target {
        Some(id) => submit_rsvp_delete(app_core, id).await,
        None => Ok(()),
    }
}

// ============================================================================
// Guest
// ============================================================================

/// Validate and submit the guest form.
///
/// A reply carrying an invitation private id is addressed to that
/// invitation; otherwise it is a public reply.
pub async fn submit_guest_form(
    app_core: &Arc<RwLock<AppCore>>,
    rsvp: &GuestRsvp,
    recaptcha: &str,
) -> Result<(), SubmitError> {
    let submission = GuestRsvpSubmission::from_guest(rsvp, recaptcha);
    validate_guest_rsvp(&submission)
        .into_result()
        .map_err(SubmitError::Invalid)?;

    if submission.invitation_private_id.is_empty() {
        submit_guest_rsvp(app_core, &submission).await?;
    } else {
        let private_id = submission.invitation_private_id.clone();
        submit_private_rsvp(app_core, &private_id, submission).await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_target_follows_form_mode() {
        assert_eq!(edit_target(Some(FormMode::Create), None, None).ok(), Some(None));
        assert_eq!(edit_target(Some(FormMode::Edit), None, Some(4)).ok(), Some(Some(4)));
        assert_eq!(edit_target(Some(FormMode::Edit), Some(5), Some(4)).ok(), Some(Some(5)));
        assert!(matches!(
            edit_target(Some(FormMode::Edit), None, None),
            Err(SubmitError::MissingId)
        ));
    }

    #[test]
    fn test_edit_target_without_open_form_uses_draft_id() {
        assert_eq!(edit_target(None, Some(2), None).ok(), Some(Some(2)));
        assert_eq!(edit_target(None, None, None).ok(), Some(None));
    }
}
