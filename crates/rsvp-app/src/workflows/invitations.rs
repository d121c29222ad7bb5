//! Invitation Workflow - Portable Business Logic
//!
//! CRUD over `/api/invitations`, SMS delivery of the private link, and the
//! shareable invitation text. A 401 on any mutation logs the administrator
//! out.

use std::sync::Arc;

use async_lock::RwLock;
use serde::Serialize;

use super::notice::{flash_notice, report_failure, SessionPolicy};
use super::resource::{self, AdminResource};
use super::state_helpers::{api_client, dispatch};
use crate::core::{Action, AppCore};
use crate::errors::ApiError;
use crate::presentation::format::share_message;
use crate::transport::Access;
use crate::views::{
    ConfirmationSignal, FormMode, FormSignal, Invitation, InvitationDraft, ResourceId,
};

/// Success notice after an SMS is dispatched.
pub const SMS_SENT_MESSAGE: &str = "Invitation SMS was sent successfully.";

pub(crate) struct Invitations;

impl AdminResource for Invitations {
    type Item = Invitation;
    type Draft = InvitationDraft;

    const NAME: &'static str = "Invitation";
    const PATH: &'static str = "/api/invitations";
    const MUTATION_POLICY: SessionPolicy = SessionPolicy::ForceLogout;

    fn set_list(items: Vec<Invitation>) -> Action {
        Action::SetInvitations(items)
    }
    fn set_created(item: Invitation) -> Action {
        Action::SetInvitationCreated(item)
    }
    fn set_updated(item: Invitation) -> Action {
        Action::SetInvitationUpdated(item)
    }
    fn set_deleted(id: ResourceId) -> Action {
        Action::SetInvitationDeleted(id)
    }
    fn form(signal: FormSignal<InvitationDraft>) -> Action {
        Action::InvitationForm(signal)
    }
    fn delete_confirmation(signal: ConfirmationSignal) -> Action {
        Action::InvitationDeleteConfirmation(signal)
    }
    fn assign_id(draft: &mut InvitationDraft, id: ResourceId) {
        draft.id = Some(id);
    }
}

/// Fetch all invitations
///
/// **What it does**: GET `/api/invitations` and replaces the list
pub async fn fetch_invitations(app_core: &Arc<RwLock<AppCore>>) -> Result<(), ApiError> {
    resource::fetch_list::<Invitations>(app_core).await
}

/// Create an invitation
///
/// **What it does**: POST `/api/invitations`; on success closes the form,
/// flashes "Invitation was created successfully." and prepends the result
pub async fn submit_invitation_create(
    app_core: &Arc<RwLock<AppCore>>,
    draft: &InvitationDraft,
) -> Result<(), ApiError> {
    resource::submit_create::<Invitations>(app_core, draft).await
}

/// Update an invitation
///
/// **What it does**: PUT `/api/invitations/{id}` with the status included
pub async fn submit_invitation_edit(
    app_core: &Arc<RwLock<AppCore>>,
    id: ResourceId,
    draft: InvitationDraft,
) -> Result<(), ApiError> {
    resource::submit_edit::<Invitations>(app_core, id, draft).await
}

/// Delete an invitation
pub async fn submit_invitation_delete(
    app_core: &Arc<RwLock<AppCore>>,
    id: ResourceId,
) -> Result<(), ApiError> {
    resource::submit_delete::<Invitations>(app_core, id).await
}

/// Toggle the invitation form. Opening fills a default maximum guest count.
pub async fn toggle_invitation_form(
    app_core: &Arc<RwLock<AppCore>>,
    mode: FormMode,
    initial: InvitationDraft,
) {
    dispatch(app_core, Action::InvitationForm(FormSignal::Toggle { mode, initial })).await;
}

/// Toggle the invitation delete confirmation.
pub async fn toggle_invitation_delete_confirmation(
    app_core: &Arc<RwLock<AppCore>>,
    id: ResourceId,
) {
    dispatch(
        app_core,
        Action::InvitationDeleteConfirmation(ConfirmationSignal::Toggle(id)),
    )
    .await;
}

#[derive(Serialize)]
struct SmsRequest<'a> {
    #[serde(rename = "privateID")]
    private_id: &'a str,
}

/// Text the private link to the invitation's phone number
///
/// **What it does**: POST `/api/send_invitation`; flashes
/// "Invitation SMS was sent successfully." on success
pub async fn send_invitation_sms(
    app_core: &Arc<RwLock<AppCore>>,
    private_id: &str,
) -> Result<(), ApiError> {
    let api = api_client(app_core).await;
    let body = SmsRequest { private_id };

    match api
        .post_unit("/api/send_invitation", &body, Access::Authenticated)
        .await
    {
        Ok(()) => {
            flash_notice(app_core, SMS_SENT_MESSAGE, true).await;
            Ok(())
        }
        Err(error) => {
            report_failure(
                app_core,
                &error,
                Invitations::MUTATION_POLICY,
                "/api/send_invitation",
            )
            .await;
            Err(error)
        }
    }
}

/// Compose the shareable invitation text and show it in the banner
///
/// **What it does**: Builds the greeting, event line, private link and
/// sign-off from configuration and flashes it as a success notice
/// **Returns**: The composed text
pub async fn share_invitation(app_core: &Arc<RwLock<AppCore>>, invitation: &Invitation) -> String {
    let text = {
        let core = app_core.read().await;
        let config = core.config();
        share_message(
            &invitation.greeting,
            &config.public_base_url,
            &invitation.private_id,
            &config.invitation_message,
        )
    };
    flash_notice(app_core, text.clone(), true).await;
    text
}
