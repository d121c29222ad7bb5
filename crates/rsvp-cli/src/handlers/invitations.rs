//! Invitation command handlers.

use anyhow::{anyhow, Result};

use rsvp_app::presentation::events::{
    confirm_invitation_delete, open_invitation_create, open_invitation_edit,
    request_invitation_delete, submit_invitation_form,
};
use rsvp_app::views::{Invitation, InvitationDraft, InvitationStatus, ResourceId};
use rsvp_app::workflows::{
    fetch_categories, fetch_invitations, send_invitation_sms, share_invitation,
};

use super::HandlerContext;
use crate::cli::{InvitationCommand, InvitationFields};
use crate::render;

/// Handle `rsvp invitations ...`.
pub async fn handle_invitations(
    ctx: &HandlerContext,
    command: InvitationCommand,
) -> Result<String> {
    ctx.require_login().await?;

    match command {
        InvitationCommand::List => list(ctx).await,
        InvitationCommand::Create(fields) => {
            open_invitation_create(ctx.app().raw()).await;
            let draft = apply_fields(current_draft(ctx).await, fields)?;
            let result = submit_invitation_form(ctx.app().raw(), draft).await;
            ctx.submitted(result).await
        }
        InvitationCommand::Edit { id, fields } => {
            ctx.outcome(fetch_invitations(ctx.app().raw()).await).await?;
            open_invitation_edit(ctx.app().raw(), id).await?;
            let draft = apply_fields(current_draft(ctx).await, fields)?;
            let result = submit_invitation_form(ctx.app().raw(), draft).await;
            ctx.submitted(result).await
        }
        InvitationCommand::Delete { id, yes } => {
            ctx.outcome(fetch_invitations(ctx.app().raw()).await).await?;
            request_invitation_delete(ctx.app().raw(), id).await?;
            if !yes {
                let view = ctx.control_panel().await;
                return Ok(view
                    .invitation_delete
                    .as_ref()
                    .map(render::delete_modal)
                    .unwrap_or_default());
            }
            let result = confirm_invitation_delete(ctx.app().raw()).await;
            ctx.outcome(result).await
        }
        InvitationCommand::Sms { id } => {
            let invitation = load(ctx, id).await?;
            let result = send_invitation_sms(ctx.app().raw(), &invitation.private_id).await;
            ctx.outcome(result).await
        }
        InvitationCommand::Share { id } => {
            let invitation = load(ctx, id).await?;
            Ok(share_invitation(ctx.app().raw(), &invitation).await)
        }
    }
}

async fn list(ctx: &HandlerContext) -> Result<String> {
    // Category tags are resolved from whatever categories are loaded.
    ctx.outcome(fetch_categories(ctx.app().raw()).await).await?;
    ctx.outcome(fetch_invitations(ctx.app().raw()).await).await?;

    let view = ctx.control_panel().await;
    if ctx.json() {
        render::json(&view.invitations)
    } else {
        Ok(render::invitations(&view.invitations))
    }
}

async fn load(ctx: &HandlerContext, id: ResourceId) -> Result<Invitation> {
    ctx.outcome(fetch_invitations(ctx.app().raw()).await).await?;
    ctx.state()
        .await
        .invitations
        .get(id)
        .cloned()
        .ok_or_else(|| anyhow!("No invitation with id {id}"))
}

async fn current_draft(ctx: &HandlerContext) -> InvitationDraft {
    ctx.state()
        .await
        .invitation_form
        .initial_values()
        .cloned()
        .unwrap_or_default()
}

fn apply_fields(mut draft: InvitationDraft, fields: InvitationFields) -> Result<InvitationDraft> {
    if let Some(category) = fields.category {
        draft.category_id = Some(category);
    }
    if let Some(greeting) = fields.greeting {
        draft.greeting = greeting;
    }
    if let Some(max_guests) = fields.max_guests {
        draft.maximum_guest_count = Some(max_guests);
    }
    if let Some(phone) = fields.phone {
        draft.mobile_phone_number = phone;
    }
    if let Some(notes) = fields.notes {
        draft.notes = notes;
    }
    if let Some(code) = fields.status {
        let status = InvitationStatus::from_code(&code)
            .ok_or_else(|| anyhow!("Unknown status {code}; expected NS, ST, RA or RN"))?;
        draft.status = Some(status);
    }
    Ok(draft)
}
