//! RSVP command handlers.

use anyhow::Result;

use rsvp_app::presentation::events::{
    confirm_rsvp_delete, open_rsvp_create, open_rsvp_edit, request_rsvp_delete, submit_rsvp_form,
};
use rsvp_app::views::RsvpDraft;
use rsvp_app::workflows::fetch_rsvps;

use super::HandlerContext;
use crate::cli::{RsvpCommand, RsvpFields};
use crate::render;

/// Handle `rsvp rsvps ...`.
pub async fn handle_rsvps(ctx: &HandlerContext, command: RsvpCommand) -> Result<String> {
    ctx.require_login().await?;

    match command {
        RsvpCommand::List => {
            ctx.outcome(fetch_rsvps(ctx.app().raw()).await).await?;
            let view = ctx.control_panel().await;
            if ctx.json() {
                render::json(&view.rsvps)
            } else {
                Ok(render::rsvps(&view.rsvps))
            }
        }
        RsvpCommand::Create {
            invitation_private_id,
            fields,
        } => {
            open_rsvp_create(ctx.app().raw()).await;
            let mut draft = apply_fields(current_draft(ctx).await, fields);
            if let Some(private_id) = invitation_private_id {
                draft.invitation_private_id = private_id;
            }
            let result = submit_rsvp_form(ctx.app().raw(), draft).await;
            ctx.submitted(result).await
        }
        RsvpCommand::Edit { id, fields } => {
            ctx.outcome(fetch_rsvps(ctx.app().raw()).await).await?;
            open_rsvp_edit(ctx.app().raw(), id).await?;
            let draft = apply_fields(current_draft(ctx).await, fields);
            let result = submit_rsvp_form(ctx.app().raw(), draft).await;
            ctx.submitted(result).await
        }
        RsvpCommand::Delete { id, yes } => {
            ctx.outcome(fetch_rsvps(ctx.app().raw()).await).await?;
            request_rsvp_delete(ctx.app().raw(), id).await?;
            if !yes {
                let view = ctx.control_panel().await;
                return Ok(view
                    .rsvp_delete
                    .as_ref()
                    .map(render::delete_modal)
                    .unwrap_or_default());
            }
            let result = confirm_rsvp_delete(ctx.app().raw()).await;
            ctx.outcome(result).await
        }
    }
}

async fn current_draft(ctx: &HandlerContext) -> RsvpDraft {
    ctx.state()
        .await
        .rsvp_form
        .initial_values()
        .cloned()
        .unwrap_or_default()
}

fn apply_fields(mut draft: RsvpDraft, fields: RsvpFields) -> RsvpDraft {
    if let Some(name) = fields.name {
        draft.full_name = name;
    }
    if let Some(attending) = fields.attending {
        draft.attending = attending;
    }
    if let Some(guests) = fields.guests {
        draft.guest_count = guests;
    }
    if let Some(special_diet) = fields.special_diet {
        draft.special_diet = special_diet;
    }
    if let Some(remarks) = fields.remarks {
        draft.remarks = remarks;
    }
    if let Some(phone) = fields.phone {
        draft.mobile_phone_number = phone;
    }
    draft
}
