//! Guest page handlers. No session is needed or sent.

use anyhow::Result;

use rsvp_app::presentation::events::submit_guest_form;
use rsvp_app::views::GuestRsvp;
use rsvp_app::workflows::fetch_guest_rsvp;

use super::{join, HandlerContext};
use crate::cli::{GuestCommand, RsvpFields};
use crate::render;

/// Handle `rsvp guest ...`.
pub async fn handle_guest(ctx: &HandlerContext, command: GuestCommand) -> Result<String> {
    match command {
        GuestCommand::Show { private_id } => {
            ctx.outcome(fetch_guest_rsvp(ctx.app().raw(), private_id.as_deref()).await)
                .await?;
            page(ctx).await
        }
        GuestCommand::Reply {
            private_id,
            recaptcha,
            fields,
        } => {
            ctx.outcome(fetch_guest_rsvp(ctx.app().raw(), private_id.as_deref()).await)
                .await?;

            let loaded = ctx.state().await.guest_rsvp.unwrap_or_default();
            if loaded.completed {
                // Already answered; show the acknowledgment instead.
                return page(ctx).await;
            }

            let rsvp = apply_fields(loaded, fields);
            let result = submit_guest_form(ctx.app().raw(), &rsvp, &recaptcha).await;
            let notice = ctx.submitted(result).await?;
            Ok(join([notice, page(ctx).await?]))
        }
    }
}

async fn page(ctx: &HandlerContext) -> Result<String> {
    let view = ctx.guest_view().await;
    if ctx.json() {
        render::json(&view)
    } else {
        Ok(render::guest(&view))
    }
}

fn apply_fields(mut rsvp: GuestRsvp, fields: RsvpFields) -> GuestRsvp {
    if let Some(name) = fields.name {
        rsvp.full_name = name;
    }
    if let Some(attending) = fields.attending {
        rsvp.attending = attending;
    }
    if let Some(guests) = fields.guests {
        rsvp.guest_count = guests;
    }
    if let Some(special_diet) = fields.special_diet {
        rsvp.special_diet = special_diet;
    }
    if let Some(remarks) = fields.remarks {
        rsvp.remarks = remarks;
    }
    if let Some(phone) = fields.phone {
        rsvp.mobile_phone_number = phone;
    }
    rsvp
}
