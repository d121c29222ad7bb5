//! Status and route handlers.

use anyhow::{anyhow, Result};

use rsvp_app::routes::Route;
use rsvp_app::workflows::{
    check_health, fetch_categories, fetch_guest_rsvp, fetch_invitations, fetch_rsvps, navigate,
};

use super::{join, HandlerContext};
use crate::render;

/// Handle `rsvp status`.
pub async fn handle_status(ctx: &HandlerContext) -> Result<String> {
    let (api_base_url, session_user) = {
        let core = ctx.app().raw().read().await;
        (core.config().api_base_url.clone(), core.state().auth.user.clone())
    };

    let backend = match check_health(ctx.app().raw()).await {
        Ok(()) => "healthy".to_string(),
        Err(error) => format!("unavailable ({error})"),
    };
    let session = match session_user {
        Some(user) => format!("logged in as {user}"),
        None => "not logged in".to_string(),
    };

    Ok(format!("Backend: {api_base_url} ({backend})\nSession: {session}"))
}

/// Handle `rsvp open <path>`: resolve the route through the login gate and
/// render whatever screen it lands on.
pub async fn handle_open(ctx: &HandlerContext, path: &str) -> Result<String> {
    let requested = Route::parse(path).ok_or_else(|| anyhow!("Unknown route: {path}"))?;
    let route = navigate(ctx.app().raw(), requested.clone()).await;

    let body = match &route {
        Route::Login => {
            let mut text = String::from("Login required: rsvp login <username>");
            if requested != route {
                text = format!("{requested} needs a session.\n{text}");
            }
            text
        }
        Route::ControlPanel => {
            // Failures land in the banner; render whatever loaded.
            let app = ctx.app().raw();
            let _ = fetch_categories(app).await;
            let _ = fetch_invitations(app).await;
            let _ = fetch_rsvps(app).await;

            let view = ctx.control_panel().await;
            if ctx.json() {
                render::json(&view)?
            } else {
                render::control_panel(&view)
            }
        }
        Route::Rsvp(private_id) => {
            let _ = fetch_guest_rsvp(ctx.app().raw(), private_id.as_deref()).await;

            let view = ctx.guest_view().await;
            if ctx.json() {
                render::json(&view)?
            } else {
                render::guest(&view)
            }
        }
    };

    let notice = ctx.notice().await.map(|banner| render::notice(&banner));
    Ok(join(notice.into_iter().chain([body])))
}
