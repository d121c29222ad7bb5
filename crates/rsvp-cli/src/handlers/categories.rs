//! Category command handlers.

use anyhow::Result;

use rsvp_app::presentation::events::{
    confirm_category_delete, open_category_create, open_category_edit, request_category_delete,
    submit_category_form,
};
use rsvp_app::views::{CategoryDraft, ResourceId};
use rsvp_app::workflows::fetch_categories;

use super::HandlerContext;
use crate::cli::CategoryCommand;
use crate::render;

/// Handle `rsvp categories ...`.
pub async fn handle_categories(ctx: &HandlerContext, command: CategoryCommand) -> Result<String> {
    ctx.require_login().await?;

    match command {
        CategoryCommand::List => list(ctx).await,
        CategoryCommand::Create { tag } => {
            open_category_create(ctx.app().raw()).await;
            let draft = CategoryDraft::new(tag);
            let result = submit_category_form(ctx.app().raw(), draft).await;
            ctx.submitted(result).await
        }
        CategoryCommand::Edit { id, tag } => edit(ctx, id, tag).await,
        CategoryCommand::Delete { id, yes } => delete(ctx, id, yes).await,
    }
}

async fn list(ctx: &HandlerContext) -> Result<String> {
    let result = fetch_categories(ctx.app().raw()).await;
    ctx.outcome(result).await?;

    let view = ctx.control_panel().await;
    if ctx.json() {
        render::json(&view.categories)
    } else {
        Ok(render::categories(&view.categories))
    }
}

async fn edit(ctx: &HandlerContext, id: ResourceId, tag: String) -> Result<String> {
    ctx.outcome(fetch_categories(ctx.app().raw()).await).await?;
    open_category_edit(ctx.app().raw(), id).await?;

    let mut draft = ctx
        .state()
        .await
        .category_form
        .initial_values()
        .cloned()
        .unwrap_or_default();
    draft.tag = tag;

    let result = submit_category_form(ctx.app().raw(), draft).await;
    ctx.submitted(result).await
}

async fn delete(ctx: &HandlerContext, id: ResourceId, yes: bool) -> Result<String> {
    ctx.outcome(fetch_categories(ctx.app().raw()).await).await?;
    request_category_delete(ctx.app().raw(), id).await?;

    if !yes {
        let view = ctx.control_panel().await;
        return Ok(view
            .category_delete
            .as_ref()
            .map(render::delete_modal)
            .unwrap_or_default());
    }

    let result = confirm_category_delete(ctx.app().raw()).await;
    ctx.outcome(result).await
}
