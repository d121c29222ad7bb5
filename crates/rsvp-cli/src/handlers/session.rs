//! Login / logout handlers.

use std::io::BufRead;

use anyhow::{anyhow, Context, Result};

use rsvp_app::views::Credentials;
use rsvp_app::workflows::{login_user, logout_user};

use super::HandlerContext;

/// Handle `rsvp login`.
pub async fn handle_login(
    ctx: &HandlerContext,
    username: &str,
    password: Option<String>,
) -> Result<String> {
    let password = match password {
        Some(password) => password,
        None => read_password()?,
    };
    let credentials = Credentials::new(username, password);

    match login_user(ctx.app().raw(), &credentials).await {
        Ok(_) => {
            let user = ctx.state().await.auth.user.unwrap_or_else(|| username.to_string());
            Ok(format!("Logged in as {user}"))
        }
        Err(error) => {
            let state = ctx.state().await;
            let message = if state.auth.error_message.is_empty() {
                ctx.notice()
                    .await
                    .map(|banner| banner.message)
                    .unwrap_or_else(|| error.to_string())
            } else {
                state.auth.error_message
            };
            Err(anyhow::Error::new(error).context(message))
        }
    }
}

fn read_password() -> Result<String> {
    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("reading password from stdin")?;
    let password = line.trim_end_matches(['\r', '\n']).to_string();
    if password.is_empty() {
        return Err(anyhow!("no password given"));
    }
    Ok(password)
}

/// Handle `rsvp logout`.
pub async fn handle_logout(ctx: &HandlerContext) -> Result<String> {
    logout_user(ctx.app().raw()).await;
    Ok("Logged out".to_string())
}
