//! Session Workflow - administrator login and logout
//!
//! The session token is persisted through the injected
//! [`crate::session::SessionStore`]. Logout always completes locally.

use std::sync::Arc;

use async_lock::RwLock;

use super::notice::flash_notice;
use super::state_helpers::{api_client, dispatch, dispatch_all};
use crate::core::{Action, AppCore};
use crate::errors::{ApiError, LoginError, GENERIC_SERVER_ERROR, INVALID_CREDENTIALS_ERROR};
use crate::routes::Route;
use crate::transport::{Access, HttpMethod};
use crate::views::{Credentials, SessionGrant};

const SESSIONS_PATH: &str = "/api/sessions";

/// Log in
///
/// **What it does**: POST `/api/sessions`. On success persists the token and
/// username, marks the state authenticated and navigates to the control
/// panel. A 401 records the invalid-credentials text on the login screen;
/// any other rejection flashes the generic error.
/// **Returns**: The granted session
pub async fn login_user(
    app_core: &Arc<RwLock<AppCore>>,
    credentials: &Credentials,
) -> Result<SessionGrant, LoginError> {
    dispatch(app_core, Action::LoginRequest).await;
    let api = api_client(app_core).await;

    let grant = match api
        .post::<_, SessionGrant>(SESSIONS_PATH, credentials, Access::Public)
        .await
    {
        Ok(grant) => grant,
        Err(error) => {
            fail_login(app_core, &error).await;
            return Err(error.into());
        }
    };

    if grant.auth_token.is_empty() {
        flash_notice(app_core, GENERIC_SERVER_ERROR, false).await;
        dispatch(
            app_core,
            Action::LoginFailure {
                message: GENERIC_SERVER_ERROR.to_string(),
            },
        )
        .await;
        return Err(LoginError::MissingToken);
    }

    let username = if grant.username.is_empty() {
        credentials.username.clone()
    } else {
        grant.username.clone()
    };

    if let Err(error) = api.session().save(&grant.auth_token, &username) {
        tracing::error!(%error, "failed to persist session");
        flash_notice(app_core, GENERIC_SERVER_ERROR, false).await;
        dispatch(
            app_core,
            Action::LoginFailure {
                message: GENERIC_SERVER_ERROR.to_string(),
            },
        )
        .await;
        return Err(error.into());
    }

    tracing::info!(username = %username, "logged in");
    dispatch_all(
        app_core,
        [
            Action::LoginSuccess { username },
            Action::Navigate(Route::ControlPanel),
        ],
    )
    .await;

    Ok(grant)
}

async fn fail_login(app_core: &Arc<RwLock<AppCore>>, error: &ApiError) {
    match error {
        ApiError::InvalidSession => {
            dispatch(
                app_core,
                Action::LoginFailure {
                    message: INVALID_CREDENTIALS_ERROR.to_string(),
                },
            )
            .await;
        }
        ApiError::Validation { .. } | ApiError::Server { .. } => {
            flash_notice(app_core, GENERIC_SERVER_ERROR, false).await;
            dispatch(
                app_core,
                Action::LoginFailure {
                    message: GENERIC_SERVER_ERROR.to_string(),
                },
            )
            .await;
        }
        ApiError::Transport { .. } | ApiError::Decode { .. } => {
            tracing::warn!(%error, "login request did not complete");
            dispatch(
                app_core,
                Action::LoginFailure {
                    message: String::new(),
                },
            )
            .await;
        }
    }
}

/// Log out
///
/// **What it does**: DELETE `/api/sessions`, then clears the persisted
/// session, marks the state logged out and navigates to the login screen,
/// whatever the server said
pub async fn logout_user(app_core: &Arc<RwLock<AppCore>>) {
    dispatch(app_core, Action::LogoutRequest).await;
    let api = api_client(app_core).await;

    if let Err(error) = api
        .execute(HttpMethod::Delete, SESSIONS_PATH, None, Access::Authenticated)
        .await
    {
        tracing::warn!(%error, "logout request failed, clearing session anyway");
    }

    if let Err(error) = api.session().clear() {
        tracing::warn!(%error, "failed to clear persisted session");
    }

    tracing::info!("logged out");
    dispatch_all(app_core, [Action::LogoutSuccess, Action::Navigate(Route::Login)]).await;
}
