//! System Workflow - backend health and navigation

use std::sync::Arc;

use async_lock::RwLock;

use super::state_helpers::{api_client, dispatch};
use crate::core::{Action, AppCore};
use crate::errors::ApiError;
use crate::routes::{resolve_route, Route};
use crate::transport::{Access, HttpMethod};

/// Check the backend
///
/// **What it does**: GET `/api/healthcheck`
/// **Returns**: `Ok` when the backend answered 2xx
pub async fn check_health(app_core: &Arc<RwLock<AppCore>>) -> Result<(), ApiError> {
    let api = api_client(app_core).await;
    api.execute(HttpMethod::Get, "/api/healthcheck", None, Access::Public)
        .await
        .map(|_| ())
}

/// Navigate through the authentication gate
///
/// **What it does**: Resolves `route` against the current auth state and
/// switches to the result
/// **Returns**: The route actually shown
pub async fn navigate(app_core: &Arc<RwLock<AppCore>>, route: Route) -> Route {
    let resolved = {
        let core = app_core.read().await;
        resolve_route(route, &core.state().auth)
    };
    dispatch(app_core, Action::Navigate(resolved.clone())).await;
    resolved
}
