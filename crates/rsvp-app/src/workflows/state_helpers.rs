//! Lock helpers shared by workflows.
//!
//! Workflows never hold the core lock across a network call: they clone
//! the client out under a read lock, await the request, then take the
//! write lock to dispatch.

use std::sync::Arc;

use async_lock::RwLock;

use crate::core::{Action, AppCore};
use crate::transport::ApiClient;
use crate::views::ViewState;

/// Clone the REST client out of the core.
pub async fn api_client(app_core: &Arc<RwLock<AppCore>>) -> ApiClient {
    app_core.read().await.api().clone()
}

/// Dispatch one action.
pub async fn dispatch(app_core: &Arc<RwLock<AppCore>>, action: Action) {
    app_core.write().await.dispatch(action);
}

/// Dispatch actions in order under one lock acquisition.
pub async fn dispatch_all(
    app_core: &Arc<RwLock<AppCore>>,
    actions: impl IntoIterator<Item = Action>,
) {
    app_core.write().await.dispatch_all(actions);
}

/// Owned copy of the current state.
pub async fn current_state(app_core: &Arc<RwLock<AppCore>>) -> ViewState {
    app_core.read().await.snapshot()
}
