//! Shared CRUD contract for the administrative resources.
//!
//! Categories, invitations and RSVPs follow the same request/response
//! pattern; each implements [`AdminResource`] and the public workflows in
//! their own modules delegate to the generic functions here.

use std::sync::Arc;

use async_lock::RwLock;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::notice::{flash_notice, report_failure, SessionPolicy};
use super::state_helpers::{api_client, dispatch};
use crate::core::{Action, AppCore};
use crate::errors::ApiError;
use crate::transport::Access;
use crate::views::{ConfirmationSignal, FormSignal, ResourceId};

/// One administrative REST resource.
pub(crate) trait AdminResource {
    /// Record returned by the server
    type Item: DeserializeOwned + Send;
    /// Request body for create and edit
    type Draft: Serialize + Sync + Send;

    /// Name used in notices, e.g. "Category"
    const NAME: &'static str;
    /// Collection path, e.g. `/api/categories`
    const PATH: &'static str;
    /// What a 401 on create/edit/delete does
    const MUTATION_POLICY: SessionPolicy;

    fn set_list(items: Vec<Self::Item>) -> Action;
    fn set_created(item: Self::Item) -> Action;
    fn set_updated(item: Self::Item) -> Action;
    fn set_deleted(id: ResourceId) -> Action;
    fn form(signal: FormSignal<Self::Draft>) -> Action;
    fn delete_confirmation(signal: ConfirmationSignal) -> Action;
    fn assign_id(draft: &mut Self::Draft, id: ResourceId);
}

fn item_path<R: AdminResource>(id: ResourceId) -> String {
    format!("{}/{}", R::PATH, id)
}

/// GET the collection and replace the list.
pub(crate) async fn fetch_list<R: AdminResource>(
    app_core: &Arc<RwLock<AppCore>>,
) -> Result<(), ApiError> {
    let api = api_client(app_core).await;

    match api.get::<Vec<R::Item>>(R::PATH, Access::Authenticated).await {
        Ok(items) => {
            dispatch(app_core, R::set_list(items)).await;
            Ok(())
        }
        Err(error) => {
            report_failure(app_core, &error, SessionPolicy::NoticeOnly, R::PATH).await;
            Err(error)
        }
    }
}

/// POST a draft; on success hide the form, flash, then prepend.
pub(crate) async fn submit_create<R: AdminResource>(
    app_core: &Arc<RwLock<AppCore>>,
    draft: &R::Draft,
) -> Result<(), ApiError> {
    let api = api_client(app_core).await;

    match api.post::<_, R::Item>(R::PATH, draft, Access::Authenticated).await {
        Ok(item) => {
            dispatch(app_core, R::form(FormSignal::Dismiss)).await;
            flash_notice(app_core, format!("{} was created successfully.", R::NAME), true).await;
            dispatch(app_core, R::set_created(item)).await;
            Ok(())
        }
        Err(error) => {
            report_failure(app_core, &error, R::MUTATION_POLICY, R::PATH).await;
            Err(error)
        }
    }
}

/// PUT a draft to `{PATH}/{id}`; on success hide the form, flash, then patch.
pub(crate) async fn submit_edit<R: AdminResource>(
    app_core: &Arc<RwLock<AppCore>>,
    id: ResourceId,
    mut draft: R::Draft,
) -> Result<(), ApiError> {
    let api = api_client(app_core).await;
    R::assign_id(&mut draft, id);
    let path = item_path::<R>(id);

    match api.put::<_, R::Item>(&path, &draft, Access::Authenticated).await {
        Ok(item) => {
            dispatch(app_core, R::form(FormSignal::Dismiss)).await;
            flash_notice(app_core, format!("{} was updated successfully.", R::NAME), true).await;
            dispatch(app_core, R::set_updated(item)).await;
            Ok(())
        }
        Err(error) => {
            report_failure(app_core, &error, R::MUTATION_POLICY, R::PATH).await;
            Err(error)
        }
    }
}

/// DELETE `{PATH}/{id}`; on success close the confirmation, flash, then drop.
pub(crate) async fn submit_delete<R: AdminResource>(
    app_core: &Arc<RwLock<AppCore>>,
    id: ResourceId,
) -> Result<(), ApiError> {
    let api = api_client(app_core).await;
    let path = item_path::<R>(id);

    match api.delete(&path, Access::Authenticated).await {
        Ok(()) => {
            dispatch(app_core, R::delete_confirmation(ConfirmationSignal::Dismiss)).await;
            flash_notice(app_core, format!("{} was deleted successfully.", R::NAME), true).await;
            dispatch(app_core, R::set_deleted(id)).await;
            Ok(())
        }
        Err(error) => {
            report_failure(app_core, &error, R::MUTATION_POLICY, R::PATH).await;
            Err(error)
        }
    }
}
