//! Category Workflow - Portable Business Logic
//!
//! CRUD over `/api/categories`. A 401 on create, edit or delete also logs
//! the administrator out.

use std::sync::Arc;

use async_lock::RwLock;

use super::notice::SessionPolicy;
use super::resource::{self, AdminResource};
use super::state_helpers::dispatch;
use crate::core::{Action, AppCore};
use crate::errors::ApiError;
use crate::views::{Category, CategoryDraft, ConfirmationSignal, FormMode, FormSignal, ResourceId};

pub(crate) struct Categories;

impl AdminResource for Categories {
    type Item = Category;
    type Draft = CategoryDraft;

    const NAME: &'static str = "Category";
    const PATH: &'static str = "/api/categories";
    const MUTATION_POLICY: SessionPolicy = SessionPolicy::ForceLogout;

    fn set_list(items: Vec<Category>) -> Action {
        Action::SetCategories(items)
    }
    fn set_created(item: Category) -> Action {
        Action::SetCategoryCreated(item)
    }
    fn set_updated(item: Category) -> Action {
        Action::SetCategoryUpdated(item)
    }
    fn set_deleted(id: ResourceId) -> Action {
        Action::SetCategoryDeleted(id)
    }
    fn form(signal: FormSignal<CategoryDraft>) -> Action {
        Action::CategoryForm(signal)
    }
    fn delete_confirmation(signal: ConfirmationSignal) -> Action {
        Action::CategoryDeleteConfirmation(signal)
    }
    fn assign_id(draft: &mut CategoryDraft, id: ResourceId) {
        draft.id = Some(id);
    }
}

/// Fetch all categories
///
/// **What it does**: GET `/api/categories` and replaces the list
/// **Returns**: The classified failure, already surfaced to the banner or log
pub async fn fetch_categories(app_core: &Arc<RwLock<AppCore>>) -> Result<(), ApiError> {
    resource::fetch_list::<Categories>(app_core).await
}

/// Create a category
///
/// **What it does**: POST `/api/categories`; on success closes the form,
/// flashes "Category was created successfully." and prepends the result
pub async fn submit_category_create(
    app_core: &Arc<RwLock<AppCore>>,
    draft: &CategoryDraft,
) -> Result<(), ApiError> {
    resource::submit_create::<Categories>(app_core, draft).await
}

/// Update a category
///
/// **What it does**: PUT `/api/categories/{id}`; on success closes the form,
/// flashes and patches the list
pub async fn submit_category_edit(
    app_core: &Arc<RwLock<AppCore>>,
    id: ResourceId,
    draft: CategoryDraft,
) -> Result<(), ApiError> {
    resource::submit_edit::<Categories>(app_core, id, draft).await
}

/// Delete a category
///
/// **What it does**: DELETE `/api/categories/{id}`; on success closes the
/// confirmation, flashes and drops the entry
pub async fn submit_category_delete(
    app_core: &Arc<RwLock<AppCore>>,
    id: ResourceId,
) -> Result<(), ApiError> {
    resource::submit_delete::<Categories>(app_core, id).await
}

/// Toggle the category form.
pub async fn toggle_category_form(
    app_core: &Arc<RwLock<AppCore>>,
    mode: FormMode,
    initial: CategoryDraft,
) {
    dispatch(app_core, Action::CategoryForm(FormSignal::Toggle { mode, initial })).await;
}

/// Toggle the category delete confirmation.
pub async fn toggle_category_delete_confirmation(app_core: &Arc<RwLock<AppCore>>, id: ResourceId) {
    dispatch(
        app_core,
        Action::CategoryDeleteConfirmation(ConfirmationSignal::Toggle(id)),
    )
    .await;
}
