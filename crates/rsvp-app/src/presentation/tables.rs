//! Control panel view models.
//!
//! Pure projections of [`ViewState`]: every frontend renders these instead
//! of reaching into the slices directly.

use serde::Serialize;

use super::format::{format_timestamp, private_link};
use crate::views::{
    Category, CategoryDraft, Confirmation, FormMode, FormState, Invitation, InvitationDraft,
    OperationResult, ResourceId, ResourceList, Rsvp, RsvpDraft, ViewState,
};

/// Shown when an invitation points at a category that is not loaded.
pub const UNKNOWN_CATEGORY: &str = "Unknown";

/// One row of the category table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryRow {
    /// Category id
    pub id: ResourceId,
    /// Display tag
    pub tag: String,
    /// Invitations in this category
    pub total: u32,
    /// Only empty categories can be deleted
    pub delete_enabled: bool,
}

impl From<&Category> for CategoryRow {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id,
            tag: category.tag.clone(),
            total: category.total,
            delete_enabled: category.is_deletable(),
        }
    }
}

/// One row of the invitation table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvitationRow {
    /// Invitation id
    pub id: ResourceId,
    /// Resolved category tag
    pub category: String,
    /// How the guests are addressed
    pub greeting: String,
    /// Seats offered
    pub maximum_guest_count: u32,
    /// Contact number
    pub mobile_phone_number: String,
    /// Admin notes
    pub notes: String,
    /// Status label
    pub status: &'static str,
    /// Last update, formatted
    pub updated: String,
    /// Guest-facing id
    pub private_id: String,
    /// Link sent to the guest
    pub private_link: String,
}

impl InvitationRow {
    /// Build a row, resolving the category tag from `categories`.
    pub fn new(
        invitation: &Invitation,
        categories: &ResourceList<Category>,
        public_base_url: &str,
    ) -> Self {
        Self {
            id: invitation.id,
            category: category_tag(categories, invitation.category_id),
            greeting: invitation.greeting.clone(),
            maximum_guest_count: invitation.maximum_guest_count,
            mobile_phone_number: invitation.mobile_phone_number.clone(),
            notes: invitation.notes.clone(),
            status: invitation.status.label(),
            updated: format_timestamp(&invitation.updated_at),
            private_id: invitation.private_id.clone(),
            private_link: private_link(public_base_url, &invitation.private_id),
        }
    }
}

/// One row of the RSVP table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RsvpRow {
    /// RSVP id
    pub id: ResourceId,
    /// Guest name
    pub full_name: String,
    /// "Yes" or "No"
    pub attending: &'static str,
    /// Guests attending
    pub guest_count: u32,
    /// "Yes" or "No"
    pub special_diet: &'static str,
    /// Free-text remarks
    pub remarks: String,
    /// Contact number
    pub mobile_phone_number: String,
    /// Invitation this reply answers
    pub invitation_private_id: String,
    /// Last update, formatted
    pub updated: String,
}

impl From<&Rsvp> for RsvpRow {
    fn from(rsvp: &Rsvp) -> Self {
        Self {
            id: rsvp.id,
            full_name: rsvp.full_name.clone(),
            attending: yes_no(rsvp.attending),
            guest_count: rsvp.guest_count,
            special_diet: yes_no(rsvp.special_diet),
            remarks: rsvp.remarks.clone(),
            mobile_phone_number: rsvp.mobile_phone_number.clone(),
            invitation_private_id: rsvp.invitation_private_id.clone(),
            updated: format_timestamp(&rsvp.updated_at),
        }
    }
}

pub(crate) fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

/// Tag of the category with `id`, or [`UNKNOWN_CATEGORY`].
pub fn category_tag(categories: &ResourceList<Category>, id: ResourceId) -> String {
    categories
        .iter()
        .find(|category| category.id == id)
        .map_or_else(|| UNKNOWN_CATEGORY.to_string(), |category| category.tag.clone())
}

/// Notice banner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoticeBanner {
    /// Text to show
    pub message: String,
    /// Success or failure styling
    pub success: bool,
}

impl From<&OperationResult> for NoticeBanner {
    fn from(result: &OperationResult) -> Self {
        Self {
            message: result.message.clone(),
            success: result.success,
        }
    }
}

/// Delete confirmation modal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteModal {
    /// Id of the item to delete
    pub target: ResourceId,
    /// Confirmation question
    pub prompt: String,
}

fn delete_modal(
    confirmation: &Confirmation,
    resource: &str,
    label: Option<String>,
) -> Option<DeleteModal> {
    let target = confirmation.target()?;
    let prompt = match label {
        Some(label) => format!("Are you sure you want to delete {resource} \"{label}\"?"),
        None => format!("Are you sure you want to delete this {resource}?"),
    };
    Some(DeleteModal { target, prompt })
}

/// Open form with its title and prefilled values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormView<D> {
    /// Create or edit
    pub mode: FormMode,
    /// Heading, e.g. "Edit Category"
    pub title: String,
    /// Prefilled values
    pub initial: D,
}

fn form_view<D: Clone>(form: &FormState<D>, resource: &str) -> Option<FormView<D>> {
    let mode = form.mode()?;
    let initial = form.initial_values()?.clone();
    let verb = match mode {
        FormMode::Create => "Create",
        FormMode::Edit => "Edit",
    };
    Some(FormView {
        mode,
        title: format!("{verb} {resource}"),
        initial,
    })
}

/// Everything the control panel shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ControlPanelView {
    /// Logged-in username
    pub user: Option<String>,
    /// Current notice, if any
    pub notice: Option<NoticeBanner>,
    /// Category table
    pub categories: Vec<CategoryRow>,
    /// Invitation table
    pub invitations: Vec<InvitationRow>,
    /// RSVP table
    pub rsvps: Vec<RsvpRow>,
    /// Open category form
    pub category_form: Option<FormView<CategoryDraft>>,
    /// Open invitation form
    pub invitation_form: Option<FormView<InvitationDraft>>,
    /// Open RSVP form
    pub rsvp_form: Option<FormView<RsvpDraft>>,
    /// Pending category deletion
    pub category_delete: Option<DeleteModal>,
    /// Pending invitation deletion
    pub invitation_delete: Option<DeleteModal>,
    /// Pending RSVP deletion
    pub rsvp_delete: Option<DeleteModal>,
}

impl ControlPanelView {
    /// Project the control panel out of `state`.
    pub fn from_state(state: &ViewState, public_base_url: &str) -> Self {
        Self {
            user: state.auth.user.clone(),
            notice: notice_banner(state),
            categories: category_rows(state),
            invitations: invitation_rows(state, public_base_url),
            rsvps: rsvp_rows(state),
            category_form: form_view(&state.category_form, "Category"),
            invitation_form: form_view(&state.invitation_form, "Invitation"),
            rsvp_form: form_view(&state.rsvp_form, "RSVP"),
            category_delete: delete_modal(
                &state.category_delete,
                "category",
                state
                    .category_delete
                    .target()
                    .and_then(|id| state.categories.get(id))
                    .map(|category| category.tag.clone()),
            ),
            invitation_delete: delete_modal(
                &state.invitation_delete,
                "invitation",
                state
                    .invitation_delete
                    .target()
                    .and_then(|id| state.invitations.get(id))
                    .map(|invitation| invitation.greeting.clone()),
            ),
            rsvp_delete: delete_modal(
                &state.rsvp_delete,
                "RSVP",
                state
                    .rsvp_delete
                    .target()
                    .and_then(|id| state.rsvps.get(id))
                    .map(|rsvp| rsvp.full_name.clone()),
            ),
        }
    }
}

/// Current notice, if any.
pub fn notice_banner(state: &ViewState) -> Option<NoticeBanner> {
    state.notice.current().map(NoticeBanner::from)
}

/// Category table rows in list order.
pub fn category_rows(state: &ViewState) -> Vec<CategoryRow> {
    state.categories.iter().map(CategoryRow::from).collect()
}

/// Invitation table rows with resolved category tags.
pub fn invitation_rows(state: &ViewState, public_base_url: &str) -> Vec<InvitationRow> {
    state
        .invitations
        .iter()
        .map(|invitation| InvitationRow::new(invitation, &state.categories, public_base_url))
        .collect()
}

/// RSVP table rows in list order.
pub fn rsvp_rows(state: &ViewState) -> Vec<RsvpRow> {
    state.rsvps.iter().map(RsvpRow::from).collect()
}
