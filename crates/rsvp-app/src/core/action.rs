//! # Actions: State-Update Signals
//!
//! An action is the only way view state changes. Workflows translate HTTP
//! outcomes into actions; frontends translate user input into actions.
//!
//! ## Flow
//!
//! ```text
//! UI event → Workflow → HTTP → Action → Reduce → ViewState → Subscribers
//! ```

use serde::{Deserialize, Serialize};

use crate::routes::Route;
use crate::views::{
    Category, CategoryDraft, ConfirmationSignal, FormSignal, GuestRsvp, Invitation,
    InvitationDraft, OperationResult, ResourceId, Rsvp, RsvpDraft,
};

/// A state-update signal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    // =========================================================================
    // Category Actions
    // =========================================================================
    /// Replace the category list after a fetch
    SetCategories(Vec<Category>),
    /// Patch one category in place
    SetCategoryUpdated(Category),
    /// Prepend a created category
    SetCategoryCreated(Category),
    /// Drop a deleted category
    SetCategoryDeleted(ResourceId),
    /// Category form visibility
    CategoryForm(FormSignal<CategoryDraft>),
    /// Category delete confirmation
    CategoryDeleteConfirmation(ConfirmationSignal),

    // =========================================================================
    // Invitation Actions
    // =========================================================================
    /// Replace the invitation list after a fetch
    SetInvitations(Vec<Invitation>),
    /// Patch one invitation in place
    SetInvitationUpdated(Invitation),
    /// Prepend a created invitation
    SetInvitationCreated(Invitation),
    /// Drop a deleted invitation
    SetInvitationDeleted(ResourceId),
    /// Invitation form visibility
    InvitationForm(FormSignal<InvitationDraft>),
    /// Invitation delete confirmation
    InvitationDeleteConfirmation(ConfirmationSignal),

    // =========================================================================
    // RSVP Actions
    // =========================================================================
    /// Replace the RSVP list after a fetch
    SetRsvps(Vec<Rsvp>),
    /// Patch one RSVP in place
    SetRsvpUpdated(Rsvp),
    /// Prepend a created RSVP
    SetRsvpCreated(Rsvp),
    /// Drop a deleted RSVP
    SetRsvpDeleted(ResourceId),
    /// RSVP form visibility
    RsvpForm(FormSignal<RsvpDraft>),
    /// RSVP delete confirmation
    RsvpDeleteConfirmation(ConfirmationSignal),

    // =========================================================================
    // Guest Actions
    // =========================================================================
    /// Replace the reply shown on the guest page
    SetGuestRsvp(GuestRsvp),

    // =========================================================================
    // Notice Actions
    // =========================================================================
    /// Show a notice, superseding the current one
    SetOperationResult {
        /// Notice content
        result: OperationResult,
        /// Generation assigned by the state container
        generation: u64,
    },
    /// Clear the notice
    UnsetOperationResult {
        /// `Some` from an expiry timer, `None` for an explicit clear
        generation: Option<u64>,
    },

    // =========================================================================
    // Session Actions
    // =========================================================================
    /// Login request sent
    LoginRequest,
    /// Login accepted
    LoginSuccess {
        /// Logged-in username
        username: String,
    },
    /// Login rejected
    LoginFailure {
        /// Text shown on the login screen
        message: String,
    },
    /// Logout request sent
    LogoutRequest,
    /// Session cleared locally
    LogoutSuccess,

    // =========================================================================
    // Navigation
    // =========================================================================
    /// Switch screens
    Navigate(Route),
}

impl Action {
    /// Short name for diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Action::SetCategories(_) => "set_categories",
            Action::SetCategoryUpdated(_) => "set_category_updated",
            Action::SetCategoryCreated(_) => "set_category_created",
            Action::SetCategoryDeleted(_) => "set_category_deleted",
            Action::CategoryForm(_) => "category_form",
            Action::CategoryDeleteConfirmation(_) => "category_delete_confirmation",
            Action::SetInvitations(_) => "set_invitations",
            Action::SetInvitationUpdated(_) => "set_invitation_updated",
            Action::SetInvitationCreated(_) => "set_invitation_created",
            Action::SetInvitationDeleted(_) => "set_invitation_deleted",
            Action::InvitationForm(_) => "invitation_form",
            Action::InvitationDeleteConfirmation(_) => "invitation_delete_confirmation",
            Action::SetRsvps(_) => "set_rsvps",
            Action::SetRsvpUpdated(_) => "set_rsvp_updated",
            Action::SetRsvpCreated(_) => "set_rsvp_created",
            Action::SetRsvpDeleted(_) => "set_rsvp_deleted",
            Action::RsvpForm(_) => "rsvp_form",
            Action::RsvpDeleteConfirmation(_) => "rsvp_delete_confirmation",
            Action::SetGuestRsvp(_) => "set_guest_rsvp",
            Action::SetOperationResult { .. } => "set_operation_result",
            Action::UnsetOperationResult { .. } => "unset_operation_result",
            Action::LoginRequest => "login_request",
            Action::LoginSuccess { .. } => "login_success",
            Action::LoginFailure { .. } => "login_failure",
            Action::LogoutRequest => "logout_request",
            Action::LogoutSuccess => "logout_success",
            Action::Navigate(_) => "navigate",
        }
    }
}
