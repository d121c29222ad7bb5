//! Root view state: every slice the frontends render from.

use serde::{Deserialize, Serialize};

use super::{
    AuthState, Category, CategoryDraft, Confirmation, FormState, GuestRsvp, Invitation,
    InvitationDraft, NoticeState, ResourceList, Rsvp, RsvpDraft,
};
use crate::routes::Route;

/// Complete application view state.
///
/// Produced only by the reducer; frontends receive immutable snapshots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    /// Categories list
    pub categories: ResourceList<Category>,
    /// Invitations list
    pub invitations: ResourceList<Invitation>,
    /// RSVPs list
    pub rsvps: ResourceList<Rsvp>,
    /// Reply shown on the guest page, `None` until loaded
    pub guest_rsvp: Option<GuestRsvp>,

    /// Category create/edit form
    pub category_form: FormState<CategoryDraft>,
    /// Invitation create/edit form
    pub invitation_form: FormState<InvitationDraft>,
    /// RSVP create/edit form
    pub rsvp_form: FormState<RsvpDraft>,

    /// Pending category delete
    pub category_delete: Confirmation,
    /// Pending invitation delete
    pub invitation_delete: Confirmation,
    /// Pending RSVP delete
    pub rsvp_delete: Confirmation,

    /// Operation-result banner
    pub notice: NoticeState,
    /// Login status
    pub auth: AuthState,
    /// Current screen
    pub route: Route,
}

impl ViewState {
    /// Initial state for a process that starts with `auth`.
    pub fn with_auth(auth: AuthState) -> Self {
        Self {
            auth,
            ..Self::default()
        }
    }
}
