//! # View Reducer
//!
//! Reduces actions into view state.
//!
//! ```text
//! Workflow → Action → [Reduce] → ViewState → Subscribers
//! ```
//!
//! Every slice transition is a pure function of the previous slice and the
//! action. The reducer takes the previous state by value and returns the
//! next one; nothing is mutated behind a shared reference.

use super::action::Action;
use crate::views::{FormSignal, ViewState};

/// Apply one action to the state.
pub fn reduce(state: ViewState, action: Action) -> ViewState {
    let mut next = state;

    match action {
        // Categories
        Action::SetCategories(items) => {
            next.categories = next.categories.set_list(items);
        }
        Action::SetCategoryUpdated(item) => {
            next.categories = next.categories.set_updated(item);
        }
        Action::SetCategoryCreated(item) => {
            next.categories = next.categories.set_created(item);
        }
        Action::SetCategoryDeleted(id) => {
            next.categories = next.categories.set_deleted(id);
        }
        Action::CategoryForm(signal) => {
            next.category_form = next.category_form.apply(signal);
        }
        Action::CategoryDeleteConfirmation(signal) => {
            next.category_delete = next.category_delete.apply(signal);
        }

        // Invitations
        Action::SetInvitations(items) => {
            next.invitations = next.invitations.set_list(items);
        }
        Action::SetInvitationUpdated(item) => {
            next.invitations = next.invitations.set_updated(item);
        }
        Action::SetInvitationCreated(item) => {
            next.invitations = next.invitations.set_created(item);
        }
        Action::SetInvitationDeleted(id) => {
            next.invitations = next.invitations.set_deleted(id);
        }
        Action::InvitationForm(signal) => {
            let signal = match signal {
                FormSignal::Toggle { mode, initial } => FormSignal::Toggle {
                    mode,
                    initial: initial.with_default_guest_count(),
                },
                FormSignal::Dismiss => FormSignal::Dismiss,
            };
            next.invitation_form = next.invitation_form.apply(signal);
        }
        Action::InvitationDeleteConfirmation(signal) => {
            next.invitation_delete = next.invitation_delete.apply(signal);
        }

        // RSVPs
        Action::SetRsvps(items) => {
            next.rsvps = next.rsvps.set_list(items);
        }
        Action::SetRsvpUpdated(item) => {
            next.rsvps = next.rsvps.set_updated(item);
        }
        Action::SetRsvpCreated(item) => {
            next.rsvps = next.rsvps.set_created(item);
        }
        Action::SetRsvpDeleted(id) => {
            next.rsvps = next.rsvps.set_deleted(id);
        }
        Action::RsvpForm(signal) => {
            next.rsvp_form = next.rsvp_form.apply(signal);
        }
        Action::RsvpDeleteConfirmation(signal) => {
            next.rsvp_delete = next.rsvp_delete.apply(signal);
        }

        // Guest
        Action::SetGuestRsvp(rsvp) => {
            next.guest_rsvp = Some(rsvp);
        }

        // Notices
        Action::SetOperationResult { result, generation } => {
            next.notice = next.notice.set(result, generation);
        }
        Action::UnsetOperationResult { generation } => {
            next.notice = next.notice.unset(generation);
        }

        // Session
        Action::LoginRequest => {
            next.auth.is_fetching = true;
            next.auth.error_message.clear();
        }
        Action::LoginSuccess { username } => {
            next.auth.is_fetching = false;
            next.auth.is_authenticated = true;
            next.auth.error_message.clear();
            next.auth.user = Some(username);
        }
        Action::LoginFailure { message } => {
            next.auth.is_fetching = false;
            next.auth.is_authenticated = false;
            next.auth.error_message = message;
            next.auth.user = None;
        }
        Action::LogoutRequest => {
            next.auth.is_fetching = true;
        }
        Action::LogoutSuccess => {
            next.auth.is_fetching = false;
            next.auth.is_authenticated = false;
            next.auth.user = None;
        }

        Action::Navigate(route) => {
            next.route = route;
        }
    }

    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::Route;
    use crate::views::{
        Category, CategoryDraft, ConfirmationSignal, FormMode, InvitationDraft, OperationResult,
    };

    fn run(actions: impl IntoIterator<Item = Action>) -> ViewState {
        actions.into_iter().fold(ViewState::default(), reduce)
    }

    #[test]
    fn test_category_lifecycle() {
        let state = run([
            Action::SetCategories(vec![Category::new(1, "Family")]),
            Action::SetCategoryCreated(Category::new(2, "Friends")),
            Action::SetCategoryUpdated(Category::new(1, "Relatives")),
            Action::SetCategoryDeleted(2),
        ]);
        let tags: Vec<_> = state.categories.iter().map(|c| c.tag.as_str()).collect();
        assert_eq!(tags, vec!["Relatives"]);
    }

    #[test]
    fn test_invitation_form_injects_default_guest_count() {
        let state = run([Action::InvitationForm(FormSignal::Toggle {
            mode: FormMode::Create,
            initial: InvitationDraft::default(),
        })]);
        let initial = state.invitation_form.initial_values().cloned().unwrap_or_default();
        assert_eq!(initial.maximum_guest_count, Some(1));
    }

    #[test]
    fn test_invitation_form_keeps_existing_guest_count() {
        let state = run([Action::InvitationForm(FormSignal::Toggle {
            mode: FormMode::Edit,
            initial: InvitationDraft {
                id: Some(3),
                maximum_guest_count: Some(6),
                ..InvitationDraft::default()
            },
        })]);
        assert_eq!(
            state.invitation_form.initial_values().and_then(|d| d.maximum_guest_count),
            Some(6)
        );
    }

    #[test]
    fn test_form_dismiss_after_success() {
        let state = run([
            Action::CategoryForm(FormSignal::Toggle {
                mode: FormMode::Create,
                initial: CategoryDraft::default(),
            }),
            Action::CategoryForm(FormSignal::Dismiss),
        ]);
        assert!(!state.category_form.is_visible());
    }

    #[test]
    fn test_delete_confirmation_toggle() {
        let state = run([Action::RsvpDeleteConfirmation(ConfirmationSignal::Toggle(8))]);
        assert_eq!(state.rsvp_delete.target(), Some(8));
        let state = reduce(state, Action::RsvpDeleteConfirmation(ConfirmationSignal::Dismiss));
        assert!(!state.rsvp_delete.is_visible());
    }

    #[test]
    fn test_login_transitions() {
        let state = run([Action::LoginRequest]);
        assert!(state.auth.is_fetching);

        let failed = reduce(
            state.clone(),
            Action::LoginFailure {
                message: "nope".into(),
            },
        );
        assert!(!failed.auth.is_fetching);
        assert!(!failed.auth.is_authenticated);
        assert_eq!(failed.auth.error_message, "nope");

        let ok = reduce(
            state,
            Action::LoginSuccess {
                username: "alice".into(),
            },
        );
        assert!(ok.auth.is_authenticated);
        assert_eq!(ok.auth.user.as_deref(), Some("alice"));

        let out = reduce(reduce(ok, Action::LogoutRequest), Action::LogoutSuccess);
        assert!(!out.auth.is_authenticated);
        assert!(!out.auth.is_fetching);
    }

    #[test]
    fn test_notice_generation_guard() {
        let state = run([
            Action::SetOperationResult {
                result: OperationResult::success("one"),
                generation: 1,
            },
            Action::SetOperationResult {
                result: OperationResult::success("two"),
                generation: 2,
            },
            Action::UnsetOperationResult {
                generation: Some(1),
            },
        ]);
        assert_eq!(state.notice.current().map(|n| n.message.as_str()), Some("two"));

        let state = reduce(state, Action::UnsetOperationResult { generation: None });
        assert!(state.notice.current().is_none());
    }

    #[test]
    fn test_navigate() {
        let state = run([Action::Navigate(Route::ControlPanel)]);
        assert_eq!(state.route, Route::ControlPanel);
    }
}
