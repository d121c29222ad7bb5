//! # Presentation
//!
//! Framework-agnostic view layer. Everything here is computed from a
//! [`crate::views::ViewState`] snapshot or runs before a workflow:
//!
//! - `tables` / `guest`: view models frontends render
//! - `format`: timestamps, private links and share text
//! - `validation`: per-field form checks that block submission
//! - `events`: UI handlers that validate, guard and then call workflows

pub mod events;
pub mod format;
pub mod guest;
pub mod tables;
pub mod validation;

pub use events::SelectionError;
pub use events::SubmitError;
pub use guest::{Acknowledgment, GuestPage, GuestView};
pub use tables::{
    CategoryRow, ControlPanelView, DeleteModal, FormView, InvitationRow, NoticeBanner, RsvpRow,
};
pub use validation::FieldErrors;
