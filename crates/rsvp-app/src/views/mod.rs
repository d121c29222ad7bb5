//! # View State Module
//!
//! This module contains the view state types that represent the current
//! application state. These types are plain data and can be:
//!
//! - Serialized for debugging
//! - Cloned into snapshots for subscribers
//! - Rendered by any frontend through [`crate::presentation`]

mod state;

pub mod auth;
pub mod categories;
pub mod collection;
pub mod confirmation;
pub mod form;
pub mod guest;
pub mod invitations;
pub mod notifications;
pub mod rsvps;

pub use state::ViewState;

// Re-export state types for convenience
pub use auth::{AuthState, Credentials, SessionGrant};
pub use categories::{Category, CategoryDraft};
pub use collection::{Identified, ResourceId, ResourceList};
pub use confirmation::{Confirmation, ConfirmationSignal};
pub use form::{FormMode, FormSignal, FormState};
pub use guest::{GuestRsvp, GuestRsvpSubmission};
pub use invitations::{Invitation, InvitationDraft, InvitationStatus};
pub use notifications::{NoticeState, OperationResult};
pub use rsvps::{Rsvp, RsvpDraft};
