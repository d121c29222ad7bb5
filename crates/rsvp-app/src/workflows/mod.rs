//! # Workflows - Portable Business Logic
//!
//! This module is the HTTP action layer: each workflow performs one REST
//! call and translates the outcome into state-update actions. Workflows are
//! portable across frontends (CLI today, anything that can hold an
//! `Arc<RwLock<AppCore>>` tomorrow).
//!
//! ## Architecture
//!
//! Workflows follow the "what to do" / "how to display it" separation:
//! - **Workflows (rsvp-app)**: Requests, status handling, dispatch
//! - **Handlers (rsvp-cli)**: Rendering of the resulting view state
//!
//! ## Design Patterns
//!
//! **1. AppCore Integration**
//! - All workflows take an `&Arc<RwLock<AppCore>>` reference
//! - The REST client is cloned out under a read lock; the lock is never
//!   held across a request
//! - State changes go through `AppCore::dispatch`, in the order
//!   visibility → notice → data
//!
//! **2. Error Handling**
//! - Failures are surfaced to the banner (session, validation, server) or
//!   the log (transport, decode) before returning
//! - The classified [`crate::errors::ApiError`] is still returned so a
//!   caller can branch on it; ignoring it is always safe
//!
//! ## Example
//!
//! ```rust,ignore
//! // Workflow (rsvp-app) - "what to do"
//! submit_category_create(&app_core, &CategoryDraft::new("Family")).await?;
//!
//! // Handler (rsvp-cli) - "how to display it"
//! let state = app_core.read().await.snapshot();
//! println!("{}", render_notice(&state));
//! ```

pub mod categories;
pub mod guest;
pub mod invitations;
pub mod notice;
pub mod rsvps;
pub mod session;
pub mod state_helpers;
pub mod system;

mod resource;

pub use categories::{
    fetch_categories, submit_category_create, submit_category_delete, submit_category_edit,
    toggle_category_delete_confirmation, toggle_category_form,
};
pub use guest::{fetch_guest_rsvp, submit_guest_rsvp, submit_private_rsvp};
pub use invitations::{
    fetch_invitations, send_invitation_sms, share_invitation, submit_invitation_create,
    submit_invitation_delete, submit_invitation_edit, toggle_invitation_delete_confirmation,
    toggle_invitation_form,
};
pub use notice::{clear_notice, flash_notice, SessionPolicy};
pub use rsvps::{
    fetch_rsvps, submit_rsvp_create, submit_rsvp_delete, submit_rsvp_edit,
    toggle_rsvp_delete_confirmation, toggle_rsvp_form,
};
pub use session::{login_user, logout_user};
pub use system::{check_health, navigate};
