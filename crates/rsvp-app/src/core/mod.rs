//! # Core Application Module
//!
//! This module contains the core application types and logic:
//!
//! - [`AppCore`]: The state container and main entry point
//! - [`Action`]: State-update signals
//! - [`reduce`]: The pure reducer from (state, action) to state

mod action;
mod app;
mod reducer;

pub use action::Action;
pub use app::AppCore;
pub use reducer::reduce;
