//! # Delete Confirmation State
//!
//! A single pending delete confirmation per resource type.

use serde::{Deserialize, Serialize};

use super::collection::ResourceId;

/// Signals accepted by [`Confirmation::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfirmationSignal {
    /// Ask to confirm deleting this record, or close if already asking.
    Toggle(ResourceId),
    /// Close if open.
    Dismiss,
}

/// Delete confirmation visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Confirmation {
    /// Nothing pending
    #[default]
    Hidden,
    /// Waiting for the user to confirm deleting `target`
    Visible {
        /// Record to delete
        target: ResourceId,
    },
}

impl Confirmation {
    /// Same transition as the form state: any signal closes an open
    /// confirmation, `Toggle` opens a closed one.
    #[must_use]
    pub fn apply(self, signal: ConfirmationSignal) -> Self {
        match (self, signal) {
            (Confirmation::Visible { .. }, _) => Confirmation::Hidden,
            (Confirmation::Hidden, ConfirmationSignal::Toggle(target)) => {
                Confirmation::Visible { target }
            }
            (Confirmation::Hidden, ConfirmationSignal::Dismiss) => Confirmation::Hidden,
        }
    }

    /// Record awaiting confirmation.
    pub fn target(self) -> Option<ResourceId> {
        match self {
            Confirmation::Visible { target } => Some(target),
            Confirmation::Hidden => None,
        }
    }

    /// Whether the confirmation is shown.
    pub fn is_visible(self) -> bool {
        self.target().is_some()
    }
}
