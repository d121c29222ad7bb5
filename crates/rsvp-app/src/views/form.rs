//! # Form Visibility State
//!
//! One active form per resource type, as an explicit two-state machine.
//!
//! ```rust
//! use rsvp_app::views::{CategoryDraft, FormMode, FormSignal, FormState};
//!
//! let form = FormState::default().apply(FormSignal::Toggle {
//!     mode: FormMode::Create,
//!     initial: CategoryDraft::default(),
//! });
//! assert!(form.is_visible());
//!
//! let form = form.apply(FormSignal::Dismiss);
//! assert!(!form.is_visible());
//! ```

use serde::{Deserialize, Serialize};

/// Whether a form creates a new record or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormMode {
    /// Create a new record
    Create,
    /// Edit an existing record
    Edit,
}

/// Signals accepted by [`FormState::apply`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormSignal<D> {
    /// Open with the given mode and initial values, or close if open.
    Toggle {
        /// Create or edit
        mode: FormMode,
        /// Values the form starts with
        initial: D,
    },
    /// Close if open. Never opens a hidden form.
    Dismiss,
}

/// Visibility of a resource form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormState<D> {
    /// No form shown
    Hidden,
    /// Form shown with its mode and initial values
    Visible {
        /// Create or edit
        mode: FormMode,
        /// Values the form starts with
        initial: D,
    },
}

impl<D> Default for FormState<D> {
    fn default() -> Self {
        FormState::Hidden
    }
}

impl<D> FormState<D> {
    /// The single transition function.
    ///
    /// A visible form returns to hidden on any signal, regardless of
    /// payload. A hidden form opens on `Toggle` and ignores `Dismiss`.
    #[must_use]
    pub fn apply(self, signal: FormSignal<D>) -> Self {
        match (self, signal) {
            (FormState::Visible { .. }, _) => FormState::Hidden,
            (FormState::Hidden, FormSignal::Toggle { mode, initial }) => {
                FormState::Visible { mode, initial }
            }
            (FormState::Hidden, FormSignal::Dismiss) => FormState::Hidden,
        }
    }

    /// Shorthand for applying a `Toggle` signal.
    #[must_use]
    pub fn toggle(self, mode: FormMode, initial: D) -> Self {
        self.apply(FormSignal::Toggle { mode, initial })
    }

    /// Whether the form is shown.
    pub fn is_visible(&self) -> bool {
        matches!(self, FormState::Visible { .. })
    }

    /// Current mode, `None` while hidden.
    pub fn mode(&self) -> Option<FormMode> {
        match self {
            FormState::Visible { mode, .. } => Some(*mode),
            FormState::Hidden => None,
        }
    }

    /// Current initial values, `None` while hidden.
    pub fn initial_values(&self) -> Option<&D> {
        match self {
            FormState::Visible { initial, .. } => Some(initial),
            FormState::Hidden => None,
        }
    }
}
