//! # Notice View State
//!
//! The transient operation-result banner. At most one notice is held. Each
//! flash bumps a generation counter so a clear scheduled for an older notice
//! cannot remove a newer one.

use serde::{Deserialize, Serialize};

/// Outcome of a user-triggered operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationResult {
    /// Text shown in the banner
    pub message: String,
    /// Success or failure styling
    pub success: bool,
}

impl OperationResult {
    /// A success notice.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: true,
        }
    }

    /// A failure notice.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: false,
        }
    }
}

/// Notice slice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoticeState {
    current: Option<OperationResult>,
    generation: u64,
}

impl NoticeState {
    /// The notice being shown, if any.
    pub fn current(&self) -> Option<&OperationResult> {
        self.current.as_ref()
    }

    /// Generation of the last notice set.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Show `result`, superseding whatever was shown.
    #[must_use]
    pub fn set(self, result: OperationResult, generation: u64) -> Self {
        Self {
            current: Some(result),
            generation,
        }
    }

    /// Clear the notice.
    ///
    /// `Some(generation)` comes from an expiry timer and only clears the
    /// notice it was scheduled for. `None` is an explicit clear.
    #[must_use]
    pub fn unset(self, generation: Option<u64>) -> Self {
        match generation {
            Some(expected) if expected != self.generation => self,
            _ => Self {
                current: None,
                generation: self.generation,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stale_unset_is_inert() {
        let notice = NoticeState::default()
            .set(OperationResult::success("first"), 1)
            .set(OperationResult::failure("second"), 2)
            .unset(Some(1));
        assert_eq!(notice.current().map(|n| n.message.as_str()), Some("second"));
    }

    #[test]
    fn test_matching_unset_clears() {
        let notice = NoticeState::default()
            .set(OperationResult::success("first"), 1)
            .unset(Some(1));
        assert!(notice.current().is_none());
        assert_eq!(notice.generation(), 1);
    }

    #[test]
    fn test_explicit_unset_always_clears() {
        let notice = NoticeState::default()
            .set(OperationResult::success("first"), 5)
            .unset(None);
        assert!(notice.current().is_none());
    }
}
