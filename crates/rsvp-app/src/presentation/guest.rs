//! Guest page view model.

use serde::Serialize;

use super::tables::{notice_banner, yes_no, NoticeBanner};
use crate::views::{GuestRsvp, ViewState};

/// Prompt above the guest form.
pub const FORM_PROMPT: &str = "Kindly complete the form to RSVP";

/// Closing line of the acknowledgment.
pub const ACKNOWLEDGMENT_THANKS: &str =
    "Thank you for RSVP-ing! If there are any changes to be made, please contact the Bride or Groom";

/// Read-only summary shown once a reply is on file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Acknowledgment {
    /// "Dear {name} -"
    pub salutation: String,
    /// Closing line
    pub thanks: &'static str,
    /// `(label, value)` pairs in display order
    pub details: Vec<(&'static str, String)>,
}

impl From<&GuestRsvp> for Acknowledgment {
    fn from(rsvp: &GuestRsvp) -> Self {
        let mut details = vec![("Attending", yes_no(rsvp.attending).to_string())];
        if rsvp.attending {
            details.push(("Guest Count", rsvp.guest_count.to_string()));
            details.push(("Special Diet", yes_no(rsvp.special_diet).to_string()));
            details.push(("Remarks", rsvp.remarks.clone()));
        }
        Self {
            salutation: format!("Dear {} -", rsvp.full_name),
            thanks: ACKNOWLEDGMENT_THANKS,
            details,
        }
    }
}

/// What the guest page shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum GuestPage {
    /// Nothing loaded yet
    Landing,
    /// The invitation already has a reply
    Acknowledgment(Acknowledgment),
    /// Editable form, prefilled with the loaded values
    Form {
        /// Heading above the form
        prompt: &'static str,
        /// Current field values
        values: GuestRsvp,
    },
}

impl GuestPage {
    /// Pick the page for the loaded guest reply.
    pub fn from_state(state: &ViewState) -> Self {
        match &state.guest_rsvp {
            None => GuestPage::Landing,
            Some(rsvp) if rsvp.completed => GuestPage::Acknowledgment(Acknowledgment::from(rsvp)),
            Some(rsvp) => GuestPage::Form {
                prompt: FORM_PROMPT,
                values: rsvp.clone(),
            },
        }
    }
}

/// Guest page plus the notice banner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuestView {
    /// Current notice, if any
    pub notice: Option<NoticeBanner>,
    /// Landing, acknowledgment or form
    pub page: GuestPage,
}

impl GuestView {
    /// Project the guest page out of `state`.
    pub fn from_state(state: &ViewState) -> Self {
        Self {
            notice: notice_banner(state),
            page: GuestPage::from_state(state),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded(rsvp: GuestRsvp) -> ViewState {
        ViewState {
            guest_rsvp: Some(rsvp),
            ..ViewState::default()
        }
    }

    #[test]
    fn test_landing_when_nothing_loaded() {
        assert_eq!(GuestPage::from_state(&ViewState::default()), GuestPage::Landing);
    }

    #[test]
    fn test_form_is_prefilled() {
        let rsvp = GuestRsvp {
            full_name: "Jane".into(),
            ..GuestRsvp::unanswered()
        };
        match GuestPage::from_state(&loaded(rsvp.clone())) {
            GuestPage::Form { prompt, values } => {
                assert_eq!(prompt, FORM_PROMPT);
                assert_eq!(values, rsvp);
            }
            other => panic!("expected form, got {other:?}"),
        }
    }

    #[test]
    fn test_acknowledgment_for_attending_guest() {
        let rsvp = GuestRsvp {
            full_name: "Jane".into(),
            guest_count: 2,
            special_diet: true,
            remarks: "Vegetarian".into(),
            completed: true,
            ..GuestRsvp::unanswered()
        };
        let GuestPage::Acknowledgment(ack) = GuestPage::from_state(&loaded(rsvp)) else {
            panic!("expected acknowledgment");
        };
        assert_eq!(ack.salutation, "Dear Jane -");
        assert_eq!(
            ack.details,
            vec![
                ("Attending", "Yes".to_string()),
                ("Guest Count", "2".to_string()),
                ("Special Diet", "Yes".to_string()),
                ("Remarks", "Vegetarian".to_string()),
            ]
        );
    }

    #[test]
    fn test_acknowledgment_for_absent_guest_hides_details() {
        let rsvp = GuestRsvp {
            full_name: "Jane".into(),
            attending: false,
            completed: true,
            ..GuestRsvp::unanswered()
        };
        let ack = Acknowledgment::from(&rsvp);
        assert_eq!(ack.details, vec![("Attending", "No".to_string())]);
    }
}
