//! Form validation
//!
//! Field-level checks run before a form is submitted. Each validator returns
//! the full set of per-field errors; an empty set means the form may be
//! submitted. All frontends should use these instead of implementing their
//! own checks.
//!
//! ```rust
//! use rsvp_app::presentation::validation::validate_category;
//! use rsvp_app::views::CategoryDraft;
//!
//! assert!(validate_category(&CategoryDraft::new("Family")).is_empty());
//! assert!(validate_category(&CategoryDraft::new("")).get("tag").is_some());
//! ```

use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use crate::views::{CategoryDraft, GuestRsvpSubmission, InvitationDraft, RsvpDraft};

/// Category tag length
pub const TAG_LENGTH: RangeInclusive<usize> = 1..=100;
/// Invitation greeting length
pub const GREETING_LENGTH: RangeInclusive<usize> = 2..=20;
/// Guest count, for invitations and RSVPs
pub const GUEST_COUNT: RangeInclusive<u32> = 1..=10;
/// Longest invitation phone number
pub const INVITATION_PHONE_MAX: usize = 20;
/// Longest notes or remarks
pub const NOTES_MAX: usize = 500;
/// RSVP full name length
pub const FULL_NAME_LENGTH: RangeInclusive<usize> = 2..=100;
/// RSVP phone number length
pub const PHONE_LENGTH: RangeInclusive<usize> = 8..=20;

/// Per-field validation errors, keyed by wire field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<&'static str, String>,
}

impl FieldErrors {
    /// No errors: the form may be submitted.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Error for one field.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    /// All errors in field-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.errors.iter().map(|(field, message)| (*field, message.as_str()))
    }

    /// Number of failing fields.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    fn insert(&mut self, field: &'static str, message: String) {
        self.errors.insert(field, message);
    }

    /// `Ok` when empty, otherwise the errors.
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// Validate the category form.
pub fn validate_category(draft: &CategoryDraft) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if !TAG_LENGTH.contains(&char_len(&draft.tag)) {
        errors.insert(
            "tag",
            format!(
                "Please enter a tag between {} to {} characters long",
                TAG_LENGTH.start(),
                TAG_LENGTH.end()
            ),
        );
    }

    errors
}

/// Validate the invitation form.
pub fn validate_invitation(draft: &InvitationDraft) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if draft.category_id.is_none() {
        errors.insert("categoryID", "Please choose a category".to_string());
    }

    if !GREETING_LENGTH.contains(&char_len(&draft.greeting)) {
        errors.insert(
            "greeting",
            format!(
                "Please enter a greeting between {} to {} characters long",
                GREETING_LENGTH.start(),
                GREETING_LENGTH.end()
            ),
        );
    }

    if !draft
        .maximum_guest_count
        .is_some_and(|count| GUEST_COUNT.contains(&count))
    {
        errors.insert(
            "maximumGuestCount",
            format!(
                "Please choose a maximum guest count between {} to {}",
                GUEST_COUNT.start(),
                GUEST_COUNT.end()
            ),
        );
    }

    if char_len(&draft.mobile_phone_number) > INVITATION_PHONE_MAX {
        errors.insert(
            "mobilePhoneNumber",
            format!("Please enter a mobile phone number less than {INVITATION_PHONE_MAX} numbers"),
        );
    }

    if char_len(&draft.notes) > NOTES_MAX {
        errors.insert(
            "notes",
            format!("Please enter some notes no longer than {NOTES_MAX} characters in length"),
        );
    }

    errors
}

/// Validate the admin RSVP form.
pub fn validate_rsvp(draft: &RsvpDraft) -> FieldErrors {
    let mut errors = FieldErrors::default();

    check_full_name(&mut errors, &draft.full_name);

    if !GUEST_COUNT.contains(&draft.guest_count) {
        errors.insert(
            "guestCount",
            format!(
                "Please choose a guest count between {} to {}",
                GUEST_COUNT.start(),
                GUEST_COUNT.end()
            ),
        );
    }

    check_remarks(&mut errors, &draft.remarks);
    check_phone(&mut errors, &draft.mobile_phone_number);

    errors
}

/// Validate the guest RSVP form, including the anti-bot token.
pub fn validate_guest_rsvp(submission: &GuestRsvpSubmission) -> FieldErrors {
    let mut errors = FieldErrors::default();

    check_full_name(&mut errors, &submission.full_name);
    check_remarks(&mut errors, &submission.remarks);
    check_phone(&mut errors, &submission.mobile_phone_number);

    if submission.recaptcha.trim().is_empty() {
        errors.insert("reCAPTCHA", "Please click on the checkbox".to_string());
    }

    errors
}

fn check_full_name(errors: &mut FieldErrors, full_name: &str) {
    if !FULL_NAME_LENGTH.contains(&char_len(full_name)) {
        errors.insert(
            "fullName",
            format!(
                "Please enter a name between {} to {} characters long",
                FULL_NAME_LENGTH.start(),
                FULL_NAME_LENGTH.end()
            ),
        );
    }
}

fn check_remarks(errors: &mut FieldErrors, remarks: &str) {
    if char_len(remarks) > NOTES_MAX {
        errors.insert(
            "remarks",
            format!("Please enter some remarks no longer than {NOTES_MAX} characters in length"),
        );
    }
}

fn check_phone(errors: &mut FieldErrors, phone: &str) {
    if !PHONE_LENGTH.contains(&char_len(phone)) {
        errors.insert(
            "mobilePhoneNumber",
            format!(
                "Please enter a mobile phone number between {} to {} in length",
                PHONE_LENGTH.start(),
                PHONE_LENGTH.end()
            ),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::GuestRsvp;

    fn valid_invitation() -> InvitationDraft {
        InvitationDraft {
            category_id: Some(1),
            greeting: "Mr and Mrs Tan".into(),
            maximum_guest_count: Some(2),
            ..InvitationDraft::default()
        }
    }

    fn valid_rsvp() -> RsvpDraft {
        RsvpDraft {
            full_name: "Jane Lim".into(),
            mobile_phone_number: "91234567".into(),
            ..RsvpDraft::default()
        }
    }

    #[test]
    fn test_category_tag_bounds() {
        assert!(validate_category(&CategoryDraft::new("x")).is_empty());
        assert!(!validate_category(&CategoryDraft::new("")).is_empty());
        assert!(!validate_category(&CategoryDraft::new("x".repeat(101))).is_empty());
        assert!(validate_category(&CategoryDraft::new("x".repeat(100))).is_empty());
    }

    #[test]
    fn test_invitation_valid() {
        assert!(validate_invitation(&valid_invitation()).is_empty());
    }

    #[test]
    fn test_invitation_failures_are_per_field() {
        let draft = InvitationDraft {
            category_id: None,
            greeting: "A".into(),
            maximum_guest_count: Some(11),
            notes: "n".repeat(501),
            mobile_phone_number: "1".repeat(21),
            ..InvitationDraft::default()
        };
        let errors = validate_invitation(&draft);
        assert_eq!(errors.len(), 5);
        assert_eq!(
            errors.get("greeting"),
            Some("Please enter a greeting between 2 to 20 characters long")
        );
        assert!(errors.get("maximumGuestCount").is_some());
    }

    #[test]
    fn test_invitation_guest_count_required() {
        let draft = InvitationDraft {
            maximum_guest_count: None,
            ..valid_invitation()
        };
        assert!(validate_invitation(&draft).get("maximumGuestCount").is_some());
    }

    #[test]
    fn test_rsvp_rules() {
        assert!(validate_rsvp(&valid_rsvp()).is_empty());

        let draft = RsvpDraft {
            guest_count: 0,
            mobile_phone_number: "123".into(),
            ..valid_rsvp()
        };
        let errors = validate_rsvp(&draft);
        assert!(errors.get("guestCount").is_some());
        assert!(errors.get("mobilePhoneNumber").is_some());
        assert!(errors.get("fullName").is_none());
    }

    #[test]
    fn test_guest_requires_token() {
        let rsvp = GuestRsvp {
            invitation_private_id: "p-1".into(),
            full_name: "Jane Lim".into(),
            mobile_phone_number: "91234567".into(),
            ..GuestRsvp::unanswered()
        };

        let without = GuestRsvpSubmission::from_guest(&rsvp, "");
        assert_eq!(
            validate_guest_rsvp(&without).get("reCAPTCHA"),
            Some("Please click on the checkbox")
        );

        let with = GuestRsvpSubmission::from_guest(&rsvp, "token");
        assert!(validate_guest_rsvp(&with).is_empty());
    }

    #[test]
    fn test_display_joins_fields() {
        let errors = validate_category(&CategoryDraft::new(""));
        assert_eq!(
            errors.to_string(),
            "tag: Please enter a tag between 1 to 100 characters long"
        );
        assert!(errors.into_result().is_err());
    }
}
