//! # Guest RSVP View State
//!
//! The reply an unauthenticated guest sees and edits. Loaded either from the
//! server by invitation private id, or filled with client defaults when the
//! guest arrives without one.

use serde::{Deserialize, Serialize};

/// The guest-visible subset of an RSVP plus its completion flag.
///
/// Older payloads used `ableToAttend`, `numberAttending` and
/// `specialDietaryRequirements`; both spellings are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestRsvp {
    /// Private id of the invitation, empty for public replies
    #[serde(rename = "invitationPrivateID", default)]
    pub invitation_private_id: String,
    /// Name the guest signs with
    #[serde(default)]
    pub full_name: String,
    /// Whether the party attends
    #[serde(alias = "ableToAttend", default = "default_attending")]
    pub attending: bool,
    /// Number of attendees
    #[serde(alias = "numberAttending", default = "default_guest_count")]
    pub guest_count: u32,
    /// Special dietary requirements flagged
    #[serde(alias = "specialDietaryRequirements", default)]
    pub special_diet: bool,
    /// Free-form remarks
    #[serde(default)]
    pub remarks: String,
    /// Contact number
    #[serde(default)]
    pub mobile_phone_number: String,
    /// The guest has already replied
    #[serde(default)]
    pub completed: bool,
}

fn default_attending() -> bool {
    true
}

fn default_guest_count() -> u32 {
    1
}

impl GuestRsvp {
    /// Client defaults for a guest who has not replied yet: attending,
    /// one guest, no special diet.
    pub fn unanswered() -> Self {
        Self {
            invitation_private_id: String::new(),
            full_name: String::new(),
            attending: default_attending(),
            guest_count: default_guest_count(),
            special_diet: false,
            remarks: String::new(),
            mobile_phone_number: String::new(),
            completed: false,
        }
    }
}

impl Default for GuestRsvp {
    fn default() -> Self {
        Self::unanswered()
    }
}

/// Body of `POST /api/p_rsvps`.
///
/// Public replies leave `invitation_private_id` empty; private replies are
/// addressed by the invitation's private id. Both carry an anti-bot token.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestRsvpSubmission {
    /// Private id of the invitation, empty for public replies
    #[serde(rename = "invitationPrivateID", default)]
    pub invitation_private_id: String,
    /// Name the guest signs with
    pub full_name: String,
    /// Whether the party attends
    pub attending: bool,
    /// Number of attendees
    pub guest_count: u32,
    /// Special dietary requirements flagged
    pub special_diet: bool,
    /// Free-form remarks
    #[serde(default)]
    pub remarks: String,
    /// Contact number
    #[serde(default)]
    pub mobile_phone_number: String,
    /// Anti-bot challenge token
    #[serde(rename = "reCAPTCHA", default)]
    pub recaptcha: String,
}

impl GuestRsvpSubmission {
    /// Start a submission from the values currently shown to the guest.
    pub fn from_guest(rsvp: &GuestRsvp, recaptcha: impl Into<String>) -> Self {
        Self {
            invitation_private_id: rsvp.invitation_private_id.clone(),
            full_name: rsvp.full_name.clone(),
            attending: rsvp.attending,
            guest_count: rsvp.guest_count,
            special_diet: rsvp.special_diet,
            remarks: rsvp.remarks.clone(),
            mobile_phone_number: rsvp.mobile_phone_number.clone(),
            recaptcha: recaptcha.into(),
        }
    }
}

impl std::fmt::Debug for GuestRsvpSubmission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GuestRsvpSubmission")
            .field("invitation_private_id", &self.invitation_private_id)
            .field("full_name", &self.full_name)
            .field("attending", &self.attending)
            .field("guest_count", &self.guest_count)
            .field("special_diet", &self.special_diet)
            .field("recaptcha", &"<redacted>")
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unanswered_defaults() {
        let rsvp = GuestRsvp::unanswered();
        assert!(rsvp.attending);
        assert_eq!(rsvp.guest_count, 1);
        assert!(!rsvp.special_diet);
        assert!(!rsvp.completed);
    }

    #[test]
    fn test_accepts_legacy_field_names() {
        let json = r#"{"ableToAttend": false, "numberAttending": 3, "specialDietaryRequirements": true}"#;
        let rsvp: GuestRsvp = serde_json::from_str(json).unwrap();
        assert!(!rsvp.attending);
        assert_eq!(rsvp.guest_count, 3);
        assert!(rsvp.special_diet);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let rsvp: GuestRsvp = serde_json::from_str(r#"{"fullName": "Jo"}"#).unwrap();
        assert_eq!(rsvp, GuestRsvp {
            full_name: "Jo".into(),
            ..GuestRsvp::unanswered()
        });
    }

    #[test]
    fn test_submission_wire_names() {
        let submission = GuestRsvpSubmission::from_guest(&GuestRsvp::unanswered(), "token");
        let value = serde_json::to_value(&submission).unwrap();
        assert_eq!(value["reCAPTCHA"], "token");
        assert_eq!(value["invitationPrivateID"], "");
        assert_eq!(value["guestCount"], 1);
    }

    #[test]
    fn test_debug_hides_token() {
        let submission = GuestRsvpSubmission::from_guest(&GuestRsvp::unanswered(), "secret-token");
        assert!(!format!("{submission:?}").contains("secret-token"));
    }
}
