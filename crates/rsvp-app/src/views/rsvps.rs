//! # RSVPs View State
//!
//! Guest replies as seen from the control panel.

use serde::{Deserialize, Serialize};

use super::collection::{Identified, ResourceId};

/// An RSVP as returned by the admin endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rsvp {
    /// Server-assigned identifier
    pub id: ResourceId,
    /// Private id of the invitation this reply belongs to
    #[serde(rename = "invitationPrivateID", default)]
    pub invitation_private_id: String,
    /// Name the guest signed with
    pub full_name: String,
    /// Whether the party attends
    pub attending: bool,
    /// Number of attendees
    pub guest_count: u32,
    /// Special dietary requirements flagged
    #[serde(default)]
    pub special_diet: bool,
    /// Free-form remarks
    #[serde(default)]
    pub remarks: String,
    /// Contact number
    #[serde(default)]
    pub mobile_phone_number: String,
    /// Last modification time (RFC 3339)
    #[serde(default)]
    pub updated_at: String,
}

impl Identified for Rsvp {
    fn id(&self) -> ResourceId {
        self.id
    }
}

/// Editable RSVP fields for the admin form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RsvpDraft {
    /// Present when editing an existing RSVP
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ResourceId>,
    /// Private id of the invitation, set at creation
    #[serde(rename = "invitationPrivateID", default)]
    pub invitation_private_id: String,
    /// Name the guest signed with
    #[serde(default)]
    pub full_name: String,
    /// Whether the party attends
    pub attending: bool,
    /// Number of attendees
    pub guest_count: u32,
    /// Special dietary requirements flagged
    #[serde(default)]
    pub special_diet: bool,
    /// Free-form remarks
    #[serde(default)]
    pub remarks: String,
    /// Contact number
    #[serde(default)]
    pub mobile_phone_number: String,
}

impl Default for RsvpDraft {
    fn default() -> Self {
        Self {
            id: None,
            invitation_private_id: String::new(),
            full_name: String::new(),
            attending: true,
            guest_count: 1,
            special_diet: false,
            remarks: String::new(),
            mobile_phone_number: String::new(),
        }
    }
}

impl From<&Rsvp> for RsvpDraft {
    fn from(rsvp: &Rsvp) -> Self {
        Self {
            id: Some(rsvp.id),
            invitation_private_id: rsvp.invitation_private_id.clone(),
            full_name: rsvp.full_name.clone(),
            attending: rsvp.attending,
            guest_count: rsvp.guest_count,
            special_diet: rsvp.special_diet,
            remarks: rsvp.remarks.clone(),
            mobile_phone_number: rsvp.mobile_phone_number.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rsvp_wire_names() {
        let json = r#"{
            "id": 3,
            "invitationPrivateID": "p-1",
            "fullName": "Jane Lim",
            "attending": true,
            "guestCount": 2,
            "specialDiet": true,
            "remarks": "",
            "mobilePhoneNumber": "91234567",
            "completed": true,
            "updatedAt": "2016-09-20T20:23:00Z"
        }"#;
        let rsvp: Rsvp = serde_json::from_str(json).unwrap();
        assert_eq!(rsvp.invitation_private_id, "p-1");
        assert_eq!(rsvp.guest_count, 2);
        assert!(rsvp.special_diet);
    }

    #[test]
    fn test_draft_round_trips_from_record() {
        let rsvp = Rsvp {
            id: 9,
            invitation_private_id: "p-9".into(),
            full_name: "Ali".into(),
            attending: false,
            guest_count: 1,
            special_diet: false,
            remarks: "sorry".into(),
            mobile_phone_number: "81234567".into(),
            updated_at: String::new(),
        };
        let draft = RsvpDraft::from(&rsvp);
        assert_eq!(draft.id, Some(9));
        assert!(!draft.attending);
        assert_eq!(draft.remarks, "sorry");
    }
}
