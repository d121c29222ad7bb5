//! # Invitations View State
//!
//! One invitation per guest party, each carrying an opaque private id that
//! forms the guest-facing RSVP link.

use serde::{Deserialize, Serialize};

use super::collection::{Identified, ResourceId};

/// Invitation delivery/reply status.
///
/// Serialized with the two-letter codes the server uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum InvitationStatus {
    /// Not yet sent to the guest
    #[default]
    #[serde(rename = "NS")]
    NotSent,
    /// Sent, no reply yet
    #[serde(rename = "ST")]
    Sent,
    /// Guest replied and is attending
    #[serde(rename = "RA")]
    RepliedAttending,
    /// Guest replied and is not attending
    #[serde(rename = "RN")]
    RepliedNotAttending,
    /// A code this client does not know
    #[serde(other, rename = "??")]
    Unknown,
}

impl InvitationStatus {
    /// Every status an administrator may choose when editing.
    pub const SELECTABLE: [InvitationStatus; 4] = [
        InvitationStatus::NotSent,
        InvitationStatus::Sent,
        InvitationStatus::RepliedAttending,
        InvitationStatus::RepliedNotAttending,
    ];

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            InvitationStatus::NotSent => "Not Sent",
            InvitationStatus::Sent => "Sent",
            InvitationStatus::RepliedAttending => "Replied - Attending",
            InvitationStatus::RepliedNotAttending => "Replied - Not Attending",
            InvitationStatus::Unknown => "Unknown",
        }
    }

    /// Wire code.
    pub fn code(self) -> &'static str {
        match self {
            InvitationStatus::NotSent => "NS",
            InvitationStatus::Sent => "ST",
            InvitationStatus::RepliedAttending => "RA",
            InvitationStatus::RepliedNotAttending => "RN",
            InvitationStatus::Unknown => "??",
        }
    }

    /// Parse a wire code, case-insensitively. Unrecognised codes are `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::SELECTABLE
            .into_iter()
            .find(|status| status.code().eq_ignore_ascii_case(code.trim()))
    }
}

impl std::fmt::Display for InvitationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// An invitation as returned by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invitation {
    /// Server-assigned identifier
    pub id: ResourceId,
    /// Category this invitation belongs to
    #[serde(rename = "categoryID")]
    pub category_id: ResourceId,
    /// How the guest party is addressed
    pub greeting: String,
    /// Upper bound on attendees for this party
    pub maximum_guest_count: u32,
    /// Administrator notes
    #[serde(default)]
    pub notes: String,
    /// Contact number for SMS delivery
    #[serde(default)]
    pub mobile_phone_number: String,
    /// Delivery/reply status
    #[serde(default)]
    pub status: InvitationStatus,
    /// Opaque token for the guest-facing link
    #[serde(rename = "privateID")]
    pub private_id: String,
    /// Last modification time (RFC 3339)
    #[serde(default)]
    pub updated_at: String,
}

impl Identified for Invitation {
    fn id(&self) -> ResourceId {
        self.id
    }
}

/// Editable invitation fields, used as form initial values and request body.
///
/// Create requests omit `id` and `status`; edit requests carry both.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvitationDraft {
    /// Present when editing an existing invitation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ResourceId>,
    /// Selected category
    #[serde(rename = "categoryID", default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<ResourceId>,
    /// How the guest party is addressed
    #[serde(default)]
    pub greeting: String,
    /// Upper bound on attendees, unset until chosen
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum_guest_count: Option<u32>,
    /// Administrator notes
    #[serde(default)]
    pub notes: String,
    /// Contact number for SMS delivery
    #[serde(default)]
    pub mobile_phone_number: String,
    /// Status, only sent on edit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<InvitationStatus>,
}

impl InvitationDraft {
    /// Guest count the invitation form starts with.
    pub const DEFAULT_MAXIMUM_GUEST_COUNT: u32 = 1;

    /// Fill the maximum guest count when the draft has none.
    #[must_use]
    pub fn with_default_guest_count(mut self) -> Self {
        if self.maximum_guest_count.is_none() {
            self.maximum_guest_count = Some(Self::DEFAULT_MAXIMUM_GUEST_COUNT);
        }
        self
    }
}

impl From<&Invitation> for InvitationDraft {
    fn from(invitation: &Invitation) -> Self {
        Self {
            id: Some(invitation.id),
            category_id: Some(invitation.category_id),
            greeting: invitation.greeting.clone(),
            maximum_guest_count: Some(invitation.maximum_guest_count),
            notes: invitation.notes.clone(),
            mobile_phone_number: invitation.mobile_phone_number.clone(),
            status: Some(invitation.status),
        }
    }
}
