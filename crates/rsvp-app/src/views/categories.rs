//! # Categories View State
//!
//! Grouping tags applied to invitations (e.g. by relationship or side).

use serde::{Deserialize, Serialize};

use super::collection::{Identified, ResourceId};

/// A category as returned by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Server-assigned identifier
    pub id: ResourceId,
    /// Short label
    pub tag: String,
    /// Number of invitations referencing this category
    #[serde(default)]
    pub total: u32,
}

impl Category {
    /// Create a category with no referencing invitations.
    pub fn new(id: ResourceId, tag: impl Into<String>) -> Self {
        Self {
            id,
            tag: tag.into(),
            total: 0,
        }
    }

    /// A category still referenced by invitations cannot be deleted.
    ///
    /// Only the delete control enforces this; the data layer does not.
    pub fn is_deletable(&self) -> bool {
        self.total == 0
    }
}

impl Identified for Category {
    fn id(&self) -> ResourceId {
        self.id
    }
}

/// Editable category fields, used as form initial values and request body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDraft {
    /// Present when editing an existing category
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ResourceId>,
    /// Short label
    pub tag: String,
}

impl CategoryDraft {
    /// Draft for a new category.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            id: None,
            tag: tag.into(),
        }
    }
}

impl From<&Category> for CategoryDraft {
    fn from(category: &Category) -> Self {
        Self {
            id: Some(category.id),
            tag: category.tag.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format() {
        let category: Category =
            serde_json::from_str(r#"{"id":4,"tag":"Family","total":5}"#).unwrap();
        assert_eq!(category.tag, "Family");
        assert!(!category.is_deletable());
    }

    #[test]
    fn test_new_draft_omits_id() {
        let json = serde_json::to_string(&CategoryDraft::new("Friends")).unwrap();
        assert_eq!(json, r#"{"tag":"Friends"}"#);
    }
}
