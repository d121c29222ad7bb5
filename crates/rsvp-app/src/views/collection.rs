//! # Resource List
//!
//! An ordered, id-keyed list used for every administrative resource slice
//! (categories, invitations, RSVPs).
//!
//! This module provides [`ResourceList`], a generic container that:
//! - Keeps server order (newest creations are prepended)
//! - Exposes consistent query methods (`get`, `all`, `count`, etc.)
//! - Exposes the four reducer transitions (`set_list`, `set_updated`,
//!   `set_created`, `set_deleted`), each consuming the previous list and
//!   returning the next one
//!
//! ## Example
//!
//! ```rust
//! use rsvp_app::views::{Category, ResourceList};
//!
//! let list = ResourceList::default()
//!     .set_created(Category::new(1, "Family"))
//!     .set_created(Category::new(2, "Friends"));
//!
//! assert_eq!(list.all()[0].tag, "Friends");
//! assert_eq!(list.set_deleted(1).count(), 1);
//! ```

use serde::{Deserialize, Serialize};

/// Server-assigned identifier shared by every resource.
pub type ResourceId = i64;

/// A record keyed by a server-assigned identifier.
pub trait Identified {
    /// The record's identifier.
    fn id(&self) -> ResourceId;
}

/// An ordered list of records with uniqueness by id.
///
/// The list is the single source of truth for its resource. Cross-references
/// (an invitation's category, an RSVP's invitation) are resolved by linear
/// lookup at render time rather than shared by reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceList<T> {
    items: Vec<T>,
}

impl<T> Default for ResourceList<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Identified> ResourceList<T> {
    /// Create a list from items in server order.
    pub fn from_items(items: Vec<T>) -> Self {
        Self { items }
    }

    // ─── Queries ─────────────────────────────────────────────

    /// Get an item by id.
    pub fn get(&self, id: ResourceId) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Check if an item with this id exists.
    pub fn contains(&self, id: ResourceId) -> bool {
        self.get(id).is_some()
    }

    /// All items in display order.
    pub fn all(&self) -> &[T] {
        &self.items
    }

    /// Iterate over items in display order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    /// Number of items (computed, not stored).
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    // ─── Transitions ─────────────────────────────────────────

    /// Replace the list wholesale after a full fetch.
    #[must_use]
    pub fn set_list(self, items: Vec<T>) -> Self {
        Self { items }
    }

    /// Replace the first element whose id matches. No-op if absent.
    #[must_use]
    pub fn set_updated(mut self, item: T) -> Self {
        if let Some(slot) = self.items.iter_mut().find(|existing| existing.id() == item.id()) {
            *slot = item;
        }
        self
    }

    /// Prepend a newly created item unless its id is already present.
    #[must_use]
    pub fn set_created(mut self, item: T) -> Self {
        if self.contains(item.id()) {
            return self;
        }
        self.items.insert(0, item);
        self
    }

    /// Drop the item with this id. No-op if absent.
    #[must_use]
    pub fn set_deleted(mut self, id: ResourceId) -> Self {
        self.items.retain(|item| item.id() != id);
        self
    }
}

impl<T> IntoIterator for ResourceList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ResourceList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

// ─── Tests ───────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Item {
        id: ResourceId,
        label: String,
    }

    impl Identified for Item {
        fn id(&self) -> ResourceId {
            self.id
        }
    }

    fn item(id: ResourceId, label: &str) -> Item {
        Item {
            id,
            label: label.to_string(),
        }
    }

    fn list_of(ids: &[ResourceId]) -> ResourceList<Item> {
        ResourceList::from_items(ids.iter().map(|id| item(*id, "x")).collect())
    }

    #[test]
    fn test_set_list_replaces_everything() {
        let list = list_of(&[1, 2, 3]).set_list(vec![item(9, "only")]);
        assert_eq!(list.count(), 1);
        assert!(list.contains(9));
        assert!(!list.contains(1));
    }

    #[test]
    fn test_set_created_prepends() {
        let list = list_of(&[1, 2]).set_created(item(3, "new"));
        let ids: Vec<_> = list.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_set_created_ignores_duplicate_id() {
        let list = list_of(&[1, 2]).set_created(item(2, "dup"));
        assert_eq!(list.count(), 2);
        assert_eq!(list.get(2).map(|i| i.label.as_str()), Some("x"));
    }

    #[test]
    fn test_set_updated_replaces_in_place() {
        let list = list_of(&[1, 2, 3]).set_updated(item(2, "changed"));
        let ids: Vec<_> = list.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(list.get(2).map(|i| i.label.as_str()), Some("changed"));
    }

    #[test]
    fn test_set_updated_absent_is_noop() {
        let before = list_of(&[1, 2]);
        let after = before.clone().set_updated(item(5, "ghost"));
        assert_eq!(before, after);
    }

    #[test]
    fn test_set_deleted() {
        let list = list_of(&[1, 2, 3]).set_deleted(2);
        let ids: Vec<_> = list.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    fn unique_ids() -> impl Strategy<Value = Vec<ResourceId>> {
        prop::collection::btree_set(0i64..500, 0..20).prop_map(|set| set.into_iter().collect())
    }

    proptest! {
        #[test]
        fn prop_set_created_is_idempotent(ids in unique_ids(), new_id in 0i64..600) {
            let once = list_of(&ids).set_created(item(new_id, "n"));
            let twice = once.clone().set_created(item(new_id, "n"));
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_set_deleted_absent_is_noop(ids in unique_ids(), missing in 500i64..1000) {
            let before = list_of(&ids);
            let after = before.clone().set_deleted(missing);
            prop_assert_eq!(before, after);
        }

        #[test]
        fn prop_set_updated_preserves_length_and_order(
            ids in unique_ids().prop_filter("non-empty", |ids| !ids.is_empty()),
            pick in any::<prop::sample::Index>(),
        ) {
            let before = list_of(&ids);
            let target = ids[pick.index(ids.len())];
            let after = before.clone().set_updated(item(target, "updated"));

            prop_assert_eq!(after.count(), before.count());
            let before_ids: Vec<_> = before.iter().map(|i| i.id).collect();
            let after_ids: Vec<_> = after.iter().map(|i| i.id).collect();
            prop_assert_eq!(before_ids, after_ids);

            let changed = before
                .iter()
                .zip(after.iter())
                .filter(|(old, new)| old != new)
                .count();
            prop_assert_eq!(changed, 1);
        }
    }
}
