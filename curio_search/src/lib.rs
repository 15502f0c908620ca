// Copyright 2025 the Curio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Curio Search: substring filtering over flattened resource groups.
//!
//! A [`SearchFilter`] pairs a free-text query with the list of item fields it
//! may match against. Matching is case-insensitive substring containment over
//! the stringified value of **any** configured field; the conventional field
//! name `"name"` addresses an item's display name, every other name looks up
//! the item's metadata fields. Missing fields simply do not match — they are
//! never an error.
//!
//! [`SearchFilter::filter`] applies the query to a flattened projection:
//!
//! - An empty query is the inactive case: every group and child passes
//!   through unchanged and no group is dropped for being empty.
//! - A non-empty query filters children per group and drops any group whose
//!   filtered children come out empty.
//!
//! In the composed browser pipeline filtering runs after collapse, so a
//! collapsed group (whose projected children are empty) is dropped whenever
//! a query is active. This is intentional: collapsed groups are not
//! searchable.
//!
//! ```rust
//! use curio_search::SearchFilter;
//! use curio_tree::{flatten, GroupChild, GroupNode, ResourceItem, ResourceTree};
//!
//! let mut tree = ResourceTree::default();
//! tree.insert_item(ResourceItem::new("a", "Cat", "image"));
//! tree.insert_item(ResourceItem::new("b", "Dog", "image"));
//! tree.forest.push(GroupNode {
//!     id: "g1".into(),
//!     name: "Group1".into(),
//!     children: vec![GroupChild::item("a"), GroupChild::item("b")],
//! });
//!
//! let filter = SearchFilter::new(["name"], "cat");
//! let groups = filter.filter(&flatten(&tree));
//! assert_eq!(groups[0].children.len(), 1);
//! assert_eq!(groups[0].children[0].name, "Cat");
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use curio_tree::{FlatGroup, ResourceItem};

/// Field name that addresses [`ResourceItem::name`] rather than a metadata field.
pub const NAME_FIELD: &str = "name";

/// A search query plus the item fields it may match against.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchFilter {
    /// Field names consulted for matching, in no particular order.
    pub fields: Vec<String>,
    /// The raw query as entered. Empty means filtering is inactive.
    pub query: String,
}

impl SearchFilter {
    /// Create a filter over the given fields.
    pub fn new<I, S>(fields: I, query: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
            query: query.into(),
        }
    }

    /// `true` when the query is non-empty and filtering applies.
    pub fn is_active(&self) -> bool {
        !self.query.is_empty()
    }

    /// Does `item` match the query on any configured field?
    ///
    /// An inactive filter matches everything.
    pub fn matches(&self, item: &ResourceItem) -> bool {
        if !self.is_active() {
            return true;
        }
        self.matches_lowered(item, &self.query.to_lowercase())
    }

    fn matches_lowered(&self, item: &ResourceItem, needle: &str) -> bool {
        self.fields.iter().any(|field| {
            let haystack = if field == NAME_FIELD {
                item.name.to_lowercase()
            } else {
                match item.fields.get(field.as_str()) {
                    Some(value) => value.as_text().to_lowercase(),
                    None => return false,
                }
            };
            haystack.contains(needle)
        })
    }

    /// Apply the filter to a flattened projection.
    ///
    /// With an inactive query this is the identity. With an active query,
    /// children are filtered per group and groups left empty are dropped.
    pub fn filter(&self, groups: &[FlatGroup]) -> Vec<FlatGroup> {
        if !self.is_active() {
            return groups.to_vec();
        }
        let needle = self.query.to_lowercase();
        groups
            .iter()
            .filter_map(|group| {
                let children: Vec<ResourceItem> = group
                    .children
                    .iter()
                    .filter(|item| self.matches_lowered(item, &needle))
                    .cloned()
                    .collect();
                if children.is_empty() {
                    return None;
                }
                let mut kept = group.clone();
                kept.children = children;
                Some(kept)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use curio_tree::{GroupChild, GroupNode, ResourceTree, flatten};

    use super::*;

    fn sample_groups() -> Vec<FlatGroup> {
        let mut tree = ResourceTree::default();
        tree.insert_item(
            ResourceItem::new("a", "Cat", "image").with_field("description", "a tabby cat"),
        );
        tree.insert_item(ResourceItem::new("b", "Dog", "image"));
        tree.insert_item(ResourceItem::new("c", "Rain", "audio"));
        tree.forest.push(GroupNode {
            id: "g1".into(),
            name: "Images".into(),
            children: vec![GroupChild::item("a"), GroupChild::item("b")],
        });
        tree.forest.push(GroupNode {
            id: "g2".into(),
            name: "Audio".into(),
            children: vec![GroupChild::item("c")],
        });
        flatten(&tree)
    }

    #[test]
    fn empty_query_is_identity() {
        let groups = sample_groups();
        let filter = SearchFilter::new(["name"], "");
        assert_eq!(filter.filter(&groups), groups);
    }

    #[test]
    fn empty_query_keeps_empty_groups() {
        let mut groups = sample_groups();
        groups[0].children.clear();
        let filter = SearchFilter::new(["name"], "");
        assert_eq!(filter.filter(&groups).len(), 2);
    }

    #[test]
    fn match_is_case_insensitive_substring() {
        let groups = sample_groups();
        let filter = SearchFilter::new(["name"], "cAt");
        let filtered = filter.filter(&groups);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].children[0].name, "Cat");
    }

    #[test]
    fn any_configured_field_may_match() {
        let groups = sample_groups();
        // "tabby" only appears in the description field.
        let filter = SearchFilter::new(["name", "description"], "tabby");
        let filtered = filter.filter(&groups);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].children[0].id, "a");
    }

    #[test]
    fn missing_fields_never_match_and_never_error() {
        let groups = sample_groups();
        let filter = SearchFilter::new(["nonexistent"], "cat");
        assert!(filter.filter(&groups).is_empty());
    }

    #[test]
    fn groups_with_no_matching_children_are_dropped() {
        let groups = sample_groups();
        let filter = SearchFilter::new(["name"], "rain");
        let filtered = filter.filter(&groups);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "g2");
    }

    #[test]
    fn no_match_anywhere_yields_empty_projection() {
        let groups = sample_groups();
        let filter = SearchFilter::new(["name"], "zebra");
        assert!(filter.filter(&groups).is_empty());
    }

    #[test]
    fn matches_single_item() {
        let item = ResourceItem::new("a", "Cat", "image");
        let filter = SearchFilter::new(["name"], "at");
        assert!(filter.matches(&item));
        let inactive = SearchFilter::new(["name"], "");
        assert!(inactive.matches(&item));
    }
}
