// Copyright 2025 the Curio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Curio Tree: resource-tree snapshot types and a pure flatten projection.
//!
//! A resource browser displays a hierarchically grouped collection of named
//! resources (images, fonts, audio clips, variables, ...). The hierarchy is
//! owned by an external repository and handed to this crate as an immutable
//! [`ResourceTree`] snapshot: a flat `id -> item` map plus an ordered forest
//! of [`GroupNode`]s whose children reference items by id or nest further
//! groups.
//!
//! The core operation is [`flatten`]: a depth-first projection of the forest
//! into an ordered sequence of [`FlatGroup`]s, each carrying its resolved
//! item children, its nesting level, and a breadcrumb label built from its
//! ancestor group names. Downstream stages (collapse, search, selection,
//! zoom) operate on this flat form.
//!
//! ## Minimal example
//!
//! ```rust
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
//! let groups = flatten(&tree);
//! assert_eq!(groups.len(), 1);
//! assert_eq!(groups[0].id, "g1");
//! assert_eq!(groups[0].children[0].name, "Cat");
//! ```
//!
//! ## Tolerance
//!
//! The projection is total: a child id with no matching item is silently
//! omitted, a group id seen twice is flattened only once, and cycles cannot
//! recurse. Malformed input degrades to a smaller projection, never an error.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod flatten;
mod types;

pub use flatten::{FlatGroup, flat_items, flatten};
pub use types::{FieldValue, GroupChild, GroupNode, ResourceItem, ResourceTree};
