// Copyright 2025 the Curio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Snapshot types for the resource tree: items, group nodes, and the forest.

use alloc::borrow::ToOwned;
use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use hashbrown::HashMap;

/// A single typed field value on a [`ResourceItem`].
///
/// Fields carry per-kind metadata such as a description, a file size, or a
/// duration. Search stringifies them via [`FieldValue::as_text`]; this crate
/// never interprets them further.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    /// Free-form text (descriptions, file names, tags).
    Text(String),
    /// Numeric metadata (durations, sizes, counts).
    Number(f64),
    /// Boolean metadata.
    Flag(bool),
}

impl FieldValue {
    /// Stringified form used for substring search.
    ///
    /// Numbers render in display form; flags as `"true"`/`"false"`.
    pub fn as_text(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Number(n) => format!("{n}"),
            Self::Flag(b) => b.to_string(),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

/// One named resource in the tree.
///
/// Items are immutable snapshots owned by the external repository; this core
/// only reads them. `id` is unique across the tree, `kind` names the resource
/// family (for example `"image"` or `"audio"`), and `fields` holds per-kind
/// metadata consulted by search.
#[derive(Clone, Debug, PartialEq)]
pub struct ResourceItem {
    /// Unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Resource family tag.
    pub kind: String,
    /// Per-kind metadata fields.
    pub fields: HashMap<String, FieldValue>,
}

impl ResourceItem {
    /// Create an item with no extra fields.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: kind.into(),
            fields: HashMap::new(),
        }
    }

    /// Builder-style helper to attach a metadata field.
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }
}

/// A child entry of a [`GroupNode`]: either an item reference or a nested group.
#[derive(Clone, Debug, PartialEq)]
pub enum GroupChild {
    /// Reference to a [`ResourceItem`] by id. May dangle; dangling
    /// references are dropped during flattening, never an error.
    Item(String),
    /// A nested group.
    Group(GroupNode),
}

impl GroupChild {
    /// Shorthand for an item reference.
    pub fn item(id: impl Into<String>) -> Self {
        Self::Item(id.into())
    }
}

/// An ordered, named group of resources.
///
/// Child order is significant and preserved through every transform.
#[derive(Clone, Debug, PartialEq)]
pub struct GroupNode {
    /// Unique group identifier.
    pub id: String,
    /// Display name, also used in breadcrumb labels.
    pub name: String,
    /// Ordered children: item references and nested groups.
    pub children: Vec<GroupChild>,
}

impl GroupNode {
    /// Create an empty group.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            children: Vec::new(),
        }
    }
}

/// Immutable snapshot of the whole resource hierarchy.
///
/// Every id referenced by a group's children should exist in `items`;
/// references that do not are tolerated and dropped during flattening.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResourceTree {
    /// All items, keyed by id.
    pub items: HashMap<String, ResourceItem>,
    /// Ordered top-level groups.
    pub forest: Vec<GroupNode>,
}

impl ResourceTree {
    /// Insert an item into the snapshot, keyed by its own id.
    pub fn insert_item(&mut self, item: ResourceItem) {
        self.items.insert(item.id.clone(), item);
    }
}
