// Copyright 2025 the Curio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Depth-first flattening of the resource forest into ordered flat groups.

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashSet;
use smallvec::SmallVec;

use crate::types::{GroupChild, GroupNode, ResourceItem, ResourceTree};

/// One group in the flattened projection.
///
/// Group order mirrors the depth-first visitation order of the forest;
/// `children` mirrors the order of the source [`GroupNode::children`] with
/// nested groups removed (they appear as their own `FlatGroup`s) and
/// dangling item ids omitted.
#[derive(Clone, Debug, PartialEq)]
pub struct FlatGroup {
    /// Group identifier.
    pub id: String,
    /// The group's own display name.
    pub name: String,
    /// Breadcrumb of ancestor names ending in this group's name,
    /// joined with `" > "` (for example `"Audio > Ambient"`).
    pub full_label: String,
    /// Nesting depth; top-level groups are level 0.
    pub level: usize,
    /// Id of the enclosing group, if any.
    pub parent_id: Option<String>,
    /// Resolved item children, in source order.
    pub children: Vec<ResourceItem>,
}

// Ancestor chains are almost always shallow; four levels covers every
// observed authoring hierarchy without spilling.
type NameChain<'a> = SmallVec<[&'a str; 4]>;

/// Flatten a [`ResourceTree`] into ordered [`FlatGroup`]s.
///
/// The projection is pure and total: the input is not mutated, dangling item
/// ids are dropped, and a group id encountered twice (duplicates or cycles)
/// is flattened only once.
pub fn flatten(tree: &ResourceTree) -> Vec<FlatGroup> {
    let mut out = Vec::new();
    let mut visited: HashSet<&str> = HashSet::new();
    for node in &tree.forest {
        flatten_node(tree, node, 0, &NameChain::new(), None, &mut visited, &mut out);
    }
    out
}

fn flatten_node<'t>(
    tree: &'t ResourceTree,
    node: &'t GroupNode,
    level: usize,
    ancestors: &NameChain<'t>,
    parent_id: Option<&str>,
    visited: &mut HashSet<&'t str>,
    out: &mut Vec<FlatGroup>,
) {
    if !visited.insert(node.id.as_str()) {
        return;
    }

    let mut full_label = String::new();
    for name in ancestors {
        full_label.push_str(name);
        full_label.push_str(" > ");
    }
    full_label.push_str(&node.name);

    let children = node
        .children
        .iter()
        .filter_map(|child| match child {
            GroupChild::Item(id) => tree.items.get(id).cloned(),
            GroupChild::Group(_) => None,
        })
        .collect();

    out.push(FlatGroup {
        id: node.id.clone(),
        name: node.name.clone(),
        full_label,
        level,
        parent_id: parent_id.map(String::from),
        children,
    });

    let mut chain = ancestors.clone();
    chain.push(node.name.as_str());
    for child in &node.children {
        if let GroupChild::Group(nested) = child {
            flatten_node(tree, nested, level + 1, &chain, Some(node.id.as_str()), visited, out);
        }
    }
}

/// All resolvable items in depth-first traversal order.
///
/// Hosts use this to look up the currently selected item's full record.
pub fn flat_items(tree: &ResourceTree) -> Vec<&ResourceItem> {
    fn walk<'t>(tree: &'t ResourceTree, node: &'t GroupNode, out: &mut Vec<&'t ResourceItem>) {
        for child in &node.children {
            match child {
                GroupChild::Item(id) => {
                    if let Some(item) = tree.items.get(id) {
                        out.push(item);
                    }
                }
                GroupChild::Group(nested) => walk(tree, nested, out),
            }
        }
    }

    let mut out = Vec::new();
    for node in &tree.forest {
        walk(tree, node, &mut out);
    }
    out
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    fn sample_tree() -> ResourceTree {
        let mut tree = ResourceTree::default();
        tree.insert_item(ResourceItem::new("a", "Cat", "image"));
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
            children: vec![
                GroupChild::item("c"),
                GroupChild::Group(GroupNode {
                    id: "g3".into(),
                    name: "Ambient".into(),
                    children: vec![GroupChild::item("c")],
                }),
            ],
        });
        tree
    }

    #[test]
    fn preserves_group_and_child_order() {
        let groups = flatten(&sample_tree());
        let ids: Vec<&str> = groups.iter().map(|g| g.id.as_str()).collect();
        assert_eq!(ids, ["g1", "g2", "g3"]);

        let names: Vec<&str> = groups[0].children.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Cat", "Dog"]);
    }

    #[test]
    fn nested_groups_get_breadcrumb_labels_and_levels() {
        let groups = flatten(&sample_tree());
        let nested = &groups[2];
        assert_eq!(nested.full_label, "Audio > Ambient");
        assert_eq!(nested.level, 1);
        assert_eq!(nested.parent_id.as_deref(), Some("g2"));

        let top = &groups[1];
        assert_eq!(top.full_label, "Audio");
        assert_eq!(top.level, 0);
        assert_eq!(top.parent_id, None);
    }

    #[test]
    fn nested_groups_are_not_repeated_as_children() {
        let groups = flatten(&sample_tree());
        // g2's children are items only; g3 appears as its own group.
        let names: Vec<&str> = groups[1].children.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Rain"]);
    }

    #[test]
    fn dangling_item_ids_are_omitted() {
        let mut tree = sample_tree();
        tree.forest[0].children.push(GroupChild::item("missing"));
        let groups = flatten(&tree);
        assert_eq!(groups[0].children.len(), 2);
    }

    #[test]
    fn duplicate_group_ids_flatten_once() {
        let mut tree = sample_tree();
        let dup = tree.forest[0].clone();
        tree.forest.push(dup);
        let groups = flatten(&tree);
        assert_eq!(groups.iter().filter(|g| g.id == "g1").count(), 1);
    }

    #[test]
    fn empty_groups_survive_flattening() {
        let mut tree = ResourceTree::default();
        tree.forest.push(GroupNode::new("g1", "Empty"));
        let groups = flatten(&tree);
        assert_eq!(groups.len(), 1);
        assert!(groups[0].children.is_empty());
    }

    #[test]
    fn flat_items_resolves_in_traversal_order() {
        let tree = sample_tree();
        let items: Vec<&str> = flat_items(&tree).iter().map(|i| i.id.as_str()).collect();
        assert_eq!(items, ["a", "b", "c", "c"]);
    }

    #[test]
    fn flatten_does_not_mutate_input() {
        let tree = sample_tree();
        let before = tree.clone();
        let _ = flatten(&tree);
        assert_eq!(tree, before);
    }
}
