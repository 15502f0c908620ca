// Copyright 2025 the Curio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The composed view projection: flatten, collapse, search, select, zoom.

use alloc::string::String;
use alloc::vec::Vec;

use curio_drag::DragPhase;
use curio_panel::BrowserState;
use curio_search::SearchFilter;
use curio_tree::{ResourceItem, ResourceTree, flatten};
use kurbo::Size;

use crate::config::BrowserConfig;

bitflags::bitflags! {
    /// Presentation flags on a projected group.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct GroupFlags: u8 {
        /// The group is collapsed; its children are suppressed in the view.
        const COLLAPSED     = 0b0000_0001;
        /// The group has visible children after collapse and filtering.
        const HAS_CHILDREN  = 0b0000_0010;
    }
}

bitflags::bitflags! {
    /// Presentation flags on a projected child.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ChildFlags: u8 {
        /// This child is the panel's selected item.
        const SELECTED   = 0b0000_0001;
        /// Render at full row width instead of as a tile.
        const FULL_WIDTH = 0b0000_0010;
    }
}

/// One item as it appears in the view.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewChild {
    /// The underlying item snapshot.
    pub item: ResourceItem,
    /// Selection and layout flags.
    pub flags: ChildFlags,
    /// Zoom-scaled tile size, integral units.
    pub size: Size,
}

/// One group as it appears in the view.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewGroup {
    /// Group identifier.
    pub id: String,
    /// The group's own name.
    pub name: String,
    /// Breadcrumb label (`"Audio > Ambient"`).
    pub full_label: String,
    /// Nesting depth; top-level groups are 0.
    pub level: usize,
    /// Collapse and emptiness flags.
    pub flags: GroupFlags,
    /// Visible children after collapse and filtering.
    pub children: Vec<ViewChild>,
}

/// The immutable, render-ready record one projection call produces.
#[derive(Clone, Debug, PartialEq)]
pub struct BrowserView {
    /// Ordered groups, post collapse and filtering.
    pub groups: Vec<ViewGroup>,
    /// The selected item id, possibly stale.
    pub selected_id: Option<String>,
    /// The query the view was filtered with.
    pub search_query: String,
    /// Current zoom level.
    pub zoom: f64,
    /// Zoom-scaled thumbnail size shared by all tiles.
    pub thumb_size: Size,
    /// Phase of the panel's drag session at projection time.
    pub drag_phase: DragPhase,
    /// User-facing message for an active query with no matches.
    pub empty_message: String,
}

/// Project a tree plus panel state into a [`BrowserView`].
///
/// Total and deterministic: identical inputs yield `PartialEq`-equal output,
/// nothing is mutated, and no input can make it fail. All ambient context —
/// including the drag phase — arrives as an explicit parameter.
///
/// Stage order matters: collapse empties a group's children *before* search
/// filtering runs, so an active query drops collapsed groups. Collapsed
/// groups are intentionally not searchable.
pub fn project(
    tree: &ResourceTree,
    state: &BrowserState,
    drag_phase: DragPhase,
    config: &BrowserConfig,
) -> BrowserView {
    let mut flat = flatten(tree);
    for group in &mut flat {
        if state.collapsed.is_collapsed(&group.id) {
            group.children.clear();
        }
    }

    let filter = SearchFilter::new(config.search_fields.iter().cloned(), state.search_query.clone());
    let filtered = filter.filter(&flat);

    let thumb_size = state.zoom.scaled(config.base_thumb);
    let base_child_flags = if config.full_width_items {
        ChildFlags::FULL_WIDTH
    } else {
        ChildFlags::empty()
    };

    let groups = filtered
        .into_iter()
        .map(|group| {
            let mut flags = GroupFlags::empty();
            if state.collapsed.is_collapsed(&group.id) {
                flags |= GroupFlags::COLLAPSED;
            }
            if !group.children.is_empty() {
                flags |= GroupFlags::HAS_CHILDREN;
            }
            let children = group
                .children
                .into_iter()
                .map(|item| {
                    let mut flags = base_child_flags;
                    if state.selection.is_selected(&item.id) {
                        flags |= ChildFlags::SELECTED;
                    }
                    ViewChild {
                        item,
                        flags,
                        size: thumb_size,
                    }
                })
                .collect();
            ViewGroup {
                id: group.id,
                name: group.name,
                full_label: group.full_label,
                level: group.level,
                flags,
                children,
            }
        })
        .collect();

    BrowserView {
        groups,
        selected_id: state.selection.selected_id().map(String::from),
        search_query: state.search_query.clone(),
        zoom: state.zoom.level(),
        thumb_size,
        drag_phase,
        empty_message: config.empty_message(&state.search_query),
    }
}
