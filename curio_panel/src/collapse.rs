// Copyright 2025 the Curio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Collapsed-group tracking.

use alloc::string::String;

use hashbrown::HashSet;

/// The set of collapsed group ids for one panel.
///
/// Collapsing is a view-only concern: the underlying tree is untouched, so
/// expanding a group restores its original children unchanged. `toggle` is
/// an involution — toggling the same id twice restores the prior state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CollapseState {
    collapsed: HashSet<String>,
}

impl CollapseState {
    /// Empty state: nothing collapsed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the collapsed flag for a group id.
    pub fn toggle(&mut self, group_id: &str) {
        if !self.collapsed.remove(group_id) {
            self.collapsed.insert(String::from(group_id));
        }
    }

    /// Is this group currently collapsed?
    pub fn is_collapsed(&self, group_id: &str) -> bool {
        self.collapsed.contains(group_id)
    }

    /// Number of collapsed groups.
    pub fn len(&self) -> usize {
        self.collapsed.len()
    }

    /// `true` when no group is collapsed.
    pub fn is_empty(&self) -> bool {
        self.collapsed.is_empty()
    }
}
