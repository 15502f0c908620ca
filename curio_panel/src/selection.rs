// Copyright 2025 the Curio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-item selection.

use alloc::string::String;

/// At most one selected resource id per panel.
///
/// The selected id is not validated against the tree: a stale id (the item
/// was deleted or filtered away) is legal and simply means nothing renders
/// as highlighted until a matching id reappears.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected: Option<String>,
}

impl SelectionState {
    /// Empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select an item id, replacing any prior selection.
    pub fn select(&mut self, item_id: impl Into<String>) {
        self.selected = Some(item_id.into());
    }

    /// Clear the selection.
    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// The currently selected id, if any.
    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Is this id the selected one?
    pub fn is_selected(&self, item_id: &str) -> bool {
        self.selected.as_deref() == Some(item_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_replaces_prior_selection() {
        let mut state = SelectionState::new();
        state.select("a");
        state.select("b");
        assert_eq!(state.selected_id(), Some("b"));
        assert!(state.is_selected("b"));
        assert!(!state.is_selected("a"));
    }

    #[test]
    fn clear_empties_selection() {
        let mut state = SelectionState::new();
        state.select("a");
        state.clear();
        assert_eq!(state.selected_id(), None);
        assert!(!state.is_selected("a"));
    }

    #[test]
    fn stale_ids_are_representable() {
        // Nothing here knows about the tree; any id is storable.
        let mut state = SelectionState::new();
        state.select("no-longer-exists");
        assert_eq!(state.selected_id(), Some("no-longer-exists"));
    }
}
