// Copyright 2025 the Curio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The combined per-panel state and its pure action reducer.

use alloc::string::String;

use crate::collapse::CollapseState;
use crate::selection::SelectionState;
use crate::zoom::ZoomState;

/// Everything one panel tracks between renders.
///
/// Exclusively owned by its panel instance; created on mount, discarded on
/// unmount, and mutated only through [`BrowserState::apply`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BrowserState {
    /// Which groups are collapsed.
    pub collapsed: CollapseState,
    /// The at-most-one selected item.
    pub selection: SelectionState,
    /// The current search query; empty means filtering is inactive.
    pub search_query: String,
    /// Thumbnail zoom.
    pub zoom: ZoomState,
}

/// A state transition requested by a panel handler.
#[derive(Clone, Debug, PartialEq)]
pub enum BrowserAction {
    /// Flip a group's collapsed flag.
    ToggleGroup(String),
    /// Select an item id (stale ids are legal).
    SelectItem(String),
    /// Clear the selection.
    ClearSelection,
    /// Replace the search query.
    SetSearchQuery(String),
    /// Set the zoom level (clamped; non-finite input ignored).
    SetZoom(f64),
    /// Step the zoom level up.
    ZoomIn,
    /// Step the zoom level down.
    ZoomOut,
}

impl BrowserState {
    /// Fresh state: nothing collapsed, nothing selected, empty query, zoom 1.0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an action, yielding the successor state.
    ///
    /// Pure by construction: the input state is consumed by value and the
    /// caller's clones are untouched, so equal `(state, action)` pairs always
    /// produce `PartialEq`-equal results.
    #[must_use]
    pub fn apply(mut self, action: BrowserAction) -> Self {
        match action {
            BrowserAction::ToggleGroup(id) => self.collapsed.toggle(&id),
            BrowserAction::SelectItem(id) => self.selection.select(id),
            BrowserAction::ClearSelection => self.selection.clear(),
            BrowserAction::SetSearchQuery(query) => self.search_query = query,
            BrowserAction::SetZoom(level) => self.zoom.set(level),
            BrowserAction::ZoomIn => self.zoom.step_in(),
            BrowserAction::ZoomOut => self.zoom.step_out(),
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_leaves_clones_untouched() {
        let base = BrowserState::new().apply(BrowserAction::SelectItem("a".into()));
        let snapshot = base.clone();
        let next = base.apply(BrowserAction::ClearSelection);

        assert_eq!(snapshot.selection.selected_id(), Some("a"));
        assert_eq!(next.selection.selected_id(), None);
    }

    #[test]
    fn equal_action_sequences_give_equal_states() {
        let run = || {
            BrowserState::new()
                .apply(BrowserAction::ToggleGroup("g1".into()))
                .apply(BrowserAction::SetSearchQuery("cat".into()))
                .apply(BrowserAction::ZoomIn)
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn toggle_is_idempotent_as_a_pair() {
        let before = BrowserState::new().apply(BrowserAction::SelectItem("a".into()));
        let after = before
            .clone()
            .apply(BrowserAction::ToggleGroup("g1".into()))
            .apply(BrowserAction::ToggleGroup("g1".into()));
        assert_eq!(before, after);
    }

    #[test]
    fn zoom_actions_clamp() {
        let state = BrowserState::new().apply(BrowserAction::SetZoom(99.0));
        assert_eq!(state.zoom.level(), crate::ZOOM_MAX);
        let state = state.apply(BrowserAction::ZoomIn);
        assert_eq!(state.zoom.level(), crate::ZOOM_MAX);
    }
}
