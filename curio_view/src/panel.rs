// Copyright 2025 the Curio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The panel controller: host inputs in, pure transitions and events out.

use alloc::string::String;
use alloc::vec::Vec;

use curio_drag::{DragIntake, DragPhase, DropOutcome, DroppedFile};
use curio_panel::{BrowserAction, BrowserState, HydrationTicket, MountLifetime};
use curio_tree::ResourceTree;

use crate::config::{BrowserConfig, ResourceKind};
use crate::event::PanelEvent;
use crate::project::{BrowserView, project};

/// A host interaction delivered to the panel.
///
/// Each input is handled synchronously and completely before the next one;
/// the host event loop invokes handlers one at a time, so there is no
/// interleaving within a panel.
#[derive(Clone, Debug, PartialEq)]
pub enum PanelInput {
    /// Click on an item tile.
    ClickItem(String),
    /// Double-click on an item tile.
    DoubleClickItem(String),
    /// Click on a group header (collapse/expand).
    ClickGroupHeader(String),
    /// The search box content changed.
    SearchInput(String),
    /// Clear the current selection.
    ClearSelection,
    /// Zoom slider set to an absolute level.
    SetZoom(f64),
    /// Zoom-in button.
    ZoomIn,
    /// Zoom-out button.
    ZoomOut,
    /// A drag entered the drop zone of a group.
    DragEnter {
        /// Group the drop zone belongs to.
        group_id: String,
    },
    /// The drag is hovering; the host will accept the drop.
    DragOver,
    /// The drag left the zone.
    DragLeave {
        /// `true` when the leave target is the zone boundary itself
        /// (the host compares its event target against the zone element).
        at_boundary: bool,
    },
    /// The drag completed with a file payload.
    Drop {
        /// Files extracted from the drop payload.
        files: Vec<DroppedFile>,
    },
    /// The user asked to create a new item in a group.
    RequestCreate {
        /// The enclosing group.
        group_id: String,
        /// Name entered by the user.
        name: String,
    },
}

/// One resource-browser panel instance.
///
/// Owns the panel's [`BrowserState`], its drag session, its configuration,
/// and its mount lifetime. State advances only through [`Panel::handle`];
/// [`Panel::view`] re-projects the full render record after every change.
#[derive(Clone, Debug)]
pub struct Panel {
    config: BrowserConfig,
    state: BrowserState,
    intake: DragIntake<String>,
    mount: MountLifetime,
}

impl Panel {
    /// A panel with an explicit configuration.
    pub fn new(config: BrowserConfig) -> Self {
        let intake = DragIntake::new(config.accept.clone());
        Self {
            config,
            state: BrowserState::new(),
            intake,
            mount: MountLifetime::new(),
        }
    }

    /// A panel with the stock configuration for `kind`.
    pub fn for_kind(kind: ResourceKind) -> Self {
        Self::new(BrowserConfig::for_kind(kind))
    }

    /// The panel's configuration.
    pub fn config(&self) -> &BrowserConfig {
        &self.config
    }

    /// The panel's current state.
    pub fn state(&self) -> &BrowserState {
        &self.state
    }

    /// Phase of the drag session.
    pub fn drag_phase(&self) -> DragPhase {
        self.intake.phase()
    }

    /// Handle one host interaction, returning the events to emit upward.
    pub fn handle(&mut self, input: PanelInput) -> Vec<PanelEvent> {
        let mut events = Vec::new();
        match input {
            PanelInput::ClickItem(item_id) => {
                self.apply(BrowserAction::SelectItem(item_id.clone()));
                events.push(PanelEvent::ItemSelected { item_id });
            }
            PanelInput::DoubleClickItem(item_id) => {
                events.push(PanelEvent::ItemActivated { item_id });
            }
            PanelInput::ClickGroupHeader(group_id) => {
                self.apply(BrowserAction::ToggleGroup(group_id.clone()));
                events.push(PanelEvent::GroupToggled { group_id });
            }
            PanelInput::SearchInput(query) => {
                self.apply(BrowserAction::SetSearchQuery(query.clone()));
                events.push(PanelEvent::SearchChanged { query });
            }
            PanelInput::ClearSelection => self.apply(BrowserAction::ClearSelection),
            PanelInput::SetZoom(level) => self.apply(BrowserAction::SetZoom(level)),
            PanelInput::ZoomIn => self.apply(BrowserAction::ZoomIn),
            PanelInput::ZoomOut => self.apply(BrowserAction::ZoomOut),
            PanelInput::DragEnter { group_id } => self.intake.enter(group_id),
            PanelInput::DragOver => self.intake.over(),
            PanelInput::DragLeave { at_boundary } => self.intake.leave(at_boundary),
            PanelInput::Drop { files } => {
                if let DropOutcome::Accepted(received) = self.intake.drop_files(files) {
                    events.push(PanelEvent::FilesReceived {
                        files: received.files,
                        target_group_id: received.target,
                    });
                }
            }
            PanelInput::RequestCreate { group_id, name } => {
                events.push(PanelEvent::ItemCreated { group_id, name });
            }
        }
        events
    }

    /// Project the render-ready view for the current state.
    pub fn view(&self, tree: &ResourceTree) -> BrowserView {
        project(tree, &self.state, self.intake.phase(), &self.config)
    }

    /// Ticket for a fire-and-forget hydration task started now.
    pub fn hydration_ticket(&self) -> HydrationTicket {
        self.mount.ticket()
    }

    /// Apply a completed hydration result, unless the issuing mount is gone.
    ///
    /// Returns `true` when the action was applied. A stale ticket (the panel
    /// unmounted, or unmounted and remounted, while the task ran) leaves the
    /// state untouched.
    pub fn apply_hydration(&mut self, ticket: &HydrationTicket, action: BrowserAction) -> bool {
        if !self.mount.admit(ticket) {
            return false;
        }
        self.apply(action);
        true
    }

    /// Tear the panel down; outstanding hydration tickets become stale.
    pub fn unmount(&mut self) {
        self.mount.unmount();
    }

    /// Bring the panel back up under a fresh mount epoch with fresh state.
    pub fn remount(&mut self) {
        self.mount.remount();
        self.state = BrowserState::new();
        self.intake = DragIntake::new(self.config.accept.clone());
    }

    fn apply(&mut self, action: BrowserAction) {
        self.state = core::mem::take(&mut self.state).apply(action);
    }
}
