// Copyright 2025 the Curio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typed events a panel emits upward to its host.

use alloc::string::String;
use alloc::vec::Vec;

use curio_drag::DroppedFile;

/// An event the host forwards to its repository, router, or view layer.
///
/// The panel never writes to the repository itself; user-entered values pass
/// through these events unchanged.
#[derive(Clone, Debug, PartialEq)]
pub enum PanelEvent {
    /// The user selected an item.
    ItemSelected {
        /// Id of the clicked item.
        item_id: String,
    },
    /// The user double-clicked an item (open/edit intent).
    ItemActivated {
        /// Id of the activated item.
        item_id: String,
    },
    /// A drop delivered files that passed the accept list.
    FilesReceived {
        /// The surviving files, in payload order.
        files: Vec<DroppedFile>,
        /// The group the drop zone belongs to.
        target_group_id: String,
    },
    /// The user asked to create a new item inside a group.
    ItemCreated {
        /// The enclosing group.
        group_id: String,
        /// Name entered by the user, passed through verbatim.
        name: String,
    },
    /// A group header was toggled.
    GroupToggled {
        /// Id of the toggled group.
        group_id: String,
    },
    /// The search query changed.
    SearchChanged {
        /// The new query.
        query: String,
    },
}
