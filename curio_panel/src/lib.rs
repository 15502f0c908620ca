// Copyright 2025 the Curio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Curio Panel: per-panel browser UI state.
//!
//! One resource-browser panel owns exactly one [`BrowserState`]: which groups
//! are collapsed, which item (if any) is selected, the current search query,
//! and the thumbnail zoom level. The state is created when the panel mounts,
//! mutated only through the panel's own handlers, and discarded on unmount —
//! it is never shared across panels, so there is no interleaving hazard.
//!
//! Every store operation is a pure transition:
//! [`BrowserState::apply`] consumes a state and a [`BrowserAction`] and
//! returns the successor state. Equal inputs give `PartialEq`-equal outputs,
//! which enables equality-based change detection and straightforward
//! undo/redo on the host side.
//!
//! ```rust
//! use curio_panel::{BrowserAction, BrowserState};
//!
//! let state = BrowserState::new()
//!     .apply(BrowserAction::ToggleGroup("g1".into()))
//!     .apply(BrowserAction::SelectItem("a".into()))
//!     .apply(BrowserAction::ZoomIn);
//!
//! assert!(state.collapsed.is_collapsed("g1"));
//! assert_eq!(state.selection.selected_id(), Some("a"));
//! assert!((state.zoom.level() - 1.1).abs() < 1e-9);
//! ```
//!
//! ## Tolerance
//!
//! None of the operations here can fail. Out-of-range or non-finite zoom
//! requests clamp or keep the current level; selecting an id that no longer
//! exists in the tree is legal and simply highlights nothing; toggling a
//! never-seen group id collapses it.
//!
//! ## Mount lifetime
//!
//! Panels hydrate their initial tree with fire-and-forget tasks. A completed
//! task must not write into a destroyed panel's state, so every task takes a
//! [`HydrationTicket`] from the panel's [`MountLifetime`] and asks
//! [`MountLifetime::admit`] before applying its result. The guard is pure
//! and synchronous; the async runtime stays on the host side.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod collapse;
mod mount;
mod selection;
mod state;
mod zoom;

pub use collapse::CollapseState;
pub use mount::{HydrationTicket, MountLifetime};
pub use selection::SelectionState;
pub use state::{BrowserAction, BrowserState};
pub use zoom::{ZOOM_MAX, ZOOM_MIN, ZOOM_STEP, ZoomState};
