// Copyright 2025 the Curio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Curio View: one generic resource-browser engine instead of many panels.
//!
//! An authoring tool grows one "resource browser" per resource family —
//! images, fonts, audio, variables, animations, presets, typography — and
//! each is a near-copy of the others. This crate consolidates them into a
//! single engine parameterized by a [`BrowserConfig`] per [`ResourceKind`]:
//! which files a drop may deliver, which item fields search consults, and
//! the base thumbnail size that zoom scales.
//!
//! The pieces compose as a pipeline:
//!
//! ```text
//! ResourceTree ─ flatten ─ collapse ─ search ─ selection ─ zoom ─▶ BrowserView
//! ```
//!
//! [`project`] runs that pipeline as one total, deterministic function: given
//! identical inputs it returns `PartialEq`-equal output, performs no I/O, and
//! never fails — malformed input degrades to a smaller view. [`Panel`] is
//! the thin controller around it: it owns the per-panel state, feeds host
//! inputs through pure transitions, and returns the typed [`PanelEvent`]s the
//! host forwards to its repository and router.
//!
//! ```rust
//! use curio_tree::{GroupChild, GroupNode, ResourceItem, ResourceTree};
//! use curio_view::{Panel, PanelEvent, PanelInput, ResourceKind};
//!
//! let mut tree = ResourceTree::default();
//! tree.insert_item(ResourceItem::new("a", "Cat", "image"));
//! tree.forest.push(GroupNode {
//!     id: "g1".into(),
//!     name: "Group1".into(),
//!     children: vec![GroupChild::item("a")],
//! });
//!
//! let mut panel = Panel::for_kind(ResourceKind::Images);
//! let events = panel.handle(PanelInput::ClickItem("a".into()));
//! assert_eq!(events, [PanelEvent::ItemSelected { item_id: "a".into() }]);
//!
//! let view = panel.view(&tree);
//! assert!(view.groups[0].children[0].flags.contains(curio_view::ChildFlags::SELECTED));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod event;
mod panel;
mod project;

pub use config::{BrowserConfig, ResourceKind};
pub use event::PanelEvent;
pub use panel::{Panel, PanelInput};
pub use project::{BrowserView, ChildFlags, GroupFlags, ViewChild, ViewGroup, project};
