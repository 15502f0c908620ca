// Copyright 2025 the Curio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A full panel round trip: collapse, search, zoom, and a file drop.
//!
//! This example wires the whole pipeline the way a host view layer would:
//! build a tree snapshot, drive a `Panel` through user interactions, and
//! re-project the view after each one.
//!
//! Run:
//! - `cargo run -p curio_demos --example resource_browser`

use curio_drag::DroppedFile;
use curio_tree::{GroupChild, GroupNode, ResourceItem, ResourceTree};
use curio_view::{GroupFlags, Panel, PanelEvent, PanelInput, ResourceKind};

fn main() {
    // Snapshot as it would arrive from the repository.
    let mut tree = ResourceTree::default();
    tree.insert_item(ResourceItem::new("a", "Cat", "image").with_field("description", "a tabby"));
    tree.insert_item(ResourceItem::new("b", "Dog", "image"));
    tree.insert_item(ResourceItem::new("c", "Rain", "image"));
    tree.forest.push(GroupNode {
        id: "g1".into(),
        name: "Animals".into(),
        children: vec![GroupChild::item("a"), GroupChild::item("b")],
    });
    tree.forest.push(GroupNode {
        id: "g2".into(),
        name: "Weather".into(),
        children: vec![GroupChild::item("c")],
    });

    let mut panel = Panel::for_kind(ResourceKind::Images);

    // Collapse the first group.
    panel.handle(PanelInput::ClickGroupHeader("g1".into()));
    let view = panel.view(&tree);
    println!("after collapse:");
    for group in &view.groups {
        println!(
            "  {} collapsed={} children={}",
            group.full_label,
            group.flags.contains(GroupFlags::COLLAPSED),
            group.children.len()
        );
    }

    // Expand again, search, and zoom in.
    panel.handle(PanelInput::ClickGroupHeader("g1".into()));
    panel.handle(PanelInput::SearchInput("cat".into()));
    panel.handle(PanelInput::SetZoom(2.0));
    let view = panel.view(&tree);
    println!("searching \"cat\" at zoom {}:", view.zoom);
    for group in &view.groups {
        for child in &group.children {
            println!(
                "  {} / {} tile {}x{}",
                group.name, child.item.name, child.size.width, child.size.height
            );
        }
    }

    // Drop a mixed payload onto the second group; only the image survives.
    panel.handle(PanelInput::SearchInput(String::new()));
    panel.handle(PanelInput::DragEnter { group_id: "g2".into() });
    panel.handle(PanelInput::DragOver);
    let events = panel.handle(PanelInput::Drop {
        files: vec![
            DroppedFile::new("storm.png", "image/png", vec![0xde, 0xad]),
            DroppedFile::new("readme.txt", "text/plain", vec![]),
        ],
    });
    for event in events {
        if let PanelEvent::FilesReceived { files, target_group_id } = event {
            println!(
                "upload {} file(s) into {target_group_id}: {:?}",
                files.len(),
                files.iter().map(|f| f.name.as_str()).collect::<Vec<_>>()
            );
        }
    }
}
