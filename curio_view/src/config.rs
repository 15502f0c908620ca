// Copyright 2025 the Curio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-kind browser configuration.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use curio_drag::AcceptList;
use kurbo::Size;

/// Image-like thumbnail base size (width bounds the tile, height the preview).
const IMAGE_THUMB: Size = Size::new(400.0, 150.0);
/// Media (audio/video) tile base size.
const MEDIA_THUMB: Size = Size::new(225.0, 150.0);

/// The resource families a browser panel can be configured for.
///
/// One tagged variant per panel replaces the per-kind copy-pasted modules;
/// everything that used to differ between them lives in [`BrowserConfig`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// Still images and sprites.
    Images,
    /// Scene background images.
    Backgrounds,
    /// Font files.
    Fonts,
    /// Music and sound effects.
    Audio,
    /// Authoring-time variables.
    Variables,
    /// Keyframe animations.
    Animations,
    /// Reusable presets.
    Presets,
    /// Typography styles.
    Typography,
}

impl ResourceKind {
    /// Plural noun used in user-facing strings.
    pub fn noun(self) -> &'static str {
        match self {
            Self::Images => "images",
            Self::Backgrounds => "backgrounds",
            Self::Fonts => "fonts",
            Self::Audio => "audio clips",
            Self::Variables => "variables",
            Self::Animations => "animations",
            Self::Presets => "presets",
            Self::Typography => "typography styles",
        }
    }
}

/// Everything that differs between resource-browser panels.
#[derive(Clone, Debug, PartialEq)]
pub struct BrowserConfig {
    /// Which family this panel browses.
    pub kind: ResourceKind,
    /// Which dropped files the panel accepts.
    pub accept: AcceptList,
    /// Item fields consulted by search.
    pub search_fields: Vec<String>,
    /// Base thumbnail size before zoom scaling.
    pub base_thumb: Size,
    /// Render children at full row width instead of as tiles.
    pub full_width_items: bool,
    /// Label on the upload affordance.
    pub upload_text: String,
    /// Placeholder in the search box.
    pub search_placeholder: String,
}

impl BrowserConfig {
    /// The stock configuration for a resource kind.
    pub fn for_kind(kind: ResourceKind) -> Self {
        let accept: AcceptList = match kind {
            ResourceKind::Images | ResourceKind::Backgrounds | ResourceKind::Animations => {
                ["image/"].into_iter().collect()
            }
            ResourceKind::Fonts | ResourceKind::Typography => {
                [".ttf", ".otf", ".woff", ".woff2", ".ttc"].into_iter().collect()
            }
            ResourceKind::Audio => ["audio/"].into_iter().collect(),
            ResourceKind::Variables | ResourceKind::Presets => AcceptList::any(),
        };
        let base_thumb = match kind {
            ResourceKind::Audio => MEDIA_THUMB,
            _ => IMAGE_THUMB,
        };
        let full_width_items = matches!(
            kind,
            ResourceKind::Variables | ResourceKind::Presets | ResourceKind::Typography
        );
        Self {
            kind,
            accept,
            search_fields: ["name", "description"].into_iter().map(String::from).collect(),
            base_thumb,
            full_width_items,
            upload_text: format!("Upload {}", capitalized(kind.noun())),
            search_placeholder: format!("Search {}...", kind.noun()),
        }
    }

    /// User-facing message when an active query matches nothing.
    pub fn empty_message(&self, query: &str) -> String {
        format!("No {} found matching \"{query}\"", self.kind.noun())
    }
}

fn capitalized(noun: &str) -> String {
    let mut chars = noun.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use curio_drag::DroppedFile;

    use super::*;

    #[test]
    fn image_panels_accept_image_media_types() {
        let config = BrowserConfig::for_kind(ResourceKind::Images);
        let png = DroppedFile::new("cat.png", "image/png", alloc::vec![]);
        let txt = DroppedFile::new("notes.txt", "text/plain", alloc::vec![]);
        assert!(config.accept.accepts(&png));
        assert!(!config.accept.accepts(&txt));
    }

    #[test]
    fn font_panels_accept_by_extension() {
        let config = BrowserConfig::for_kind(ResourceKind::Fonts);
        let ttf = DroppedFile::new("Title.ttf", "application/octet-stream", alloc::vec![]);
        assert!(config.accept.accepts(&ttf));
    }

    #[test]
    fn audio_uses_media_tile_size() {
        assert_eq!(
            BrowserConfig::for_kind(ResourceKind::Audio).base_thumb,
            Size::new(225.0, 150.0)
        );
        assert_eq!(
            BrowserConfig::for_kind(ResourceKind::Images).base_thumb,
            Size::new(400.0, 150.0)
        );
    }

    #[test]
    fn empty_message_names_kind_and_query() {
        let config = BrowserConfig::for_kind(ResourceKind::Fonts);
        assert_eq!(
            config.empty_message("serif"),
            "No fonts found matching \"serif\""
        );
    }

    #[test]
    fn presentational_strings_are_kind_specific() {
        let config = BrowserConfig::for_kind(ResourceKind::Audio);
        assert_eq!(config.upload_text, "Upload Audio clips");
        assert_eq!(config.search_placeholder, "Search audio clips...");
    }
}
