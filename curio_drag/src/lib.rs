// Copyright 2025 the Curio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Curio Drag: a drag-and-drop file intake state machine.
//!
//! [`DragIntake`] tracks one pointer-driven file-drop interaction per drop
//! zone. It validates the dropped files against an [`AcceptList`] and, when
//! at least one file survives, hands back a [`FilesReceived`] value carrying
//! the surviving files and the targeted group. It never reads the resource
//! tree and never decodes file bytes.
//!
//! The machine has two phases, [`DragPhase::Idle`] and [`DragPhase::Dragging`]:
//!
//! - [`DragIntake::enter`] starts (or re-targets) a session for a group.
//! - [`DragIntake::over`] changes nothing; hosts call it so the environment
//!   accepts the eventual drop.
//! - [`DragIntake::leave`] resets to idle **only** when the leave happened at
//!   the drop-zone boundary itself. Leaves into child elements keep the
//!   session alive, which prevents highlight flicker while the pointer moves
//!   across the zone's interior.
//! - [`DragIntake::drop_files`] always resets to idle and reports a
//!   [`DropOutcome`].
//!
//! Every `enter` therefore reaches `Idle` again via a boundary `leave` or a
//! drop, and no session ever straddles two targets: re-entering while
//! dragging re-targets the existing session.
//!
//! ```rust
//! use curio_drag::{AcceptList, DragIntake, DragPhase, DroppedFile, DropOutcome};
//!
//! let accept: AcceptList = ["image/"].into_iter().collect();
//! let mut intake: DragIntake<&str> = DragIntake::new(accept);
//!
//! intake.enter("g1");
//! assert_eq!(intake.phase(), DragPhase::Dragging);
//!
//! let files = vec![
//!     DroppedFile::new("cat.png", "image/png", vec![]),
//!     DroppedFile::new("notes.txt", "text/plain", vec![]),
//! ];
//! match intake.drop_files(files) {
//!     DropOutcome::Accepted(received) => {
//!         assert_eq!(received.target, "g1");
//!         assert_eq!(received.files.len(), 1); // the text file was filtered out
//!     }
//!     _ => unreachable!(),
//! }
//! assert_eq!(intake.phase(), DragPhase::Idle);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use smallvec::SmallVec;

/// Phase of a drag session.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DragPhase {
    /// No drag in progress.
    Idle,
    /// A drag is hovering over the drop zone.
    Dragging,
}

/// One file extracted from a drop payload.
///
/// `media_type` is the type declared by the source environment (for example
/// `"image/png"`); it is trusted for filtering only. `bytes` are carried
/// through opaquely and never decoded here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DroppedFile {
    /// File name as reported by the source.
    pub name: String,
    /// Declared media type; may be empty.
    pub media_type: String,
    /// Raw content.
    pub bytes: Vec<u8>,
}

impl DroppedFile {
    /// Bundle up one dropped file.
    pub fn new(
        name: impl Into<String>,
        media_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            bytes,
        }
    }
}

/// One accepted-file pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AcceptPattern {
    /// Matches when the declared media type starts with this prefix
    /// (for example `"image/"`).
    MediaTypePrefix(String),
    /// Matches when the file name ends with this extension
    /// (for example `".ttf"`).
    Extension(String),
}

impl From<&str> for AcceptPattern {
    /// Patterns starting with `.` are extensions; everything else is a
    /// media-type prefix. A trailing `*` on a prefix is tolerated, so
    /// `"image/*"` and `"image/"` mean the same thing.
    fn from(pattern: &str) -> Self {
        if pattern.starts_with('.') {
            Self::Extension(pattern.to_lowercase())
        } else {
            Self::MediaTypePrefix(pattern.trim_end_matches('*').to_lowercase())
        }
    }
}

/// The list of patterns a panel accepts.
///
/// An empty list accepts every file. Matching is case-insensitive in both
/// directions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AcceptList {
    patterns: SmallVec<[AcceptPattern; 4]>,
}

impl AcceptList {
    /// Accept everything.
    pub fn any() -> Self {
        Self::default()
    }

    /// Does this file pass the accept list?
    pub fn accepts(&self, file: &DroppedFile) -> bool {
        if self.patterns.is_empty() {
            return true;
        }
        let media_type = file.media_type.to_lowercase();
        let name = file.name.to_lowercase();
        self.patterns.iter().any(|pattern| match pattern {
            AcceptPattern::MediaTypePrefix(prefix) => media_type.starts_with(prefix.as_str()),
            AcceptPattern::Extension(ext) => name.ends_with(ext.as_str()),
        })
    }

    /// `true` when no pattern is configured (everything passes).
    pub fn accepts_any(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl<P: Into<AcceptPattern>> FromIterator<P> for AcceptList {
    fn from_iter<T: IntoIterator<Item = P>>(iter: T) -> Self {
        Self {
            patterns: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// A validated, forwardable drop: the surviving files and the targeted group.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilesReceived<K> {
    /// Files that passed the accept list, in payload order.
    pub files: Vec<DroppedFile>,
    /// The group the drop zone belongs to.
    pub target: K,
}

/// Result of [`DragIntake::drop_files`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DropOutcome<K> {
    /// At least one file passed; forward upward as a "files received" event.
    Accepted(FilesReceived<K>),
    /// Files were dropped but none passed the accept list. No event; hosts
    /// may surface feedback.
    Rejected,
    /// Empty payload, or a drop with no active session. Silent no-op.
    Ignored,
}

/// Per-drop-zone drag session state machine, generic over the group key `K`.
#[derive(Clone, Debug)]
pub struct DragIntake<K> {
    accept: AcceptList,
    target: Option<K>,
}

impl<K> DragIntake<K> {
    /// An idle intake with the given accept list.
    pub fn new(accept: AcceptList) -> Self {
        Self {
            accept,
            target: None,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> DragPhase {
        if self.target.is_some() {
            DragPhase::Dragging
        } else {
            DragPhase::Idle
        }
    }

    /// The group currently targeted, if a session is active.
    pub fn target(&self) -> Option<&K> {
        self.target.as_ref()
    }

    /// The configured accept list.
    pub fn accept(&self) -> &AcceptList {
        &self.accept
    }

    /// Start a session targeting `target`, or re-target an active one.
    pub fn enter(&mut self, target: K) {
        self.target = Some(target);
    }

    /// No state change; present so hosts have a hook at which to permit the
    /// drop in their environment.
    pub fn over(&self) {}

    /// Pointer left the zone. Resets only when the leave occurred at the
    /// drop-zone boundary itself; leaves into child elements are ignored.
    pub fn leave(&mut self, at_boundary: bool) {
        if at_boundary {
            self.target = None;
        }
    }

    /// Complete the session with a drop payload.
    ///
    /// Always returns to [`DragPhase::Idle`]. Files failing the accept list
    /// are filtered out; see [`DropOutcome`] for what the survivors yield.
    pub fn drop_files(&mut self, files: Vec<DroppedFile>) -> DropOutcome<K> {
        let target = match self.target.take() {
            Some(target) => target,
            None => return DropOutcome::Ignored,
        };
        if files.is_empty() {
            return DropOutcome::Ignored;
        }
        let accepted: Vec<DroppedFile> = files
            .into_iter()
            .filter(|file| self.accept.accepts(file))
            .collect();
        if accepted.is_empty() {
            return DropOutcome::Rejected;
        }
        DropOutcome::Accepted(FilesReceived {
            files: accepted,
            target,
        })
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    fn png() -> DroppedFile {
        DroppedFile::new("cat.png", "image/png", vec![1, 2, 3])
    }

    fn txt() -> DroppedFile {
        DroppedFile::new("notes.txt", "text/plain", vec![4])
    }

    fn image_intake() -> DragIntake<&'static str> {
        DragIntake::new(["image/"].into_iter().collect())
    }

    #[test]
    fn enter_then_drop_filters_and_resets() {
        let mut intake = image_intake();
        intake.enter("g1");
        assert_eq!(intake.phase(), DragPhase::Dragging);
        assert_eq!(intake.target(), Some(&"g1"));

        let outcome = intake.drop_files(vec![png(), txt()]);
        match outcome {
            DropOutcome::Accepted(received) => {
                assert_eq!(received.target, "g1");
                assert_eq!(received.files, vec![png()]);
            }
            other => panic!("expected Accepted, got {other:?}"),
        }
        assert_eq!(intake.phase(), DragPhase::Idle);
    }

    #[test]
    fn drop_with_no_accepted_files_is_rejected_and_resets() {
        let mut intake = image_intake();
        intake.enter("g1");
        assert_eq!(intake.drop_files(vec![txt()]), DropOutcome::Rejected);
        assert_eq!(intake.phase(), DragPhase::Idle);
    }

    #[test]
    fn empty_payload_is_ignored() {
        let mut intake = image_intake();
        intake.enter("g1");
        assert_eq!(intake.drop_files(vec![]), DropOutcome::Ignored);
        assert_eq!(intake.phase(), DragPhase::Idle);
    }

    #[test]
    fn drop_without_session_is_ignored() {
        let mut intake = image_intake();
        assert_eq!(intake.drop_files(vec![png()]), DropOutcome::Ignored);
    }

    #[test]
    fn child_leave_keeps_session_boundary_leave_resets() {
        let mut intake = image_intake();
        intake.enter("g1");

        intake.leave(false);
        assert_eq!(intake.phase(), DragPhase::Dragging);

        intake.leave(true);
        assert_eq!(intake.phase(), DragPhase::Idle);
    }

    #[test]
    fn reenter_retargets_without_stacking() {
        let mut intake = image_intake();
        intake.enter("g1");
        intake.enter("g2");
        assert_eq!(intake.target(), Some(&"g2"));

        match intake.drop_files(vec![png()]) {
            DropOutcome::Accepted(received) => assert_eq!(received.target, "g2"),
            other => panic!("expected Accepted, got {other:?}"),
        }
    }

    #[test]
    fn over_changes_nothing() {
        let mut intake = image_intake();
        intake.enter("g1");
        intake.over();
        assert_eq!(intake.phase(), DragPhase::Dragging);
    }

    #[test]
    fn extension_patterns_match_case_insensitively() {
        let accept: AcceptList = [".ttf", ".otf"].into_iter().collect();
        let upper = DroppedFile::new("TITLE.TTF", "", vec![]);
        let other = DroppedFile::new("song.mp3", "audio/mpeg", vec![]);
        assert!(accept.accepts(&upper));
        assert!(!accept.accepts(&other));
    }

    #[test]
    fn media_prefix_tolerates_star_form() {
        let starred: AcceptList = ["image/*"].into_iter().collect();
        let plain: AcceptList = ["image/"].into_iter().collect();
        assert_eq!(starred, plain);
        assert!(starred.accepts(&png()));
    }

    #[test]
    fn empty_accept_list_accepts_everything() {
        let accept = AcceptList::any();
        assert!(accept.accepts_any());
        assert!(accept.accepts(&txt()));
        assert!(accept.accepts(&DroppedFile::new("blob", "", vec![])));
    }
}
