// Copyright 2025 the Curio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Clamped thumbnail zoom and derived sizing.

use kurbo::Size;

/// Smallest permitted zoom level.
pub const ZOOM_MIN: f64 = 0.5;
/// Largest permitted zoom level.
pub const ZOOM_MAX: f64 = 4.0;
/// Increment applied by [`ZoomState::step_in`] / [`ZoomState::step_out`].
pub const ZOOM_STEP: f64 = 0.1;

/// Thumbnail zoom level, clamped to `[ZOOM_MIN, ZOOM_MAX]`.
///
/// Zoom never touches the tree; it only scales the view. Derived dimensions
/// come from [`ZoomState::scaled`], which multiplies a per-kind base size by
/// the level and rounds to whole units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomState {
    level: f64,
}

impl Default for ZoomState {
    fn default() -> Self {
        Self { level: 1.0 }
    }
}

impl ZoomState {
    /// Zoom at the default 1.0 level.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current level.
    pub fn level(&self) -> f64 {
        self.level
    }

    /// Set the level, clamping out-of-range requests to the nearest bound.
    ///
    /// Non-finite input keeps the current level; a bad request is recovered
    /// locally, never surfaced.
    pub fn set(&mut self, level: f64) {
        if level.is_finite() {
            self.level = level.clamp(ZOOM_MIN, ZOOM_MAX);
        }
    }

    /// Step the level up by [`ZOOM_STEP`], saturating at [`ZOOM_MAX`].
    pub fn step_in(&mut self) {
        self.level = f64::min(ZOOM_MAX, self.level + ZOOM_STEP);
    }

    /// Step the level down by [`ZOOM_STEP`], saturating at [`ZOOM_MIN`].
    pub fn step_out(&mut self) {
        self.level = f64::max(ZOOM_MIN, self.level - ZOOM_STEP);
    }

    /// Scale a base size by the current level, rounded to whole units.
    pub fn scaled(&self, base: Size) -> Size {
        (base * self.level).round()
    }
}
