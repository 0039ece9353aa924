//! Hero strip drag model.
//!
//! `DragStrip` is the state machine behind the horizontally draggable hero
//! strip. Pointer handlers return [`DragAction`]s; the host applies them to the
//! strip element. Offsets accumulate across drags: each new drag measures its
//! delta from the offset committed by the previous one.

#[cfg(test)]
#[path = "drag_test.rs"]
mod drag_test;

use crate::consts::{MAX_LEFT_PX, MAX_RIGHT_PX};
use crate::error::ConfigError;
use crate::style::Cursor;

/// Clamp `value` into `[min, max]`, inclusive at both ends.
#[must_use]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    min.max(max.min(value))
}

/// Inclusive travel range for the strip, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragBounds {
    min: f64,
    max: f64,
}

impl Default for DragBounds {
    fn default() -> Self {
        Self { min: MAX_LEFT_PX, max: MAX_RIGHT_PX }
    }
}

impl DragBounds {
    /// Build bounds.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidBounds`] when `min > max` or either end is NaN.
    pub fn new(min: f64, max: f64) -> Result<Self, ConfigError> {
        if min.is_nan() || max.is_nan() || min > max {
            return Err(ConfigError::InvalidBounds { min, max });
        }
        Ok(Self { min, max })
    }

    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        clamp(value, self.min, self.max)
    }
}

/// Side effects requested by the drag state machine.
#[derive(Debug, Clone, PartialEq)]
pub enum DragAction {
    /// Route further events for this pointer to the strip. Best-effort.
    CapturePointer(i32),
    /// Release a previous capture. Failure is ignored.
    ReleasePointer(i32),
    /// Show a cursor affordance.
    SetCursor(Cursor),
    /// Apply `translateX(<px>px)` to the strip.
    Translate(f64),
}

/// Whether a drag is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    /// Waiting for a pointer-down.
    #[default]
    Idle,
    /// A pointer is held down.
    Dragging {
        /// Pointer X at pointer-down; deltas are measured from here.
        anchor_x: f64,
    },
}

/// Drag state for one strip element.
#[derive(Debug, Clone, Default)]
pub struct DragStrip {
    bounds: DragBounds,
    state: DragState,
    committed: f64,
    live: f64,
}

impl DragStrip {
    #[must_use]
    pub fn new(bounds: DragBounds) -> Self {
        Self { bounds, ..Self::default() }
    }

    /// Actions to apply once when the strip is mounted.
    #[must_use]
    pub fn mount(&self) -> Vec<DragAction> {
        vec![DragAction::Translate(self.committed)]
    }

    /// Start a drag. A second pointer-down while dragging re-anchors.
    pub fn pointer_down(&mut self, x: f64, pointer_id: i32) -> Vec<DragAction> {
        self.state = DragState::Dragging { anchor_x: x };
        vec![DragAction::CapturePointer(pointer_id), DragAction::SetCursor(Cursor::Grabbing)]
    }

    /// Follow the pointer. Ignored unless a drag is in progress.
    pub fn pointer_move(&mut self, x: f64) -> Vec<DragAction> {
        let DragState::Dragging { anchor_x } = self.state else {
            return Vec::new();
        };
        let candidate = self.committed + (x - anchor_x);
        self.live = self.bounds.clamp(candidate);
        vec![DragAction::Translate(self.live)]
    }

    /// Finish a drag on pointer-up or pointer-cancel. Ignored when idle.
    pub fn pointer_up(&mut self, pointer_id: i32) -> Vec<DragAction> {
        if !self.is_dragging() {
            return Vec::new();
        }
        self.state = DragState::Idle;
        self.committed = self.live;
        vec![DragAction::SetCursor(Cursor::Grab), DragAction::ReleasePointer(pointer_id)]
    }

    // --- Queries ---

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    #[must_use]
    pub fn state(&self) -> DragState {
        self.state
    }

    /// Offset accepted at the end of the previous drag.
    #[must_use]
    pub fn committed_offset(&self) -> f64 {
        self.committed
    }

    /// Offset most recently applied during a drag.
    #[must_use]
    pub fn live_offset(&self) -> f64 {
        self.live
    }

    #[must_use]
    pub fn bounds(&self) -> DragBounds {
        self.bounds
    }
}
