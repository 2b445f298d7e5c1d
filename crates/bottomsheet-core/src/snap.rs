//! Offset clamping and the drag-end snap rule.

/// Outcome of a finished drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapDecision {
    /// Drag was too short; keep the current state.
    Stay,
    /// Upward drag past the threshold.
    Open,
    /// Downward drag past the threshold.
    Close,
}

impl SnapDecision {
    /// Decide from the vertical translation of a finished drag.
    ///
    /// Only the sign and magnitude of the translation matter, not the offset
    /// the sheet reached while dragging. A drag that ends within the
    /// threshold (inclusive) is discarded.
    pub fn from_translation(translation_y: f64, threshold: f64) -> Self {
        if !(translation_y.abs() > threshold) {
            SnapDecision::Stay
        } else if translation_y < 0.0 {
            SnapDecision::Open
        } else {
            SnapDecision::Close
        }
    }

    /// Resulting open state when applied to `is_open`.
    pub fn apply(self, is_open: bool) -> bool {
        match self {
            SnapDecision::Stay => is_open,
            SnapDecision::Open => true,
            SnapDecision::Close => false,
        }
    }
}

/// Clamp an offset into `[0, closed_offset]`.
///
/// Never panics, even for a negative `closed_offset`.
pub fn clamp_offset(offset: f64, closed_offset: f64) -> f64 {
    offset.max(0.0).min(closed_offset)
}

/// Offset at which the sheet rests for the given state.
pub fn resting_offset(is_open: bool, closed_offset: f64) -> f64 {
    if is_open { 0.0 } else { closed_offset }
}

/// Offset while dragging by `translation_y` from the resting position.
pub fn drag_offset(is_open: bool, translation_y: f64, closed_offset: f64) -> f64 {
    clamp_offset(resting_offset(is_open, closed_offset) + translation_y, closed_offset)
}
