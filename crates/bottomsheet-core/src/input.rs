//! Pointer events and drag tracking for mouse/touch input.

use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// Distance the pointer must travel before a press becomes a drag.
pub const DRAG_MIN_DISTANCE: f64 = 10.0;

/// Mouse button identifiers. Touches are reported as `Left`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Pointer event type for unified mouse/touch handling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down {
        position: Point,
        button: MouseButton,
    },
    Up {
        position: Point,
        button: MouseButton,
    },
    Move {
        position: Point,
    },
    /// The host cancelled the gesture (pointer left, touch conflict, ...).
    Cancel,
}

/// Phase of the gesture being tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragPhase {
    /// No pointer is down.
    #[default]
    Idle,
    /// Pointer is down but has not yet moved far enough to drag.
    Pressed,
    /// Pointer is dragging.
    Dragging,
}

/// How a gesture finished.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragEnd {
    /// Released without crossing the drag distance.
    Tap { position: Point },
    /// Released after dragging. `translation` is measured from the press.
    Drag { translation: Vec2 },
}

/// Tracks a single press/drag/release gesture.
///
/// The translation is always relative to the position of the press, so
/// it includes the slop travelled before the drag was recognized.
#[derive(Debug, Clone, PartialEq)]
pub struct DragTracker {
    phase: DragPhase,
    /// Position of the press that started the gesture.
    start: Option<Point>,
    /// Latest pointer position.
    position: Point,
    min_distance: f64,
}

impl Default for DragTracker {
    fn default() -> Self {
        Self::new(DRAG_MIN_DISTANCE)
    }
}

impl DragTracker {
    /// Create a tracker with the given drag recognition distance.
    pub fn new(min_distance: f64) -> Self {
        Self {
            phase: DragPhase::Idle,
            start: None,
            position: Point::ZERO,
            min_distance,
        }
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    /// Check if a gesture is in progress (pressed or dragging).
    pub fn is_active(&self) -> bool {
        self.phase != DragPhase::Idle
    }

    pub fn is_dragging(&self) -> bool {
        self.phase == DragPhase::Dragging
    }

    /// Start position of the current gesture.
    pub fn start(&self) -> Option<Point> {
        self.start
    }

    /// Translation since the press, if a gesture is active.
    pub fn translation(&self) -> Option<Vec2> {
        self.start.map(|start| self.position - start)
    }

    /// Begin a gesture at `position`.
    pub fn press(&mut self, position: Point) {
        self.phase = DragPhase::Pressed;
        self.start = Some(position);
        self.position = position;
    }

    /// Track pointer movement. Returns the translation while dragging.
    pub fn move_to(&mut self, position: Point) -> Option<Vec2> {
        let start = self.start?;
        self.position = position;

        if self.phase == DragPhase::Pressed && (position - start).hypot() >= self.min_distance {
            self.phase = DragPhase::Dragging;
        }

        if self.is_dragging() {
            Some(position - start)
        } else {
            None
        }
    }

    /// Finish the gesture at `position`.
    pub fn release(&mut self, position: Point) -> Option<DragEnd> {
        let start = self.start?;
        // The release position may not have been reported as a move
        self.move_to(position);

        let end = if self.is_dragging() {
            DragEnd::Drag {
                translation: position - start,
            }
        } else {
            DragEnd::Tap { position: start }
        };
        self.reset();
        Some(end)
    }

    /// Abandon the gesture.
    pub fn cancel(&mut self) {
        self.reset();
    }

    fn reset(&mut self) {
        self.phase = DragPhase::Idle;
        self.start = None;
    }
}
