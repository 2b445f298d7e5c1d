//! Gesture handling and offset animation for a single sheet.

use std::time::Duration;

use kurbo::{Point, Rect};

use super::state::{ChangeCause, SheetChange, SheetPosition};
use crate::animation::SpringTransition;
use crate::config::SheetConfig;
use crate::input::{DragEnd, DragTracker, MouseButton, PointerEvent};
use crate::layout::SheetLayout;
use crate::snap::{SnapDecision, clamp_offset, drag_offset, resting_offset};

/// Stateful part of a bottom sheet.
///
/// The open flag is owned by the caller and passed as `&mut bool` to every
/// call that may change it. The controller keeps the last value it saw, so a
/// change made by the caller between calls is detected and animated like
/// one made by a gesture. Every change the controller makes itself is
/// returned as a [`SheetChange`].
///
/// Hosts feed pointer events with [`SheetController::handle_pointer_event`]
/// and advance the transition once per frame with
/// [`SheetController::step`].
#[derive(Debug, Clone)]
pub struct SheetController {
    config: SheetConfig,
    transition: SpringTransition,
    tracker: DragTracker,
    /// Whether the current gesture started on the indicator.
    pressed_indicator: bool,
    /// Vertical translation of the active drag.
    drag_translation: Option<f64>,
    last_seen_open: bool,
    /// Container used for hit testing pointer events.
    container: Rect,
}

impl SheetController {
    /// Create a controller resting at the offset matching `is_open`.
    pub fn new(config: SheetConfig, is_open: bool) -> Self {
        let offset = resting_offset(is_open, config.closed_offset());
        Self {
            transition: SpringTransition::new(offset, config.spring()),
            config,
            tracker: DragTracker::default(),
            pressed_indicator: false,
            drag_translation: None,
            last_seen_open: is_open,
            container: Rect::ZERO,
        }
    }

    pub fn config(&self) -> &SheetConfig {
        &self.config
    }

    /// Replace the config. A different config resets the sheet to the
    /// resting offset of its last known state and drops any gesture.
    pub fn set_config(&mut self, config: SheetConfig) {
        if config == self.config {
            return;
        }
        log::debug!("Sheet config changed, resetting");
        let container = self.container;
        *self = Self::new(config, self.last_seen_open);
        self.container = container;
    }

    /// Current offset from the fully open position, within `[0, closed_offset]`.
    pub fn offset(&self) -> f64 {
        clamp_offset(self.transition.position(), self.config.closed_offset())
    }

    /// Check if the offset is animating towards a resting position.
    pub fn is_animating(&self) -> bool {
        self.transition.is_running()
    }

    /// Check if a drag is moving the sheet.
    pub fn is_dragging(&self) -> bool {
        self.drag_translation.is_some()
    }

    /// Vertical translation of the active drag, if any.
    pub fn drag_translation(&self) -> Option<f64> {
        self.drag_translation
    }

    /// Check if a gesture (press or drag) is in progress.
    pub fn has_gesture(&self) -> bool {
        self.tracker.is_active()
    }

    /// Set the container the sheet is anchored to.
    pub fn set_container(&mut self, container: Rect) {
        self.container = container;
    }

    pub fn container(&self) -> Rect {
        self.container
    }

    /// Layout at the current offset in the current container.
    pub fn layout(&self) -> SheetLayout {
        SheetLayout::compute(self.container, &self.config, self.offset())
    }

    /// Notice changes the caller made to the open flag.
    ///
    /// Outside of a drag the sheet starts moving to the new resting offset.
    /// During a drag the new state becomes the base of the drag offset.
    pub fn sync(&mut self, is_open: bool) {
        if is_open == self.last_seen_open {
            return;
        }
        log::debug!("Sheet {} by caller", if is_open { "opened" } else { "closed" });
        self.last_seen_open = is_open;
        if !self.is_dragging() {
            self.animate_to_rest(is_open);
        }
    }

    /// Process a pointer event.
    pub fn handle_pointer_event(
        &mut self,
        event: PointerEvent,
        is_open: &mut bool,
    ) -> Option<SheetChange> {
        self.sync(*is_open);

        match event {
            PointerEvent::Down {
                position,
                button: MouseButton::Left,
            } => {
                self.press(position);
                None
            }
            PointerEvent::Down { .. } => None,
            PointerEvent::Move { position } => {
                if let Some(translation) = self.tracker.move_to(position) {
                    self.drag_to(translation.y, *is_open);
                }
                None
            }
            PointerEvent::Up {
                position,
                button: MouseButton::Left,
            } => match self.tracker.release(position)? {
                DragEnd::Drag { translation } => {
                    self.drag_to(translation.y, *is_open);
                    self.end_drag(translation.y, is_open)
                }
                DragEnd::Tap { .. } if self.pressed_indicator => {
                    self.pressed_indicator = false;
                    Some(self.tap_indicator(is_open))
                }
                DragEnd::Tap { .. } => None,
            },
            PointerEvent::Up { .. } => None,
            PointerEvent::Cancel => {
                self.cancel_gesture(*is_open);
                None
            }
        }
    }

    /// Toggle the sheet as a tap on the indicator does.
    pub fn tap_indicator(&mut self, is_open: &mut bool) -> SheetChange {
        let position = SheetPosition::from(*is_open).toggled();
        log::debug!("Indicator tapped, sheet now {:?}", position);
        self.commit(position, is_open, ChangeCause::IndicatorTap)
    }

    /// Advance the transition by one frame. Returns true while the sheet
    /// is animating and needs more frames. A held drag only moves on input,
    /// so it does not count.
    pub fn step(&mut self, dt: Duration, is_open: bool) -> bool {
        self.sync(is_open);
        self.transition.step(dt);
        self.is_animating()
    }

    fn press(&mut self, position: Point) {
        if self.tracker.is_active() {
            return;
        }
        let layout = self.layout();
        if !layout.contains_sheet(position) {
            return;
        }
        self.tracker.press(position);
        self.pressed_indicator = layout.hits_indicator(position);
        log::trace!("Sheet pressed at {:?}", position);
    }

    fn drag_to(&mut self, translation_y: f64, is_open: bool) {
        self.drag_translation = Some(translation_y);
        let offset = drag_offset(is_open, translation_y, self.config.closed_offset());
        self.transition.set_position(offset);
        log::trace!("Sheet dragged by {:.1}, offset {:.1}", translation_y, offset);
    }

    fn end_drag(&mut self, translation_y: f64, is_open: &mut bool) -> Option<SheetChange> {
        self.drag_translation = None;
        self.pressed_indicator = false;

        let decision = SnapDecision::from_translation(translation_y, self.config.snap_threshold());
        log::debug!("Drag ended at {:.1}: {:?}", translation_y, decision);

        let position = SheetPosition::from(decision.apply(*is_open));
        if position.is_open() == *is_open {
            self.animate_to_rest(*is_open);
            return None;
        }
        Some(self.commit(position, is_open, ChangeCause::Drag))
    }

    fn cancel_gesture(&mut self, is_open: bool) {
        if !self.tracker.is_active() {
            return;
        }
        log::debug!("Sheet gesture cancelled");
        self.tracker.cancel();
        self.pressed_indicator = false;
        if self.drag_translation.take().is_some() {
            self.animate_to_rest(is_open);
        }
    }

    fn commit(
        &mut self,
        position: SheetPosition,
        is_open: &mut bool,
        cause: ChangeCause,
    ) -> SheetChange {
        *is_open = position.is_open();
        self.last_seen_open = *is_open;
        self.animate_to_rest(*is_open);
        SheetChange { position, cause }
    }

    fn animate_to_rest(&mut self, is_open: bool) {
        let target = resting_offset(is_open, self.config.closed_offset());
        self.transition.retarget(target);
    }
}
