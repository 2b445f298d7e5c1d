//! Cancellable spring transition driven by the host frame loop.

use std::time::Duration;

use super::spring::{SpringConfig, SpringState};

/// Distance from the target (in pixels) below which a transition may settle.
pub const REST_DISTANCE: f64 = 0.1;
/// Speed (in pixels per second) below which a transition may settle.
pub const REST_VELOCITY: f64 = 1.0;

/// Animates a scalar value towards a target with a spring.
///
/// The transition is idle until [`SpringTransition::retarget`] is called.
/// Each frame the host calls [`SpringTransition::step`] with the frame time.
/// Retargeting a running transition keeps its current velocity, so a
/// reversed decision mid-flight curves smoothly instead of jumping.
#[derive(Debug, Clone, PartialEq)]
pub struct SpringTransition {
    state: SpringState,
    target: Option<f64>,
    config: SpringConfig,
}

impl SpringTransition {
    /// Create an idle transition resting at `position`.
    pub fn new(position: f64, config: SpringConfig) -> Self {
        Self {
            state: SpringState::new(position),
            target: None,
            config,
        }
    }

    /// Current value.
    pub fn position(&self) -> f64 {
        self.state.position
    }

    /// Current velocity in units per second.
    pub fn velocity(&self) -> f64 {
        self.state.velocity
    }

    /// Target of the running transition, if any.
    pub fn target(&self) -> Option<f64> {
        self.target
    }

    /// Check if a transition is in flight.
    pub fn is_running(&self) -> bool {
        self.target.is_some()
    }

    /// Jump to `position`, cancelling any running transition.
    pub fn set_position(&mut self, position: f64) {
        self.state = SpringState::new(position);
        self.target = None;
    }

    /// Start (or redirect) the transition towards `target`.
    pub fn retarget(&mut self, target: f64) {
        if self.target.is_none() && (self.state.position - target).abs() < REST_DISTANCE {
            self.state = SpringState::new(target);
            return;
        }
        self.target = Some(target);
    }

    /// Stop where we are.
    pub fn cancel(&mut self) {
        self.state.velocity = 0.0;
        self.target = None;
    }

    /// Advance by one frame. Returns the new value.
    pub fn step(&mut self, dt: Duration) -> f64 {
        let Some(target) = self.target else {
            return self.state.position;
        };

        self.state.step(dt.as_secs_f64(), target, &self.config);

        if self.state.is_settled(target, REST_DISTANCE, REST_VELOCITY) {
            self.state = SpringState::new(target);
            self.target = None;
        }

        self.state.position
    }
}
