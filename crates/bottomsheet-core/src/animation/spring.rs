//! Damped spring physics.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

/// Largest simulation step in seconds. Frames longer than this are split
/// into several steps so stiff springs stay stable.
const MAX_SUBSTEP: f64 = 1.0 / 240.0;

/// Longest frame the simulation will advance in one call.
const MAX_FRAME: f64 = 0.1;

/// Substeps allowed per call. A spring needing more than this settles
/// faster than a frame and is snapped to its target.
const MAX_SUBSTEPS: f64 = 10_000.0;

/// Spring parameters in perceptual terms.
///
/// `response` is the period of the undamped oscillation in seconds and
/// `damping_fraction` is the damping ratio (1.0 = critically damped).
/// Mass is fixed at 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpringConfig {
    pub response: f64,
    pub damping_fraction: f64,
}

impl SpringConfig {
    /// Short, barely overshooting spring used while the user interacts.
    pub const INTERACTIVE: Self = Self {
        response: 0.15,
        damping_fraction: 0.86,
    };

    /// Critically damped spring, never overshoots.
    pub const CRITICAL: Self = Self {
        response: 0.3,
        damping_fraction: 1.0,
    };

    pub const fn new(response: f64, damping_fraction: f64) -> Self {
        Self {
            response,
            damping_fraction,
        }
    }

    /// Undamped angular frequency in radians per second.
    pub fn angular_frequency(&self) -> f64 {
        2.0 * PI / self.response
    }

    /// Spring constant `k` for unit mass.
    pub fn stiffness(&self) -> f64 {
        let omega = self.angular_frequency();
        omega * omega
    }

    /// Damping coefficient `c` for unit mass.
    pub fn damping(&self) -> f64 {
        2.0 * self.damping_fraction * self.angular_frequency()
    }

    /// Largest stable step for semi-implicit Euler.
    ///
    /// Keeps `h·ω ≤ 0.5` and `h·c ≤ 0.5`, well inside the region where the
    /// integrator neither oscillates nor grows.
    fn max_substep(&self) -> f64 {
        MAX_SUBSTEP
            .min(0.5 / self.angular_frequency())
            .min(0.5 / self.damping())
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::INTERACTIVE
    }
}

/// Position and velocity of a simulated spring, in absolute units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SpringState {
    pub position: f64,
    /// Units per second.
    pub velocity: f64,
}

impl SpringState {
    pub fn new(position: f64) -> Self {
        Self {
            position,
            velocity: 0.0,
        }
    }

    /// Advance the simulation by `dt` seconds towards `target`.
    ///
    /// Springs too stiff to simulate, or any state that stops being finite,
    /// end up resting on `target`.
    pub fn step(&mut self, dt: f64, target: f64, config: &SpringConfig) {
        let mut remaining = dt.clamp(0.0, MAX_FRAME);
        if remaining <= 0.0 {
            return;
        }

        let h = config.max_substep();
        if !(h > 0.0) || !(remaining / h <= MAX_SUBSTEPS) {
            *self = SpringState::new(target);
            return;
        }

        let stiffness = config.stiffness();
        let damping = config.damping();
        while remaining > 1e-9 {
            let h = remaining.min(h);
            remaining -= h;

            // Semi-implicit Euler
            let displacement = self.position - target;
            let acceleration = -stiffness * displacement - damping * self.velocity;
            self.velocity += acceleration * h;
            self.position += self.velocity * h;
        }

        if !self.position.is_finite() || !self.velocity.is_finite() {
            *self = SpringState::new(target);
        }
    }

    /// Check whether the spring is at rest on `target`.
    pub fn is_settled(&self, target: f64, distance: f64, velocity: f64) -> bool {
        (self.position - target).abs() < distance && self.velocity.abs() < velocity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn simulate(config: SpringConfig, frames: usize) -> Vec<f64> {
        let mut state = SpringState::new(0.0);
        (0..frames)
            .map(|_| {
                state.step(1.0 / 60.0, 1.0, &config);
                state.position
            })
            .collect()
    }

    #[test]
    fn test_spring_reaches_target() {
        let positions = simulate(SpringConfig::INTERACTIVE, 60);
        let last = *positions.last().unwrap();
        assert!((last - 1.0).abs() < 1e-3, "Spring should settle, got {}", last);
    }

    #[test]
    fn test_interactive_spring_eases_out() {
        let positions = simulate(SpringConfig::INTERACTIVE, 6);
        // Most of the distance is covered early, then motion slows down.
        let first = positions[2];
        let second = positions[5] - positions[2];
        assert!(first > 0.4, "expected fast start, got {}", first);
        assert!(second < first, "expected deceleration: {} then {}", first, second);
    }

    #[test]
    fn test_critical_spring_does_not_overshoot() {
        let positions = simulate(SpringConfig::CRITICAL, 120);
        let max = positions.iter().cloned().fold(f64::MIN, f64::max);
        assert!(max <= 1.0 + 1e-6, "critical spring overshot to {}", max);
    }

    #[test]
    fn test_long_frame_is_stable() {
        let mut state = SpringState::new(0.0);
        for _ in 0..20 {
            state.step(0.5, 100.0, &SpringConfig::INTERACTIVE);
        }
        assert!(state.position.is_finite());
        assert!((state.position - 100.0).abs() < 1.0);
    }

    #[test]
    fn test_zero_dt_is_noop() {
        let mut state = SpringState::new(3.0);
        state.step(0.0, 10.0, &SpringConfig::INTERACTIVE);
        assert_eq!(state, SpringState::new(3.0));
    }

    #[test]
    fn test_stiff_spring_stays_finite() {
        let config = SpringConfig::new(0.01, 1.0);
        let mut state = SpringState::new(0.0);
        for _ in 0..60 {
            state.step(1.0 / 60.0, 240.0, &config);
            assert!(state.position.is_finite());
            assert!(state.position <= 240.0 + 1e-6, "overshot to {}", state.position);
        }
        assert!(state.is_settled(240.0, 0.1, 1.0));
    }

    #[test]
    fn test_unsimulable_spring_snaps_to_target() {
        let mut state = SpringState::new(0.0);
        state.step(1.0 / 60.0, 240.0, &SpringConfig::new(1e-9, 1.0));
        assert_eq!(state, SpringState::new(240.0));

        let mut state = SpringState::new(0.0);
        state.step(1.0 / 60.0, 240.0, &SpringConfig::new(-1.0, 1.0));
        assert_eq!(state, SpringState::new(240.0));
    }

    #[test]
    fn test_heavily_damped_spring_is_stable() {
        let mut state = SpringState::new(0.0);
        for _ in 0..600 {
            state.step(1.0 / 60.0, 1.0, &SpringConfig::new(0.15, 20.0));
            assert!(state.position.is_finite());
            assert!(state.position <= 1.0 + 1e-6);
        }
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: SpringConfig = serde_json::from_str(r#"{ "response": 0.3 }"#).unwrap();
        assert_eq!(config.response, 0.3);
        assert_eq!(config.damping_fraction, SpringConfig::INTERACTIVE.damping_fraction);
    }

    #[test]
    fn test_derived_coefficients() {
        let config = SpringConfig::new(1.0, 1.0);
        assert!((config.stiffness() - 4.0 * PI * PI).abs() < 1e-9);
        assert!((config.damping() - 4.0 * PI).abs() < 1e-9);
    }
}
