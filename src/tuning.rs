//! Data-driven game balance
//!
//! Every feel constant lives here so tests and balancing passes can tweak one
//! struct instead of hunting literals. Units are pixels and ticks (one tick per
//! display refresh).

use serde::{Deserialize, Serialize};

/// Tuning constants for a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Bird ===
    /// Downward acceleration (px/tick²)
    pub gravity: f32,
    /// Velocity assigned by an upward swipe (negative = up)
    pub impulse_up: f32,
    /// Velocity assigned by a downward swipe
    pub impulse_down: f32,
    /// Degrees of tilt per unit of vertical velocity
    pub rotation_gain: f32,
    /// Tilt limit in degrees (symmetric)
    pub max_rotation: f32,
    pub bird_width: f32,
    pub bird_height: f32,
    /// Bird anchor as a fraction of viewport width
    pub bird_x_ratio: f32,
    /// Bird start height as a fraction of viewport height
    pub bird_y_ratio: f32,
    /// Hitbox inset on every side of the bird sprite
    pub hitbox_inset: f32,

    // === World ===
    /// Ground strip height as a fraction of viewport height
    pub ground_ratio: f32,
    /// Background scroll speed relative to the ground
    pub background_parallax: f32,

    // === Pipes ===
    pub pipe_width: f32,
    /// Vertical opening between top and bottom pipe
    pub pipe_gap: f32,
    /// Minimum height of either pipe stub
    pub pipe_min_height: f32,
    /// Ticks between pipe spawns
    pub spawn_interval: u32,

    // === Difficulty ===
    /// Scroll speed at the start of a run (px/tick)
    pub initial_speed: f32,
    /// Speed added at every ramp step
    pub speed_step: f32,
    /// Points between ramp steps
    pub speed_step_every: u32,

    // === Input ===
    /// Drag distance (px) a gesture must travel to count as a swipe
    pub swipe_threshold: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: 0.25,
            impulse_up: -8.0,
            impulse_down: 6.0,
            rotation_gain: 3.0,
            max_rotation: 30.0,
            bird_width: 60.0,
            bird_height: 44.0,
            bird_x_ratio: 0.25,
            bird_y_ratio: 0.5,
            hitbox_inset: 5.0,

            ground_ratio: 0.15,
            background_parallax: 0.25,

            pipe_width: 52.0,
            pipe_gap: 240.0,
            pipe_min_height: 60.0,
            spawn_interval: 150,

            initial_speed: 3.0,
            speed_step: 0.2,
            speed_step_every: 5,

            swipe_threshold: 20.0,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Tuning>(json).map(Tuning::sanitized)
    }

    /// Replace values that would break the simulation with their defaults.
    ///
    /// Magnitudes must be finite and non-negative (impulse signs are forced),
    /// ratios must lie in `[0, 1]`, and counters must be non-zero.
    pub fn sanitized(mut self) -> Self {
        let defaults = Tuning::default();

        fn magnitude(value: f32, fallback: f32) -> f32 {
            if value.is_finite() && value >= 0.0 {
                value
            } else {
                fallback
            }
        }
        fn ratio(value: f32, fallback: f32) -> f32 {
            if value.is_finite() && (0.0..=1.0).contains(&value) {
                value
            } else {
                fallback
            }
        }

        self.gravity = magnitude(self.gravity, defaults.gravity);
        self.impulse_up = if self.impulse_up.is_finite() {
            -self.impulse_up.abs()
        } else {
            defaults.impulse_up
        };
        self.impulse_down = if self.impulse_down.is_finite() {
            self.impulse_down.abs()
        } else {
            defaults.impulse_down
        };
        self.rotation_gain = magnitude(self.rotation_gain, defaults.rotation_gain);
        self.max_rotation = magnitude(self.max_rotation, defaults.max_rotation);
        self.bird_width = magnitude(self.bird_width, defaults.bird_width);
        self.bird_height = magnitude(self.bird_height, defaults.bird_height);
        self.bird_x_ratio = ratio(self.bird_x_ratio, defaults.bird_x_ratio);
        self.bird_y_ratio = ratio(self.bird_y_ratio, defaults.bird_y_ratio);
        self.hitbox_inset = magnitude(self.hitbox_inset, defaults.hitbox_inset)
            .min(self.bird_width.min(self.bird_height) / 2.0);

        self.ground_ratio = ratio(self.ground_ratio, defaults.ground_ratio);
        self.background_parallax = ratio(self.background_parallax, defaults.background_parallax);

        self.pipe_width = magnitude(self.pipe_width, defaults.pipe_width);
        self.pipe_gap = magnitude(self.pipe_gap, defaults.pipe_gap);
        self.pipe_min_height = magnitude(self.pipe_min_height, defaults.pipe_min_height);
        if self.spawn_interval == 0 {
            self.spawn_interval = defaults.spawn_interval;
        }

        self.initial_speed = magnitude(self.initial_speed, defaults.initial_speed);
        self.speed_step = magnitude(self.speed_step, defaults.speed_step);
        if self.speed_step_every == 0 {
            self.speed_step_every = defaults.speed_step_every;
        }

        self.swipe_threshold = magnitude(self.swipe_threshold, defaults.swipe_threshold);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "gravity": 0.5, "spawn_interval": 90 }"#).unwrap();
        assert_eq!(tuning.gravity, 0.5);
        assert_eq!(tuning.spawn_interval, 90);
        assert_eq!(tuning.pipe_gap, Tuning::default().pipe_gap);
        assert_eq!(tuning.impulse_up, -8.0);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(Tuning::from_json("{ gravity: }").is_err());
    }

    #[test]
    fn test_sanitize_forces_impulse_signs() {
        let tuning = Tuning {
            impulse_up: 8.0,
            impulse_down: -6.0,
            ..Default::default()
        }
        .sanitized();
        assert_eq!(tuning.impulse_up, -8.0);
        assert_eq!(tuning.impulse_down, 6.0);
    }

    #[test]
    fn test_sanitize_rejects_bad_values() {
        let tuning = Tuning {
            gravity: f32::NAN,
            ground_ratio: 1.5,
            spawn_interval: 0,
            speed_step_every: 0,
            pipe_gap: -10.0,
            ..Default::default()
        }
        .sanitized();
        let defaults = Tuning::default();
        assert_eq!(tuning.gravity, defaults.gravity);
        assert_eq!(tuning.ground_ratio, defaults.ground_ratio);
        assert_eq!(tuning.spawn_interval, defaults.spawn_interval);
        assert_eq!(tuning.speed_step_every, defaults.speed_step_every);
        assert_eq!(tuning.pipe_gap, defaults.pipe_gap);
    }

    #[test]
    fn test_up_impulse_outweighs_down() {
        let tuning = Tuning::default();
        assert!(tuning.impulse_up.abs() > tuning.impulse_down.abs());
    }
}
