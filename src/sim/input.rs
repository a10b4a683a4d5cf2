//! Gesture interpretation
//!
//! The platform's gesture tracker turns raw pointer events into [`Gesture`]s;
//! what a gesture means depends on the current phase:
//!
//! | gesture | Ready           | Playing       | Paused         | other |
//! |---------|-----------------|---------------|----------------|-------|
//! | Start   | arm             | -             | -              | -     |
//! | Move    | start run (if armed) | impulse  | stage impulse  | -     |
//! | End     | disarm          | pause         | resume         | -     |

use serde::{Deserialize, Serialize};

use super::state::{GamePhase, GameState, Impulse};

/// Discrete input events produced by the gesture tracker
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Gesture {
    /// Pointer pressed / finger down
    Start,
    /// Pointer moved while held. `dy` is the vertical distance from the last
    /// point where a swipe was recognised (or from the press).
    Move { dy: f32 },
    /// Pointer released / finger lifted
    End,
}

impl GameState {
    /// Apply a gesture according to the current phase
    pub fn handle_gesture(&mut self, gesture: Gesture) {
        match (self.phase, gesture) {
            (GamePhase::Ready, Gesture::Start) => self.gesture_armed = true,
            (GamePhase::Ready, Gesture::Move { .. }) if self.gesture_armed => self.start_run(),
            (GamePhase::Ready, Gesture::End) => self.gesture_armed = false,

            (GamePhase::Playing | GamePhase::Paused, Gesture::Move { dy }) => {
                if let Some(impulse) = Impulse::from_delta(dy, self.tuning.swipe_threshold) {
                    self.apply_impulse(impulse);
                }
            }
            (GamePhase::Playing, Gesture::End) => self.pause(),
            (GamePhase::Paused, Gesture::End) => self.resume(),

            _ => {}
        }
    }

    /// Steer the bird. Applied immediately while playing, staged for resume
    /// while paused, ignored otherwise.
    pub fn apply_impulse(&mut self, impulse: Impulse) {
        let velocity = impulse.velocity(&self.tuning);
        match self.phase {
            GamePhase::Playing => self.bird.velocity = velocity,
            GamePhase::Paused => self.staged_velocity = Some(velocity),
            _ => {}
        }
    }
}
