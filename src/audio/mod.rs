//! Sound cues
//!
//! Which effect accompanies which simulation event is decided here for every
//! target; only the browser build actually makes noise.

#[cfg(target_arch = "wasm32")]
mod web_audio;
#[cfg(target_arch = "wasm32")]
pub use web_audio::AudioManager;

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Pipe passed
    Point,
    /// Bird hit a pipe or the ground
    Death,
    /// Run beat the stored best
    HighScore,
}

/// Effects to play for `event`, in order
pub fn cues_for(event: &GameEvent) -> Vec<SoundEffect> {
    match event {
        GameEvent::Scored { .. } => vec![SoundEffect::Point],
        GameEvent::GameOver {
            new_high_score: true,
            ..
        } => vec![SoundEffect::Death, SoundEffect::HighScore],
        GameEvent::GameOver { .. } => vec![SoundEffect::Death],
        GameEvent::PhaseChanged { .. } | GameEvent::SpeedIncreased { .. } => Vec::new(),
    }
}
