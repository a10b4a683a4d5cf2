//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per display frame
//! - Seeded RNG only
//! - Pipes kept in spawn order
//! - No rendering, audio, storage or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod input;
pub mod lifecycle;
pub mod rank;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use autopilot::autopilot;
pub use collision::{Rect, bird_hitbox, first_pipe_hit, pipe_rects};
pub use input::Gesture;
pub use rank::Rank;
pub use snapshot::{BirdPose, PipeView, Snapshot};
pub use state::{
    Bird, DeathCause, GameEvent, GamePhase, GameState, Impulse, Pipe, Viewport,
};
pub use tick::{GapRange, gap_range, spawn_pipe, tick};
