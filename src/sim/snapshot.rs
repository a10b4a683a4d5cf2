//! Read-only view of the simulation handed to the presentation layer

use serde::{Deserialize, Serialize};

use super::rank::Rank;
use super::state::{GamePhase, GameState, Viewport};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BirdPose {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Degrees, clockwise positive
    pub rotation: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PipeView {
    pub x: f32,
    pub width: f32,
    pub top_height: f32,
    pub bottom_y: f32,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub viewport: Viewport,
    pub ground_height: f32,
    pub bird: BirdPose,
    pub pipes: Vec<PipeView>,
    pub ground_offset: f32,
    pub background_offset: f32,
    pub score: u32,
    pub high_score: u32,
    pub rank: Rank,
}

impl GameState {
    pub fn snapshot(&self) -> Snapshot {
        let width = self.tuning.pipe_width;
        Snapshot {
            phase: self.phase,
            viewport: self.viewport,
            ground_height: self.viewport.ground_height(&self.tuning),
            bird: BirdPose {
                x: self.bird.pos.x,
                y: self.bird.pos.y,
                width: self.bird.size.x,
                height: self.bird.size.y,
                rotation: self.bird.rotation,
            },
            pipes: self
                .pipes
                .iter()
                .map(|pipe| PipeView {
                    x: pipe.x,
                    width,
                    top_height: pipe.top_height,
                    bottom_y: pipe.bottom_y,
                })
                .collect(),
            ground_offset: self.ground_offset,
            background_offset: self.background_offset,
            score: self.score,
            high_score: self.high_score,
            rank: self.rank(),
        }
    }
}
