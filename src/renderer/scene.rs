//! Snapshot to draw list
//!
//! Turns a [`Snapshot`] into back-to-front draw commands. Backends only need
//! to know how to fill a rectangle and blit a sprite.

use crate::sim::{Rect, Snapshot};

pub const BACKGROUND_ASSET: &str = "BG.png";
pub const PIPE_ASSET: &str = "pipe.png";
pub const GROUND_ASSET: &str = "Ground.jpeg";

const SKY_COLOR: &str = "#70c5ce";
const PIPE_COLOR: &str = "#5cbf2a";
const GROUND_COLOR: &str = "#ded895";
const BIRD_COLOR: &str = "#f7d51d";

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Fill {
        rect: Rect,
        color: &'static str,
    },
    /// Image stretched over `rect`. `fallback` is filled instead while the
    /// image is not loaded.
    Sprite {
        asset: String,
        rect: Rect,
        /// Degrees about the rect centre
        rotation: f32,
        flip_y: bool,
        fallback: &'static str,
    },
}

impl DrawCmd {
    fn sprite(asset: &str, rect: Rect, fallback: &'static str) -> Self {
        DrawCmd::Sprite {
            asset: asset.to_string(),
            rect,
            rotation: 0.0,
            flip_y: false,
            fallback,
        }
    }
}

/// Draw list for one frame, back to front
pub fn build_scene(snapshot: &Snapshot, skin: &str) -> Vec<DrawCmd> {
    let width = snapshot.viewport.width;
    let height = snapshot.viewport.height;
    let ground_line = height - snapshot.ground_height;
    let mut cmds = Vec::with_capacity(snapshot.pipes.len() * 2 + 6);

    cmds.push(DrawCmd::Fill {
        rect: Rect::new(0.0, 0.0, width, height),
        color: SKY_COLOR,
    });
    // Two tiles cover the screen since offsets wrap at -width
    for tile in 0..2 {
        let x = snapshot.background_offset + tile as f32 * width;
        cmds.push(DrawCmd::sprite(
            BACKGROUND_ASSET,
            Rect::new(x, 0.0, x + width, ground_line),
            SKY_COLOR,
        ));
    }

    for pipe in &snapshot.pipes {
        let right = pipe.x + pipe.width;
        cmds.push(DrawCmd::Sprite {
            asset: PIPE_ASSET.to_string(),
            rect: Rect::new(pipe.x, 0.0, right, pipe.top_height),
            rotation: 0.0,
            flip_y: true,
            fallback: PIPE_COLOR,
        });
        if pipe.bottom_y < ground_line {
            cmds.push(DrawCmd::sprite(
                PIPE_ASSET,
                Rect::new(pipe.x, pipe.bottom_y, right, ground_line),
                PIPE_COLOR,
            ));
        }
    }

    let bird = &snapshot.bird;
    cmds.push(DrawCmd::Sprite {
        asset: skin.to_string(),
        rect: Rect::new(bird.x, bird.y, bird.x + bird.width, bird.y + bird.height),
        rotation: bird.rotation,
        flip_y: false,
        fallback: BIRD_COLOR,
    });

    for tile in 0..2 {
        let x = snapshot.ground_offset + tile as f32 * width;
        cmds.push(DrawCmd::sprite(
            GROUND_ASSET,
            Rect::new(x, ground_line, x + width, height),
            GROUND_COLOR,
        ));
    }

    cmds
}
