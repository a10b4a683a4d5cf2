//! Axis-aligned collision detection between the bird and pipes
//!
//! Both pipes of a pair are treated as plain rectangles: the top one runs from
//! the screen top to the gap, the bottom one from the gap to the ground line.
//! The bird uses a hitbox inset from its sprite so grazes feel fair.

use serde::{Deserialize, Serialize};

use super::state::{Bird, Pipe};

/// Screen-space rectangle (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// Strict overlap: rectangles that only share an edge do not collide.
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.right > other.left
            && self.left < other.right
            && self.bottom > other.top
            && self.top < other.bottom
    }
}

/// The forgiving collision box of the bird
pub fn bird_hitbox(bird: &Bird, inset: f32) -> Rect {
    Rect::new(
        bird.pos.x + inset,
        bird.pos.y + inset,
        bird.pos.x + bird.size.x - inset,
        bird.pos.y + bird.size.y - inset,
    )
}

/// Top and bottom obstruction of a pipe pair
pub fn pipe_rects(pipe: &Pipe, width: f32, ground_line: f32) -> (Rect, Rect) {
    let right = pipe.right(width);
    (
        Rect::new(pipe.x, 0.0, right, pipe.top_height),
        Rect::new(pipe.x, pipe.bottom_y, right, ground_line),
    )
}

/// Return the id of the first pipe (in spawn order) the hitbox touches.
///
/// Stops at the first hit; later pipes are not examined.
pub fn first_pipe_hit(hitbox: &Rect, pipes: &[Pipe], width: f32, ground_line: f32) -> Option<u32> {
    pipes
        .iter()
        .find(|pipe| {
            let (top, bottom) = pipe_rects(pipe, width, ground_line);
            hitbox.overlaps(&top) || hitbox.overlaps(&bottom)
        })
        .map(|pipe| pipe.id)
}
