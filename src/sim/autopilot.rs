//! Demo mode - the game steers itself
//!
//! Used by the headless native runner. It only ever returns the same
//! impulses a player could produce with a swipe.

use super::state::{GamePhase, GameState, Impulse};

/// Ticks of velocity to look ahead when judging drift
const LOOKAHEAD_TICKS: f32 = 6.0;

/// Pick a swipe that keeps the bird heading for the next gap
pub fn autopilot(state: &GameState) -> Option<Impulse> {
    if state.phase != GamePhase::Playing {
        return None;
    }

    let tuning = &state.tuning;
    let bird = &state.bird;

    // Next pipe the bird has not fully cleared, else mid-sky
    let target = state
        .pipes
        .iter()
        .find(|pipe| pipe.right(tuning.pipe_width) >= bird.left())
        .map(|pipe| pipe.gap_center())
        .unwrap_or_else(|| state.viewport.ground_line(tuning) * 0.5);

    let center = bird.pos.y + bird.size.y * 0.5;
    let predicted = center + bird.velocity * LOOKAHEAD_TICKS;
    let slack = bird.size.y * 0.5;

    if predicted > target + slack && bird.velocity >= 0.0 {
        Some(Impulse::Up)
    } else if predicted < target - slack && bird.velocity < 0.0 {
        Some(Impulse::Down)
    } else {
        None
    }
}
