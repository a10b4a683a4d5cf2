//! Per-frame simulation step
//!
//! One call to [`tick`] advances a playing run by exactly one display frame:
//! bird physics, scrolling, pipe spawn/move/score/recycle, then pipe
//! collisions. Outside `Playing` it does nothing.

use rand::Rng;

use super::collision::{bird_hitbox, first_pipe_hit};
use super::state::{DeathCause, GameEvent, GamePhase, GameState, Pipe, Viewport};
use crate::tuning::Tuning;

/// Advance the game state by one frame
pub fn tick(state: &mut GameState) {
    if state.phase != GamePhase::Playing {
        return;
    }

    state.time_ticks += 1;

    if !step_bird(state) {
        return;
    }
    scroll(state);
    update_pipes(state);
    check_collisions(state);
}

/// Integrate gravity and clamp to the playfield.
/// Returns false if the bird struck the ground (run is over).
fn step_bird(state: &mut GameState) -> bool {
    let tuning = &state.tuning;
    let bird = &mut state.bird;

    bird.velocity += tuning.gravity;
    bird.pos.y += bird.velocity;
    bird.update_rotation(tuning);

    // Soft ceiling
    if bird.pos.y < 0.0 {
        bird.pos.y = 0.0;
        bird.velocity = 0.0;
    }

    let floor = bird.floor_y(tuning, &state.viewport);
    if bird.pos.y > floor {
        bird.pos.y = floor;
        bird.velocity = 0.0;
        state.game_over(DeathCause::Ground);
        return false;
    }
    true
}

fn scroll(state: &mut GameState) {
    let width = state.viewport.width;

    state.ground_offset -= state.speed;
    if state.ground_offset <= -width {
        state.ground_offset = 0.0;
    }

    state.background_offset -= state.speed * state.tuning.background_parallax;
    if state.background_offset <= -width {
        state.background_offset = 0.0;
    }
}

fn update_pipes(state: &mut GameState) {
    state.spawn_timer += 1;
    if state.spawn_timer >= state.tuning.spawn_interval {
        spawn_pipe(state);
        state.spawn_timer = 0;
    }

    let width = state.tuning.pipe_width;
    let bird_left = state.bird.left();
    let mut passed = 0;
    for pipe in &mut state.pipes {
        pipe.x -= state.speed;
        if !pipe.scored && pipe.right(width) < bird_left {
            pipe.scored = true;
            passed += 1;
        }
    }
    for _ in 0..passed {
        award_point(state);
    }

    // Fully off-screen pipes are dropped before collision checks
    state.pipes.retain(|pipe| pipe.right(width) >= 0.0);
}

/// Count one passed pipe and ramp the speed on every threshold crossing
fn award_point(state: &mut GameState) {
    state.score += 1;
    state.push_event(GameEvent::Scored { score: state.score });

    if state.score % state.tuning.speed_step_every == 0 {
        state.speed += state.tuning.speed_step;
        log::debug!("Score {}: speed now {:.2}", state.score, state.speed);
        state.push_event(GameEvent::SpeedIncreased { speed: state.speed });
    }
}

fn check_collisions(state: &mut GameState) {
    let hitbox = bird_hitbox(&state.bird, state.tuning.hitbox_inset);
    let ground_line = state.viewport.ground_line(&state.tuning);
    if let Some(id) = first_pipe_hit(&hitbox, &state.pipes, state.tuning.pipe_width, ground_line) {
        log::debug!("Bird struck pipe {}", id);
        state.game_over(DeathCause::Pipe);
    }
}

/// Legal placement of a pipe gap for a viewport
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GapRange {
    /// Smallest allowed top-pipe height
    pub min_top: f32,
    /// Largest allowed top-pipe height (`>= min_top`)
    pub max_top: f32,
    /// Gap height actually used
    pub gap: f32,
}

/// Compute where a gap may be placed.
///
/// Small viewports first lose gap height (never below the bird), then margin,
/// so the range is never inverted.
pub fn gap_range(tuning: &Tuning, viewport: &Viewport) -> GapRange {
    let sky = viewport.ground_line(tuning).max(0.0);
    let min_gap = tuning.bird_height.min(sky);
    let mut margin = tuning.pipe_min_height;

    let gap = tuning.pipe_gap.min(sky - 2.0 * margin).max(min_gap);
    if gap + 2.0 * margin > sky {
        margin = ((sky - gap) / 2.0).max(0.0);
    }

    GapRange {
        min_top: margin,
        max_top: (sky - gap - margin).max(margin),
        gap,
    }
}

/// Emit a pipe at the right edge with a random gap
pub fn spawn_pipe(state: &mut GameState) {
    let range = gap_range(&state.tuning, &state.viewport);
    let top_height = if range.max_top - range.min_top <= f32::EPSILON {
        range.min_top
    } else {
        state.rng().random_range(range.min_top..=range.max_top)
    };

    let pipe = Pipe {
        id: state.next_entity_id(),
        x: state.viewport.width,
        top_height,
        bottom_y: top_height + range.gap,
        scored: false,
    };
    state.pipes.push(pipe);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::input::Gesture;
    use proptest::prelude::*;

    fn playing(tuning: Tuning) -> GameState {
        let mut state = GameState::new(4242, tuning, Viewport::new(400.0, 800.0), 0);
        state.show_ready();
        state.handle_gesture(Gesture::Start);
        state.handle_gesture(Gesture::Move { dy: 0.0 });
        assert_eq!(state.phase, GamePhase::Playing);
        state.drain_events();
        state
    }

    /// Floating bird with gaps wide enough that it never hits anything
    fn cruising() -> GameState {
        let mut state = playing(Tuning {
            gravity: 0.0,
            pipe_gap: 600.0,
            pipe_min_height: 10.0,
            ..Default::default()
        });
        state.bird.pos.y = 300.0;
        state
    }

    #[test]
    fn test_tick_only_runs_while_playing() {
        let mut state = GameState::new(1, Tuning::default(), Viewport::new(400.0, 800.0), 0);
        let y = state.bird.pos.y;
        tick(&mut state);
        assert_eq!(state.bird.pos.y, y);
        assert_eq!(state.time_ticks, 0);

        let mut state = playing(Tuning::default());
        state.handle_gesture(Gesture::End);
        let y = state.bird.pos.y;
        tick(&mut state);
        assert_eq!(state.phase, GamePhase::Paused);
        assert_eq!(state.bird.pos.y, y);
    }

    #[test]
    fn test_gravity_integration() {
        let mut state = playing(Tuning::default());
        tick(&mut state);
        assert_eq!(state.bird.velocity, 0.25);
        assert_eq!(state.bird.pos.y, 400.25);
        assert_eq!(state.bird.rotation, 0.75);
    }

    #[test]
    fn test_rotation_is_clamped() {
        let mut state = playing(Tuning::default());
        state.bird.velocity = -8.0;
        tick(&mut state);
        assert_eq!(state.bird.rotation, -23.25);
        state.bird.velocity = 20.0;
        state.bird.pos.y = 100.0;
        tick(&mut state);
        assert_eq!(state.bird.rotation, 30.0);
    }

    #[test]
    fn test_soft_ceiling() {
        let mut state = playing(Tuning::default());
        state.bird.pos.y = 3.0;
        state.bird.velocity = -8.0;
        tick(&mut state);
        assert_eq!(state.bird.pos.y, 0.0);
        assert_eq!(state.bird.velocity, 0.0);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_ground_strike_ends_run_once() {
        let mut state = playing(Tuning::default());
        state.bird.pos.y = 635.0;
        state.bird.velocity = 6.0;
        tick(&mut state);
        tick(&mut state);
        tick(&mut state);

        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.bird.pos.y, 636.0);
        let game_overs = state
            .drain_events()
            .into_iter()
            .filter(|e| matches!(e, GameEvent::GameOver { cause: DeathCause::Ground, .. }))
            .count();
        assert_eq!(game_overs, 1);
    }

    #[test]
    fn test_spawn_cadence() {
        let mut state = cruising();
        for _ in 0..149 {
            tick(&mut state);
        }
        assert!(state.pipes.is_empty());
        tick(&mut state);
        assert_eq!(state.pipes.len(), 1);
        assert_eq!(state.spawn_timer, 0);
        // Spawned at the right edge, then moved once this tick
        assert_eq!(state.pipes[0].x, 397.0);
        let first = state.pipes[0].id;
        for _ in 0..150 {
            tick(&mut state);
        }
        // The first pipe scrolled off on the same tick the second appeared
        assert_eq!(state.score, 1);
        assert_eq!(state.pipes.len(), 1);
        assert_ne!(state.pipes[0].id, first);
        assert_eq!(state.pipes[0].x, 397.0);
    }

    #[test]
    fn test_traversed_pipes_score_once_each() {
        let mut state = cruising();
        let k = 7;
        let mut scored_events = 0;
        for _ in 0..150 * (k + 1) {
            tick(&mut state);
            scored_events += state
                .drain_events()
                .iter()
                .filter(|e| matches!(e, GameEvent::Scored { .. }))
                .count();
        }
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, k as u32);
        assert_eq!(scored_events, k);
    }

    #[test]
    fn test_speed_ramp_once_per_threshold() {
        let mut state = playing(Tuning::default());
        let initial = state.speed;
        for score in 1..=10u32 {
            award_point(&mut state);
            let expected = initial + 0.2 * (score / 5) as f32;
            assert!(
                (state.speed - expected).abs() < 1e-5,
                "score {} speed {} expected {}",
                score,
                state.speed,
                expected
            );
        }
        let ramps = state
            .drain_events()
            .iter()
            .filter(|e| matches!(e, GameEvent::SpeedIncreased { .. }))
            .count();
        assert_eq!(ramps, 2);
    }

    #[test]
    fn test_offscreen_pipe_removed_before_collision() {
        let mut state = playing(Tuning {
            gravity: 0.0,
            ..Default::default()
        });
        // Bird pushed left so its hitbox spans the pipe's final position
        state.bird.pos = glam::Vec2::new(-60.0, 20.0);
        let id = state.next_entity_id();
        state.pipes.push(Pipe {
            id,
            x: -50.0,
            top_height: 300.0,
            bottom_y: 540.0,
            scored: true,
        });
        tick(&mut state);
        assert!(state.pipes.is_empty());
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_pipe_collision_ends_run() {
        let mut state = playing(Tuning {
            gravity: 0.0,
            ..Default::default()
        });
        state.bird.pos.y = 50.0;
        let id = state.next_entity_id();
        state.pipes.push(Pipe {
            id,
            x: 120.0,
            top_height: 300.0,
            bottom_y: 540.0,
            scored: false,
        });
        tick(&mut state);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(state
            .events()
            .iter()
            .any(|e| matches!(e, GameEvent::GameOver { cause: DeathCause::Pipe, .. })));
    }

    #[test]
    fn test_ground_wraps() {
        let mut state = cruising();
        for _ in 0..133 {
            tick(&mut state);
        }
        assert!(state.ground_offset > -400.0 && state.ground_offset <= 0.0);
        assert!(state.background_offset < 0.0);
    }

    #[test]
    fn test_default_gap_range_matches_layout() {
        let range = gap_range(&Tuning::default(), &Viewport::new(400.0, 800.0));
        assert_eq!(range.min_top, 60.0);
        assert_eq!(range.max_top, 380.0);
        assert_eq!(range.gap, 240.0);
    }

    #[test]
    fn test_tiny_viewport_gap_range_is_not_inverted() {
        let tuning = Tuning::default();
        let range = gap_range(&tuning, &Viewport::new(300.0, 200.0));
        // sky = 170: the gap shrinks to fit between full margins
        assert!(range.min_top <= range.max_top);
        assert!((range.gap - 50.0).abs() < 1e-3);

        let range = gap_range(&tuning, &Viewport::new(300.0, 40.0));
        assert!(range.gap <= 34.0);
        assert_eq!(range.min_top, range.max_top);
    }

    #[test]
    fn test_same_seed_same_layout() {
        let mut a = cruising();
        let mut b = cruising();
        for _ in 0..600 {
            tick(&mut a);
            tick(&mut b);
        }
        let tops_a: Vec<f32> = a.pipes.iter().map(|p| p.top_height).collect();
        let tops_b: Vec<f32> = b.pipes.iter().map(|p| p.top_height).collect();
        assert!(!tops_a.is_empty());
        assert_eq!(tops_a, tops_b);
    }

    proptest! {
        #[test]
        fn velocity_gains_gravity_each_tick(v in -8.0f32..6.0, y in 100.0f32..500.0) {
            let mut state = playing(Tuning::default());
            state.bird.pos.y = y;
            state.bird.velocity = v;
            tick(&mut state);
            prop_assert_eq!(state.phase, GamePhase::Playing);
            prop_assert!((state.bird.velocity - (v + 0.25)).abs() < 1e-5);
            prop_assert!(state.bird.pos.y >= 0.0);
            prop_assert!(state.bird.rotation.abs() <= 30.0);
        }

        #[test]
        fn bird_never_leaves_playfield(
            seed in 0u64..1000,
            swipes in proptest::collection::vec(proptest::option::of(any::<bool>()), 1..300),
        ) {
            let mut state = GameState::new(seed, Tuning::default(), Viewport::new(400.0, 800.0), 0);
            state.show_ready();
            state.handle_gesture(Gesture::Start);
            state.handle_gesture(Gesture::Move { dy: 0.0 });
            for swipe in swipes {
                if let Some(up) = swipe {
                    state.handle_gesture(Gesture::Move { dy: if up { -30.0 } else { 30.0 } });
                }
                tick(&mut state);
                let floor = state.bird.floor_y(&state.tuning, &state.viewport);
                prop_assert!(state.bird.pos.y >= 0.0);
                prop_assert!(state.bird.pos.y <= floor);
            }
        }

        #[test]
        fn gap_range_fits_any_viewport(height in 1.0f32..2000.0, gap in 0.0f32..800.0) {
            let tuning = Tuning { pipe_gap: gap, ..Default::default() };
            let viewport = Viewport::new(400.0, height);
            let sky = viewport.ground_line(&tuning);
            let range = gap_range(&tuning, &viewport);
            prop_assert!(range.min_top >= 0.0);
            prop_assert!(range.min_top <= range.max_top);
            prop_assert!(range.max_top + range.gap + range.min_top <= sky + 1e-3);
            prop_assert!(range.gap >= tuning.bird_height.min(sky) - 1e-3);
        }
    }
}
