//! Game state and core simulation types
//!
//! Everything the per-frame update touches lives on [`GameState`]. The
//! presentation layer never reads it directly; it gets a [`Snapshot`] instead.
//!
//! [`Snapshot`]: super::snapshot::Snapshot

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::rank::Rank;
use crate::tuning::Tuning;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Home screen, nothing simulated
    Title,
    /// Get-ready screen, waiting for the first drag
    Ready,
    /// Active gameplay
    Playing,
    /// Gesture released mid-run, physics frozen
    Paused,
    /// Run ended
    GameOver,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Title => "title",
            GamePhase::Ready => "ready",
            GamePhase::Playing => "playing",
            GamePhase::Paused => "paused",
            GamePhase::GameOver => "game_over",
        }
    }
}

/// Direction of a steering swipe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Impulse {
    Up,
    Down,
}

impl Impulse {
    /// Classify a vertical drag. Only drags strictly longer than `threshold`
    /// qualify; screen y grows downward, so a negative delta is a swipe up.
    pub fn from_delta(dy: f32, threshold: f32) -> Option<Self> {
        if dy.abs() <= threshold {
            None
        } else if dy < 0.0 {
            Some(Impulse::Up)
        } else {
            Some(Impulse::Down)
        }
    }

    /// Velocity assigned to the bird by this impulse
    pub fn velocity(self, tuning: &Tuning) -> f32 {
        match self {
            Impulse::Up => tuning.impulse_up,
            Impulse::Down => tuning.impulse_down,
        }
    }
}

/// Drawable area in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(1.0),
            height: height.max(1.0),
        }
    }

    #[inline]
    pub fn ground_height(&self, tuning: &Tuning) -> f32 {
        self.height * tuning.ground_ratio
    }

    /// Y of the top of the ground strip
    #[inline]
    pub fn ground_line(&self, tuning: &Tuning) -> f32 {
        self.height - self.ground_height(tuning)
    }
}

/// The player's bird
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bird {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical velocity (px/tick, positive = down)
    pub velocity: f32,
    /// Tilt in degrees, derived from velocity
    pub rotation: f32,
}

impl Bird {
    pub fn new(tuning: &Tuning, viewport: &Viewport) -> Self {
        Self {
            pos: Self::anchor(tuning, viewport),
            size: Vec2::new(tuning.bird_width, tuning.bird_height),
            velocity: 0.0,
            rotation: 0.0,
        }
    }

    /// Resting position for a fresh run
    pub fn anchor(tuning: &Tuning, viewport: &Viewport) -> Vec2 {
        Vec2::new(
            viewport.width * tuning.bird_x_ratio,
            viewport.height * tuning.bird_y_ratio,
        )
    }

    /// Lowest legal y before the bird strikes the ground
    #[inline]
    pub fn floor_y(&self, tuning: &Tuning, viewport: &Viewport) -> f32 {
        (viewport.ground_line(tuning) - self.size.y).max(0.0)
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    /// Recompute tilt from current velocity
    pub fn update_rotation(&mut self, tuning: &Tuning) {
        self.rotation = (self.velocity * tuning.rotation_gain)
            .clamp(-tuning.max_rotation, tuning.max_rotation);
    }
}

/// A pipe pair sharing one gap
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pipe {
    pub id: u32,
    /// Left edge
    pub x: f32,
    /// Height of the top pipe (gap starts here)
    pub top_height: f32,
    /// Y where the bottom pipe starts (gap ends here)
    pub bottom_y: f32,
    /// Set once the bird has passed this pipe
    pub scored: bool,
}

impl Pipe {
    #[inline]
    pub fn right(&self, width: f32) -> f32 {
        self.x + width
    }

    /// Vertical centre of the gap
    #[inline]
    pub fn gap_center(&self) -> f32 {
        (self.top_height + self.bottom_y) * 0.5
    }
}

/// What ended a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeathCause {
    Ground,
    Pipe,
}

/// Notifications produced by the simulation for the presentation layer.
///
/// The simulation never touches the UI; a presenter drains these after each
/// frame and reacts (toggle screens, play sounds, persist the high score).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    PhaseChanged { from: GamePhase, to: GamePhase },
    Scored { score: u32 },
    SpeedIncreased { speed: f32 },
    GameOver {
        cause: DeathCause,
        score: u32,
        rank: Rank,
        high_score: u32,
        new_high_score: bool,
    },
}

/// Complete simulation state for one session
#[derive(Debug, Clone)]
pub struct GameState {
    pub tuning: Tuning,
    pub viewport: Viewport,
    /// Session seed for reproducible pipe layouts
    pub seed: u64,
    rng: Pcg32,
    pub phase: GamePhase,
    pub bird: Bird,
    /// Live pipes in spawn order (left to right on screen)
    pub pipes: Vec<Pipe>,
    pub score: u32,
    pub high_score: u32,
    /// Current scroll speed (px/tick)
    pub speed: f32,
    /// Ticks since the last pipe spawn
    pub spawn_timer: u32,
    /// Ground scroll offset, wraps at `-viewport.width`
    pub ground_offset: f32,
    pub background_offset: f32,
    /// Playing ticks elapsed this run
    pub time_ticks: u64,
    /// Velocity staged by drags while paused
    pub(crate) staged_velocity: Option<f32>,
    /// Gesture pressed while on the ready screen
    pub(crate) gesture_armed: bool,
    events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    /// Create a session on the title screen
    pub fn new(seed: u64, tuning: Tuning, viewport: Viewport, high_score: u32) -> Self {
        let bird = Bird::new(&tuning, &viewport);
        let speed = tuning.initial_speed;
        Self {
            tuning,
            viewport,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Title,
            bird,
            pipes: Vec::new(),
            score: 0,
            high_score,
            speed,
            spawn_timer: 0,
            ground_offset: 0.0,
            background_offset: 0.0,
            time_ticks: 0,
            staged_velocity: None,
            gesture_armed: false,
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub(crate) fn rng(&mut self) -> &mut Pcg32 {
        &mut self.rng
    }

    /// Rank for the current score
    pub fn rank(&self) -> Rank {
        Rank::for_score(self.score)
    }

    /// Events recorded since the last drain
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Move to `to`, recording the transition
    pub(crate) fn set_phase(&mut self, to: GamePhase) {
        let from = self.phase;
        if from == to {
            return;
        }
        log::info!("Phase {} -> {}", from.as_str(), to.as_str());
        self.phase = to;
        self.push_event(GameEvent::PhaseChanged { from, to });
    }

    /// Put everything a run mutates back to its starting values
    pub fn reset_run(&mut self) {
        self.bird = Bird::new(&self.tuning, &self.viewport);
        self.pipes.clear();
        self.score = 0;
        self.speed = self.tuning.initial_speed;
        self.spawn_timer = 0;
        self.ground_offset = 0.0;
        self.background_offset = 0.0;
        self.time_ticks = 0;
        self.staged_velocity = None;
    }

    /// Adopt a new viewport size.
    ///
    /// Outside a run the bird snaps to its anchor. During a run only the x
    /// anchor follows the viewport and y is clamped into the new bounds.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        let anchor = Bird::anchor(&self.tuning, &self.viewport);
        match self.phase {
            GamePhase::Playing | GamePhase::Paused => {
                self.bird.pos.x = anchor.x;
                let floor = self.bird.floor_y(&self.tuning, &self.viewport);
                self.bird.pos.y = self.bird.pos.y.clamp(0.0, floor);
            }
            _ => self.bird.pos = anchor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> GameState {
        GameState::new(7, Tuning::default(), Viewport::new(400.0, 800.0), 0)
    }

    #[test]
    fn test_new_state_starts_on_title() {
        let state = state();
        assert_eq!(state.phase, GamePhase::Title);
        assert_eq!(state.bird.pos, Vec2::new(100.0, 400.0));
        assert_eq!(state.speed, 3.0);
        assert!(state.events().is_empty());
    }

    #[test]
    fn test_impulse_threshold_is_strict() {
        assert_eq!(Impulse::from_delta(20.0, 20.0), None);
        assert_eq!(Impulse::from_delta(-20.0, 20.0), None);
        assert_eq!(Impulse::from_delta(20.5, 20.0), Some(Impulse::Down));
        assert_eq!(Impulse::from_delta(-21.0, 20.0), Some(Impulse::Up));
    }

    #[test]
    fn test_floor_accounts_for_ground_and_bird() {
        let state = state();
        // 800 - 120 ground - 44 bird
        assert_eq!(state.bird.floor_y(&state.tuning, &state.viewport), 636.0);
    }

    #[test]
    fn test_set_phase_records_once() {
        let mut state = state();
        state.set_phase(GamePhase::Ready);
        state.set_phase(GamePhase::Ready);
        assert_eq!(
            state.drain_events(),
            vec![GameEvent::PhaseChanged {
                from: GamePhase::Title,
                to: GamePhase::Ready
            }]
        );
        assert!(state.events().is_empty());
    }

    #[test]
    fn test_resize_mid_run_keeps_height_in_bounds() {
        let mut state = state();
        state.phase = GamePhase::Playing;
        state.bird.pos.y = 600.0;
        state.resize(Viewport::new(800.0, 400.0));
        assert_eq!(state.bird.pos.x, 200.0);
        // 400 - 60 ground - 44 bird
        assert_eq!(state.bird.pos.y, 296.0);
    }

    #[test]
    fn test_resize_outside_run_recenters() {
        let mut state = state();
        state.resize(Viewport::new(1000.0, 500.0));
        assert_eq!(state.bird.pos, Vec2::new(250.0, 250.0));
    }
}
