//! Frame driver
//!
//! Owns one session and wires it to its collaborators: pointer input goes
//! through the gesture tracker into the simulation, each frame ticks once,
//! events are forwarded to the presenter, and the profile is written back to
//! storage when the run sets a new best or a skin is confirmed.

use crate::persistence::KeyValueStore;
use crate::platform::GestureTracker;
use crate::profile::Profile;
use crate::share::share_message;
use crate::sim::{GameEvent, GamePhase, GameState, Snapshot, Viewport, autopilot, tick};
use crate::skins::{SkinCatalog, SkinChoice};
use crate::tuning::Tuning;

/// Draws frames and reacts to simulation events
pub trait Presenter {
    /// Draw one frame. `skin` is the asset key of the selected bird skin.
    fn render(&mut self, snapshot: &Snapshot, skin: &str);

    /// Called for every event in the order the simulation produced them
    fn handle_event(&mut self, _event: &GameEvent) {}
}

pub struct Driver<S: KeyValueStore, P: Presenter> {
    pub game: GameState,
    pub profile: Profile,
    store: S,
    presenter: P,
    tracker: GestureTracker,
    autopilot: bool,
}

impl<S: KeyValueStore, P: Presenter> Driver<S, P> {
    /// Load the profile from `store` and open a session on the title screen
    pub fn new(
        seed: u64,
        tuning: Tuning,
        viewport: Viewport,
        catalog: SkinCatalog,
        store: S,
        presenter: P,
    ) -> Self {
        let profile = Profile::load(&store, catalog);
        let tracker = GestureTracker::new(tuning.swipe_threshold);
        let game = GameState::new(seed, tuning, viewport, profile.high_score);
        log::info!("Session created with seed {}", seed);
        Self {
            game,
            profile,
            store,
            presenter,
            tracker,
            autopilot: false,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    pub fn phase(&self) -> GamePhase {
        self.game.phase
    }

    /// Let the built-in pilot steer while playing
    pub fn set_autopilot(&mut self, enabled: bool) {
        self.autopilot = enabled;
    }

    /// One display frame: steer (if piloted), tick, dispatch events, render
    pub fn frame(&mut self) {
        if self.autopilot && self.game.phase == GamePhase::Playing {
            if let Some(impulse) = autopilot(&self.game) {
                self.game.apply_impulse(impulse);
            }
        }
        tick(&mut self.game);
        self.dispatch_events();
        let snapshot = self.game.snapshot();
        self.presenter
            .render(&snapshot, self.profile.selected_asset());
    }

    // === Pointer input ===

    pub fn press(&mut self, y: f32) {
        let gesture = self.tracker.press(y);
        self.game.handle_gesture(gesture);
        self.dispatch_events();
    }

    pub fn drag(&mut self, y: f32) {
        if let Some(gesture) = self.tracker.drag(y) {
            self.game.handle_gesture(gesture);
            self.dispatch_events();
        }
    }

    pub fn release(&mut self) {
        if let Some(gesture) = self.tracker.release() {
            self.game.handle_gesture(gesture);
            self.dispatch_events();
        }
    }

    // === Buttons ===

    /// Start button on the title screen, restart button after a game over
    pub fn show_ready(&mut self) {
        self.tracker.cancel();
        self.game.show_ready();
        self.dispatch_events();
    }

    /// Home button
    pub fn show_title(&mut self) {
        self.tracker.cancel();
        self.game.show_title();
        self.dispatch_events();
    }

    pub fn resize(&mut self, viewport: Viewport) {
        log::debug!("Resize to {}x{}", viewport.width, viewport.height);
        self.game.resize(viewport);
    }

    pub fn next_skin(&mut self) {
        self.profile.skins.next(&self.profile.catalog);
    }

    pub fn prev_skin(&mut self) {
        self.profile.skins.prev(&self.profile.catalog);
    }

    pub fn confirm_skin(&mut self) -> SkinChoice {
        self.profile.confirm_skin(&mut self.store)
    }

    /// Share text for the score of the current (or just finished) run
    pub fn share_text(&self) -> String {
        share_message(self.game.score)
    }

    fn dispatch_events(&mut self) {
        for event in self.game.drain_events() {
            if let GameEvent::GameOver { score, .. } = event {
                self.profile.record_score(score, &mut self.store);
            }
            self.presenter.handle_event(&event);
        }
    }
}
