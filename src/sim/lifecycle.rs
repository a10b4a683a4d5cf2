//! Phase transitions
//!
//! ```text
//! Title -> Ready -> Playing <-> Paused
//!                      |          |
//!                      +-> GameOver -> Ready | Title
//! ```
//!
//! Every method here is a no-op when called from a phase it does not apply to.

use super::rank::Rank;
use super::state::{DeathCause, GameEvent, GamePhase, GameState};

impl GameState {
    /// Show the get-ready screen (from the title screen or after a run).
    pub fn show_ready(&mut self) {
        match self.phase {
            GamePhase::Title | GamePhase::GameOver => {
                self.reset_run();
                self.gesture_armed = false;
                self.set_phase(GamePhase::Ready);
            }
            _ => {}
        }
    }

    /// Return to the title screen (from the ready screen or after a run).
    pub fn show_title(&mut self) {
        match self.phase {
            GamePhase::Ready | GamePhase::GameOver => {
                self.gesture_armed = false;
                self.set_phase(GamePhase::Title);
            }
            _ => {}
        }
    }

    /// Begin a run from the ready screen
    pub(crate) fn start_run(&mut self) {
        if self.phase != GamePhase::Ready {
            return;
        }
        self.reset_run();
        self.set_phase(GamePhase::Playing);
    }

    pub(crate) fn pause(&mut self) {
        if self.phase != GamePhase::Playing {
            return;
        }
        self.staged_velocity = None;
        self.set_phase(GamePhase::Paused);
    }

    /// Resume with the velocity staged while paused, or from rest if the
    /// player did not drag.
    pub(crate) fn resume(&mut self) {
        if self.phase != GamePhase::Paused {
            return;
        }
        self.bird.velocity = self.staged_velocity.take().unwrap_or(0.0);
        self.bird.rotation = 0.0;
        self.set_phase(GamePhase::Playing);
    }

    /// End the run. Only a playing run can end, so repeated strikes on the
    /// same frame are ignored.
    pub(crate) fn game_over(&mut self, cause: DeathCause) {
        if self.phase != GamePhase::Playing {
            return;
        }
        let rank = Rank::for_score(self.score);
        let new_high_score = self.score > self.high_score;
        if new_high_score {
            self.high_score = self.score;
        }
        log::info!(
            "Game over ({:?}): score {} rank {} best {}",
            cause,
            self.score,
            rank.label(),
            self.high_score
        );
        self.gesture_armed = false;
        self.set_phase(GamePhase::GameOver);
        self.push_event(GameEvent::GameOver {
            cause,
            score: self.score,
            rank,
            high_score: self.high_score,
            new_high_score,
        });
    }
}
