//! Pointer to gesture translation
//!
//! Touch and mouse handlers feed raw y coordinates in; the tracker emits the
//! discrete [`Gesture`]s the simulation understands. Holding is tracked here,
//! independent of the game phase.

use crate::sim::Gesture;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureTracker {
    threshold: f32,
    /// Y of the press, or of the last recognised swipe while held
    anchor: Option<f32>,
}

impl GestureTracker {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            anchor: None,
        }
    }

    pub fn is_held(&self) -> bool {
        self.anchor.is_some()
    }

    /// Pointer pressed at `y`
    pub fn press(&mut self, y: f32) -> Gesture {
        self.anchor = Some(y);
        Gesture::Start
    }

    /// Pointer moved to `y`. Emits nothing unless held. The anchor only
    /// advances once a swipe clears the threshold, so slow drags accumulate.
    pub fn drag(&mut self, y: f32) -> Option<Gesture> {
        let anchor = self.anchor?;
        let dy = y - anchor;
        if dy.abs() > self.threshold {
            self.anchor = Some(y);
        }
        Some(Gesture::Move { dy })
    }

    /// Pointer released. Emits nothing for a release without a press.
    pub fn release(&mut self) -> Option<Gesture> {
        self.anchor.take().map(|_| Gesture::End)
    }

    /// Forget the current press without emitting an end (pointer left the
    /// canvas mid-drag, tab hidden, ...)
    pub fn cancel(&mut self) {
        self.anchor = None;
    }
}
