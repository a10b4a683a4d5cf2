//! Rendering
//!
//! [`scene`] lays a frame out as draw commands; the canvas backend draws them
//! in the browser. Native builds have no window and only log.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod scene;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
pub use scene::{DrawCmd, build_scene};

use crate::driver::Presenter;
use crate::sim::{GameEvent, Snapshot};

/// Headless presenter: logs events and keeps the last frame
#[derive(Debug, Default)]
pub struct LogPresenter {
    pub frames: u64,
    pub last: Option<Snapshot>,
}

impl Presenter for LogPresenter {
    fn render(&mut self, snapshot: &Snapshot, _skin: &str) {
        self.frames += 1;
        self.last = Some(snapshot.clone());
    }

    fn handle_event(&mut self, event: &GameEvent) {
        log::debug!("{:?}", event);
    }
}
