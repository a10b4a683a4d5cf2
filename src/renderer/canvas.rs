//! Canvas 2D backend

use std::collections::HashMap;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use super::scene::{DrawCmd, build_scene};
use crate::driver::Presenter;
use crate::sim::{GameEvent, Rect, Snapshot};

pub struct CanvasRenderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    images: HashMap<String, HtmlImageElement>,
    events: Vec<GameEvent>,
}

impl CanvasRenderer {
    /// Grab the 2D context of `canvas` and start loading `assets`.
    /// Returns `None` if the browser refuses a 2D context.
    pub fn new(canvas: HtmlCanvasElement, assets: &[&str]) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        let mut renderer = Self {
            canvas,
            ctx,
            images: HashMap::new(),
            events: Vec::new(),
        };
        for asset in assets {
            renderer.load(asset);
        }
        Some(renderer)
    }

    /// Start loading an image. Drawing falls back to flat colours until it
    /// arrives, or forever if it fails.
    pub fn load(&mut self, asset: &str) {
        if self.images.contains_key(asset) {
            return;
        }
        match HtmlImageElement::new() {
            Ok(img) => {
                img.set_src(asset);
                self.images.insert(asset.to_string(), img);
            }
            Err(_) => log::warn!("Could not create image for {}", asset),
        }
    }

    /// Match the backing store to the displayed size
    pub fn resize(&self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    /// Events received since the last call
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    fn ready_image(&self, asset: &str) -> Option<&HtmlImageElement> {
        self.images
            .get(asset)
            .filter(|img| img.complete() && img.natural_width() > 0)
    }

    fn fill(&self, rect: &Rect, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx
            .fill_rect(rect.left as f64, rect.top as f64, rect.width() as f64, rect.height() as f64);
    }

    fn draw(&self, cmd: &DrawCmd) {
        match cmd {
            DrawCmd::Fill { rect, color } => self.fill(rect, color),
            DrawCmd::Sprite {
                asset,
                rect,
                rotation,
                flip_y,
                fallback,
            } => {
                let (w, h) = (rect.width() as f64, rect.height() as f64);
                if w <= 0.0 || h <= 0.0 {
                    return;
                }
                let Some(img) = self.ready_image(asset) else {
                    self.fill(rect, fallback);
                    return;
                };
                // Draw about the rect centre so rotation and flips stay in place
                self.ctx.save();
                let _ = self
                    .ctx
                    .translate(rect.left as f64 + w / 2.0, rect.top as f64 + h / 2.0);
                if *rotation != 0.0 {
                    let _ = self.ctx.rotate((*rotation as f64).to_radians());
                }
                if *flip_y {
                    let _ = self.ctx.scale(1.0, -1.0);
                }
                let _ = self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
                    img,
                    -w / 2.0,
                    -h / 2.0,
                    w,
                    h,
                );
                self.ctx.restore();
            }
        }
    }
}

impl Presenter for CanvasRenderer {
    fn render(&mut self, snapshot: &Snapshot, skin: &str) {
        if !self.images.contains_key(skin) {
            self.load(skin);
        }
        for cmd in build_scene(snapshot, skin) {
            self.draw(&cmd);
        }
    }

    fn handle_event(&mut self, event: &GameEvent) {
        self.events.push(event.clone());
    }
}
