//! Swipey Bird entry point
//!
//! The browser build wires the DOM to a [`Driver`]; the native build runs a
//! headless autopilot session and prints where it ended.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, MouseEvent, TouchEvent};

    use swipey_bird::audio::{AudioManager, cues_for};
    use swipey_bird::persistence::LocalStorage;
    use swipey_bird::renderer::CanvasRenderer;
    use swipey_bird::renderer::scene::{BACKGROUND_ASSET, GROUND_ASSET, PIPE_ASSET};
    use swipey_bird::sim::{GameEvent, GamePhase, Viewport};
    use swipey_bird::{Driver, SkinCatalog, SkinChoice, Tuning};

    // Web Share API with clipboard fallback
    #[wasm_bindgen(inline_js = "
        export function share_text(title, text) {
            if (navigator.share) {
                navigator.share({ title: title, text: text }).catch(e => console.warn('Share failed:', e));
                return true;
            }
            if (navigator.clipboard) {
                navigator.clipboard.writeText(text)
                    .then(() => alert('Score message copied to clipboard!'))
                    .catch(e => console.warn('Clipboard write failed:', e));
                return true;
            }
            return false;
        }
    ")]
    extern "C" {
        fn share_text(title: &str, text: &str) -> bool;
    }

    /// Overlay screens, one per phase that has one
    const SCREENS: &[(&str, GamePhase)] = &[
        ("titleScreen", GamePhase::Title),
        ("getReadyScreen", GamePhase::Ready),
        ("pauseScreen", GamePhase::Paused),
        ("gameOverScreen", GamePhase::GameOver),
    ];

    struct Game {
        driver: Driver<LocalStorage, CanvasRenderer>,
        audio: AudioManager,
        document: Document,
    }

    impl Game {
        fn frame(&mut self) {
            self.driver.frame();
            self.sync_ui();
        }

        /// React to everything the simulation reported since the last sync
        fn sync_ui(&mut self) {
            let events = self.driver.presenter_mut().take_events();
            for event in &events {
                for cue in cues_for(event) {
                    self.audio.play(cue);
                }
                match event {
                    GameEvent::PhaseChanged { to, .. } => self.show_screen(*to),
                    GameEvent::Scored { score } => self.set_text("score", &score.to_string()),
                    GameEvent::GameOver {
                        score,
                        rank,
                        high_score,
                        ..
                    } => {
                        if let Some(el) = self.document.get_element_by_id("finalScore") {
                            el.set_inner_html(&format!(
                                "Score: {} <div style=\"font-size: 18px; color: {};\">Rank: {}</div>",
                                score,
                                rank.color(),
                                rank.label()
                            ));
                        }
                        self.set_text("highScore", &format!("High Score: {}", high_score));
                    }
                    GameEvent::SpeedIncreased { .. } => {}
                }
            }
        }

        fn show_screen(&self, phase: GamePhase) {
            for (id, screen_phase) in SCREENS {
                self.set_hidden(id, *screen_phase != phase);
            }
            self.set_hidden("skinsScreen", true);
            let in_run = matches!(phase, GamePhase::Playing | GamePhase::Paused);
            self.set_hidden("score", !in_run);
            match phase {
                GamePhase::Playing => self.set_text("score", &self.driver.game.score.to_string()),
                GamePhase::Paused => self.set_text(
                    "pauseScore",
                    &format!("Current Score: {}", self.driver.game.score),
                ),
                _ => {}
            }
        }

        fn show_skins(&self) {
            self.set_hidden("titleScreen", true);
            self.set_hidden("skinsScreen", false);
            self.update_skin_preview();
        }

        fn update_skin_preview(&self) {
            let profile = &self.driver.profile;
            let Some(skin) = profile.catalog.get(profile.skins.cursor()) else {
                return;
            };
            if let Some(img) = self.document.get_element_by_id("currentSkinImg") {
                let _ = img.set_attribute("src", &skin.asset_key);
            }
            self.set_text("skinName", &skin.label);
            let hint = profile
                .skins
                .unlock_hint(&profile.catalog, profile.high_score)
                .unwrap_or_default();
            self.set_text("skinUnlockHint", &hint);
        }

        fn set_hidden(&self, id: &str, hidden: bool) {
            if let Some(el) = self.document.get_element_by_id(id) {
                let classes = el.class_list();
                let _ = if hidden {
                    classes.add_1("hidden")
                } else {
                    classes.remove_1("hidden")
                };
            }
        }

        fn set_text(&self, id: &str, text: &str) {
            if let Some(el) = self.document.get_element_by_id(id) {
                el.set_text_content(Some(text));
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Swipey Bird starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let catalog = SkinCatalog::default();
        let mut assets = vec![BACKGROUND_ASSET, PIPE_ASSET, GROUND_ASSET];
        assets.extend(catalog.iter().map(|skin| skin.asset_key.as_str()));
        let renderer = CanvasRenderer::new(canvas.clone(), &assets).expect("no 2d context");

        let (width, height) = window_size();
        renderer.resize(width as u32, height as u32);

        let seed = js_sys::Date::now() as u64;
        let driver = Driver::new(
            seed,
            Tuning::default(),
            Viewport::new(width, height),
            catalog,
            LocalStorage::open(),
            renderer,
        );
        let game = Rc::new(RefCell::new(Game {
            driver,
            audio: AudioManager::new(),
            document: document.clone(),
        }));
        game.borrow().show_screen(GamePhase::Title);

        setup_input_handlers(&canvas, game.clone());
        setup_buttons(&document, game.clone());
        setup_resize(game.clone());

        request_animation_frame(game);

        log::info!("Swipey Bird running!");
    }

    fn window_size() -> (f32, f32) {
        let Some(window) = web_sys::window() else {
            return (1.0, 1.0);
        };
        let w = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(1.0);
        let h = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(1.0);
        (w as f32, h as f32)
    }

    /// Touch y relative to the canvas
    fn touch_y(canvas: &HtmlCanvasElement, event: &TouchEvent) -> Option<f32> {
        let touch = event.touches().get(0)?;
        let rect = canvas.get_bounding_client_rect();
        Some(touch.client_y() as f32 - rect.top() as f32)
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Touch start
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(y) = touch_y(&canvas_clone, &event) {
                    let mut g = game.borrow_mut();
                    g.audio.resume();
                    g.driver.press(y);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch move
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(y) = touch_y(&canvas_clone, &event) {
                    game.borrow_mut().driver.drag(y);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch end / cancel
        for name in ["touchend", "touchcancel"] {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                game.borrow_mut().driver.release();
            });
            let _ = canvas.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse down
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let mut g = game.borrow_mut();
                g.audio.resume();
                g.driver.press(event.offset_y() as f32);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse move (ignored by the tracker unless pressed)
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                game.borrow_mut().driver.drag(event.offset_y() as f32);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse up
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().driver.release();
            });
            let _ = canvas
                .add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // No context menu on long press
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                event.prevent_default();
            });
            let _ = canvas
                .add_event_listener_with_callback("contextmenu", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Attach a click handler to the element with `id`, if the page has one
    fn on_click(document: &Document, id: &str, game: Rc<RefCell<Game>>, action: fn(&mut Game)) {
        let Some(btn) = document.get_element_by_id(id) else {
            log::warn!("Missing button #{}", id);
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            let mut g = game.borrow_mut();
            action(&mut g);
            g.sync_ui();
        });
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_buttons(document: &Document, game: Rc<RefCell<Game>>) {
        on_click(document, "startBtn", game.clone(), |g| g.driver.show_ready());
        on_click(document, "restartBtn", game.clone(), |g| g.driver.show_ready());
        on_click(document, "homeBtn", game.clone(), |g| g.driver.show_title());
        on_click(document, "shareBtn", game.clone(), |g| {
            let text = g.driver.share_text();
            if !share_text("Swipey Bird Score", &text) {
                log::warn!("No share or clipboard support");
            }
        });
        on_click(document, "skinsBtn", game.clone(), |g| g.show_skins());
        on_click(document, "prevSkinBtn", game.clone(), |g| {
            g.driver.prev_skin();
            g.update_skin_preview();
        });
        on_click(document, "nextSkinBtn", game.clone(), |g| {
            g.driver.next_skin();
            g.update_skin_preview();
        });
        on_click(document, "selectSkinBtn", game, |g| match g.driver.confirm_skin() {
            SkinChoice::Selected(_) => {
                g.set_hidden("skinsScreen", true);
                g.set_hidden("titleScreen", false);
            }
            SkinChoice::Locked { unlock_threshold } => {
                if let Some(window) = web_sys::window() {
                    let _ = window.alert_with_message(&format!(
                        "Unlock this skin by scoring {} points!",
                        unlock_threshold
                    ));
                }
            }
        });
    }

    fn setup_resize(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else { return };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let (width, height) = window_size();
            let mut g = game.borrow_mut();
            g.driver.presenter().resize(width as u32, height as u32);
            g.driver.resize(Viewport::new(width, height));
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else { return };
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        game.borrow_mut().frame();
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use swipey_bird::persistence::MemoryStore;
    use swipey_bird::renderer::LogPresenter;
    use swipey_bird::sim::{GamePhase, Viewport};
    use swipey_bird::{Driver, SkinCatalog};

    env_logger::init();
    log::info!("Swipey Bird (native) starting...");
    log::info!("Native mode is a headless autopilot demo - build for wasm32 to play");

    let mut args = std::env::args().skip(1);
    let tuning = args.next().map(|path| load_tuning(&path)).unwrap_or_default();
    let seed = args
        .next()
        .and_then(|raw| raw.parse::<u64>().ok())
        .unwrap_or(2024);

    let mut driver = Driver::new(
        seed,
        tuning,
        Viewport::new(400.0, 800.0),
        SkinCatalog::default(),
        MemoryStore::new(),
        LogPresenter::default(),
    );
    driver.set_autopilot(true);
    driver.show_ready();
    driver.press(400.0);
    driver.drag(400.0);

    // One minute at 60 Hz
    for _ in 0..3600 {
        driver.frame();
        if driver.phase() == GamePhase::GameOver {
            break;
        }
    }

    log::info!(
        "Demo finished after {} frames: {} points ({})",
        driver.presenter().frames,
        driver.game.score,
        driver.game.rank().label()
    );
    if let Some(snapshot) = &driver.presenter().last {
        match serde_json::to_string_pretty(snapshot) {
            Ok(json) => println!("{}", json),
            Err(e) => log::warn!("Could not serialize final frame: {}", e),
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Read a tuning file, falling back to defaults if it is missing or invalid
#[cfg(not(target_arch = "wasm32"))]
fn load_tuning(path: &str) -> swipey_bird::Tuning {
    let json = match std::fs::read_to_string(path) {
        Ok(json) => json,
        Err(e) => {
            log::warn!("Could not read tuning file {}: {}", path, e);
            return swipey_bird::Tuning::default();
        }
    };
    match swipey_bird::Tuning::from_json(&json) {
        Ok(tuning) => {
            log::info!("Loaded tuning from {}", path);
            tuning
        }
        Err(e) => {
            log::warn!("Invalid tuning file {}: {}", path, e);
            swipey_bird::Tuning::default()
        }
    }
}
