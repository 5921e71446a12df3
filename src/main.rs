//! Neon Pong entry point
//!
//! In the browser: wires the canvas, pointer and buttons to the game and runs
//! the requestAnimationFrame loop. Natively: plays a headless demo match.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, KeyboardEvent, MouseEvent, TouchEvent, Window};

    use neon_pong::consts::PLAYFIELD_HEIGHT;
    use neon_pong::platform::{DomUi, pointer_to_playfield_y};
    use neon_pong::renderer::CanvasSurface;
    use neon_pong::scores::FetchScoreSink;
    use neon_pong::sim::Playfield;
    use neon_pong::{Game, Settings};

    /// The single game instance plus loop bookkeeping
    struct App {
        game: Game<CanvasSurface, DomUi>,
        /// A requestAnimationFrame callback is pending
        loop_active: bool,
    }

    pub fn run() -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .ok_or_else(|| JsValue::from_str("no #gameCanvas"))?
            .dyn_into()
            .map_err(|_| JsValue::from_str("#gameCanvas is not a canvas"))?;

        let settings = Settings::load();
        let surface = CanvasSurface::new(&canvas, &Playfield::default(), settings.glow)?;
        let ui = DomUi::new(&document);
        let scores = FetchScoreSink::new(settings.score_endpoint.clone());

        let seed = js_sys::Date::now() as u64;
        let app = Rc::new(RefCell::new(App {
            game: Game::new(seed, surface, ui, Box::new(scores), settings),
            loop_active: false,
        }));
        log::info!("Game initialized with seed: {}", seed);

        setup_input_handlers(&canvas, app.clone())?;
        setup_buttons(&document, app.clone())?;
        setup_keyboard(&window, app)?;

        log::info!("Neon Pong ready");
        Ok(())
    }

    fn setup_input_handlers(
        canvas: &HtmlCanvasElement,
        app: Rc<RefCell<App>>,
    ) -> Result<(), JsValue> {
        // Mouse move - absolute position mapped into the playfield
        {
            let app = app.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let rect = canvas_clone.get_bounding_client_rect();
                if let Some(y) = pointer_to_playfield_y(
                    event.client_y() as f64,
                    rect.top(),
                    rect.height(),
                    PLAYFIELD_HEIGHT,
                ) {
                    app.borrow_mut().game.on_pointer_move(y);
                }
            });
            canvas.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Touch move - first touch point
        {
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let rect = canvas_clone.get_bounding_client_rect();
                    if let Some(y) = pointer_to_playfield_y(
                        touch.client_y() as f64,
                        rect.top(),
                        rect.height(),
                        PLAYFIELD_HEIGHT,
                    ) {
                        app.borrow_mut().game.on_pointer_move(y);
                    }
                }
            });
            canvas.add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn setup_buttons(document: &Document, app: Rc<RefCell<App>>) -> Result<(), JsValue> {
        for id in ["start-btn", "restart-btn"] {
            let Some(btn) = document.get_element_by_id(id) else {
                log::warn!("Button #{} not found", id);
                continue;
            };
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                start_match(app.clone());
            });
            btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
        Ok(())
    }

    fn setup_keyboard(window: &Window, app: Rc<RefCell<App>>) -> Result<(), JsValue> {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            if matches!(event.key().as_str(), "g" | "G") {
                let mut a = app.borrow_mut();
                let glow = !a.game.settings().glow;
                a.game.settings_mut().glow = glow;
                a.game.surface_mut().set_glow(glow);
                a.game.settings().save();
                a.game.draw();
                log::info!("Glow: {}", glow);
            }
        });
        window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    /// Start or restart the match and make sure exactly one frame loop runs
    fn start_match(app: Rc<RefCell<App>>) {
        {
            let mut a = app.borrow_mut();
            a.game.reset_game();
            if a.loop_active {
                return;
            }
            a.loop_active = true;
        }
        request_animation_frame(app);
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>, time: f64) {
        let keep_going = {
            let mut a = app.borrow_mut();
            let keep_going = a.game.frame(time);
            a.loop_active = keep_going;
            keep_going
        };

        if keep_going {
            request_animation_frame(app);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Neon Pong starting...");

    if let Err(e) = wasm_game::run() {
        log::error!("Startup failed: {:?}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use neon_pong::platform::HeadlessUi;
    use neon_pong::renderer::RecordingSurface;
    use neon_pong::scores::LogScoreSink;
    use neon_pong::{Game, Settings};

    /// 60 Hz display
    const FRAME_MS: f32 = 1000.0 / 60.0;
    /// Autopilot pointer speed, a little slower than the AI
    const AUTOPILOT_SPEED: f32 = 0.35;
    /// Ten minutes of play
    const MAX_FRAMES: u64 = 60 * 60 * 10;

    /// Play one match with an autopilot on the player paddle
    pub fn run(seed: u64) {
        let mut game = Game::new(
            seed,
            RecordingSurface::default(),
            HeadlessUi::default(),
            Box::new(LogScoreSink),
            Settings::load(),
        );
        game.start();

        let mut timestamp = 0.0;
        let mut frames = 0u64;
        loop {
            let ball_y = game.state().ball.pos.y;
            let center = game.state().player.center_y();
            let reach = AUTOPILOT_SPEED * FRAME_MS;
            game.on_pointer_move(center + (ball_y - center).clamp(-reach, reach));

            if !game.frame(timestamp) {
                break;
            }
            timestamp += FRAME_MS as f64;
            frames += 1;
            if frames >= MAX_FRAMES {
                log::warn!("Demo stopped after {} frames without a winner", frames);
                break;
            }
        }

        let (player, ai) = game.state().score_line();
        println!("Final score: {} - {} after {} frames", player, ai, frames);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Neon Pong (native) starting...");
    log::info!(
        "Native mode plays a headless demo match - run with `trunk serve` for the web version"
    );

    demo::run(rand::random());
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
