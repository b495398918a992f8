//! Noise Pong entry point
//!
//! Handles platform-specific initialization and runs the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::Clamped;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, ImageData, KeyboardEvent};

    use noise_pong::consts::PADDLE_KEY_SPEED;
    use noise_pong::{Frame, GameConfig, PongGame};

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Noise Pong starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or("no canvas")?
            .dyn_into()?;
        let context: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or("no 2d context")?
            .dyn_into()?;

        // Config comes from the page URL; write the effective values back so
        // the current game stays linkable.
        let query = window.location().search().unwrap_or_default();
        let config = GameConfig::from_query(&query);
        log::info!(
            "config: {}",
            serde_json::to_string(&config).unwrap_or_default()
        );
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(
                &JsValue::NULL,
                "",
                Some(&format!("?{}", config.to_query())),
            );
        }

        let seed = js_sys::Date::now() as u64;
        let surface = Frame::new(canvas.width(), canvas.height());
        let game = Rc::new(RefCell::new(PongGame::new(surface, &config, seed)));

        setup_keyboard(&window, game.clone());
        setup_reset_button(game.clone());

        game.borrow_mut().start();
        request_animation_frame(game, context);

        log::info!("Noise Pong running!");
        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<PongGame>>, context: CanvasRenderingContext2d) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            game_loop(game, context);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<PongGame>>, context: CanvasRenderingContext2d) {
        {
            let mut g = game.borrow_mut();
            // stop() unregisters the loop here, before any state is touched
            if !g.is_running() {
                return;
            }
            g.advance();
            if let Err(e) = present(&g, &context) {
                log::warn!("present failed: {e:?}");
            }
        }

        request_animation_frame(game, context);
    }

    /// Blit the rendered frame onto the canvas
    fn present(game: &PongGame, context: &CanvasRenderingContext2d) -> Result<(), JsValue> {
        let surface = game.surface();
        let image = ImageData::new_with_u8_clamped_array_and_sh(
            Clamped(surface.as_rgba()),
            surface.width(),
            surface.height(),
        )?;
        context.put_image_data(&image, 0.0, 0.0)
    }

    fn setup_keyboard(window: &web_sys::Window, game: Rc<RefCell<PongGame>>) {
        // Key down sets a direction...
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    "w" => g.set_paddle_left_direction(-PADDLE_KEY_SPEED),
                    "s" => g.set_paddle_left_direction(PADDLE_KEY_SPEED),
                    "ArrowUp" => g.set_paddle_right_direction(-PADDLE_KEY_SPEED),
                    "ArrowDown" => g.set_paddle_right_direction(PADDLE_KEY_SPEED),
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // ...key up returns the paddle to neutral
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    "w" | "s" => g.set_paddle_left_direction(0.0),
                    "ArrowUp" | "ArrowDown" => g.set_paddle_right_direction(0.0),
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_reset_button(game: Rc<RefCell<PongGame>>) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        if let Some(btn) = document.get_element_by_id("reset-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                game.borrow_mut().reset();
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(e) = wasm_game::run() {
        log::error!("startup failed: {e:?}");
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use noise_pong::consts::{PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH};
    use noise_pong::{Frame, GameConfig, PongGame};

    env_logger::init();
    log::info!("Noise Pong (native) starting...");

    // Optional query-string argument, same syntax as the page URL:
    //   noise-pong 'speed=4&noiseType=perlin&noiseIntensity=0.3'
    let config = std::env::args()
        .nth(1)
        .map(|q| GameConfig::from_query(&q))
        .unwrap_or_default();
    log::info!(
        "config: {}",
        serde_json::to_string(&config).unwrap_or_default()
    );

    let surface = Frame::new(PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT);
    let mut game = PongGame::new(surface, &config, 0xDEAD_BEEF);
    game.start();

    // Headless demo: ten seconds of frames at 60 Hz, then report the score.
    for _ in 0..600 {
        game.advance();
    }
    let state = game.state();
    println!(
        "after 600 frames: {} - {}, ball at ({:.0}, {:.0})",
        state.score_left, state.score_right, state.ball.pos.x, state.ball.pos.y
    );
    game.stop();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
