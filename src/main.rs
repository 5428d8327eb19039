//! Duel Pong entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::{Cell, RefCell};
    use std::ops::ControlFlow;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, KeyboardEvent, Window};

    use duel_pong::consts::TIMER_INTERVAL_MS;
    use duel_pong::renderer::CanvasSurface;
    use duel_pong::{Match, Tuning};

    type SharedMatch = Rc<RefCell<Match<CanvasSurface>>>;

    pub fn run() {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialized".into());
        }

        log::info!("Duel Pong starting...");

        if let Err(msg) = start() {
            log::error!("Startup failed: {}", msg);
        }
    }

    fn start() -> Result<(), String> {
        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("pongCanvas")
            .ok_or("no #pongCanvas element")?
            .dyn_into()
            .map_err(|_| "#pongCanvas is not a canvas")?;

        let tuning = Tuning::default();
        let surface = CanvasSurface::new(&canvas, tuning.width as u32, tuning.height as u32)
            .ok_or("2d context unavailable")?;

        let seed = js_sys::Date::now() as u64;
        let game = Match::new(tuning, seed, surface).map_err(|e| e.to_string())?;
        let game = Rc::new(RefCell::new(game));

        setup_input_handlers(&document, game.clone());
        start_timer(&window, game.clone())?;
        start_frame_loop(game);

        Ok(())
    }

    fn setup_input_handlers(document: &Document, game: SharedMatch) {
        // Key down
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().key_down(&event.key());
            });
            let _ = document
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().key_up(&event.key());
            });
            let _ = document
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Count down once per second; the interval clears itself once the
    /// match has ended.
    fn start_timer(window: &Window, game: SharedMatch) -> Result<(), String> {
        let handle: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

        let closure = {
            let handle = handle.clone();
            let window = window.clone();
            Closure::<dyn FnMut()>::new(move || {
                let flow = game.borrow_mut().on_second();
                if flow.is_break() {
                    if let Some(id) = handle.take() {
                        window.clear_interval_with_handle(id);
                        log::info!("Timer stopped");
                    }
                }
            })
        };

        let id = window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                TIMER_INTERVAL_MS,
            )
            .map_err(|e| format!("setInterval failed: {:?}", e))?;
        handle.set(Some(id));
        closure.forget();

        Ok(())
    }

    fn request_animation_frame(f: &Closure<dyn FnMut()>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(e) = window.request_animation_frame(f.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
    }

    /// Update and draw once per display frame until the match ends
    fn start_frame_loop(game: SharedMatch) {
        let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let g = f.clone();

        *g.borrow_mut() = Some(Closure::new(move || {
            let flow = game.borrow_mut().on_frame();
            if let ControlFlow::Break(summary) = flow {
                log::info!(
                    "{} Wins! ({}-{})",
                    summary.winner.as_str(),
                    summary.left_score,
                    summary.right_score
                );
                // Release the loop closure
                let _ = f.borrow_mut().take();
                return;
            }
            if let Some(cb) = f.borrow().as_ref() {
                request_animation_frame(cb);
            }
        }));

        if let Some(cb) = g.borrow().as_ref() {
            request_animation_frame(cb);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Duel Pong (native) starting...");
    log::info!("Native mode plays a headless idle match - build for wasm32 to play in the browser");

    if let Err(e) = run_headless() {
        log::error!("Setup failed: {}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn run_headless() -> Result<(), duel_pong::SetupError> {
    use duel_pong::renderer::RecordingSurface;
    use duel_pong::{Match, SimulatedClock, Tuning};
    use std::time::{SystemTime, UNIX_EPOCH};

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default();

    let mut game = Match::new(Tuning::default(), seed, RecordingSurface::default())?;
    let summary = SimulatedClock::default().run(&mut game, |_, _| {});

    println!(
        "{} Wins! ({}-{}, {} frames, {} draw frames)",
        summary.winner.as_str(),
        summary.left_score,
        summary.right_score,
        summary.frames,
        game.surface.frames
    );
    Ok(())
}
