use crate::logging::init_logging;
use crate::web_renderer::WebRenderer;
use crate::{FrameClock, Game, Renderer};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

struct GameLoop {
    game: Game,
    renderer: WebRenderer,
    clock: FrameClock,
}

impl GameLoop {
    fn new(canvas_id: &str) -> Result<Self, JsValue> {
        let game = Game::new();
        let mut renderer = WebRenderer::new(canvas_id)?;
        renderer
            .init(&game)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        Ok(Self {
            game,
            renderer,
            clock: FrameClock::new(js_sys::Date::now()),
        })
    }

    fn update_frame(&mut self, now: f64) -> std::io::Result<()> {
        while let Some(input) = self.renderer.poll_input()? {
            if !input.apply(&mut self.game) {
                // Pages can't be quit from inside the module.
                log::debug!("ignoring quit request");
            }
        }

        self.game.tick(self.clock.advance(now));
        self.renderer.render(&self.game)
    }
}

fn request_animation_frame(callback: &Closure<dyn FnMut()>) -> Result<i32, JsValue> {
    web_sys::window()
        .ok_or("no window")?
        .request_animation_frame(callback.as_ref().unchecked_ref())
}

/// Runs once when the module is instantiated.
#[wasm_bindgen(start)]
pub fn on_module_start() {
    init_logging();
}

/// Bind a new game to the canvas with id `canvas_id` and start the
/// animation-frame loop.
#[wasm_bindgen]
pub fn start_game(canvas_id: &str) -> Result<(), JsValue> {
    init_logging();

    let game_loop = match GameLoop::new(canvas_id) {
        Ok(gl) => Rc::new(RefCell::new(gl)),
        Err(e) => {
            log::error!("failed to bind game to #{}: {:?}", canvas_id, e);
            return Err(e);
        }
    };

    // The closure has to reschedule itself, so it holds a handle to its own slot.
    let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();

    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let now = js_sys::Date::now();

        if let Err(e) = game_loop.borrow_mut().update_frame(now) {
            log::error!("frame failed, stopping loop: {}", e);
            return;
        }

        if let Some(callback) = f.borrow().as_ref() {
            if let Err(e) = request_animation_frame(callback) {
                log::error!("could not schedule next frame: {:?}", e);
            }
        }
    }) as Box<dyn FnMut()>));

    if let Some(callback) = g.borrow().as_ref() {
        request_animation_frame(callback)?;
    }

    log::info!("game loop started on #{}", canvas_id);
    Ok(())
}

