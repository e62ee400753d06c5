use crate::game::Game;
use crate::renderer::{Input, Renderer};
use crate::viewport::ViewportRect;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::io;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::{Clamped, JsCast};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, ImageData, MouseEvent};

#[wasm_bindgen]
impl Game {
    /// Copy the pixel buffer into `ctx` at the canvas origin.
    pub fn render(&self, ctx: &CanvasRenderingContext2d) -> Result<(), JsValue> {
        let data = ImageData::new_with_u8_clamped_array_and_sh(
            Clamped(self.pixels()),
            self.width(),
            self.height(),
        )?;
        ctx.put_image_data(&data, 0.0, 0.0)
    }
}

fn js_to_io(err: JsValue) -> io::Error {
    io::Error::new(io::ErrorKind::Other, format!("{:?}", err))
}

pub struct WebRenderer {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
    pending_input: Rc<RefCell<VecDeque<Input>>>,
}

impl WebRenderer {
    pub fn new(canvas_id: &str) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or("canvas not found")?
            .dyn_into::<HtmlCanvasElement>()?;

        let context = canvas
            .get_context("2d")?
            .ok_or("no 2d context")?
            .dyn_into::<CanvasRenderingContext2d>()?;

        Ok(Self {
            canvas,
            context,
            pending_input: Rc::new(RefCell::new(VecDeque::new())),
        })
    }

    fn setup_click_listener(&self, game_width: u32, game_height: u32) -> Result<(), JsValue> {
        let pending_input = self.pending_input.clone();
        let canvas = self.canvas.clone();

        let closure = Closure::wrap(Box::new(move |event: MouseEvent| {
            // The canvas may be scaled by CSS, so map through its on-page box.
            let rect = canvas.get_bounding_client_rect();
            let viewport = ViewportRect::new(rect.left(), rect.top(), rect.width(), rect.height());

            if let Some((x, y)) = viewport.to_game_space(
                event.client_x() as f64,
                event.client_y() as f64,
                game_width,
                game_height,
            ) {
                pending_input.borrow_mut().push_back(Input::Click { x, y });
            }
        }) as Box<dyn FnMut(MouseEvent)>);

        self.canvas
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;

        closure.forget(); // Keep listener alive
        Ok(())
    }
}

impl Renderer for WebRenderer {
    fn init(&mut self, game: &Game) -> io::Result<()> {
        self.canvas.set_width(game.width());
        self.canvas.set_height(game.height());
        self.setup_click_listener(game.width(), game.height())
            .map_err(js_to_io)?;
        log::info!("canvas sized to {}x{}", game.width(), game.height());
        Ok(())
    }

    fn render(&mut self, game: &Game) -> io::Result<()> {
        game.render(&self.context).map_err(js_to_io)
    }

    fn cleanup(&mut self) -> io::Result<()> {
        // The page owns the canvas; nothing to undo.
        Ok(())
    }

    fn poll_input(&mut self) -> io::Result<Option<Input>> {
        Ok(self.pending_input.borrow_mut().pop_front())
    }
}
