pub mod color;
pub mod config;
pub mod coord;
pub mod error;
pub mod frame_clock;
pub mod game;
pub mod logging;
pub mod renderer;
pub mod screen;
pub mod viewport;
pub mod world;

#[cfg(not(target_arch = "wasm32"))]
pub mod cli_renderer;

#[cfg(target_arch = "wasm32")]
pub mod web_main;
#[cfg(target_arch = "wasm32")]
pub mod web_renderer;

pub use color::{Color, Rgb};
pub use config::GameConfig;
pub use coord::{Coord, Direction};
pub use error::SnakeError;
pub use frame_clock::FrameClock;
pub use game::Game;
pub use logging::init_logging;
pub use renderer::{Input, Renderer};
pub use screen::Screen;
pub use viewport::ViewportRect;
pub use world::{GameState, World};

#[cfg(not(target_arch = "wasm32"))]
pub use cli_renderer::CliRenderer;
#[cfg(target_arch = "wasm32")]
pub use web_main::start_game;
#[cfg(target_arch = "wasm32")]
pub use web_renderer::WebRenderer;
