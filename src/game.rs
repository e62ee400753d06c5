use crate::color::Color;
use crate::config::GameConfig;
use crate::coord::{Coord, Direction};
use crate::error::SnakeError;
use crate::world::{GameState, World};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// The game module handed to the host: fixed-step snake behind a
/// variable-rate `tick`.
#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
pub struct Game {
    world: World,
    elapsed_milliseconds: u32,
    tick_milliseconds: u32,
}

// Everything in this block is also exported to JavaScript.
#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
impl Game {
    pub fn new() -> Game {
        Self::from_validated(GameConfig::default())
    }

    pub fn width(&self) -> u32 {
        self.world.screen.width()
    }

    pub fn height(&self) -> u32 {
        self.world.screen.height()
    }

    /// Feed wall-clock time into the game. Once enough has built up the
    /// world advances one step and the accumulator starts over from zero.
    pub fn tick(&mut self, elapsed_milliseconds: u32) {
        self.elapsed_milliseconds = self.elapsed_milliseconds.saturating_add(elapsed_milliseconds);

        if self.elapsed_milliseconds >= self.tick_milliseconds {
            self.elapsed_milliseconds = 0;
            self.world.tick();
        }
    }

    pub fn click(&mut self, x: i32, y: i32) {
        self.world.click(x, y);
    }
}

impl Game {
    pub fn with_config(config: GameConfig) -> Result<Self, SnakeError> {
        config.validate()?;
        Ok(Self::from_validated(config))
    }

    fn from_validated(config: GameConfig) -> Self {
        Self {
            world: World::new(config.width, config.height, config.start_len),
            elapsed_milliseconds: 0,
            tick_milliseconds: config.tick_ms,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn state(&self) -> GameState {
        self.world.state()
    }

    pub fn score(&self) -> u32 {
        self.world.score()
    }

    pub fn snake_len(&self) -> usize {
        self.world.snake_len()
    }

    pub fn steer(&mut self, direction: Direction) {
        self.world.steer(direction);
    }

    pub fn restart(&mut self) {
        self.world.reset();
        self.elapsed_milliseconds = 0;
    }

    /// `None` outside the board.
    pub fn color_at(&self, x: i32, y: i32) -> Option<Color> {
        self.world.screen.color_at(&Coord::new(x, y))
    }

    /// RGBA bytes ready for `ImageData`.
    pub fn pixels(&self) -> &[u8] {
        self.world.screen.pixels()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn head(game: &Game) -> Coord {
        game.world().head().unwrap()
    }

    #[test]
    fn test_default_dimensions() {
        let game = Game::new();
        assert_eq!(game.width(), 30);
        assert_eq!(game.height(), 30);
        assert_eq!(game.pixels().len(), 30 * 30 * 4);
    }

    #[test]
    fn test_tick_waits_for_interval() {
        let mut game = Game::new();
        let start = head(&game);

        game.tick(40);
        game.tick(34);
        assert_eq!(head(&game), start, "74ms is below the 75ms step");

        game.tick(1);
        assert_eq!(head(&game), start + Direction::Right.offset());
    }

    #[test]
    fn test_long_frame_advances_only_once() {
        let mut game = Game::new();
        let start = head(&game);

        // A 10 second stall still moves one cell; the surplus is dropped.
        game.tick(10_000);
        assert_eq!(head(&game), start + Direction::Right.offset());

        game.tick(74);
        assert_eq!(head(&game), start + Direction::Right.offset());
    }

    #[test]
    fn test_tick_accumulator_saturates() {
        let mut game = Game::new();
        game.tick(u32::MAX);
        game.tick(u32::MAX);
        assert_eq!(game.state(), GameState::Playing);
    }

    #[test]
    fn test_click_forwards_to_world() {
        let mut game = Game::new();
        game.click(0, 0);
        assert_eq!(game.world().direction(), Direction::Up);
    }

    #[test]
    fn test_custom_config() {
        let config = GameConfig {
            width: 8,
            height: 6,
            tick_ms: 10,
            start_len: 2,
        };
        let mut game = Game::with_config(config).unwrap();
        assert_eq!((game.width(), game.height()), (8, 6));
        assert_eq!(game.snake_len(), 2);
        assert_eq!(game.color_at(2, 1), Some(Color::Food));

        game.tick(10);
        assert_eq!(head(&game), Coord::new(2, 3));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = GameConfig::with_size(2, 2);
        assert!(Game::with_config(config).is_err());
    }

    #[test]
    fn test_color_at_off_board_is_none() {
        let game = Game::new();
        assert_eq!(game.color_at(30, 15), None);
        assert_eq!(game.color_at(-1, 0), None);
        assert_eq!(game.color_at(0, 30), None);
        assert_eq!(game.color_at(29, 29), Some(Color::Background));
    }

    #[test]
    fn test_oversized_config_is_an_error() {
        let config = GameConfig::with_size(70_000, 70_000);
        assert!(matches!(
            Game::with_config(config),
            Err(SnakeError::BoardTooLarge { .. })
        ));
    }

    #[test]
    fn test_restart_clears_score() {
        let mut game = Game::new();
        game.world.screen.set_color_at(&Coord::new(7, 15), Color::Food);
        game.tick(75);
        assert_eq!(game.score(), 1);

        game.restart();
        assert_eq!(game.score(), 0);
        assert_eq!(game.snake_len(), 7);
    }
}
