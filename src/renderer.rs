use crate::coord::Direction;
use crate::game::Game;
use std::io;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Pointer press, already mapped into game coordinates.
    Click { x: i32, y: i32 },
    Direction(Direction),
    Restart,
    Quit,
}

impl Input {
    /// Apply the input to the game. Returns `false` when the host should stop.
    pub fn apply(self, game: &mut Game) -> bool {
        match self {
            Input::Click { x, y } => game.click(x, y),
            Input::Direction(direction) => game.steer(direction),
            Input::Restart => game.restart(),
            Input::Quit => return false,
        }
        true
    }
}

/// Trait that abstracts the display backend (terminal, canvas).
pub trait Renderer {
    /// Prepare the display for the given game (sizing, listeners).
    fn init(&mut self, game: &Game) -> io::Result<()>;

    /// Draw the current frame.
    fn render(&mut self, game: &Game) -> io::Result<()>;

    /// Restore whatever `init` changed.
    fn cleanup(&mut self) -> io::Result<()>;

    /// Next pending input, if any.
    fn poll_input(&mut self) -> io::Result<Option<Input>>;
}
