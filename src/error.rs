use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnakeError {
    #[error("board must be at least 4x4 cells, got {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("snake of length {start_len} does not fit on a board {width} cells wide")]
    SnakeTooLong { start_len: u32, width: u32 },

    #[error("board may be at most {max}x{max} cells, got {width}x{height}")]
    BoardTooLarge { width: u32, height: u32, max: u32 },

    #[error("tick interval must be positive")]
    InvalidTickInterval,

    #[error("color {0:?} is not part of the palette")]
    UnknownColor([u8; 3]),

    #[error("({0}, {1}) is off the board")]
    OffScreen(i32, i32),
}
