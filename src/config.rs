use crate::error::SnakeError;

pub const DEFAULT_WIDTH: u32 = 30;
pub const DEFAULT_HEIGHT: u32 = 30;
pub const DEFAULT_TICK_MS: u32 = 75;
pub const DEFAULT_START_LEN: u32 = 7;

const MIN_SIDE: u32 = 4;
/// Keeps `width * height` pixel math and `i32` coordinates in range.
pub const MAX_SIDE: u32 = 4096;

/// Environment variable read by [`GameConfig::with_env_overrides`].
pub const TICK_MS_ENV: &str = "PIXEL_SNAKE_TICK_MS";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub width: u32,
    pub height: u32,
    /// Milliseconds of accumulated time per world step.
    pub tick_ms: u32,
    pub start_len: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            tick_ms: DEFAULT_TICK_MS,
            start_len: DEFAULT_START_LEN,
        }
    }
}

impl GameConfig {
    pub fn with_size(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), SnakeError> {
        if self.width < MIN_SIDE || self.height < MIN_SIDE {
            return Err(SnakeError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.width > MAX_SIDE || self.height > MAX_SIDE {
            return Err(SnakeError::BoardTooLarge {
                width: self.width,
                height: self.height,
                max: MAX_SIDE,
            });
        }
        // The first food sits right in front of the head, so it must fit too.
        if self.start_len == 0 || self.start_len >= self.width {
            return Err(SnakeError::SnakeTooLong {
                start_len: self.start_len,
                width: self.width,
            });
        }
        if self.tick_ms == 0 {
            return Err(SnakeError::InvalidTickInterval);
        }
        Ok(())
    }

    /// Apply `PIXEL_SNAKE_TICK_MS` if it is set and parses.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(raw) = std::env::var(TICK_MS_ENV) {
            match raw.trim().parse::<u32>() {
                Ok(ms) => self.tick_ms = ms,
                Err(e) => log::warn!("ignoring {}={:?}: {}", TICK_MS_ENV, raw, e),
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(GameConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_tiny_board_rejected() {
        let config = GameConfig::with_size(3, 30);
        assert_eq!(
            config.validate(),
            Err(SnakeError::InvalidDimensions { width: 3, height: 30 })
        );
    }

    #[test]
    fn test_huge_board_rejected() {
        let config = GameConfig::with_size(70_000, 70_000);
        assert_eq!(
            config.validate(),
            Err(SnakeError::BoardTooLarge {
                width: 70_000,
                height: 70_000,
                max: MAX_SIDE,
            })
        );
        assert!(GameConfig::with_size(MAX_SIDE + 1, 30).validate().is_err());
        assert!(GameConfig::with_size(30, u32::MAX).validate().is_err());
        assert_eq!(GameConfig::with_size(MAX_SIDE, MAX_SIDE).validate(), Ok(()));
    }

    #[test]
    fn test_snake_must_leave_room_for_food() {
        let config = GameConfig {
            start_len: 10,
            ..GameConfig::with_size(10, 10)
        };
        assert!(matches!(config.validate(), Err(SnakeError::SnakeTooLong { .. })));
    }

    #[test]
    fn test_zero_length_snake_rejected() {
        let config = GameConfig {
            start_len: 0,
            ..GameConfig::default()
        };
        assert!(matches!(config.validate(), Err(SnakeError::SnakeTooLong { .. })));
    }

    #[test]
    fn test_env_override_for_tick() {
        std::env::set_var(TICK_MS_ENV, " 120 ");
        assert_eq!(GameConfig::default().with_env_overrides().tick_ms, 120);

        std::env::set_var(TICK_MS_ENV, "fast");
        assert_eq!(
            GameConfig::default().with_env_overrides().tick_ms,
            DEFAULT_TICK_MS
        );
        std::env::remove_var(TICK_MS_ENV);
    }

    #[test]
    fn test_zero_tick_rejected() {
        let config = GameConfig {
            tick_ms: 0,
            ..GameConfig::default()
        };
        assert_eq!(config.validate(), Err(SnakeError::InvalidTickInterval));
    }
}
