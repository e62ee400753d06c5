use crate::error::SnakeError;

pub type Rgb = [u8; 3];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Background,
    Snake,
    Food,
    Fail,
}

impl From<Color> for Rgb {
    fn from(color: Color) -> Self {
        match color {
            Color::Background => [0, 0, 0],
            Color::Snake => [0, 255, 0],
            Color::Food => [0, 0, 255],
            Color::Fail => [255, 0, 0],
        }
    }
}

impl TryFrom<Rgb> for Color {
    type Error = SnakeError;

    fn try_from(rgb: Rgb) -> Result<Self, Self::Error> {
        match rgb {
            [0, 0, 0] => Ok(Color::Background),
            [0, 255, 0] => Ok(Color::Snake),
            [0, 0, 255] => Ok(Color::Food),
            [255, 0, 0] => Ok(Color::Fail),
            other => Err(SnakeError::UnknownColor(other)),
        }
    }
}
