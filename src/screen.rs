use crate::color::{Color, Rgb};
use crate::coord::Coord;
use crate::error::SnakeError;

pub const BYTES_PER_PIXEL: usize = 4;

/// Grid of colored cells mirrored into an RGBA byte buffer.
///
/// The buffer layout matches what a canvas `ImageData` expects, so the web
/// front-end can hand it over without conversion.
#[derive(Debug, Clone)]
pub struct Screen {
    width: u32,
    height: u32,
    cells: Vec<Color>,
    pixel_buffer: Vec<u8>,
}

impl Screen {
    /// Dimensions must already be bounded by [`GameConfig::validate`](crate::GameConfig::validate).
    pub(crate) fn new(width: u32, height: u32) -> Self {
        let pixel_count = width as usize * height as usize;
        let mut screen = Self {
            width,
            height,
            cells: vec![Color::Background; pixel_count],
            // Alpha stays at 255 forever; only RGB is rewritten.
            pixel_buffer: vec![255u8; pixel_count * BYTES_PER_PIXEL],
        };
        screen.clear();
        screen
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA bytes, row-major.
    pub fn pixels(&self) -> &[u8] {
        &self.pixel_buffer
    }

    pub fn clear(&mut self) {
        for i in 0..self.cells.len() {
            self.write_cell(i, Color::Background);
        }
    }

    pub fn contains(&self, coord: &Coord) -> bool {
        coord.x >= 0 && coord.y >= 0 && coord.x < self.width as i32 && coord.y < self.height as i32
    }

    /// Returns `false` and leaves the screen untouched for off-board coords.
    pub fn set_color_at(&mut self, coord: &Coord, color: Color) -> bool {
        match self.cell_index(coord) {
            Some(i) => {
                self.write_cell(i, color);
                true
            }
            None => false,
        }
    }

    pub fn color_at(&self, coord: &Coord) -> Option<Color> {
        self.cell_index(coord).map(|i| self.cells[i])
    }

    /// Decode the color straight from the RGBA buffer.
    pub fn pixel_color_at(&self, coord: &Coord) -> Result<Color, SnakeError> {
        let i = self
            .cell_index(coord)
            .ok_or(SnakeError::OffScreen(coord.x, coord.y))?
            * BYTES_PER_PIXEL;
        let rgb: Rgb = [
            self.pixel_buffer[i],
            self.pixel_buffer[i + 1],
            self.pixel_buffer[i + 2],
        ];
        Color::try_from(rgb)
    }

    /// Paint the outermost ring of cells.
    pub fn set_color_at_edges(&mut self, color: Color) {
        let max_x = self.width as i32 - 1;
        let max_y = self.height as i32 - 1;
        let edges: Vec<Coord> = self
            .iter_coords()
            .filter(|c| c.x == 0 || c.y == 0 || c.x == max_x || c.y == max_y)
            .collect();
        for coord in edges {
            self.set_color_at(&coord, color);
        }
    }

    pub fn iter_coords(&self) -> impl Iterator<Item = Coord> {
        let width = self.width as i32;
        let height = self.height as i32;
        (0..height).flat_map(move |y| (0..width).map(move |x| Coord::new(x, y)))
    }

    pub fn iter_pixels(&self) -> impl Iterator<Item = (Color, Coord)> + '_ {
        self.cells.iter().copied().zip(self.iter_coords())
    }

    fn cell_index(&self, coord: &Coord) -> Option<usize> {
        if !self.contains(coord) {
            return None;
        }
        Some(coord.y as usize * self.width as usize + coord.x as usize)
    }

    fn write_cell(&mut self, i: usize, color: Color) {
        self.cells[i] = color;
        let offset = i * BYTES_PER_PIXEL;
        self.pixel_buffer[offset..offset + 3].copy_from_slice(&Rgb::from(color));
    }
}
