/// On-screen rectangle that displays the game surface, in the host's pixel
/// units (CSS pixels for a canvas, terminal cells for the CLI).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewportRect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Map a host-space pointer position into game coordinates.
    ///
    /// Fractions are truncated toward zero. Returns `None` when the
    /// rectangle has no area.
    pub fn to_game_space(
        &self,
        px: f64,
        py: f64,
        game_width: u32,
        game_height: u32,
    ) -> Option<(i32, i32)> {
        if !(self.width > 0.0 && self.height > 0.0) {
            return None;
        }
        let x = (px - self.left) / self.width * game_width as f64;
        let y = (py - self.top) / self.height * game_height as f64;
        Some((x as i32, y as i32))
    }
}
