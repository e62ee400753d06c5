/// Remembers when the previous frame ran and hands out the gap.
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    last_frame: f64,
}

impl FrameClock {
    pub fn new(now: f64) -> Self {
        Self { last_frame: now }
    }

    /// Whole milliseconds since the previous call.
    pub fn advance(&mut self, now: f64) -> u32 {
        let delta = now - self.last_frame;
        self.last_frame = now;
        if delta.is_nan() || delta <= 0.0 {
            0
        } else {
            // `as` saturates for values past u32::MAX.
            delta as u32
        }
    }
}
