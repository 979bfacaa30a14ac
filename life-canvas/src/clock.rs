pub const DEFAULT_SPEED: f64 = 0.1;
pub const DEFAULT_THRESHOLD: f64 = 2.0;

/// Throttles generation steps independently of the display refresh rate.
/// Every frame adds `speed`; a step is due once the total reaches
/// `threshold`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameClock {
    speed: f64,
    threshold: f64,
    accumulated: f64,
}

impl FrameClock {
    pub fn new(speed: f64, threshold: f64) -> Self {
        assert!(speed > 0.0 && threshold > 0.0);
        Self {
            speed,
            threshold,
            accumulated: 0.0,
        }
    }

    pub fn accumulated(&self) -> f64 {
        self.accumulated
    }

    /// Advances by one frame. Returns whether a step is due, in which case
    /// the accumulator starts over.
    pub fn tick(&mut self) -> bool {
        self.accumulated += self.speed;
        if self.accumulated >= self.threshold {
            self.accumulated = 0.0;
            true
        } else {
            false
        }
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(DEFAULT_SPEED, DEFAULT_THRESHOLD)
    }
}
