/// Number of lattice columns, whatever the viewport width.
pub const COLUMNS: u32 = 40;

/// Viewport metrics and the lattice dimensions derived from them. Recomputed
/// as a whole on every resize.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub pixel_ratio: f64,
    pub columns: u32,
    pub cell_size: f64,
    pub rows: u32,
}

impl Viewport {
    pub fn new(width: f64, height: f64, pixel_ratio: f64) -> Self {
        let cell_size = width / COLUMNS as f64;
        let rows = if cell_size > 0.0 && height > 0.0 {
            (height / cell_size).floor() as u32
        } else {
            0
        };
        Self {
            width,
            height,
            pixel_ratio,
            columns: COLUMNS,
            cell_size,
            rows,
        }
    }

    pub fn num_cells(&self) -> usize {
        self.columns as usize * self.rows as usize
    }

    /// Size of the backing pixel buffer in device pixels.
    pub fn buffer_size(&self) -> (u32, u32) {
        (
            (self.width * self.pixel_ratio) as u32,
            (self.height * self.pixel_ratio) as u32,
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }
}
