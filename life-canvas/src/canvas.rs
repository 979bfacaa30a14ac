use life_grid::Cell;

pub type Rgba = [u8; 4];

pub const BLACK: Rgba = [0x00, 0x00, 0x00, 0xff];
pub const WHITE: Rgba = [0xff, 0xff, 0xff, 0xff];
pub const TRANSPARENT: Rgba = [0x00, 0x00, 0x00, 0x00];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// Immediate-mode 2D drawing context, in the manner of a browser canvas.
/// Coordinates are user units, mapped to device pixels by the current
/// transform.
pub trait Canvas2d {
    fn reset_transform(&mut self);
    fn scale(&mut self, x: f64, y: f64);
    fn clear_rect(&mut self, rect: Rect);
    fn begin_path(&mut self);
    fn rect(&mut self, rect: Rect);
    fn set_fill_style(&mut self, color: Rgba);
    fn set_stroke_style(&mut self, color: Rgba);
    fn fill(&mut self);
    fn stroke(&mut self);
}

/// Fill and stroke colors for the two cell states.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub live_fill: Rgba,
    pub live_stroke: Rgba,
    pub dead_fill: Rgba,
    pub dead_stroke: Rgba,
}

impl Palette {
    pub fn colors(&self, alive: bool) -> (Rgba, Rgba) {
        if alive {
            (self.live_fill, self.live_stroke)
        } else {
            (self.dead_fill, self.dead_stroke)
        }
    }

    pub fn draw_cell<C: Canvas2d + ?Sized>(&self, canvas: &mut C, cell: &Cell) {
        let (fill, stroke) = self.colors(cell.alive);
        canvas.begin_path();
        canvas.rect(Rect::new(cell.x, cell.y, cell.size, cell.size));
        canvas.set_fill_style(fill);
        canvas.set_stroke_style(stroke);
        canvas.fill();
        canvas.stroke();
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            live_fill: BLACK,
            live_stroke: WHITE,
            dead_fill: WHITE,
            dead_stroke: BLACK,
        }
    }
}
