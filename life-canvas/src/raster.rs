use std::mem;

use crate::canvas::{Canvas2d, Rect, Rgba, BLACK, TRANSPARENT};

const LINE_WIDTH: f64 = 1.0;

/// Software `Canvas2d` that paints axis-aligned rectangles into an RGBA
/// frame, row by row, four bytes per pixel.
#[derive(Clone, Debug)]
pub struct RasterCanvas {
    width: u32,
    height: u32,
    frame: Vec<u8>,
    scale: (f64, f64),
    path: Vec<Rect>,
    fill_style: Rgba,
    stroke_style: Rgba,
}

impl RasterCanvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            frame: vec![0; 4 * width as usize * height as usize],
            scale: (1.0, 1.0),
            path: vec![],
            fill_style: BLACK,
            stroke_style: BLACK,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn frame(&self) -> &[u8] {
        &self.frame
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let start = 4 * (y as usize * self.width as usize + x as usize);
        let mut result = TRANSPARENT;
        result.copy_from_slice(&self.frame[start..start + 4]);
        Some(result)
    }

    /// Replaces the frame with a blank one of the new size. Like resizing a
    /// browser canvas, this also resets the drawing state.
    pub fn resize(&mut self, width: u32, height: u32) {
        *self = Self::new(width, height);
    }

    fn to_device(&self, rect: Rect) -> Rect {
        Rect::new(
            rect.x * self.scale.0,
            rect.y * self.scale.1,
            rect.width * self.scale.0,
            rect.height * self.scale.1,
        )
    }

    fn paint(&mut self, rect: Rect, color: Rgba) {
        let device = self.to_device(rect);
        let (x0, x1) = Self::pixel_span(device.x, device.right(), self.width);
        let (y0, y1) = Self::pixel_span(device.y, device.bottom(), self.height);
        for y in y0..y1 {
            let row_start = 4 * (y as usize * self.width as usize);
            let row = &mut self.frame[row_start + 4 * x0 as usize..row_start + 4 * x1 as usize];
            for pixel in row.chunks_exact_mut(4) {
                pixel.copy_from_slice(&color);
            }
        }
    }

    fn pixel_span(start: f64, end: f64, max: u32) -> (u32, u32) {
        let clamp = |val: f64| val.round().clamp(0.0, max as f64) as u32;
        let (start, end) = (clamp(start), clamp(end));
        (start, end.max(start))
    }

    fn stroke_bands(rect: Rect) -> [Rect; 4] {
        let half = LINE_WIDTH / 2.0;
        let inner_height = rect.height - LINE_WIDTH;
        [
            Rect::new(rect.x - half, rect.y - half, rect.width + LINE_WIDTH, LINE_WIDTH),
            Rect::new(rect.x - half, rect.bottom() - half, rect.width + LINE_WIDTH, LINE_WIDTH),
            Rect::new(rect.x - half, rect.y + half, LINE_WIDTH, inner_height),
            Rect::new(rect.right() - half, rect.y + half, LINE_WIDTH, inner_height),
        ]
    }
}

impl Canvas2d for RasterCanvas {
    fn reset_transform(&mut self) {
        self.scale = (1.0, 1.0);
    }

    fn scale(&mut self, x: f64, y: f64) {
        self.scale = (self.scale.0 * x, self.scale.1 * y);
    }

    fn clear_rect(&mut self, rect: Rect) {
        self.paint(rect, TRANSPARENT);
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn rect(&mut self, rect: Rect) {
        self.path.push(rect);
    }

    fn set_fill_style(&mut self, color: Rgba) {
        self.fill_style = color;
    }

    fn set_stroke_style(&mut self, color: Rgba) {
        self.stroke_style = color;
    }

    fn fill(&mut self) {
        let path = mem::take(&mut self.path);
        for &rect in &path {
            self.paint(rect, self.fill_style);
        }
        self.path = path;
    }

    fn stroke(&mut self) {
        let path = mem::take(&mut self.path);
        for &rect in &path {
            for band in Self::stroke_bands(rect) {
                self.paint(band, self.stroke_style);
            }
        }
        self.path = path;
    }
}
