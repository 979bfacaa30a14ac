use crate::canvas::{Canvas2d, Rect, Rgba};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawCommand {
    ResetTransform,
    Scale(f64, f64),
    ClearRect(Rect),
    BeginPath,
    Rect(Rect),
    FillStyle(Rgba),
    StrokeStyle(Rgba),
    Fill,
    Stroke,
}

/// `Canvas2d` that only remembers what it was asked to draw.
#[derive(Clone, Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl Canvas2d for RecordingCanvas {
    fn reset_transform(&mut self) {
        self.commands.push(DrawCommand::ResetTransform);
    }

    fn scale(&mut self, x: f64, y: f64) {
        self.commands.push(DrawCommand::Scale(x, y));
    }

    fn clear_rect(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::ClearRect(rect));
    }

    fn begin_path(&mut self) {
        self.commands.push(DrawCommand::BeginPath);
    }

    fn rect(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::Rect(rect));
    }

    fn set_fill_style(&mut self, color: Rgba) {
        self.commands.push(DrawCommand::FillStyle(color));
    }

    fn set_stroke_style(&mut self, color: Rgba) {
        self.commands.push(DrawCommand::StrokeStyle(color));
    }

    fn fill(&mut self) {
        self.commands.push(DrawCommand::Fill);
    }

    fn stroke(&mut self) {
        self.commands.push(DrawCommand::Stroke);
    }
}
