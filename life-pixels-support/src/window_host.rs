use life_canvas::{Error, FrameId, Host, ListenerId, RasterCanvas};
use log::trace;
use pixels::wgpu::Color;
use pixels::{Pixels, PixelsBuilder, SurfaceTexture, TextureError};
use std::sync::Arc;
use winit::window::Window;

const BACKGROUND_COLOR: Color = Color::WHITE;

/// A winit window whose `pixels` surface shows what the automaton paints
/// into a `RasterCanvas`. Frames are delivered as redraw requests.
pub struct WindowHost {
    window: Arc<Window>,
    pixels: Pixels<'static>,
    canvas: RasterCanvas,
    next_id: u64,
    pending_frame: Option<FrameId>,
    resize_listener: Option<ListenerId>,
}

impl WindowHost {
    pub fn new(window: Arc<Window>) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let (width, height) = (size.width.max(1), size.height.max(1));
        let surface_texture = SurfaceTexture::new(width, height, window.clone());
        let pixels = PixelsBuilder::new(width, height, surface_texture)
            .clear_color(BACKGROUND_COLOR)
            .build()?;
        Ok(Self {
            window,
            pixels,
            canvas: RasterCanvas::new(0, 0),
            next_id: 0,
            pending_frame: None,
            resize_listener: None,
        })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    /// The frame requested since the last redraw, if it was not cancelled.
    pub fn take_due_frame(&mut self) -> Option<FrameId> {
        self.pending_frame.take()
    }

    pub fn is_resize_subscribed(&self) -> bool {
        self.resize_listener.is_some()
    }

    /// Copies the canvas to the pixel buffer and renders it.
    pub fn present(&mut self) -> Result<(), pixels::Error> {
        if self.canvas.frame().is_empty() {
            return Ok(());
        }
        let frame = self.pixels.frame_mut();
        if frame.len() == self.canvas.frame().len() {
            frame.copy_from_slice(self.canvas.frame());
        }
        self.pixels.render()
    }

    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    fn resize_pixels(&mut self, width: u32, height: u32) -> Result<(), TextureError> {
        let surface = self.window.inner_size();
        self.pixels
            .resize_surface(surface.width.max(1), surface.height.max(1))?;
        self.pixels.resize_buffer(width, height)
    }
}

impl Host for WindowHost {
    type Canvas = RasterCanvas;

    fn layout_size(&self) -> (f64, f64) {
        let size = self
            .window
            .inner_size()
            .to_logical::<f64>(self.window.scale_factor());
        (size.width, size.height)
    }

    fn device_pixel_ratio(&self) -> f64 {
        self.window.scale_factor()
    }

    fn set_buffer_size(&mut self, width: u32, height: u32) -> Result<(), Error> {
        self.canvas.resize(width, height);
        if width == 0 || height == 0 {
            trace!("Keeping pixels buffer while window is {}x{}", width, height);
            return Ok(());
        }
        self.resize_pixels(width, height)
            .map_err(|err| Error::Surface {
                width,
                height,
                source: Box::new(err),
            })
    }

    fn context(&mut self) -> Option<&mut RasterCanvas> {
        Some(&mut self.canvas)
    }

    fn request_frame(&mut self) -> FrameId {
        let frame = FrameId(self.next_id());
        self.pending_frame = Some(frame);
        self.window.request_redraw();
        frame
    }

    fn cancel_frame(&mut self, frame: FrameId) {
        if self.pending_frame == Some(frame) {
            self.pending_frame = None;
        }
    }

    fn subscribe_resize(&mut self) -> ListenerId {
        let listener = ListenerId(self.next_id());
        self.resize_listener = Some(listener);
        listener
    }

    fn unsubscribe_resize(&mut self, listener: ListenerId) {
        if self.resize_listener == Some(listener) {
            self.resize_listener = None;
        }
    }
}
