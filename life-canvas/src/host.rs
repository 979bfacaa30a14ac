use crate::canvas::Canvas2d;
use crate::Error;

/// Token for one requested frame callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameId(pub u64);

/// Token for one resize subscription.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// The environment an automaton draws into: a surface with a 2D context,
/// its metrics, frame scheduling and resize notifications.
///
/// A host delivers a frame callback by passing the `FrameId` it handed out
/// to `CellularAutomaton::on_frame`, and a resize notification by calling
/// `CellularAutomaton::on_resize` while a listener is subscribed.
pub trait Host {
    type Canvas: Canvas2d;

    /// Layout size of the surface in logical pixels.
    fn layout_size(&self) -> (f64, f64);
    fn device_pixel_ratio(&self) -> f64;
    fn set_buffer_size(&mut self, width: u32, height: u32) -> Result<(), Error>;
    fn context(&mut self) -> Option<&mut Self::Canvas>;

    fn request_frame(&mut self) -> FrameId;
    fn cancel_frame(&mut self, frame: FrameId);

    fn subscribe_resize(&mut self) -> ListenerId;
    fn unsubscribe_resize(&mut self, listener: ListenerId);
}
