#![deny(clippy::all)]
#![forbid(unsafe_code)]

mod automaton;
mod canvas;
mod clock;
mod config;
mod error;
mod host;
mod raster;
mod recording;

pub use automaton::{CellularAutomaton, LoopState};
pub use canvas::{Canvas2d, Palette, Rect, Rgba, BLACK, TRANSPARENT, WHITE};
pub use clock::{FrameClock, DEFAULT_SPEED, DEFAULT_THRESHOLD};
pub use config::AutomatonConfig;
pub use error::Error;
pub use host::{FrameId, Host, ListenerId};
pub use raster::RasterCanvas;
pub use recording::{DrawCommand, RecordingCanvas};
