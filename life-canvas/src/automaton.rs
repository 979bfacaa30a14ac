use life_grid::{Generation, GridManager, Random, RuleSet, Viewport};
use log::{debug, info, trace};

use crate::canvas::{Canvas2d, Palette, Rect};
use crate::clock::FrameClock;
use crate::config::AutomatonConfig;
use crate::host::{FrameId, Host, ListenerId};
use crate::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    /// Constructed, first frame requested but not yet delivered.
    Idle,
    Accumulating,
    Disposed,
}

/// Life on a torus, drawn into a host's 2D context one generation per
/// elapsed frame budget.
#[derive(Debug)]
pub struct CellularAutomaton {
    grid: GridManager,
    rules: RuleSet,
    clock: FrameClock,
    palette: Palette,
    state: LoopState,
    pending_frame: Option<FrameId>,
    resize_listener: Option<ListenerId>,
}

impl CellularAutomaton {
    pub fn new<H: Host>(config: AutomatonConfig, host: &mut H) -> Result<Self, Error> {
        Self::with_random(config, Random::new(), host)
    }

    /// Sizes and seeds the lattice, subscribes to resizes and requests the
    /// first frame. Fails if the host has no drawing context.
    pub fn with_random<H: Host>(
        config: AutomatonConfig,
        rand: Random,
        host: &mut H,
    ) -> Result<Self, Error> {
        host.context().ok_or(Error::ContextUnavailable)?;

        let mut result = Self {
            grid: GridManager::new(config.seeding, rand),
            rules: RuleSet::CONWAY,
            clock: FrameClock::new(config.speed, config.threshold),
            palette: config.palette,
            state: LoopState::Idle,
            pending_frame: None,
            resize_listener: None,
        };
        result.configure(host)?;
        result.resize_listener = Some(host.subscribe_resize());
        result.pending_frame = Some(host.request_frame());
        info!(
            "Started {} automaton on {}x{} lattice, seeding {:?}",
            result.rules,
            result.viewport().columns,
            result.viewport().rows,
            result.grid.seeding()
        );
        Ok(result)
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn viewport(&self) -> &Viewport {
        self.grid.viewport()
    }

    pub fn generation(&self) -> &Generation {
        self.grid.generation()
    }

    pub fn pending_frame(&self) -> Option<FrameId> {
        self.pending_frame
    }

    pub fn is_subscribed(&self) -> bool {
        self.resize_listener.is_some()
    }

    /// Resize notification. Rebuilds the lattice for the host's new metrics.
    pub fn on_resize<H: Host>(&mut self, host: &mut H) -> Result<(), Error> {
        if self.state == LoopState::Disposed {
            return Ok(());
        }
        self.configure(host)
    }

    /// Frame callback. Returns whether a generation step ran. Callbacks for
    /// frames that are no longer pending, or that arrive after disposal, do
    /// nothing.
    pub fn on_frame<H: Host>(&mut self, frame: FrameId, host: &mut H) -> Result<bool, Error> {
        if self.state == LoopState::Disposed || self.pending_frame != Some(frame) {
            trace!("Ignoring frame {:?}", frame);
            return Ok(false);
        }
        self.pending_frame = None;
        self.state = LoopState::Accumulating;

        let stepped = self.clock.tick();
        if stepped {
            self.step(host)?;
        }
        self.pending_frame = Some(host.request_frame());
        Ok(stepped)
    }

    /// Draws the current generation and replaces it with its successor.
    pub fn step<H: Host>(&mut self, host: &mut H) -> Result<(), Error> {
        let viewport = *self.grid.viewport();
        let canvas = host.context().ok_or(Error::ContextUnavailable)?;

        canvas.reset_transform();
        canvas.scale(viewport.pixel_ratio, viewport.pixel_ratio);
        canvas.clear_rect(Rect::new(0.0, 0.0, viewport.width, viewport.height));

        let palette = &self.palette;
        let next = self
            .grid
            .generation()
            .next_with(&self.rules, |cell| palette.draw_cell(canvas, cell));
        self.grid.commit(next);

        debug!(
            "Generation {}, population {}",
            self.generation().number(),
            self.generation().population()
        );
        Ok(())
    }

    /// Releases the resize subscription and cancels the pending frame.
    /// Disposing twice is harmless.
    pub fn dispose<H: Host>(&mut self, host: &mut H) {
        if self.state == LoopState::Disposed {
            return;
        }
        if let Some(frame) = self.pending_frame.take() {
            host.cancel_frame(frame);
        }
        if let Some(listener) = self.resize_listener.take() {
            host.unsubscribe_resize(listener);
        }
        self.state = LoopState::Disposed;
        info!("Disposed automaton at generation {}", self.generation().number());
    }

    fn configure<H: Host>(&mut self, host: &mut H) -> Result<(), Error> {
        let (width, height) = host.layout_size();
        let pixel_ratio = host.device_pixel_ratio();
        let (buffer_width, buffer_height) =
            self.grid.configure(width, height, pixel_ratio).buffer_size();
        host.set_buffer_size(buffer_width, buffer_height)
    }
}
