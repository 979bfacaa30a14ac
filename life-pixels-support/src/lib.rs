#![deny(clippy::all)]
#![forbid(unsafe_code)]

mod window_host;

pub use window_host::WindowHost;

use error_iter::ErrorIter as _;
use life_canvas::{AutomatonConfig, CellularAutomaton};
use log::error;
use std::sync::Arc;
use thiserror::Error;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::error::{EventLoopError, OsError};
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

const WINDOW_TITLE: &str = "Cellular Automaton";
const WINDOW_WIDTH: f64 = 800.0;
const WINDOW_HEIGHT: f64 = 600.0;

#[derive(Debug, Error)]
pub enum Error {
    #[error("automaton failed")]
    Automaton(#[from] life_canvas::Error),
    #[error("rendering failed")]
    Pixels(#[from] pixels::Error),
    #[error("event loop failed")]
    EventLoop(#[from] EventLoopError),
    #[error("window creation failed")]
    Os(#[from] OsError),
}

/// Opens a window and runs the automaton in it until the window is closed.
pub fn animate(config: AutomatonConfig) -> Result<(), Error> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);
    let mut handler = AppEventHandler::new(config);
    event_loop.run_app(&mut handler)?;
    handler.finish()
}

struct App {
    host: WindowHost,
    automaton: CellularAutomaton,
}

impl App {
    fn new(event_loop: &ActiveEventLoop, config: &AutomatonConfig) -> Result<Self, Error> {
        let window = Arc::new(Self::build_window(event_loop)?);
        let mut host = WindowHost::new(window)?;
        let automaton = CellularAutomaton::new(config.clone(), &mut host)?;
        Ok(Self { host, automaton })
    }

    fn build_window(event_loop: &ActiveEventLoop) -> Result<Window, OsError> {
        let window_attributes = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT))
            .with_visible(false);
        event_loop.create_window(window_attributes)
    }

    fn on_create(&self) {
        self.host.window().set_visible(true);
    }

    fn on_resize(&mut self) -> Result<(), Error> {
        if self.host.is_resize_subscribed() {
            self.automaton.on_resize(&mut self.host)?;
        }
        Ok(())
    }

    fn on_redraw(&mut self) -> Result<(), Error> {
        if let Some(frame) = self.host.take_due_frame() {
            self.automaton.on_frame(frame, &mut self.host)?;
        }
        self.host.present()?;
        Ok(())
    }

    fn on_close(&mut self) {
        self.automaton.dispose(&mut self.host);
    }
}

struct AppEventHandler {
    config: AutomatonConfig,
    app: Option<App>,
    error: Option<Error>,
}

impl AppEventHandler {
    fn new(config: AutomatonConfig) -> Self {
        Self {
            config,
            app: None,
            error: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, method_name: &str, err: Error) {
        log_error(method_name, &err);
        if let Some(app) = self.app.as_mut() {
            app.on_close();
        }
        self.error = Some(err);
        event_loop.exit();
    }

    fn finish(self) -> Result<(), Error> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl ApplicationHandler for AppEventHandler {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.app.is_some() {
            return;
        }
        match App::new(event_loop, &self.config) {
            Ok(app) => {
                app.on_create();
                self.app = Some(app);
            }
            Err(err) => self.fail(event_loop, "App::new", err),
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let Some(app) = self.app.as_mut() else {
            return;
        };
        let result = match event {
            WindowEvent::CloseRequested => {
                app.on_close();
                event_loop.exit();
                Ok(())
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state: ElementState::Released,
                        repeat: false,
                        ..
                    },
                ..
            } => {
                match code {
                    KeyCode::Escape | KeyCode::KeyQ | KeyCode::KeyX => {
                        app.on_close();
                        event_loop.exit();
                    }
                    _ => (),
                }
                Ok(())
            }
            WindowEvent::Resized(_) | WindowEvent::ScaleFactorChanged { .. } => {
                app.on_resize().map_err(|err| ("on_resize", err))
            }
            WindowEvent::RedrawRequested => app.on_redraw().map_err(|err| ("on_redraw", err)),
            _ => Ok(()),
        };
        if let Err((method_name, err)) = result {
            self.fail(event_loop, method_name, err);
        }
    }
}

fn log_error<E: std::error::Error + 'static>(method_name: &str, err: &E) {
    error!("{method_name}() failed: {err}");
    for source in err.sources().skip(1) {
        error!("  Caused by: {source}");
    }
}
