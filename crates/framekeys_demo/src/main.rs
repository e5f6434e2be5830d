//! framekeys demo -- logs per-frame input edges from a live window.
//!
//! winit drives the event loop via `ApplicationHandler`. Window events are
//! translated and pushed through an `EventDispatcher` as they arrive; the
//! attached tracker only buffers them. Each `RedrawRequested` is one frame:
//!
//!   1. `update()` -- commit buffered presses/releases
//!   2. query edges and log what changed
//!
//! Escape closes the window.

use std::path::Path;
use std::rc::Rc;
use std::sync::Arc;

use framekeys_core::{AttachedInput, EventDispatcher, Key};
use framekeys_platform::{
    create_window, load_config_from_path, translate_window_event, PlatformConfig, WindowHost,
};
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

const CONFIG_PATH: &str = "assets/framekeys.json";

struct DemoState {
    window: Arc<Window>,
    dispatcher: EventDispatcher,
    input: AttachedInput,
    frame_count: u64,
}

impl DemoState {
    fn new(window: Arc<Window>) -> Self {
        let dispatcher = EventDispatcher::new();
        let host = Rc::new(WindowHost::new(Arc::clone(&window)));
        let input = AttachedInput::attach(&dispatcher, host);
        Self {
            window,
            dispatcher,
            input,
            frame_count: 0,
        }
    }

    /// Returns false when the demo should exit.
    fn frame(&mut self) -> bool {
        self.frame_count += 1;
        run_frame(&self.input, self.frame_count)
    }
}

/// One frame boundary: commit buffered input, then log its edges.
/// Returns false once Escape has been pressed.
fn run_frame(input: &AttachedInput, frame: u64) -> bool {
    input.update();

    let snapshot = input.snapshot();
    if !snapshot.pressed.is_empty() {
        log::info!("Frame {frame}: pressed {:?}", snapshot.pressed);
    }
    if !snapshot.released.is_empty() {
        log::info!("Frame {frame}: released {:?}", snapshot.released);
    }
    if log::log_enabled!(log::Level::Trace) {
        match serde_json::to_string(&snapshot) {
            Ok(json) => log::trace!("Frame {frame}: {json}"),
            Err(err) => log::warn!("Snapshot serialization failed: {err}"),
        }
    }

    !input.is_just_pressed(Key::Escape)
}

struct App {
    config: PlatformConfig,
    state: Option<DemoState>,
}

impl App {
    fn new(config: PlatformConfig) -> Self {
        Self {
            config,
            state: None,
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }
        let window = match create_window(event_loop, &self.config) {
            Ok(window) => window,
            Err(err) => {
                log::error!("{err}");
                event_loop.exit();
                return;
            }
        };
        log::info!(
            "Window created: {}x{}",
            self.config.width,
            self.config.height
        );
        self.state = Some(DemoState::new(window));
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(state) = &self.state {
            state.window.request_redraw();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let state = match self.state.as_mut() {
            Some(s) => s,
            None => return,
        };

        if let Some(input_event) = translate_window_event(&event) {
            state.dispatcher.dispatch(&input_event);
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested, exiting.");
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                log::info!(
                    "Resized to {}x{}",
                    physical_size.width,
                    physical_size.height
                );
            }

            WindowEvent::RedrawRequested => {
                if !state.frame() {
                    log::info!("Escape pressed, exiting.");
                    event_loop.exit();
                }
            }

            _ => {}
        }
    }
}

/// Where the demo config came from. Resolved before the logger exists (the
/// log filter lives in the config), so it is reported once logging is up.
#[derive(Debug, PartialEq)]
enum ConfigSource {
    File,
    Missing,
    Invalid(String),
}

/// Loads the demo config from `path`, falling back to defaults.
fn load_config(path: &Path) -> (PlatformConfig, ConfigSource) {
    if !path.exists() {
        return (PlatformConfig::default(), ConfigSource::Missing);
    }
    match load_config_from_path(path) {
        Ok(config) => (config, ConfigSource::File),
        Err(err) => (PlatformConfig::default(), ConfigSource::Invalid(err)),
    }
}

fn report_config_source(path: &Path, source: ConfigSource) {
    match source {
        ConfigSource::File => log::debug!("Using config {}", path.display()),
        ConfigSource::Missing => log::info!(
            "No config at {} (relative to {:?}); using defaults",
            path.display(),
            std::env::current_dir().unwrap_or_default()
        ),
        ConfigSource::Invalid(err) => log::warn!("{err}; using default config"),
    }
}

fn main() {
    let config_path = Path::new(CONFIG_PATH);
    let (config, source) = load_config(config_path);
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_filter.as_str()),
    )
    .init();

    log::info!("framekeys demo starting...");
    report_config_source(config_path, source);

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(err) => {
            log::error!("Failed to create event loop: {err}");
            std::process::exit(1);
        }
    };
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config);
    if let Err(err) = event_loop.run_app(&mut app) {
        log::error!("Event loop error: {err}");
    }
}
