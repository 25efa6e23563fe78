use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    dpi::{LogicalSize, PhysicalSize},
    event::{KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowAttributes, WindowId},
};

use crate::{
    config::ViewerConfig,
    context::ContextManagementEngine,
    controller::KeyController,
    error::{Result, ViewerError},
    gfx::{rendering::RenderEngine, scene::Scene},
    performance::FrameClock,
};

const METRICS_LOG_INTERVAL: u64 = 600;

/// Windowed viewer: owns the event loop and everything the frame loop touches
pub struct ViewerApp {
    event_loop: Option<EventLoop<()>>,
    app_state: AppState,
}

struct AppState {
    config: ViewerConfig,
    window: Option<Arc<Window>>,
    render_engine: Option<RenderEngine>,
    scene: Scene,
    context: ContextManagementEngine,
    controller: KeyController,
    clock: FrameClock,
    /// Set when startup fails inside the event loop; reported by [`ViewerApp::run`]
    fatal: Option<ViewerError>,
}

impl ViewerApp {
    /// Builds the demo scene and the event loop; no window exists until the loop starts
    pub fn new(config: ViewerConfig) -> Result<Self> {
        let event_loop = EventLoop::new()?;

        let scene = Scene::demo(&config)?;
        let context = ContextManagementEngine::new(config.width, config.height, &config.camera);
        let controller = KeyController::new(config.key_bindings.clone());
        let clock = FrameClock::new(config.max_frame_delta);

        Ok(Self {
            event_loop: Some(event_loop),
            app_state: AppState {
                config,
                window: None,
                render_engine: None,
                scene,
                context,
                controller,
                clock,
                fatal: None,
            },
        })
    }

    /// Runs the event loop until the window closes
    pub fn run(mut self) -> Result<()> {
        let Some(event_loop) = self.event_loop.take() else {
            return Ok(());
        };
        event_loop.set_control_flow(ControlFlow::Poll);
        event_loop.run_app(&mut self.app_state)?;

        match self.app_state.fatal.take() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

/// Creates a [`ViewerApp`] from `config` and runs it
pub fn run(config: ViewerConfig) -> Result<()> {
    ViewerApp::new(config)?.run()
}

impl AppState {
    fn init_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let window = event_loop.create_window(
            WindowAttributes::default()
                .with_title(self.config.title.as_str())
                .with_inner_size(LogicalSize::new(self.config.width, self.config.height)),
        )?;
        let window_handle = Arc::new(window);
        self.window = Some(window_handle.clone());

        let (width, height) = window_handle.inner_size().into();
        let settings = self.config.render.clone();
        let mut renderer = pollster::block_on(async move {
            RenderEngine::new(window_handle, width, height, &settings).await
        })?;
        renderer.upload_geometries(self.scene.geometries());

        self.context.resize(width, height);
        self.render_engine = Some(renderer);
        Ok(())
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: ViewerError) {
        log::error!("{error}");
        self.fatal = Some(error);
        event_loop.exit();
    }
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Err(error) = self.init_window(event_loop) {
            self.fail(event_loop, error);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(render_engine) = self.render_engine.as_mut() else {
            return;
        };

        match event {
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(key_code),
                        state,
                        repeat,
                        ..
                    },
                ..
            } => {
                if key_code == KeyCode::Escape {
                    event_loop.exit();
                    return;
                }
                self.controller
                    .on_key_event(key_code, state.is_pressed(), repeat);
            }
            WindowEvent::Focused(false) => {
                // Key releases are not delivered while unfocused
                self.controller.release_all();
            }
            WindowEvent::Focused(true) => self.clock.reset(),
            WindowEvent::Resized(PhysicalSize { width, height }) => {
                self.context.resize(width, height);
                render_engine.resize(width, height);
            }
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::RedrawRequested => {
                let delta = self.clock.tick();

                if let Err(e) =
                    self.controller
                        .process_frame(&mut self.context, self.scene.compound_mut(), delta)
                {
                    log::error!("Failed to apply key input: {e}");
                }

                if let Some(enabled) = self.context.take_wireframe_change() {
                    self.scene.set_wireframe(enabled);
                }

                if let Err(e) = render_engine.render_frame(&self.scene, self.context.camera()) {
                    log::error!("Failed to render frame: {e}");
                }

                if self.clock.frames() % METRICS_LOG_INTERVAL == 0 {
                    let metrics = self.clock.metrics();
                    log::debug!(
                        "{:.1} fps ({:.2} ms, min {:.2}, max {:.2})",
                        metrics.fps,
                        metrics.frame_time_ms,
                        metrics.min_frame_time_ms,
                        metrics.max_frame_time_ms
                    );
                }
            }
            _ => (),
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(ref window) = self.window {
            window.request_redraw();
        }
    }
}
