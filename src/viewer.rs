//! Standalone window backed by winit.
//!
//! Left-drag orbits, right-drag pans, the scroll wheel zooms, Escape
//! closes the window.
//!
//! ```no_run
//! # use glint::Viewer;
//! Viewer::builder()
//!     .with_title("Demo")
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use std::sync::Arc;

use glam::Vec2;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::{engine::RenderEngine, error::GlintError, options::Options, scene::Scene};

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    options: Option<Options>,
    scene: Option<Scene>,
    title: String,
}

impl ViewerBuilder {
    /// Create a builder with sensible defaults (title "Glint", empty scene,
    /// default options).
    fn new() -> Self {
        Self {
            options: None,
            scene: None,
            title: "Glint".into(),
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Set the scene drawn each frame.
    #[must_use]
    pub fn with_scene(mut self, scene: Scene) -> Self {
        self.scene = Some(scene);
        self
    }

    /// Set the window title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            options: self.options,
            scene: self.scene,
            title: self.title,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A standalone window that renders a scene of instanced primitives.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    options: Option<Options>,
    scene: Option<Scene>,
    title: String,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed.
    ///
    /// # Errors
    ///
    /// Returns [`GlintError::Viewer`] if the event loop cannot be created
    /// or exits with an error.
    pub fn run(self) -> Result<(), GlintError> {
        let event_loop = EventLoop::new().map_err(|e| GlintError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = ViewerApp {
            window: None,
            engine: None,
            options: self.options,
            scene: self.scene,
            title: self.title,
            cursor: Vec2::ZERO,
            left_held: false,
            right_held: false,
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| GlintError::Viewer(e.to_string()))
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// Internal winit application handler.
struct ViewerApp {
    window: Option<Arc<Window>>,
    engine: Option<RenderEngine>,
    options: Option<Options>,
    scene: Option<Scene>,
    title: String,
    cursor: Vec2,
    left_held: bool,
    right_held: bool,
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes().with_title(&self.title);
        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let inner = window.inner_size();
        let options = self.options.take().unwrap_or_default();
        let mut engine = match pollster::block_on(RenderEngine::new(
            window.clone(),
            (inner.width.max(1), inner.height.max(1)),
            options,
        )) {
            Ok(e) => e,
            Err(e) => {
                log::error!("Failed to initialize engine: {e}");
                event_loop.exit();
                return;
            }
        };

        if let Some(scene) = self.scene.take() {
            *engine.scene_mut() = scene;
        }

        window.request_redraw();
        self.window = Some(window);
        self.engine = Some(engine);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        if matches!(event, WindowEvent::CloseRequested) {
            event_loop.exit();
            return;
        }

        // Guard: both window and engine must be initialised.
        if self.window.is_none() || self.engine.is_none() {
            return;
        }

        match event {
            WindowEvent::Resized(size) => {
                if let Some(engine) = &mut self.engine {
                    engine.resize(size.width, size.height);
                }
            }

            WindowEvent::RedrawRequested => {
                if let Some(engine) = &mut self.engine {
                    match engine.render() {
                        Ok(()) => {}
                        Err(wgpu::SurfaceError::Outdated | wgpu::SurfaceError::Lost) => {
                            if let Some(w) = &self.window {
                                let inner = w.inner_size();
                                engine.resize(inner.width, inner.height);
                            }
                        }
                        Err(e) => {
                            log::error!("render error: {e:?}");
                        }
                    }
                }
                if let Some(w) = &self.window {
                    w.request_redraw();
                }
            }

            WindowEvent::MouseInput { button, state, .. } => {
                let pressed = state == ElementState::Pressed;
                match button {
                    MouseButton::Left => self.left_held = pressed,
                    MouseButton::Right => self.right_held = pressed,
                    _ => (),
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                #[allow(clippy::cast_possible_truncation)]
                let pos = Vec2::new(position.x as f32, position.y as f32);
                let delta = pos - self.cursor;
                self.cursor = pos;

                if let Some(engine) = &mut self.engine {
                    if self.left_held {
                        engine.orbit(delta);
                    }
                    if self.right_held {
                        engine.pan(delta);
                    }
                }
                if let Some(w) = &self.window {
                    w.request_redraw();
                }
            }

            WindowEvent::MouseWheel { delta, .. } => {
                #[allow(clippy::cast_possible_truncation)]
                let scroll = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * 0.01,
                };
                if let Some(engine) = &mut self.engine {
                    engine.zoom(scroll);
                }
                if let Some(w) = &self.window {
                    w.request_redraw();
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed {
                    return;
                }
                use winit::keyboard::{KeyCode, PhysicalKey};
                if event.physical_key == PhysicalKey::Code(KeyCode::Escape) {
                    event_loop.exit();
                }
            }

            _ => (),
        }
    }
}
