//! Frame orchestration: owns the GPU context, camera, renderer, and scene.
//!
//! A frame is two passes over the same color and depth targets: the solid
//! pass clears and draws triangles with the ambient fragment stage, then
//! the outline pass loads that output and draws edge lists on top.

use glam::Vec2;

use crate::camera::CameraController;
use crate::error::GlintError;
use crate::gpu::render_context::RenderContext;
use crate::gpu::shader_composer::ShaderComposer;
use crate::gpu::texture::DepthTexture;
use crate::options::Options;
use crate::renderer::MeshRenderer;
use crate::scene::Scene;

/// Top-level render engine. Create one per window surface.
pub struct RenderEngine {
    context: RenderContext,
    camera: CameraController,
    mesh_renderer: MeshRenderer,
    depth: DepthTexture,
    scene: Scene,
    options: Options,
}

impl RenderEngine {
    /// Initialize the GPU context and all render resources for the given
    /// surface target.
    ///
    /// # Errors
    ///
    /// Returns [`GlintError::Gpu`] if GPU initialization fails.
    pub async fn new(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        initial_size: (u32, u32),
        options: Options,
    ) -> Result<Self, GlintError> {
        let context = RenderContext::new(window, initial_size).await?;
        let camera = CameraController::new(&context, &options.camera);

        let mut shader_composer = ShaderComposer::new();
        let mesh_renderer = MeshRenderer::new(
            &context,
            &camera.layout,
            &mut shader_composer,
            &options.geometry,
        );
        let depth = DepthTexture::new(&context.device, context.config.width, context.config.height);

        log::info!(
            "engine initialized: {}x{} {:?}",
            context.config.width,
            context.config.height,
            context.format()
        );

        Ok(Self {
            context,
            camera,
            mesh_renderer,
            depth,
            scene: Scene::new(),
            options,
        })
    }

    /// Handle a window resize: reconfigure the surface, update the camera
    /// aspect, and recreate the depth target.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.context.resize(width, height);
        self.camera.resize(width, height);
        self.depth = DepthTexture::new(&self.context.device, width, height);
    }

    /// Render one frame.
    ///
    /// # Errors
    ///
    /// Returns [`wgpu::SurfaceError`] if the swapchain texture cannot be
    /// acquired; the caller decides whether to resize or bail.
    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        self.camera.update_gpu(&self.context.queue);
        self.mesh_renderer
            .prepare(&self.context, &self.scene, self.options.active_outline());

        let frame = self.context.get_next_frame()?;
        let color_view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self.context.create_encoder();

        let [r, g, b] = self.options.display.background;
        self.mesh_renderer.solid_pass(
            &mut encoder,
            &color_view,
            &self.depth.view,
            &self.camera.bind_group,
            wgpu::Color {
                r: f64::from(r),
                g: f64::from(g),
                b: f64::from(b),
                a: 1.0,
            },
        );

        if self.options.display.show_outline {
            self.mesh_renderer.outline_pass(
                &mut encoder,
                &color_view,
                &self.depth.view,
                &self.camera.bind_group,
            );
        }

        self.context.submit(encoder);
        frame.present();
        Ok(())
    }

    /// Rotate the camera around its target by a screen-space delta.
    pub fn orbit(&mut self, delta: Vec2) {
        self.camera.orbit.orbit(delta);
    }

    /// Translate the camera target along its view plane.
    pub fn pan(&mut self, delta: Vec2) {
        self.camera.orbit.pan(delta);
    }

    /// Zoom toward or away from the camera target.
    pub fn zoom(&mut self, scroll: f32) {
        self.camera.orbit.zoom(scroll);
    }

    /// The scene drawn each frame.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Mutable scene access; safe to mutate between frames.
    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    /// Current options.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Mutable options access. Display and outline changes take effect next
    /// frame; camera and geometry options only apply at engine creation.
    pub fn options_mut(&mut self) -> &mut Options {
        &mut self.options
    }
}
