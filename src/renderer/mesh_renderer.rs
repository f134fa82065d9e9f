//! Solid and outline draw passes over the shared instanced vertex stage.
//!
//! One shader module provides the vertex entry point `vs_main` and the two
//! fragment entry points `fs_ambient` (solid pass) and `fs_outline`
//! (outline pass). The host picks the stage by binding the corresponding
//! pipeline; there is no runtime branch inside the shaders.

use rustc_hash::FxHashMap;

use crate::gpu::render_context::RenderContext;
use crate::gpu::shader_composer::ShaderComposer;
use crate::mesh::{primitives, Mesh, MeshKind, Vertex};
use crate::options::{GeometryOptions, OutlineOptions};
use crate::renderer::instance::Instance;
use crate::renderer::pipeline_util;
use crate::scene::Scene;

/// Create one of the two mesh pipelines over the shared shader module.
fn create_pipeline(
    context: &RenderContext,
    label: &str,
    shader: &wgpu::ShaderModule,
    camera_layout: &wgpu::BindGroupLayout,
    fragment_entry: &str,
    topology: wgpu::PrimitiveTopology,
    depth_write_enabled: bool,
) -> wgpu::RenderPipeline {
    let pipeline_layout =
        context
            .device
            .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some(&format!("{label} Layout")),
                bind_group_layouts: &[camera_layout],
                push_constant_ranges: &[],
            });

    context
        .device
        .create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(label),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: shader,
                entry_point: Some("vs_main"),
                buffers: &[Vertex::buffer_layout(), Instance::buffer_layout()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: shader,
                entry_point: Some(fragment_entry),
                targets: &pipeline_util::surface_fragment_targets(context.format()),
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: Some(wgpu::Face::Back),
                ..Default::default()
            },
            depth_stencil: Some(pipeline_util::depth_stencil_state(depth_write_enabled)),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        })
}

/// Owns the two pipelines and the GPU-resident primitive meshes.
pub struct MeshRenderer {
    solid_pipeline: wgpu::RenderPipeline,
    outline_pipeline: wgpu::RenderPipeline,
    meshes: FxHashMap<MeshKind, Mesh>,
}

impl MeshRenderer {
    /// Build pipelines and upload the primitive meshes.
    #[must_use]
    pub fn new(
        context: &RenderContext,
        camera_layout: &wgpu::BindGroupLayout,
        shader_composer: &mut ShaderComposer,
        geometry: &GeometryOptions,
    ) -> Self {
        let shader = shader_composer.compose(
            &context.device,
            "Mesh Shader",
            include_str!("../../assets/shaders/raster/mesh.wgsl"),
            "raster/mesh.wgsl",
        );

        let solid_pipeline = create_pipeline(
            context,
            "Solid Pipeline",
            &shader,
            camera_layout,
            "fs_ambient",
            wgpu::PrimitiveTopology::TriangleList,
            true,
        );
        let outline_pipeline = create_pipeline(
            context,
            "Outline Pipeline",
            &shader,
            camera_layout,
            "fs_outline",
            wgpu::PrimitiveTopology::LineList,
            false,
        );

        let capacity = geometry.instance_capacity;
        let mut meshes = FxHashMap::default();
        let _ = meshes.insert(
            MeshKind::Cube,
            Mesh::new(&context.device, "Cube", &primitives::cube(), capacity),
        );
        let _ = meshes.insert(
            MeshKind::Tetrahedron,
            Mesh::new(
                &context.device,
                "Tetrahedron",
                &primitives::tetrahedron(),
                capacity,
            ),
        );
        let _ = meshes.insert(
            MeshKind::Sphere,
            Mesh::new(
                &context.device,
                "Sphere",
                &primitives::sphere(geometry.sphere_divisions),
                capacity,
            ),
        );

        Self {
            solid_pipeline,
            outline_pipeline,
            meshes,
        }
    }

    /// Gather instances from the scene and rewrite the per-mesh instance
    /// buffers. Must run before the passes are recorded; instance data is
    /// read-only for the rest of the frame.
    ///
    /// Edge instances are only uploaded when `outline` is `Some`; with the
    /// outline pass disabled the stale edge buffers are never drawn.
    pub fn prepare(
        &mut self,
        context: &RenderContext,
        scene: &Scene,
        outline: Option<&OutlineOptions>,
    ) {
        for kind in MeshKind::ALL {
            let Some(mesh) = self.meshes.get_mut(&kind) else {
                continue;
            };
            let solid = scene.instances_for(kind);
            let _ = mesh
                .instances
                .write(&context.device, &context.queue, &solid);

            if let Some(outline) = outline {
                let expanded = scene.outline_instances_for(kind, outline);
                let _ = mesh
                    .edge_instances
                    .write(&context.device, &context.queue, &expanded);
            }
        }
    }

    /// Record the solid pass: clears color and depth, draws every mesh's
    /// instances with the ambient fragment stage.
    pub fn solid_pass(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        color_view: &wgpu::TextureView,
        depth_view: &wgpu::TextureView,
        camera_bind_group: &wgpu::BindGroup,
        clear_color: wgpu::Color,
    ) {
        let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Solid Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: color_view,
                depth_slice: None,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(clear_color),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: depth_view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            occlusion_query_set: None,
            timestamp_writes: None,
        });

        render_pass.set_pipeline(&self.solid_pipeline);
        render_pass.set_bind_group(0, camera_bind_group, &[]);

        for kind in MeshKind::ALL {
            let Some(mesh) = self.meshes.get(&kind) else {
                continue;
            };
            if mesh.instances.is_empty() {
                continue;
            }
            render_pass.set_vertex_buffer(0, mesh.vertex_buffer().slice(..));
            render_pass.set_vertex_buffer(1, mesh.instances.buffer().slice(..));
            render_pass.set_index_buffer(mesh.index_buffer().slice(..), wgpu::IndexFormat::Uint16);
            render_pass.draw_indexed(0..mesh.index_count, 0, 0..mesh.instances.count() as u32);
        }
    }

    /// Record the outline pass: loads the solid pass's output, draws each
    /// mesh's edge list with the flat outline fragment stage. Depth is
    /// tested but not written.
    pub fn outline_pass(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        color_view: &wgpu::TextureView,
        depth_view: &wgpu::TextureView,
        camera_bind_group: &wgpu::BindGroup,
    ) {
        let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Outline Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: color_view,
                depth_slice: None,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: depth_view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            occlusion_query_set: None,
            timestamp_writes: None,
        });

        render_pass.set_pipeline(&self.outline_pipeline);
        render_pass.set_bind_group(0, camera_bind_group, &[]);

        for kind in MeshKind::ALL {
            let Some(mesh) = self.meshes.get(&kind) else {
                continue;
            };
            if mesh.edge_instances.is_empty() {
                continue;
            }
            render_pass.set_vertex_buffer(0, mesh.vertex_buffer().slice(..));
            render_pass.set_vertex_buffer(1, mesh.edge_instances.buffer().slice(..));
            render_pass
                .set_index_buffer(mesh.edge_index_buffer().slice(..), wgpu::IndexFormat::Uint16);
            render_pass.draw_indexed(
                0..mesh.edge_index_count,
                0,
                0..mesh.edge_instances.count() as u32,
            );
        }
    }
}
