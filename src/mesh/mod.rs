//! Mesh geometry: vertex format, primitive generators, and GPU residency.

/// Cube, tetrahedron, and UV-sphere generators.
pub mod primitives;

use crate::gpu::dynamic_buffer::{DynamicBuffer, TypedBuffer};
use crate::renderer::instance::Instance;

/// Per-vertex geometry record in the mesh's local/object space.
///
/// Attribute order and layout are part of the binding contract: position,
/// color, normal, each three f32s, at shader locations 0-2.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    /// Object-space position.
    pub position: [f32; 3],
    /// Per-vertex base color (the instance color overrides it in shading).
    pub color: [f32; 3],
    /// Object-space surface normal.
    pub normal: [f32; 3],
}

impl Default for Vertex {
    fn default() -> Self {
        Self {
            position: [0.0; 3],
            color: [1.0; 3],
            normal: [0.0; 3],
        }
    }
}

impl Vertex {
    const ATTRIBS: [wgpu::VertexAttribute; 3] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3, 2 => Float32x3];

    /// Construct a vertex from its three attributes.
    #[must_use]
    pub const fn new(position: [f32; 3], color: [f32; 3], normal: [f32; 3]) -> Self {
        Self {
            position,
            color,
            normal,
        }
    }

    /// Vertex buffer layout for the shared vertex stage.
    #[must_use]
    pub const fn buffer_layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }
}

/// The primitive meshes the renderer knows how to draw.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MeshKind {
    /// Unit-ish cube (side length 2, centered at the origin).
    Cube,
    /// Regular tetrahedron inscribed in the unit sphere.
    Tetrahedron,
    /// UV sphere of radius 1.
    Sphere,
}

impl MeshKind {
    /// All mesh kinds, in draw order.
    pub const ALL: [Self; 3] = [Self::Cube, Self::Tetrahedron, Self::Sphere];
}

/// CPU-side mesh geometry: vertices, triangle indices, and line-list edge
/// indices for the outline pass.
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    /// Vertex records.
    pub vertices: Vec<Vertex>,
    /// Triangle-list indices into `vertices`.
    pub indices: Vec<u16>,
    /// Line-list indices into `vertices` (mesh edges).
    pub edge_indices: Vec<u16>,
}

/// A mesh resident on the GPU: static geometry buffers plus growable
/// per-frame instance buffers for the solid and outline passes.
pub struct Mesh {
    vertex_buffer: DynamicBuffer,
    index_buffer: DynamicBuffer,
    edge_index_buffer: DynamicBuffer,
    /// Number of triangle-list indices.
    pub index_count: u32,
    /// Number of line-list edge indices.
    pub edge_index_count: u32,
    /// Per-instance data for the solid pass, rewritten each frame.
    pub instances: TypedBuffer<Instance>,
    /// Per-instance data for the outline pass, rewritten each frame.
    pub edge_instances: TypedBuffer<Instance>,
}

impl Mesh {
    /// Upload mesh geometry and allocate instance buffers with the given
    /// initial capacity (in instances).
    #[must_use]
    pub fn new(
        device: &wgpu::Device,
        label: &str,
        data: &MeshData,
        instance_capacity: usize,
    ) -> Self {
        let vertex_buffer = DynamicBuffer::new_with_data(
            device,
            &format!("{label} Vertex Buffer"),
            &data.vertices,
            wgpu::BufferUsages::VERTEX,
        );
        let index_buffer = DynamicBuffer::new_with_data(
            device,
            &format!("{label} Index Buffer"),
            &data.indices,
            wgpu::BufferUsages::INDEX,
        );
        let edge_index_buffer = DynamicBuffer::new_with_data(
            device,
            &format!("{label} Edge Index Buffer"),
            &data.edge_indices,
            wgpu::BufferUsages::INDEX,
        );
        let instances = TypedBuffer::with_capacity(
            device,
            &format!("{label} Instance Buffer"),
            instance_capacity,
            wgpu::BufferUsages::VERTEX,
        );
        let edge_instances = TypedBuffer::with_capacity(
            device,
            &format!("{label} Edge Instance Buffer"),
            instance_capacity,
            wgpu::BufferUsages::VERTEX,
        );

        Self {
            vertex_buffer,
            index_buffer,
            edge_index_buffer,
            index_count: data.indices.len() as u32,
            edge_index_count: data.edge_indices.len() as u32,
            instances,
            edge_instances,
        }
    }

    /// The shared vertex buffer.
    pub fn vertex_buffer(&self) -> &wgpu::Buffer {
        self.vertex_buffer.buffer()
    }

    /// Triangle-list index buffer (u16).
    pub fn index_buffer(&self) -> &wgpu::Buffer {
        self.index_buffer.buffer()
    }

    /// Line-list edge index buffer (u16).
    pub fn edge_index_buffer(&self) -> &wgpu::Buffer {
        self.edge_index_buffer.buffer()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_stride_matches_binding_contract() {
        // Three Float32x3 attributes, tightly packed.
        assert_eq!(size_of::<Vertex>(), 36);
        let layout = Vertex::buffer_layout();
        assert_eq!(layout.array_stride, 36);
        assert_eq!(layout.attributes.len(), 3);
        assert_eq!(layout.attributes[1].offset, 12);
        assert_eq!(layout.attributes[2].offset, 24);
    }
}
