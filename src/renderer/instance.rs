//! Per-instance GPU record: model matrix columns plus an RGBA color.

use glam::{Mat3, Mat4, Quat, Vec3, Vec4};

/// Per-instance data streamed at vertex-attribute locations 3-7.
///
/// The four `model` columns pack an affine object-to-world matrix in the
/// standard homogeneous layout: X/Y/Z basis columns with w = 0, then the
/// translation column with w = 1.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Instance {
    /// Model matrix columns, column-major.
    pub model: [[f32; 4]; 4],
    /// Instance color, RGBA.
    pub color: [f32; 4],
}

impl Instance {
    const ATTRIBS: [wgpu::VertexAttribute; 5] = wgpu::vertex_attr_array![
        3 => Float32x4,
        4 => Float32x4,
        5 => Float32x4,
        6 => Float32x4,
        7 => Float32x4
    ];

    /// Instance buffer layout, stepped per instance.
    #[must_use]
    pub const fn buffer_layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: size_of::<Instance>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRIBS,
        }
    }

    /// Pack a model matrix and color into an instance record.
    #[must_use]
    pub fn new(model: Mat4, color: Vec4) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            color: color.to_array(),
        }
    }

    /// Build an instance from position, rotation, uniform scale, and color.
    #[must_use]
    pub fn from_parts(position: Vec3, rotation: Mat3, scale: f32, color: Vec4) -> Self {
        let model = Mat4::from_scale_rotation_translation(
            Vec3::splat(scale),
            Quat::from_mat3(&rotation),
            position,
        );
        Self::new(model, color)
    }

    /// The model matrix as a [`Mat4`].
    #[must_use]
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_cols_array_2d(&self.model)
    }

    /// Overwrite the translation column, leaving rotation/scale untouched.
    pub fn set_translation(&mut self, position: Vec3) {
        self.model[3][0] = position.x;
        self.model[3][1] = position.y;
        self.model[3][2] = position.z;
    }
}

impl Default for Instance {
    fn default() -> Self {
        Self::new(Mat4::IDENTITY, Vec4::ONE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stride_matches_binding_contract() {
        // Four Float32x4 matrix columns plus one Float32x4 color.
        assert_eq!(size_of::<Instance>(), 80);
        let layout = Instance::buffer_layout();
        assert_eq!(layout.array_stride, 80);
        assert!(matches!(layout.step_mode, wgpu::VertexStepMode::Instance));
    }

    #[test]
    fn from_parts_packs_affine_columns() {
        let instance = Instance::from_parts(
            Vec3::new(1.0, 2.0, 3.0),
            Mat3::IDENTITY,
            2.0,
            Vec4::new(0.5, 0.25, 0.125, 1.0),
        );
        // Basis columns carry the scale, w = 0.
        assert_eq!(instance.model[0], [2.0, 0.0, 0.0, 0.0]);
        assert_eq!(instance.model[1], [0.0, 2.0, 0.0, 0.0]);
        assert_eq!(instance.model[2], [0.0, 0.0, 2.0, 0.0]);
        // Translation column, w = 1.
        assert_eq!(instance.model[3], [1.0, 2.0, 3.0, 1.0]);
    }

    #[test]
    fn set_translation_only_touches_last_column() {
        let mut instance = Instance::from_parts(Vec3::ZERO, Mat3::IDENTITY, 3.0, Vec4::ONE);
        instance.set_translation(Vec3::new(-4.0, 5.0, 6.0));
        assert_eq!(instance.model[0], [3.0, 0.0, 0.0, 0.0]);
        assert_eq!(instance.model[3], [-4.0, 5.0, 6.0, 1.0]);
    }
}
