//! CPU reference implementation of the shader stages.
//!
//! Mirrors `assets/shaders/raster/mesh.wgsl` operation for operation — the
//! same multiplication order, the same constants — so the numeric contract
//! of the GPU pipeline can be asserted in unit tests without a device. Keep
//! the two in sync.
//!
//! The stages are pure, stateless, per-invocation transforms: the vertex
//! stage runs once per vertex-instance pair, and exactly one of the two
//! fragment stages consumes its (interpolated) output depending on which
//! pipeline the host bound. Nothing here validates inputs; NaN or
//! degenerate values propagate silently, matching the GPU behavior.

use glam::{Mat4, Vec3, Vec4};

use crate::mesh::Vertex;
use crate::renderer::instance::Instance;

/// Fixed ambient attenuation applied by [`shade_ambient`].
///
/// The alpha channel stays 1.0 so instance alpha passes through the
/// componentwise product unchanged.
pub const AMBIENT_COLOR: Vec4 = Vec4::new(0.5, 0.5, 0.5, 1.0);

/// Interpolated input shared by both fragment stages.
///
/// On the GPU this is the rasterizer-interpolated vertex output; the clip
/// position only drives rasterization and is never read by the shading
/// logic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FragmentInput {
    /// Clip-space position (pre perspective divide).
    pub clip_position: Vec4,
    /// Instance color, passed through the vertex stage verbatim.
    pub color: Vec4,
    /// World-space surface normal, unit length when leaving the vertex
    /// stage; interpolation across a triangle may denormalize it.
    pub world_normal: Vec3,
}

/// Vertex transform stage: one vertex, one instance, the shared camera.
///
/// The world normal is computed with w = 0 so translation is discarded;
/// there is deliberately no inverse-transpose correction, so non-uniform
/// scale distorts the normal. Preserve that behavior when editing.
#[must_use]
pub fn transform_vertex(view_proj: Mat4, instance: &Instance, vertex: &Vertex) -> FragmentInput {
    let model = instance.model_matrix();
    let position = Vec3::from(vertex.position);
    let normal = Vec3::from(vertex.normal);

    FragmentInput {
        clip_position: view_proj * model * position.extend(1.0),
        color: Vec4::from(instance.color),
        world_normal: (model * normal.extend(0.0)).truncate().normalize(),
    }
}

/// Ambient fragment stage: componentwise product of [`AMBIENT_COLOR`] and
/// the interpolated instance color.
///
/// The world normal is present in the input but not consumed — the stage is
/// flat/ambient by design, and the normal is threaded through for a future
/// directional term.
#[must_use]
pub fn shade_ambient(input: &FragmentInput) -> Vec4 {
    AMBIENT_COLOR * input.color
}

/// Outline fragment stage: the interpolated instance color, unmodified.
#[must_use]
pub fn shade_outline(input: &FragmentInput) -> Vec4 {
    input.color
}

#[cfg(test)]
mod tests {
    use glam::{Mat3, Quat};

    use super::*;

    const EPS: f32 = 1e-5;

    fn vertex(position: [f32; 3], normal: [f32; 3]) -> Vertex {
        Vertex::new(position, [1.0; 3], normal)
    }

    fn assert_vec4_eq(a: Vec4, b: Vec4) {
        assert!((a - b).length() < EPS, "{a} != {b}");
    }

    #[test]
    fn identity_instance_leaves_clip_position_to_the_camera() {
        let view_proj = Mat4::perspective_rh(1.0, 1.5, 0.1, 100.0)
            * Mat4::look_at_rh(Vec3::new(3.0, 2.0, 1.0), Vec3::ZERO, Vec3::Z);
        let instance = Instance::default();
        let v = vertex([0.25, -0.75, 2.0], [0.0, 1.0, 0.0]);

        let out = transform_vertex(view_proj, &instance, &v);
        assert_vec4_eq(out.clip_position, view_proj * Vec4::new(0.25, -0.75, 2.0, 1.0));
    }

    #[test]
    fn instance_color_passes_through_the_vertex_stage() {
        let instance = Instance::new(Mat4::IDENTITY, Vec4::new(0.2, 0.4, 0.6, 0.8));
        let out = transform_vertex(Mat4::IDENTITY, &instance, &vertex([0.0; 3], [0.0, 0.0, 1.0]));
        assert_vec4_eq(out.color, Vec4::new(0.2, 0.4, 0.6, 0.8));
    }

    #[test]
    fn ambient_stage_halves_rgb() {
        for color in [
            Vec4::new(1.0, 0.0, 0.0, 1.0),
            Vec4::new(0.2, 0.4, 0.8, 1.0),
            Vec4::new(1.0, 1.0, 1.0, 1.0),
        ] {
            let input = FragmentInput {
                clip_position: Vec4::ZERO,
                color,
                world_normal: Vec3::Y,
            };
            let shaded = shade_ambient(&input);
            assert_vec4_eq(shaded, Vec4::new(color.x * 0.5, color.y * 0.5, color.z * 0.5, color.w));
        }
    }

    #[test]
    fn outline_stage_is_the_identity_on_color() {
        let input = FragmentInput {
            clip_position: Vec4::new(3.0, 1.0, 0.5, 1.0),
            color: Vec4::new(0.9, 0.1, 0.3, 0.7),
            world_normal: Vec3::X,
        };
        assert_eq!(shade_outline(&input), input.color);
    }

    #[test]
    fn translation_does_not_bend_normals() {
        let instance = Instance::new(Mat4::from_translation(Vec3::new(10.0, 0.0, 0.0)), Vec4::ONE);
        let out = transform_vertex(Mat4::IDENTITY, &instance, &vertex([0.0; 3], [0.0, 1.0, 0.0]));
        assert!((out.world_normal - Vec3::Y).length() < EPS);
        assert!((out.world_normal.length() - 1.0).abs() < EPS);
    }

    #[test]
    fn uniform_scale_preserves_normal_direction() {
        let instance = Instance::new(Mat4::from_scale(Vec3::splat(7.5)), Vec4::ONE);
        let n = Vec3::new(1.0, 2.0, -0.5).normalize();
        let out = transform_vertex(Mat4::IDENTITY, &instance, &vertex([0.0; 3], n.to_array()));
        assert!((out.world_normal - n).length() < EPS);
    }

    #[test]
    fn non_uniform_scale_bends_normals_without_correction() {
        // A correct normal transform would use the inverse transpose; this
        // pipeline intentionally does not. Under scale (4, 1, 1) the normal
        // (1, 1, 0)/sqrt(2) must lean toward +X, not away from it.
        let instance = Instance::new(Mat4::from_scale(Vec3::new(4.0, 1.0, 1.0)), Vec4::ONE);
        let n = Vec3::new(1.0, 1.0, 0.0).normalize();
        let out = transform_vertex(Mat4::IDENTITY, &instance, &vertex([0.0; 3], n.to_array()));

        let expected = Vec3::new(4.0, 1.0, 0.0).normalize();
        assert!((out.world_normal - expected).length() < EPS);
        // And it must differ from the inverse-transpose result.
        let corrected = Vec3::new(0.25, 1.0, 0.0).normalize();
        assert!((out.world_normal - corrected).length() > 0.1);
    }

    #[test]
    fn rotation_rotates_normals_exactly() {
        let rotation = Quat::from_axis_angle(Vec3::Z, std::f32::consts::FRAC_PI_2);
        let instance = Instance::new(Mat4::from_quat(rotation), Vec4::ONE);
        let out = transform_vertex(Mat4::IDENTITY, &instance, &vertex([0.0; 3], [1.0, 0.0, 0.0]));
        assert!((out.world_normal - Vec3::Y).length() < EPS);
    }

    #[test]
    fn origin_red_instance_scenario() {
        // Identity camera, identity transform, color (1,0,0,1), vertex at
        // the origin: clip (0,0,0,1), ambient (0.5,0,0,1), outline
        // (1,0,0,1).
        let instance = Instance::new(Mat4::IDENTITY, Vec4::new(1.0, 0.0, 0.0, 1.0));
        let out = transform_vertex(Mat4::IDENTITY, &instance, &vertex([0.0; 3], [0.0, 0.0, 1.0]));

        assert_vec4_eq(out.clip_position, Vec4::new(0.0, 0.0, 0.0, 1.0));
        assert_vec4_eq(shade_ambient(&out), Vec4::new(0.5, 0.0, 0.0, 1.0));
        assert_vec4_eq(shade_outline(&out), Vec4::new(1.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn translated_instance_scenario() {
        // Model matrix = translation by (10,0,0); vertex normal (0,1,0)
        // comes out as (0,1,0), unit length.
        let instance = Instance::from_parts(
            Vec3::new(10.0, 0.0, 0.0),
            Mat3::IDENTITY,
            1.0,
            Vec4::ONE,
        );
        let out = transform_vertex(Mat4::IDENTITY, &instance, &vertex([0.0; 3], [0.0, 1.0, 0.0]));
        assert!((out.world_normal - Vec3::Y).length() < EPS);
        // Translation shows up in the clip position through the w = 1
        // homogeneous position.
        assert_vec4_eq(out.clip_position, Vec4::new(10.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn ambient_constant_matches_the_wgsl_source() {
        // Guard against the CPU mirror and the shader drifting apart.
        let wgsl = include_str!("../../assets/shaders/raster/mesh.wgsl");
        assert!(wgsl.contains("vec4<f32>(0.5, 0.5, 0.5, 1.0)"));
        assert_eq!(AMBIENT_COLOR, Vec4::new(0.5, 0.5, 0.5, 1.0));
    }
}
