//! Draw-command list consumed by the renderer each frame.
//!
//! A [`DrawCommand`] pairs a mesh kind with a fully-built [`Instance`];
//! the scene is just the ordered list of commands for the current frame.
//! Instance mutation happens here, strictly between draws — the renderer
//! copies instance data into GPU buffers during prepare, so nothing
//! mutates a buffer a pass is reading.

use glam::{Mat3, Mat4, Vec3, Vec4};

use crate::mesh::MeshKind;
use crate::options::OutlineOptions;
use crate::renderer::instance::Instance;

/// One drawable occurrence of a mesh.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCommand {
    /// Which primitive mesh to draw.
    pub mesh: MeshKind,
    /// Per-instance transform and color.
    pub instance: Instance,
}

impl DrawCommand {
    /// Pair a mesh kind with an already-built instance.
    #[must_use]
    pub fn from_instance(mesh: MeshKind, instance: Instance) -> Self {
        Self { mesh, instance }
    }

    /// The instance this command would submit to the outline pass: the
    /// model matrix expanded by the configured uniform scale, recolored to
    /// the outline color. Geometry expansion is a host-side concern — the
    /// outline fragment stage itself only defines the flat color contract.
    #[must_use]
    pub fn outline_instance(&self, outline: &OutlineOptions) -> Instance {
        let expanded = self.instance.model_matrix()
            * Mat4::from_scale(Vec3::splat(outline.scale));
        Instance::new(expanded, Vec4::from(outline.color))
    }
}

/// Fluent builder for a [`DrawCommand`].
#[derive(Debug, Clone)]
pub struct DrawCommandBuilder {
    mesh: MeshKind,
    position: Vec3,
    rotation: Mat3,
    scale: f32,
    color: Vec4,
}

impl DrawCommandBuilder {
    /// Start a command for the given mesh with identity transform and
    /// opaque white color.
    #[must_use]
    pub fn new(mesh: MeshKind) -> Self {
        Self {
            mesh,
            position: Vec3::ZERO,
            rotation: Mat3::IDENTITY,
            scale: 1.0,
            color: Vec4::ONE,
        }
    }

    /// Set the world-space position.
    #[must_use]
    pub fn with_position(self, position: Vec3) -> Self {
        Self { position, ..self }
    }

    /// Set the rotation.
    #[must_use]
    pub fn with_rotation(self, rotation: Mat3) -> Self {
        Self { rotation, ..self }
    }

    /// Set the uniform scale.
    #[must_use]
    pub fn with_scale(self, scale: f32) -> Self {
        Self { scale, ..self }
    }

    /// Set the RGBA color from floats in [0, 1].
    #[must_use]
    pub fn with_color(self, r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            color: Vec4::new(r, g, b, a),
            ..self
        }
    }

    /// Set the RGBA color from 8-bit channels.
    #[must_use]
    pub fn with_color_u8(self, r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            color: Vec4::new(f32::from(r), f32::from(g), f32::from(b), f32::from(a)) / 255.0,
            ..self
        }
    }

    /// Build the draw command.
    #[must_use]
    pub fn build(self) -> DrawCommand {
        DrawCommand {
            mesh: self.mesh,
            instance: Instance::from_parts(self.position, self.rotation, self.scale, self.color),
        }
    }
}

/// The frame's draw commands.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    commands: Vec<DrawCommand>,
}

impl Scene {
    /// An empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a draw command.
    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    /// Remove every command.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// All commands, in submission order.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Mutable access for between-draw instance updates.
    pub fn commands_mut(&mut self) -> &mut [DrawCommand] {
        &mut self.commands
    }

    /// Solid-pass instances for one mesh kind, in submission order.
    #[must_use]
    pub fn instances_for(&self, mesh: MeshKind) -> Vec<Instance> {
        self.commands
            .iter()
            .filter(|cmd| cmd.mesh == mesh)
            .map(|cmd| cmd.instance)
            .collect()
    }

    /// Outline-pass instances for one mesh kind: every matching command
    /// expanded and recolored per the outline options.
    #[must_use]
    pub fn outline_instances_for(&self, mesh: MeshKind, outline: &OutlineOptions) -> Vec<Instance> {
        self.commands
            .iter()
            .filter(|cmd| cmd.mesh == mesh)
            .map(|cmd| cmd.outline_instance(outline))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_packs_translation_and_scale() {
        let cmd = DrawCommandBuilder::new(MeshKind::Cube)
            .with_position(Vec3::new(4.0, 0.0, 0.0))
            .with_scale(0.1)
            .with_color_u8(255, 0, 0, 255)
            .build();

        assert_eq!(cmd.mesh, MeshKind::Cube);
        assert_eq!(cmd.instance.model[3], [4.0, 0.0, 0.0, 1.0]);
        assert_eq!(cmd.instance.model[0][0], 0.1);
        assert_eq!(cmd.instance.color, [1.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn outline_instance_expands_and_recolors() {
        let outline = OutlineOptions::default();
        let cmd = DrawCommandBuilder::new(MeshKind::Sphere)
            .with_position(Vec3::new(1.0, 2.0, 3.0))
            .with_color(0.3, 0.6, 0.9, 1.0)
            .build();

        let expanded = cmd.outline_instance(&outline);
        assert_eq!(expanded.color, outline.color);
        // Post-multiplied scale expands around the instance origin: basis
        // columns grow by the factor, translation is untouched.
        assert!((expanded.model[0][0] - outline.scale).abs() < 1e-6);
        assert_eq!(expanded.model[3], [1.0, 2.0, 3.0, 1.0]);
    }

    #[test]
    fn scene_partitions_instances_by_mesh_kind() {
        let mut scene = Scene::new();
        scene.push(DrawCommandBuilder::new(MeshKind::Cube).build());
        scene.push(DrawCommandBuilder::new(MeshKind::Sphere).build());
        scene.push(
            DrawCommandBuilder::new(MeshKind::Cube)
                .with_position(Vec3::X)
                .build(),
        );

        assert_eq!(scene.instances_for(MeshKind::Cube).len(), 2);
        assert_eq!(scene.instances_for(MeshKind::Sphere).len(), 1);
        assert!(scene.instances_for(MeshKind::Tetrahedron).is_empty());

        scene.clear();
        assert!(scene.commands().is_empty());
    }
}
