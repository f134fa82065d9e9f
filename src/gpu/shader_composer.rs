use std::borrow::Cow;

use naga_oil::compose::{
    ComposableModuleDescriptor, Composer, NagaModuleDescriptor, ShaderLanguage, ShaderType,
};

/// Wraps `naga_oil::compose::Composer` to provide shader composition with
/// `#import` support.
///
/// Pre-loads all shared WGSL modules at construction time. Consuming shaders
/// use `#import glint::module_name` to pull in shared code. The composer
/// produces `naga::Module` IR directly, skipping WGSL re-parse at runtime.
pub struct ShaderComposer {
    composer: Composer,
}

/// Shared module definition: (source, file_path)
struct ModuleDef {
    source: &'static str,
    file_path: &'static str,
}

impl Default for ShaderComposer {
    fn default() -> Self {
        Self::new()
    }
}

impl ShaderComposer {
    /// Build a composer with all shared modules registered.
    ///
    /// # Panics
    ///
    /// Panics if an embedded shared module fails to parse; the embedded
    /// sources are exercised by the composition tests.
    #[allow(clippy::panic)]
    #[must_use]
    pub fn new() -> Self {
        let mut composer = Composer::default();

        // Register shared modules in dependency order.
        let modules: &[ModuleDef] = &[ModuleDef {
            source: include_str!("../../assets/shaders/modules/camera.wgsl"),
            file_path: "modules/camera.wgsl",
        }];

        for m in modules {
            if let Err(e) = composer.add_composable_module(ComposableModuleDescriptor {
                source: m.source,
                file_path: m.file_path,
                language: ShaderLanguage::Wgsl,
                ..Default::default()
            }) {
                panic!("Failed to register shader module '{}': {e:?}", m.file_path);
            }
        }

        Self { composer }
    }

    /// Compose a shader source string (which may contain `#import`
    /// directives) into a `wgpu::ShaderModule` ready for pipeline creation.
    ///
    /// # Panics
    ///
    /// Panics if the source fails to compose; the embedded sources are
    /// exercised by the composition tests.
    #[allow(clippy::panic)]
    pub fn compose(
        &mut self,
        device: &wgpu::Device,
        label: &str,
        source: &str,
        file_path: &str,
    ) -> wgpu::ShaderModule {
        let naga_module = self
            .composer
            .make_naga_module(NagaModuleDescriptor {
                source,
                file_path,
                shader_type: ShaderType::Wgsl,
                ..Default::default()
            })
            .unwrap_or_else(|e| panic!("Failed to compose shader '{file_path}': {e}"));

        device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(label),
            source: wgpu::ShaderSource::Naga(Cow::Owned(naga_module)),
        })
    }

    /// Compose a shader source into a `naga::Module` without creating a wgpu
    /// shader module. Useful for testing shader composition without a GPU
    /// device.
    ///
    /// # Errors
    ///
    /// Returns the composer error if parsing or import resolution fails.
    pub fn compose_naga(
        &mut self,
        source: &str,
        file_path: &str,
    ) -> Result<naga::Module, Box<naga_oil::compose::ComposerError>> {
        self.composer
            .make_naga_module(NagaModuleDescriptor {
                source,
                file_path,
                shader_type: ShaderType::Wgsl,
                ..Default::default()
            })
            .map_err(Box::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mesh_shader_composes() {
        let mut composer = ShaderComposer::new();
        let module = composer
            .compose_naga(
                include_str!("../../assets/shaders/raster/mesh.wgsl"),
                "raster/mesh.wgsl",
            )
            .unwrap_or_else(|e| panic!("mesh shader failed to compose: {e}"));

        let entry_points: Vec<&str> = module
            .entry_points
            .iter()
            .map(|ep| ep.name.as_str())
            .collect();
        assert!(entry_points.contains(&"vs_main"));
        assert!(entry_points.contains(&"fs_ambient"));
        assert!(entry_points.contains(&"fs_outline"));
    }
}
