//! Instanced mesh rendering: pipelines, per-instance records, and the
//! shader stage contracts.

/// Per-instance transform + color record and its buffer layout.
pub mod instance;
/// Solid and outline pipelines over the shared vertex stage.
pub mod mesh_renderer;
/// Shared color-target and depth-stencil state helpers.
pub mod pipeline_util;
/// CPU reference implementation of the shader stages.
pub mod stages;

pub use instance::Instance;
pub use mesh_renderer::MeshRenderer;
