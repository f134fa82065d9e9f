//! GPU resource management utilities.
//!
//! Provides wgpu device/surface initialization, growable buffer
//! management, depth-target creation, and WGSL shader composition.

/// Growable GPU buffers with automatic reallocation.
pub mod dynamic_buffer;
/// wgpu device, surface, and queue initialization.
pub mod render_context;
/// WGSL shader composition with `#import` support via naga-oil.
pub mod shader_composer;
/// Depth-target texture abstraction.
pub mod texture;
