// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! GPU-driven instanced mesh renderer built on wgpu.
//!
//! Glint draws batches of primitive meshes (cube, tetrahedron, UV sphere)
//! through a single instanced vertex stage and two selectable fragment
//! stages: a flat-ambient-lit solid pass and an unlit outline pass drawn
//! over the mesh edge lists. Per-instance state is a model matrix plus an
//! RGBA color; the only per-frame shared state is a 64-byte view-projection
//! uniform.
//!
//! # Key entry points
//!
//! - [`engine::RenderEngine`] - the windowed rendering engine
//! - [`scene::Scene`] - the draw-command list consumed each frame
//! - [`options::Options`] - runtime configuration (display, camera, outline)
//! - [`renderer::stages`] - CPU reference of the shader stage contracts
//!
//! # Architecture
//!
//! Instance data is gathered from the scene and rewritten into growable GPU
//! buffers before each frame, then the engine records two render passes:
//! solid (depth-tested, ambient-shaded triangles) followed by outline
//! (depth-read-only, flat-colored edge lines over expanded instances).

pub mod camera;
pub mod engine;
pub mod error;
pub mod gpu;
pub mod mesh;
pub mod options;
pub mod renderer;
pub mod scene;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use error::GlintError;
#[cfg(feature = "viewer")]
pub use viewer::Viewer;
