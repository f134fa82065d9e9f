//! Camera state, orbit controls, and the per-frame GPU uniform.

/// Pan-orbit control state and the GPU-side camera binding.
pub mod controller;
/// Perspective camera and the 64-byte view-projection uniform.
pub mod core;

pub use controller::{CameraController, OrbitCamera};
pub use core::{Camera, CameraUniform};
