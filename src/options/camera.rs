//! Camera projection and control options.

use serde::{Deserialize, Serialize};

/// Projection parameters and orbit-control speeds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clip plane distance.
    pub znear: f32,
    /// Far clip plane distance.
    pub zfar: f32,
    /// Initial orbit distance from the target.
    pub distance: f32,
    /// Minimum orbit distance (zoom-in limit).
    pub distance_min: f32,
    /// Maximum orbit distance (zoom-out limit).
    pub distance_max: f32,
    /// Radians of orbit per pixel of drag.
    pub orbit_speed: f32,
    /// Distance units per scroll step.
    pub zoom_speed: f32,
    /// Pan distance per pixel of drag, scaled by orbit distance.
    pub pan_speed: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 60.0,
            znear: 0.1,
            zfar: 1000.0,
            distance: 10.0,
            distance_min: 0.1,
            distance_max: 1000.0,
            orbit_speed: 0.005,
            zoom_speed: 0.5,
            pan_speed: 0.001,
        }
    }
}
