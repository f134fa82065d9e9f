//! Outline expansion and color options.

use serde::{Deserialize, Serialize};

/// How outline instances are derived from solid instances.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutlineOptions {
    /// Outline color, RGBA in [0, 1].
    pub color: [f32; 4],
    /// Uniform scale applied on top of the instance model matrix so edges
    /// sit just outside the solid surface.
    pub scale: f32,
}

impl Default for OutlineOptions {
    fn default() -> Self {
        Self {
            color: [1.0; 4],
            scale: 1.005,
        }
    }
}
