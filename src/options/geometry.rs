//! Primitive tessellation and buffer sizing options.

use serde::{Deserialize, Serialize};

/// Tessellation detail and initial instance buffer capacity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GeometryOptions {
    /// Latitude divisions of the UV sphere. Longitude uses twice this.
    pub sphere_divisions: u32,
    /// Instance buffer capacity reserved per mesh at startup. Buffers grow
    /// on demand beyond this.
    pub instance_capacity: usize,
}

impl Default for GeometryOptions {
    fn default() -> Self {
        Self {
            sphere_divisions: 10,
            instance_capacity: 100,
        }
    }
}
