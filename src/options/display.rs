//! Display toggles and clear color.

use serde::{Deserialize, Serialize};

/// What gets drawn and what the frame clears to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DisplayOptions {
    /// Clear color for the solid pass, linear RGB.
    pub background: [f32; 3],
    /// Whether the outline pass runs after the solid pass.
    pub show_outline: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            background: [0.01, 0.01, 0.01],
            show_outline: true,
        }
    }
}
