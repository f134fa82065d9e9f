//! Centralized rendering/display options with TOML preset support.
//!
//! All tweakable settings (display toggles, camera projection and control
//! speeds, outline expansion, primitive tessellation) are consolidated
//! here and serialize to/from TOML.

mod camera;
mod display;
mod geometry;
mod outline;

use std::path::Path;

pub use camera::CameraOptions;
pub use display::DisplayOptions;
pub use geometry::GeometryOptions;
pub use outline::OutlineOptions;
use serde::{Deserialize, Serialize};

use crate::error::GlintError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[outline]`) work correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Display toggles and clear color.
    pub display: DisplayOptions,
    /// Camera projection and control parameters.
    pub camera: CameraOptions,
    /// Outline expansion and color.
    pub outline: OutlineOptions,
    /// Primitive tessellation and buffer sizing.
    pub geometry: GeometryOptions,
}

impl Options {
    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`GlintError::Io`] if the file cannot be read and
    /// [`GlintError::OptionsParse`] if the TOML fails to parse.
    pub fn load(path: &Path) -> Result<Self, GlintError> {
        let content = std::fs::read_to_string(path).map_err(GlintError::Io)?;
        toml::from_str(&content).map_err(|e| GlintError::OptionsParse(e.to_string()))
    }

    /// The outline options the renderer should apply this frame, or `None`
    /// when the outline pass is disabled. Gating here keeps the per-frame
    /// edge-instance upload in step with whether the pass actually runs.
    #[must_use]
    pub fn active_outline(&self) -> Option<&OutlineOptions> {
        self.display.show_outline.then_some(&self.outline)
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`GlintError::OptionsParse`] if serialization fails and
    /// [`GlintError::Io`] if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), GlintError> {
        let content =
            toml::to_string_pretty(self).map_err(|e| GlintError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(GlintError::Io)?;
        }
        std::fs::write(path, content).map_err(GlintError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[outline]
scale = 1.05
";
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.outline.scale, 1.05);
        // Everything else should be default
        assert_eq!(opts.outline.color, [1.0; 4]);
        assert_eq!(opts.camera.fovy, 60.0);
        assert!(opts.display.show_outline);
    }

    #[test]
    fn empty_toml_is_all_defaults() {
        let opts: Options = toml::from_str("").unwrap();
        assert_eq!(opts, Options::default());
    }

    #[test]
    fn active_outline_follows_the_display_toggle() {
        let mut opts = Options::default();
        assert_eq!(opts.active_outline(), Some(&opts.outline));

        // With the pass disabled, nothing outline-related should reach the
        // renderer's per-frame upload.
        opts.display.show_outline = false;
        assert_eq!(opts.active_outline(), None);
    }
}
