use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::foundation::{
    color::Color,
    error::{DinkyError, DinkyResult},
};

/// Largest accepted [`RenderOpts::pixel_density`].
pub const MAX_PIXEL_DENSITY: u32 = 64;

/// Render configuration, loadable from JSON.
///
/// Missing fields take their defaults, so `{}` is a valid config.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RenderOpts {
    /// Resolution multiplier; the layout unit is `14 * pixel_density` pixels.
    pub pixel_density: u32,
    /// Font file; when unset the system sans-serif face is used.
    pub font_path: Option<PathBuf>,
    /// Catalog key the font is registered under.
    pub font_name: String,
    /// Initial draw color.
    pub text_color: Color,
    /// Canvas fill.
    pub background: Color,
}

impl Default for RenderOpts {
    fn default() -> Self {
        Self {
            pixel_density: 3,
            font_path: None,
            font_name: "default".to_owned(),
            text_color: Color::BLACK,
            background: Color::WHITE,
        }
    }
}

impl RenderOpts {
    /// Read a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> DinkyResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        let opts: Self = serde_json::from_str(&text)
            .with_context(|| format!("parse config '{}'", path.display()))?;
        opts.validate()?;
        Ok(opts)
    }

    /// Reject densities outside `1..=MAX_PIXEL_DENSITY`.
    pub fn validate(&self) -> DinkyResult<()> {
        if !(1..=MAX_PIXEL_DENSITY).contains(&self.pixel_density) {
            return Err(DinkyError::render(format!(
                "pixel_density must be in 1..={MAX_PIXEL_DENSITY}, got {}",
                self.pixel_density
            )));
        }
        Ok(())
    }

    /// Layout unit in pixels.
    pub fn pixel_size(&self) -> u32 {
        self.pixel_density.saturating_mul(14)
    }

    /// Font point size, half the layout unit.
    pub fn font_size(&self) -> f32 {
        (self.pixel_size() / 2) as f32
    }

    /// Page width.
    pub fn min_width(&self) -> u32 {
        self.pixel_size().saturating_mul(15)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/opts.rs"]
mod tests;
