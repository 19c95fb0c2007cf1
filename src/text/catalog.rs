use std::collections::HashMap;
use std::path::Path;

use crate::foundation::{
    color::Color,
    core::Size,
    error::{DinkyError, DinkyResult},
};
use crate::raster::bitmap::Bitmap;
use crate::text::font::Font;

/// Named fonts available to a render.
///
/// Populated before rendering, then only read.
#[derive(Clone, Debug, Default)]
pub struct FontCatalog {
    fonts: HashMap<String, Font>,
}

impl FontCatalog {
    /// Empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `font` under `name`, replacing any previous entry.
    pub fn insert(&mut self, name: impl Into<String>, font: Font) {
        self.fonts.insert(name.into(), font);
    }

    /// `true` when `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.fonts.contains_key(name)
    }

    /// Font registered under `name`.
    pub fn get(&self, name: &str) -> DinkyResult<&Font> {
        self.fonts
            .get(name)
            .ok_or_else(|| DinkyError::resource_missing(format!("font '{name}' is not loaded")))
    }

    /// Rasterize the font file at `path` and register it as `name`.
    #[tracing::instrument(level = "info", skip(self, path))]
    pub fn load(&mut self, name: &str, path: impl AsRef<Path>, size: f32) -> DinkyResult<()> {
        let font = Font::load(path, size)?;
        self.insert(name, font);
        Ok(())
    }

    /// Register the system's default sans-serif face as `name`.
    ///
    /// Falls back to the first installed face when no sans-serif family resolves.
    #[tracing::instrument(level = "info", skip(self))]
    pub fn load_system(&mut self, name: &str, size: f32) -> DinkyResult<()> {
        let mut db = fontdb::Database::new();
        db.load_system_fonts();

        let query = fontdb::Query {
            families: &[fontdb::Family::SansSerif],
            ..fontdb::Query::default()
        };
        let id = db
            .query(&query)
            .or_else(|| db.faces().next().map(|face| face.id))
            .ok_or_else(|| DinkyError::resource_missing("no system font found"))?;

        let font = db
            .with_face_data(id, |data, index| Font::from_bytes(data, index, size))
            .ok_or_else(|| DinkyError::resource_missing("system font data unavailable"))??;
        self.insert(name, font);
        Ok(())
    }

    /// `(width, height)` of `text` set in font `name`.
    pub fn dimensions(&self, name: &str, text: &str) -> DinkyResult<Size> {
        Ok(self.get(name)?.measure(text))
    }

    /// Draw `text` in font `name` with its top-left corner at `(x, y)`.
    pub fn render(
        &self,
        name: &str,
        text: &str,
        x: i32,
        y: i32,
        color: Color,
        target: &mut Bitmap,
    ) -> DinkyResult<()> {
        self.get(name)?.draw(text, x, y, color, target);
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/catalog.rs"]
mod tests;
