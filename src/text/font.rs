use std::collections::HashMap;
use std::path::Path;

use anyhow::Context;
use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Transform};
use ttf_parser::OutlineBuilder;

use crate::foundation::{
    color::Color,
    core::Size,
    error::{DinkyError, DinkyResult},
};
use crate::raster::bitmap::{Bitmap, ImageFormat};

/// Printable ASCII, the range rasterized by [`Font::from_bytes`].
pub const ASCII_RANGE: std::ops::Range<u32> = 32..128;

/// Character substituted for glyphs a font does not carry.
pub const FALLBACK_CHAR: char = '?';

/// Outline sizes are point sizes rendered at this resolution.
const DPI: f32 = 96.0;

/// One rasterized glyph.
///
/// The mask is RGBA with coverage replicated into every channel, so it can be tinted with
/// [`Bitmap::paste_and_shade`].
#[derive(Clone, Debug, PartialEq)]
pub struct Glyph {
    /// Coverage mask.
    pub mask: Bitmap,
    /// Horizontal offset from the pen position to the mask's left edge.
    pub left: i32,
    /// Distance from the baseline up to the mask's top edge.
    pub bearing_y: i32,
    /// Pen advance, never narrower than the mask.
    pub advance: u32,
}

impl Glyph {
    /// Fully covered `width x height` block standing on the baseline.
    pub fn solid(width: u32, height: u32, advance: u32) -> Self {
        Self {
            mask: Bitmap::new(Color::splat(1.0), ImageFormat::Rgba, width, height),
            left: 0,
            bearing_y: height as i32,
            advance: advance.max(width),
        }
    }

    /// Glyph without ink, such as a space.
    pub fn blank(advance: u32) -> Self {
        Self {
            mask: Bitmap::new(Color::splat(0.0), ImageFormat::Rgba, 0, 0),
            left: 0,
            bearing_y: 0,
            advance,
        }
    }
}

/// Pre-rasterized glyph set at a single size.
#[derive(Clone, Debug, Default)]
pub struct Font {
    glyphs: HashMap<char, Glyph>,
    size: f32,
    baseline: i32,
}

impl Font {
    /// Rasterize a font file from disk.
    pub fn load(path: impl AsRef<Path>, size: f32) -> DinkyResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(DinkyError::resource_missing(format!(
                "font '{}' doesn't exist",
                path.display()
            )));
        }
        let data =
            std::fs::read(path).with_context(|| format!("read font '{}'", path.display()))?;
        Self::from_bytes(&data, 0, size)
    }

    /// Rasterize printable ASCII from TrueType/OpenType data.
    ///
    /// `size` is in points at 96 DPI. Characters the face does not map are left out and fall
    /// back to `?` at draw time.
    pub fn from_bytes(data: &[u8], index: u32, size: f32) -> DinkyResult<Self> {
        let face = ttf_parser::Face::parse(data, index)
            .map_err(|e| DinkyError::render(format!("parse font face: {e}")))?;
        let px_per_em = size * DPI / 72.0;
        let scale = px_per_em / f32::from(face.units_per_em());

        let glyphs = ASCII_RANGE
            .filter_map(char::from_u32)
            .filter_map(|c| {
                let id = face.glyph_index(c)?;
                Some((c, rasterize(&face, id, scale)))
            })
            .collect::<HashMap<_, _>>();

        tracing::info!(size, px_per_em, glyphs = glyphs.len(), "font rasterized");
        Ok(Self::from_glyphs(size, glyphs))
    }

    /// Build a font from already rasterized glyphs.
    pub fn from_glyphs(size: f32, glyphs: impl IntoIterator<Item = (char, Glyph)>) -> Self {
        let glyphs: HashMap<char, Glyph> = glyphs.into_iter().collect();
        let baseline = glyphs.values().map(|g| g.bearing_y).max().unwrap_or(0).max(0);
        Self {
            glyphs,
            size,
            baseline,
        }
    }

    /// Requested size.
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Largest vertical bearing over all glyphs; every glyph is drawn relative to it.
    pub fn baseline(&self) -> i32 {
        self.baseline
    }

    /// Number of rasterized glyphs.
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// `true` when no glyph was rasterized.
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Glyph for `c`, falling back to `?`.
    pub fn glyph(&self, c: char) -> Option<&Glyph> {
        self.glyphs
            .get(&c)
            .or_else(|| self.glyphs.get(&FALLBACK_CHAR))
    }

    /// `(sum of advances, baseline)` for a single-line string.
    pub fn measure(&self, text: &str) -> Size {
        let width = text
            .chars()
            .filter_map(|c| self.glyph(c))
            .map(|g| g.advance)
            .sum();
        Size::new(width, self.baseline as u32)
    }

    /// Draw `text` with its top-left corner at `(x, y)`, tinting glyph masks with `color`.
    pub fn draw(&self, text: &str, x: i32, y: i32, color: Color, target: &mut Bitmap) {
        let mut pen = x;
        for c in text.chars() {
            let Some(glyph) = self.glyph(c) else {
                tracing::warn!(?c, "no glyph and no fallback, skipped");
                continue;
            };
            let top = y.saturating_add(self.baseline - glyph.bearing_y);
            target.paste_and_shade(&glyph.mask, pen.saturating_add(glyph.left), top, color);
            pen = pen.saturating_add(glyph.advance as i32);
        }
    }
}

struct GlyphPathBuilder {
    builder: PathBuilder,
    origin_x: f32,
    origin_y: f32,
    scale: f32,
}

impl GlyphPathBuilder {
    fn new(origin_x: f32, origin_y: f32, scale: f32) -> Self {
        Self {
            builder: PathBuilder::new(),
            origin_x,
            origin_y,
            scale,
        }
    }

    // Font units grow upward, pixmap rows grow downward.
    fn map(&self, x: f32, y: f32) -> (f32, f32) {
        (self.origin_x + x * self.scale, self.origin_y - y * self.scale)
    }
}

impl OutlineBuilder for GlyphPathBuilder {
    fn move_to(&mut self, x: f32, y: f32) {
        let (x, y) = self.map(x, y);
        self.builder.move_to(x, y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let (x, y) = self.map(x, y);
        self.builder.line_to(x, y);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        let (x1, y1) = self.map(x1, y1);
        let (x, y) = self.map(x, y);
        self.builder.quad_to(x1, y1, x, y);
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        let (x1, y1) = self.map(x1, y1);
        let (x2, y2) = self.map(x2, y2);
        let (x, y) = self.map(x, y);
        self.builder.cubic_to(x1, y1, x2, y2, x, y);
    }

    fn close(&mut self) {
        self.builder.close();
    }
}

fn rasterize(face: &ttf_parser::Face<'_>, id: ttf_parser::GlyphId, scale: f32) -> Glyph {
    let advance = face
        .glyph_hor_advance(id)
        .map(|a| (f32::from(a) * scale).round() as u32)
        .unwrap_or(0);

    let Some(bbox) = face.glyph_bounding_box(id) else {
        return Glyph::blank(advance);
    };
    let left = (f32::from(bbox.x_min) * scale).floor() as i32;
    let right = (f32::from(bbox.x_max) * scale).ceil() as i32;
    let top = (f32::from(bbox.y_max) * scale).ceil() as i32;
    let bottom = (f32::from(bbox.y_min) * scale).floor() as i32;
    let (w, h) = ((right - left).max(0) as u32, (top - bottom).max(0) as u32);

    let Some(mut pixmap) = Pixmap::new(w, h) else {
        return Glyph::blank(advance);
    };
    let mut builder = GlyphPathBuilder::new(-(left as f32), top as f32, scale);
    if face.outline_glyph(id, &mut builder).is_none() {
        return Glyph::blank(advance);
    }
    let Some(path) = builder.builder.finish() else {
        return Glyph::blank(advance);
    };

    let mut paint = Paint::default();
    paint.set_color_rgba8(255, 255, 255, 255);
    paint.anti_alias = true;
    pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);

    let coverage = pixmap
        .data()
        .chunks_exact(4)
        .flat_map(|px| [px[3]; 4])
        .collect::<Vec<u8>>();
    let mask = match Bitmap::from_raw(w, h, 4, &coverage) {
        Ok(mask) => mask,
        Err(_) => return Glyph::blank(advance),
    };

    Glyph {
        mask,
        left,
        bearing_y: top,
        advance: advance.max(w),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/font.rs"]
mod tests;
