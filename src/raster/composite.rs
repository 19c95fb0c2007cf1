use crate::foundation::color::Color;
use crate::raster::bitmap::{Bitmap, ImageFormat};

/// Source-over blend of non-premultiplied float colors; the result is opaque.
pub fn over(dst: Color, src: Color) -> Color {
    let sa = src.a;
    if sa <= 0.0 {
        return Color::rgba(dst.r, dst.g, dst.b, 1.0);
    }
    let inv = 1.0 - sa;
    Color::rgba(
        src.r * sa + dst.r * inv,
        src.g * sa + dst.g * inv,
        src.b * sa + dst.b * inv,
        1.0,
    )
}

/// Overlap of a `src_w x src_h` source placed at `(x, y)` on a `dst_w x dst_h` canvas.
///
/// Returns `(src_x, src_y, dst_x, dst_y, w, h)`, or `None` when nothing overlaps.
fn clip(
    dst_w: u32,
    dst_h: u32,
    src_w: u32,
    src_h: u32,
    x: i32,
    y: i32,
) -> Option<(u32, u32, u32, u32, u32, u32)> {
    let x = i64::from(x);
    let y = i64::from(y);
    let x0 = x.max(0);
    let y0 = y.max(0);
    let x1 = (x + i64::from(src_w)).min(i64::from(dst_w));
    let y1 = (y + i64::from(src_h)).min(i64::from(dst_h));
    if x1 <= x0 || y1 <= y0 {
        return None;
    }
    Some((
        (x0 - x) as u32,
        (y0 - y) as u32,
        x0 as u32,
        y0 as u32,
        (x1 - x0) as u32,
        (y1 - y0) as u32,
    ))
}

impl Bitmap {
    fn composite_with(&mut self, src: &Bitmap, x: i32, y: i32, f: impl Fn(Color, Color) -> Color) {
        let Some((sx, sy, dx, dy, w, h)) =
            clip(self.width(), self.height(), src.width(), src.height(), x, y)
        else {
            return;
        };
        for row in 0..h {
            let s = src.index(sx, sy + row);
            let d = self.index(dx, dy + row);
            let src_row = &src.pixels()[s..s + w as usize];
            let dst_row = &mut self.pixels_mut()[d..d + w as usize];
            for (dp, sp) in dst_row.iter_mut().zip(src_row) {
                *dp = f(*dp, *sp);
            }
        }
    }

    /// Copy `src` onto this bitmap with its top-left corner at `(x, y)`.
    ///
    /// Portions outside the destination are clipped. When the formats differ the call is a
    /// logged no-op. With `alpha_blend` on RGBA bitmaps the source is composited over the
    /// destination and the destination alpha becomes 1; otherwise pixels are copied verbatim.
    pub fn paste(&mut self, src: &Bitmap, x: i32, y: i32, alpha_blend: bool) {
        if src.format() != self.format() {
            tracing::warn!(
                src = ?src.format(),
                dst = ?self.format(),
                "paste skipped: pixel formats differ"
            );
            return;
        }
        if alpha_blend && self.format() == ImageFormat::Rgba {
            self.composite_with(src, x, y, over);
        } else {
            self.composite_with(src, x, y, |_, s| s);
        }
    }

    /// Alpha-blended paste of `src` with its r, g, b multiplied by `tint`.
    ///
    /// Both bitmaps must be RGBA; anything else is a logged no-op.
    pub fn paste_and_shade(&mut self, src: &Bitmap, x: i32, y: i32, tint: Color) {
        if src.format() != ImageFormat::Rgba || self.format() != ImageFormat::Rgba {
            tracing::warn!(
                src = ?src.format(),
                dst = ?self.format(),
                "paste_and_shade skipped: both bitmaps must be RGBA"
            );
            return;
        }
        self.composite_with(src, x, y, |d, s| over(d, s * tint));
    }

    /// Multiply every pixel's r, g, b and a by the matching channel of `tint`.
    pub fn shade(&mut self, tint: Color) {
        if self.format() != ImageFormat::Rgba {
            tracing::warn!(format = ?self.format(), "shade skipped: bitmap is not RGBA");
            return;
        }
        for p in self.pixels_mut() {
            *p = Color::rgba(p.r * tint.r, p.g * tint.g, p.b * tint.b, p.a * tint.a);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/composite.rs"]
mod tests;
