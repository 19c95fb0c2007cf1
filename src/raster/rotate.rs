use crate::foundation::color::Color;
use crate::raster::bitmap::Bitmap;

// Absorbs trig error so exact extents (right angles, zero) do not gain a pixel.
const EXTENT_SLACK: f64 = 1e-6;

impl Bitmap {
    /// Rotate by `angle` radians around the center.
    ///
    /// Every source pixel is mapped forward through polar coordinates and rounded to the
    /// nearest destination pixel on a transparent canvas. Each canvas side is the ceiling of the
    /// larger rotated diagonal extent, so pixels that round past its edge are dropped rather than wrapped.
    pub fn rotate(&self, angle: f32) -> Bitmap {
        let (w, h) = (f64::from(self.width()), f64::from(self.height()));
        let angle = f64::from(angle);
        let diag = (w * w + h * h).sqrt();
        let corner = h.atan2(w);

        let extent = |f: fn(f64) -> f64| {
            let a = f(corner + angle).abs();
            let b = f(angle - corner).abs();
            (a.max(b) * diag - EXTENT_SLACK).ceil().max(0.0) as u32
        };
        let new_w = extent(f64::cos);
        let new_h = extent(f64::sin);

        let mut out = Bitmap::new(Color::TRANSPARENT, self.format(), new_w, new_h);
        let (cx, cy) = ((w - 1.0) * 0.5, (h - 1.0) * 0.5);
        let (ncx, ncy) = ((f64::from(new_w) - 1.0) * 0.5, (f64::from(new_h) - 1.0) * 0.5);

        for y in 0..self.height() {
            for x in 0..self.width() {
                let rx = f64::from(x) - cx;
                let ry = f64::from(y) - cy;
                let radius = (rx * rx + ry * ry).sqrt();
                let theta = ry.atan2(rx) + angle;

                let fx = (theta.cos() * radius + ncx).round() as i64;
                let fy = (theta.sin() * radius + ncy).round() as i64;
                out.put_pixel(fx, fy, self.pixels()[self.index(x, y)]);
            }
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/rotate.rs"]
mod tests;
