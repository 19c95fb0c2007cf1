//! Integer raster shapes drawn straight into a [`Bitmap`].
//!
//! Pixels are overwritten, not blended. Everything clips to the bitmap bounds.

use crate::foundation::color::Color;
use crate::raster::bitmap::Bitmap;

impl Bitmap {
    /// Bresenham line between two inclusive endpoints.
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        let (mut x, mut y) = (i64::from(x0), i64::from(y0));
        let (x1, y1) = (i64::from(x1), i64::from(y1));
        let dx = (x1 - x).abs();
        let dy = -(y1 - y).abs();
        let sx = if x < x1 { 1 } else { -1 };
        let sy = if y < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.put_pixel(x, y, color);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// One-pixel outline whose corners are `(x, y)` and `(x + w, y + h)`.
    pub fn draw_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) {
        self.draw_line(x, y, x + w, y, color);
        self.draw_line(x, y, x, y + h, color);
        self.draw_line(x + w, y, x + w, y + h, color);
        self.draw_line(x, y + h, x + w, y + h, color);
    }

    /// Solid `w x h` rectangle at `(x, y)`.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) {
        for yy in y..y.saturating_add(h) {
            for xx in x..x.saturating_add(w) {
                self.put_pixel(i64::from(xx), i64::from(yy), color);
            }
        }
    }

    /// Circle outline approximated by a polygon of `verts` segments.
    pub fn draw_circle(&mut self, cx: i32, cy: i32, radius: i32, verts: u32, color: Color) {
        let verts = verts.max(3);
        let r = f64::from(radius);
        let point = |i: u32| {
            let t = std::f64::consts::TAU * f64::from(i) / f64::from(verts);
            (
                (f64::from(cx) + r * t.cos()).round() as i32,
                (f64::from(cy) + r * t.sin()).round() as i32,
            )
        };
        for i in 0..verts {
            let (x0, y0) = point(i);
            let (x1, y1) = point(i + 1);
            self.draw_line(x0, y0, x1, y1, color);
        }
    }

    /// Solid disc centered at `(cx, cy)`.
    pub fn fill_circle(&mut self, cx: i32, cy: i32, radius: i32, color: Color) {
        let r2 = i64::from(radius) * i64::from(radius);
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                if i64::from(dx) * i64::from(dx) + i64::from(dy) * i64::from(dy) <= r2 {
                    self.put_pixel(i64::from(cx + dx), i64::from(cy + dy), color);
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/shapes.rs"]
mod tests;
