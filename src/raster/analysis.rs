use crate::foundation::core::Rect;
use crate::raster::bitmap::Bitmap;

impl Bitmap {
    fn opaque_at(&self, x: u32, y: u32) -> bool {
        self.pixels()[self.index(x, y)].a > 0.0
    }

    fn row_has_ink(&self, y: u32) -> bool {
        (0..self.width()).any(|x| self.opaque_at(x, y))
    }

    /// Smallest rectangle enclosing every pixel with non-zero alpha.
    ///
    /// `None` for a fully transparent (or empty) bitmap.
    pub fn autocrop(&self) -> Option<Rect> {
        let mut bounds: Option<(u32, u32, u32, u32)> = None;
        for y in 0..self.height() {
            for x in 0..self.width() {
                if !self.opaque_at(x, y) {
                    continue;
                }
                bounds = Some(match bounds {
                    None => (x, y, x, y),
                    Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
                });
            }
        }
        bounds.map(|(x0, y0, x1, y1)| Rect::from_inclusive(x0, y0, x1, y1))
    }

    /// Connected ink regions grouped by row band.
    ///
    /// Rows containing ink form maximal vertical bands. Inside each band, columns containing
    /// ink form maximal horizontal segments, and each segment is shrunk to the tight bounding
    /// box of its ink. Bands are ordered top to bottom, boxes left to right.
    pub fn find_boxes(&self) -> Vec<Vec<Rect>> {
        let mut bands = Vec::new();
        for (top, bottom) in runs(self.height(), |y| self.row_has_ink(y)) {
            let column_has_ink = |x: u32| (top..bottom).any(|y| self.opaque_at(x, y));
            let boxes = runs(self.width(), column_has_ink)
                .into_iter()
                .filter_map(|(left, right)| self.tight_box(left, top, right, bottom))
                .collect::<Vec<_>>();
            if !boxes.is_empty() {
                bands.push(boxes);
            }
        }
        bands
    }

    fn tight_box(&self, left: u32, top: u32, right: u32, bottom: u32) -> Option<Rect> {
        let mut bounds: Option<(u32, u32, u32, u32)> = None;
        for y in top..bottom {
            for x in left..right {
                if self.opaque_at(x, y) {
                    bounds = Some(match bounds {
                        None => (x, y, x, y),
                        Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
                    });
                }
            }
        }
        bounds.map(|(x0, y0, x1, y1)| Rect::from_inclusive(x0, y0, x1, y1))
    }
}

/// Maximal half-open runs `[start, end)` of indices in `0..len` for which `hit` holds.
fn runs(len: u32, hit: impl Fn(u32) -> bool) -> Vec<(u32, u32)> {
    let mut out = Vec::new();
    let mut start = None;
    for i in 0..len {
        match (hit(i), start) {
            (true, None) => start = Some(i),
            (false, Some(s)) => {
                out.push((s, i));
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        out.push((s, len));
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/raster/analysis.rs"]
mod tests;
