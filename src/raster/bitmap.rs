use crate::foundation::{
    color::Color,
    core::Rect,
    error::{DinkyError, DinkyResult},
};

/// Declared pixel format of a [`Bitmap`].
///
/// Storage is always full RGBA `f32`; the format only decides channel count and order on
/// import/export and which compositing paths apply.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum ImageFormat {
    /// Red channel only.
    Red,
    /// Green channel only.
    Green,
    /// Blue channel only.
    Blue,
    /// Red + green.
    Rg,
    /// Red, green, blue.
    Rgb,
    /// Red, green, blue, alpha.
    #[default]
    Rgba,
}

impl ImageFormat {
    /// Channel count used for flat export.
    pub fn channels(self) -> u32 {
        match self {
            ImageFormat::Red | ImageFormat::Green | ImageFormat::Blue => 1,
            ImageFormat::Rg => 2,
            ImageFormat::Rgb => 3,
            ImageFormat::Rgba => 4,
        }
    }

    /// Format for an interleaved channel count (1 maps to [`ImageFormat::Red`]).
    pub fn from_channels(channels: u32) -> Option<Self> {
        match channels {
            1 => Some(ImageFormat::Red),
            2 => Some(ImageFormat::Rg),
            3 => Some(ImageFormat::Rgb),
            4 => Some(ImageFormat::Rgba),
            _ => None,
        }
    }
}

/// Row-major buffer of float colors.
///
/// `pixels.len() == width * height` always holds; the buffer is only reachable as a slice so
/// callers cannot change its length.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    format: ImageFormat,
    pixels: Vec<Color>,
}

impl Bitmap {
    /// Allocate a `width x height` bitmap filled with `fill`.
    pub fn new(fill: Color, format: ImageFormat, width: u32, height: u32) -> Self {
        let mut bmp = Self::default();
        bmp.build(fill, format, width, height);
        bmp
    }

    /// Reallocate to `width x height`, fill every pixel and return `self` for chaining.
    pub fn build(
        &mut self,
        fill: Color,
        format: ImageFormat,
        width: u32,
        height: u32,
    ) -> &mut Self {
        self.width = width;
        self.height = height;
        self.format = format;
        self.pixels.clear();
        self.pixels.resize(width as usize * height as usize, fill);
        self
    }

    /// Import interleaved 8-bit data with `channels` bytes per pixel.
    ///
    /// Channels absent from the declared format read as 0, alpha as 1.
    pub fn from_raw(width: u32, height: u32, channels: u32, bytes: &[u8]) -> DinkyResult<Self> {
        let format = ImageFormat::from_channels(channels)
            .ok_or_else(|| DinkyError::codec(format!("unsupported channel count {channels}")))?;
        let expected = width as usize * height as usize * channels as usize;
        if bytes.len() != expected {
            return Err(DinkyError::codec(format!(
                "raw buffer has {} bytes, expected {expected} for {width}x{height}x{channels}",
                bytes.len()
            )));
        }

        let pixels = bytes
            .chunks_exact(channels as usize)
            .map(|px| {
                let c = |i: usize| f32::from(px[i]) / 255.0;
                match format {
                    ImageFormat::Red | ImageFormat::Green | ImageFormat::Blue => {
                        Color::rgb(c(0), 0.0, 0.0)
                    }
                    ImageFormat::Rg => Color::rgb(c(0), c(1), 0.0),
                    ImageFormat::Rgb => Color::rgb(c(0), c(1), c(2)),
                    ImageFormat::Rgba => Color::rgba(c(0), c(1), c(2), c(3)),
                }
            })
            .collect();

        Ok(Self {
            width,
            height,
            format,
            pixels,
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Declared pixel format.
    pub fn format(&self) -> ImageFormat {
        self.format
    }

    /// Channel count of the declared format.
    pub fn channels(&self) -> u32 {
        self.format.channels()
    }

    /// Row-major pixel buffer.
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Mutable row-major pixel buffer.
    pub fn pixels_mut(&mut self) -> &mut [Color] {
        &mut self.pixels
    }

    /// `true` when the bitmap has no pixels.
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub(crate) fn index(&self, x: u32, y: u32) -> usize {
        x as usize + y as usize * self.width as usize
    }

    /// Pixel at `(x, y)`, or `None` outside the bitmap.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[self.index(x, y)])
    }

    /// Overwrite the pixel at `(x, y)`; writes outside the bitmap are ignored.
    pub fn put_pixel(&mut self, x: i64, y: i64, color: Color) {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return;
        }
        let idx = self.index(x as u32, y as u32);
        self.pixels[idx] = color;
    }

    /// Overwrite every pixel with `color`.
    pub fn fill(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    /// Owned copy of the `w x h` region at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the region is not fully inside the bitmap.
    pub fn sub(&self, x: u32, y: u32, w: u32, h: u32) -> Bitmap {
        assert!(
            x + w <= self.width && y + h <= self.height,
            "sub region {x},{y} {w}x{h} exceeds {}x{}",
            self.width,
            self.height
        );
        let mut out = Bitmap::new(Color::splat(0.0), self.format, w, h);
        for row in 0..h {
            let src = self.index(x, y + row);
            let dst = out.index(0, row);
            out.pixels[dst..dst + w as usize].copy_from_slice(&self.pixels[src..src + w as usize]);
        }
        out
    }

    /// [`Bitmap::sub`] over a [`Rect`].
    pub fn sub_rect(&self, rect: Rect) -> Bitmap {
        self.sub(rect.x, rect.y, rect.w, rect.h)
    }

    /// Deep copy of dimensions, format and pixels.
    pub fn copy(&self) -> Bitmap {
        self.clone()
    }

    /// Canvas resize: a white `new_width x new_height` canvas with the previous content at the
    /// origin. No scaling happens.
    pub fn resize(&mut self, new_width: u32, new_height: u32) {
        let previous = std::mem::take(self);
        self.build(Color::WHITE, previous.format, new_width, new_height);
        self.paste(&previous, 0, 0, false);
    }

    /// Serialize to bytes in the declared format's channel order.
    pub fn flat_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.pixels.len() * self.channels() as usize);
        for p in &self.pixels {
            let [r, g, b, a] = p.to_rgba8();
            match self.format {
                ImageFormat::Red => out.push(r),
                ImageFormat::Green => out.push(g),
                ImageFormat::Blue => out.push(b),
                ImageFormat::Rg => out.extend_from_slice(&[r, g]),
                ImageFormat::Rgb => out.extend_from_slice(&[r, g, b]),
                ImageFormat::Rgba => out.extend_from_slice(&[r, g, b, a]),
            }
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/bitmap.rs"]
mod tests;
