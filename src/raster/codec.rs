use std::path::Path;

use anyhow::Context;

use crate::foundation::error::{DinkyError, DinkyResult};
use crate::raster::bitmap::Bitmap;

/// Interleaved 8-bit image as exchanged with an [`ImageCodec`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Bytes per pixel (1..=4).
    pub channels: u32,
    /// `width * height * channels` bytes, row-major.
    pub bytes: Vec<u8>,
}

/// Compressed image file reader/writer.
pub trait ImageCodec {
    /// Decode the file at `path`.
    fn decode(&self, path: &Path) -> DinkyResult<RawImage>;
    /// Encode `image` to `path`; the container follows the file extension.
    fn encode(&self, path: &Path, image: &RawImage) -> DinkyResult<()>;
}

/// [`ImageCodec`] backed by the `image` crate.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdImageCodec;

impl ImageCodec for StdImageCodec {
    fn decode(&self, path: &Path) -> DinkyResult<RawImage> {
        if !path.exists() {
            return Err(DinkyError::resource_missing(path.display().to_string()));
        }
        let img = image::open(path).with_context(|| format!("decode image '{}'", path.display()))?;
        let (width, height) = (img.width(), img.height());
        let (channels, bytes) = if img.color().has_alpha() {
            (4, img.to_rgba8().into_raw())
        } else {
            (3, img.to_rgb8().into_raw())
        };
        Ok(RawImage {
            width,
            height,
            channels,
            bytes,
        })
    }

    fn encode(&self, path: &Path, raw: &RawImage) -> DinkyResult<()> {
        let color = match raw.channels {
            1 => image::ExtendedColorType::L8,
            2 => image::ExtendedColorType::La8,
            3 => image::ExtendedColorType::Rgb8,
            4 => image::ExtendedColorType::Rgba8,
            n => return Err(DinkyError::codec(format!("cannot encode {n} channels"))),
        };
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output dir '{}'", parent.display()))?;
        }
        image::save_buffer(path, &raw.bytes, raw.width, raw.height, color)
            .with_context(|| format!("encode image '{}'", path.display()))?;
        Ok(())
    }
}

impl Bitmap {
    /// Decode `path` with `codec`.
    pub fn load_with(codec: &dyn ImageCodec, path: impl AsRef<Path>) -> DinkyResult<Bitmap> {
        let raw = codec.decode(path.as_ref())?;
        Bitmap::from_raw(raw.width, raw.height, raw.channels, &raw.bytes)
    }

    /// Encode to `path` with `codec`, using the declared format's channels.
    pub fn write_with(&self, codec: &dyn ImageCodec, path: impl AsRef<Path>) -> DinkyResult<()> {
        let raw = RawImage {
            width: self.width(),
            height: self.height(),
            channels: self.channels(),
            bytes: self.flat_bytes(),
        };
        codec.encode(path.as_ref(), &raw)
    }

    /// Decode `path` with [`StdImageCodec`].
    pub fn load(path: impl AsRef<Path>) -> DinkyResult<Bitmap> {
        Self::load_with(&StdImageCodec, path)
    }

    /// Encode to `path` with [`StdImageCodec`].
    pub fn write(&self, path: impl AsRef<Path>) -> DinkyResult<()> {
        self.write_with(&StdImageCodec, path)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/codec.rs"]
mod tests;
