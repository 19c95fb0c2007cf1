use std::path::Path;

use crate::{
    document::model::Document,
    foundation::error::DinkyResult,
    layout::engine::{RenderHandle, render_node},
    raster::bitmap::Bitmap,
    render::opts::RenderOpts,
    text::catalog::FontCatalog,
};

/// Build the font catalog described by `opts`.
///
/// Registers `opts.font_path` (or the system sans-serif face) under `opts.font_name`.
pub fn prepare_fonts(opts: &RenderOpts) -> DinkyResult<FontCatalog> {
    opts.validate()?;
    let mut fonts = FontCatalog::new();
    match &opts.font_path {
        Some(path) => fonts.load(&opts.font_name, path, opts.font_size())?,
        None => fonts.load_system(&opts.font_name, opts.font_size())?,
    }
    Ok(fonts)
}

/// Initial handle for a render with `opts`.
pub fn root_handle(opts: &RenderOpts) -> RenderHandle {
    RenderHandle {
        font: opts.font_name.clone(),
        color: opts.text_color,
        background: opts.background,
        ..RenderHandle::new(opts.pixel_size())
    }
}

/// Lay out and rasterize a parsed document.
///
/// The page is `15 * pixel_size` wide and as tall as its content. Options that fail
/// [`RenderOpts::validate`] are rejected before layout.
#[tracing::instrument(level = "debug", skip_all, fields(title = %doc.title))]
pub fn render_document(
    doc: &Document,
    fonts: &FontCatalog,
    opts: &RenderOpts,
) -> DinkyResult<Bitmap> {
    opts.validate()?;
    let handle = root_handle(opts);
    let width = i32::try_from(handle.min_width).unwrap_or(i32::MAX);
    let page = render_node(&doc.body, width, &handle, fonts)?;
    tracing::debug!(width = page.width(), height = page.height(), "page rendered");
    Ok(page)
}

/// Parse `src` into an untitled document and render it.
pub fn render_markup(src: &str, fonts: &FontCatalog, opts: &RenderOpts) -> DinkyResult<Bitmap> {
    let mut doc = Document::default();
    doc.parse(src)?;
    render_document(&doc, fonts, opts)
}

/// Render `doc` and encode the page to `out` (format from the extension).
pub fn render_to_file(
    doc: &Document,
    fonts: &FontCatalog,
    opts: &RenderOpts,
    out: impl AsRef<Path>,
) -> DinkyResult<Bitmap> {
    let page = render_document(doc, fonts, opts)?;
    page.write(out)?;
    Ok(page)
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
