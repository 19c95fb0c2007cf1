use std::borrow::Cow;

use crate::document::node::{Node, NodeType};
use crate::foundation::{color::Color, error::DinkyResult};
use crate::layout::flow::{FlowBox, wrap};
use crate::raster::bitmap::{Bitmap, ImageFormat};
use crate::text::catalog::FontCatalog;

/// Reference string whose measurement sets word spacing and glyph height.
const REFERENCE_GLYPH: &str = "A";

/// Tallest canvas a single node may allocate.
const MAX_CANVAS_HEIGHT: i32 = 1 << 16;

/// Inherited render state threaded down the node tree.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderHandle {
    /// Catalog key of the current font.
    pub font: String,
    /// Current draw color.
    pub color: Color,
    /// Fill for new canvases.
    pub background: Color,
    /// Layout unit; margins are multiples of it.
    pub pixel_size: u32,
    /// Width of every node canvas.
    pub min_width: u32,
}

impl RenderHandle {
    /// Default handle: font `"default"`, black on white, `min_width = 15 * pixel_size`.
    pub fn new(pixel_size: u32) -> Self {
        Self {
            font: "default".to_owned(),
            color: Color::BLACK,
            background: Color::WHITE,
            pixel_size,
            min_width: pixel_size.saturating_mul(15),
        }
    }

    /// Handle for `node`'s subtree, applying its `color=`, `bg=` and `font=` styles.
    fn scoped(&self, node: &Node) -> Cow<'_, Self> {
        let color = style_color(node, "color");
        let background = style_color(node, "bg");
        let font = node.style_str("font").filter(|f| !f.is_empty());
        if color.is_none() && background.is_none() && font.is_none() {
            return Cow::Borrowed(self);
        }

        let mut scoped = self.clone();
        if let Some(c) = color {
            scoped.color = c;
        }
        if let Some(c) = background {
            scoped.background = c;
        }
        if let Some(f) = font {
            scoped.font = f.to_owned();
        }
        Cow::Owned(scoped)
    }

    /// `(m * pixel_size, s * pixel_size)` rounded to whole pixels and clamped to
    /// `±min_width`.
    pub fn margins(&self, node: &Node) -> (i32, i32) {
        let unit = self.pixel_size as f32;
        let bound = i32::try_from(self.min_width).unwrap_or(i32::MAX);
        let scaled =
            |key: &str| ((node.style_number(key) * unit).round() as i32).clamp(-bound, bound);
        (scaled("m"), scaled("s"))
    }
}

/// Render `node` and its subtree into a new bitmap.
///
/// `available_width` is the horizontal space granted by the parent; text wraps inside it.
pub fn render_node(
    node: &Node,
    available_width: i32,
    handle: &RenderHandle,
    fonts: &FontCatalog,
) -> DinkyResult<Bitmap> {
    let handle = handle.scoped(node);
    match node.node_type {
        NodeType::Panel => render_panel(node, &node.children, available_width, &handle, fonts),
        NodeType::Text => render_text(node, available_width, &handle, fonts),
        NodeType::Title | NodeType::Subtitle | NodeType::CardVideo => {
            render_panel(node, &[], available_width, &handle, fonts)
        }
    }
}

fn style_color(node: &Node, key: &str) -> Option<Color> {
    let hex = node.style_str(key)?;
    match Color::from_hex(hex) {
        Ok(c) => Some(c),
        Err(err) => {
            tracing::warn!(key, %hex, %err, "ignoring invalid color style");
            None
        }
    }
}

fn blank_canvas(handle: &RenderHandle, height: i32) -> Bitmap {
    Bitmap::new(
        handle.background,
        ImageFormat::Rgba,
        handle.min_width,
        height.clamp(0, MAX_CANVAS_HEIGHT) as u32,
    )
}

fn finish(node: &Node, handle: &RenderHandle, canvas: &mut Bitmap) {
    if node.style_bool("border") && !canvas.is_empty() {
        let (w, h) = (canvas.width() as i32, canvas.height() as i32);
        canvas.draw_rect(0, 0, w - 1, h - 1, handle.color);
    }
}

fn render_panel(
    node: &Node,
    children: &[Node],
    available_width: i32,
    handle: &RenderHandle,
    fonts: &FontCatalog,
) -> DinkyResult<Bitmap> {
    let (mx, my) = handle.margins(node);
    let inner = available_width.saturating_sub(mx.saturating_mul(2));

    let products = children
        .iter()
        .map(|child| render_node(child, inner, handle, fonts))
        .collect::<DinkyResult<Vec<_>>>()?;

    let height = products
        .iter()
        .fold(my, |h, p| h.saturating_add(p.height() as i32));
    let mut canvas = blank_canvas(handle, height);
    let mut y = my;
    for product in &products {
        canvas.paste(product, 0, y, true);
        y = y.saturating_add(product.height() as i32);
    }
    tracing::debug!(
        kind = ?node.node_type,
        children = products.len(),
        height,
        "panel stacked"
    );

    finish(node, handle, &mut canvas);
    Ok(canvas)
}

fn render_text(
    node: &Node,
    available_width: i32,
    handle: &RenderHandle,
    fonts: &FontCatalog,
) -> DinkyResult<Bitmap> {
    let font = fonts.get(&handle.font)?;
    let (mx, my) = handle.margins(node);

    let reference = font.measure(REFERENCE_GLYPH);
    let glyph_height = reference.height as f32;
    let ln = node.style_number("ln");
    let spacing = if ln != 0.0 { ln + 0.3 } else { 1.3 };
    let line_height = ((spacing * glyph_height).round() as i32).clamp(0, MAX_CANVAS_HEIGHT);

    let frame = FlowBox {
        left: mx,
        top: my,
        right: available_width.saturating_sub(mx.saturating_mul(2)),
        line_height,
        space: reference.width as i32,
    };
    let flow = wrap(
        node.text
            .split_whitespace()
            .map(|word| (word, font.measure(word).width)),
        frame,
    );

    let lines = i32::try_from(flow.lines).unwrap_or(i32::MAX);
    let height = my.saturating_add(lines.saturating_mul(line_height));
    let mut canvas = blank_canvas(handle, height);
    for placed in &flow.words {
        font.draw(placed.word, placed.x, placed.y, handle.color, &mut canvas);
    }
    tracing::debug!(
        words = flow.words.len(),
        lines = flow.lines,
        line_height,
        "text flowed"
    );

    finish(node, handle, &mut canvas);
    Ok(canvas)
}

#[cfg(test)]
#[path = "../../tests/unit/layout/engine.rs"]
mod tests;
