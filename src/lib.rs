//! dinky turns a compact document markup into a raster page.
//!
//! # Pipeline overview
//!
//! 1. **Parse**: markup text `->` [`Node`] tree, attached to a [`Document`]
//! 2. **Layout**: each node renders into its own [`Bitmap`]; panels stack children vertically
//!    and text nodes word-wrap into the available width
//! 3. **Encode**: the page bitmap is written through an [`ImageCodec`] (PNG by default)
//!
//! # Markup
//!
//! - `[ ... ]` opens a child node; `[[` and `]]` are literal brackets.
//! - `%TYPE key:value ...%` sets the node type (`TITLE`, `SUBTITLE`, `TEXT`, `CARD-VIDEO`) and
//!   media parameters. Bare numeric values get a `rem` unit.
//! - `!key=value` or `!key` sets a style. Layout reads `m` / `s` (horizontal / vertical margin
//!   in layout units), `ln` (line spacing), `color`, `bg`, `font` and `border`.
//! - `'...'` quotes a literal so none of the above is structural inside it.
//! - Everything else is text; runs of spaces collapse to one.
//!
//! ```no_run
//! let fonts = dinky::prepare_fonts(&dinky::RenderOpts::default())?;
//! let page = dinky::render_markup(
//!     "[%title v:'Hi'%] [Hello world]",
//!     &fonts,
//!     &dinky::RenderOpts::default(),
//! )?;
//! page.write("hello.png")?;
//! # Ok::<(), dinky::DinkyError>(())
//! ```
#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod document;
mod foundation;
mod layout;
mod markup;
mod raster;
mod render;
mod text;

pub use document::model::{Document, DocumentType, LayoutMode, Settings};
pub use document::node::{Node, NodeType};
pub use foundation::color::Color;
pub use foundation::core::{Rect, Size};
pub use foundation::error::{DinkyError, DinkyResult};
pub use layout::engine::{RenderHandle, render_node};
pub use layout::flow::{Flow, FlowBox, Placement, wrap};
pub use markup::parser::parse;
pub use markup::scan::{find_block_end, find_unquoted, parse_literal_param, split_unquoted};
pub use markup::serialize::to_markup;
pub use raster::bitmap::{Bitmap, ImageFormat};
pub use raster::codec::{ImageCodec, RawImage, StdImageCodec};
pub use raster::composite::over;
pub use render::opts::{MAX_PIXEL_DENSITY, RenderOpts};
pub use render::pipeline::{
    prepare_fonts, render_document, render_markup, render_to_file, root_handle,
};
pub use text::catalog::FontCatalog;
pub use text::font::{ASCII_RANGE, FALLBACK_CHAR, Font, Glyph};
