use super::*;
use crate::raster::bitmap::ImageFormat;
use crate::text::font::Glyph;

fn catalog() -> FontCatalog {
    let mut fonts = FontCatalog::new();
    fonts.insert(
        "default",
        Font::from_glyphs(10.0, [('A', Glyph::solid(3, 4, 4)), (' ', Glyph::blank(2))]),
    );
    fonts
}

#[test]
fn dimensions_use_named_font() {
    let fonts = catalog();
    assert!(fonts.contains("default"));
    assert_eq!(fonts.dimensions("default", "AA").unwrap(), Size::new(8, 4));
}

#[test]
fn unknown_font_is_resource_missing() {
    let fonts = catalog();
    assert!(matches!(
        fonts.dimensions("serif", "A"),
        Err(DinkyError::ResourceMissing(_))
    ));
    let mut target = Bitmap::new(Color::WHITE, ImageFormat::Rgba, 4, 4);
    assert!(fonts.render("serif", "A", 0, 0, Color::BLACK, &mut target).is_err());
}

#[test]
fn render_draws_into_target() {
    let fonts = catalog();
    let mut target = Bitmap::new(Color::WHITE, ImageFormat::Rgba, 10, 6);
    fonts
        .render("default", "A A", 0, 1, Color::BLUE, &mut target)
        .unwrap();
    assert_eq!(target.pixel(0, 1), Some(Color::BLUE));
    assert_eq!(target.pixel(3, 1), Some(Color::WHITE));
    assert_eq!(target.pixel(6, 4), Some(Color::BLUE));
}

#[test]
fn load_reports_missing_files() {
    let mut fonts = FontCatalog::new();
    assert!(matches!(
        fonts.load("x", "/no/such/font.ttf", 12.0),
        Err(DinkyError::ResourceMissing(_))
    ));
    assert!(!fonts.contains("x"));
}
