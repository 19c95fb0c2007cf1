use super::*;
use crate::foundation::error::DinkyError;
use crate::markup::parser::parse;
use crate::text::font::{Font, Glyph};

// Every printable letter is a 4x10 block with an advance of 5; line height is 13.
fn fonts() -> FontCatalog {
    let mut glyphs = (33u8..127)
        .map(|b| (char::from(b), Glyph::solid(4, 10, 5)))
        .collect::<Vec<_>>();
    glyphs.push((' ', Glyph::blank(5)));
    let mut fonts = FontCatalog::new();
    fonts.insert("default", Font::from_glyphs(10.0, glyphs));
    fonts
}

fn render(src: &str) -> DinkyResult<Bitmap> {
    let handle = RenderHandle::new(10);
    render_node(&parse(src)?, handle.min_width as i32, &handle, &fonts())
}

#[test]
fn handle_defaults() {
    let handle = RenderHandle::new(42);
    assert_eq!(handle.min_width, 630);
    assert_eq!(handle.font, "default");
    assert_eq!(handle.color, Color::BLACK);
}

#[test]
fn margins_scale_with_pixel_size() {
    let node = parse("!m=1.5 !s=0.25 x").unwrap();
    assert_eq!(RenderHandle::new(10).margins(&node), (15, 3));
}

#[test]
fn single_line_text() {
    let bmp = render("[Hello world]").unwrap();
    assert_eq!((bmp.width(), bmp.height()), (150, 13));
    assert_eq!(bmp.pixel(0, 0), Some(Color::BLACK));
    assert_eq!(bmp.pixel(4, 0), Some(Color::WHITE));
    assert_eq!(bmp.pixel(30, 9), Some(Color::BLACK));
    assert_eq!(bmp.pixel(0, 11), Some(Color::WHITE));
}

#[test]
fn long_text_wraps_inside_margins() {
    let bmp = render("[!m=1 Hello Hello Hello Hello Hello]").unwrap();
    assert_eq!(bmp.height(), 26);
    assert_eq!(bmp.pixel(10, 13), Some(Color::BLACK));
    assert_eq!(bmp.pixel(0, 0), Some(Color::WHITE));
}

#[test]
fn wrap_edge_keeps_both_margins_clear() {
    // 20 letters end at x=110; the next word would end at 135, past 150 - 2 * 10.
    let bmp = render("[!m=1 aaaaaaaaaaaaaaaaaaaa aaaa]").unwrap();
    assert_eq!(bmp.height(), 26);
    assert_eq!(bmp.pixel(10, 13), Some(Color::BLACK));
}

#[test]
fn huge_margins_are_clamped_not_fatal() {
    let node = parse("!m=1e10 !s=-1e10 x").unwrap();
    assert_eq!(RenderHandle::new(10).margins(&node), (150, -150));

    let bmp = render("!m=1e10 [x]").unwrap();
    assert_eq!((bmp.width(), bmp.height()), (150, 13));

    let bmp = render("[!s=1e10 x]").unwrap();
    assert_eq!(bmp.height(), 150 + 13);

    let bmp = render("!s=-1e10 [x]").unwrap();
    assert_eq!(bmp.height(), 0);
}

#[test]
fn line_spacing_style() {
    let bmp = render("[!ln=2 a]").unwrap();
    assert_eq!(bmp.height(), 23);
}

#[test]
fn panel_stacks_children_below_vertical_margin() {
    let bmp = render("!s=1 [one] [two]").unwrap();
    assert_eq!(bmp.height(), 36);
    assert_eq!(bmp.pixel(0, 0), Some(Color::WHITE));
    assert_eq!(bmp.pixel(0, 10), Some(Color::BLACK));
    assert_eq!(bmp.pixel(0, 23), Some(Color::BLACK));
}

#[test]
fn title_like_nodes_render_empty() {
    let bmp = render("%title v:'Hi'%").unwrap();
    assert_eq!((bmp.width(), bmp.height()), (150, 0));

    let bmp = render("%card-video src:'a.mp4'% !s=2 [ignored child]").unwrap();
    assert_eq!(bmp.height(), 20);
    assert!(bmp.pixels().iter().all(|p| *p == Color::WHITE));
}

#[test]
fn color_style_tints_subtree() {
    let bmp = render("!color=#ff0000 [Hi] [!color=#0000ff Hi]").unwrap();
    assert_eq!(bmp.pixel(0, 0), Some(Color::RED));
    assert_eq!(bmp.pixel(0, 13), Some(Color::BLUE));
}

#[test]
fn invalid_color_keeps_inherited_ink() {
    let bmp = render("[!color=nope Hi]").unwrap();
    assert_eq!(bmp.pixel(0, 0), Some(Color::BLACK));
}

#[test]
fn background_and_border() {
    let bmp = render("%title% !s=1 !bg=#0000ff !border=true").unwrap();
    assert_eq!((bmp.width(), bmp.height()), (150, 10));
    assert_eq!(bmp.pixel(5, 5), Some(Color::BLUE));
    assert_eq!(bmp.pixel(0, 0), Some(Color::BLACK));
    assert_eq!(bmp.pixel(149, 9), Some(Color::BLACK));
}

#[test]
fn unknown_font_fails_the_render() {
    assert!(matches!(
        render("[!font=serif Hi]"),
        Err(DinkyError::ResourceMissing(_))
    ));
    let handle = RenderHandle::new(10);
    let tree = parse("[Hi]").unwrap();
    assert!(matches!(
        render_node(&tree, 150, &handle, &FontCatalog::new()),
        Err(DinkyError::ResourceMissing(_))
    ));
}
