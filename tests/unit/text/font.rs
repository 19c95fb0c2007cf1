use super::*;

fn block_font() -> Font {
    Font::from_glyphs(
        12.0,
        [
            ('A', Glyph::solid(4, 6, 5)),
            ('b', Glyph::solid(3, 8, 3)),
            ('?', Glyph::solid(2, 2, 2)),
            (' ', Glyph::blank(2)),
        ],
    )
}

#[test]
fn baseline_is_tallest_bearing() {
    let font = block_font();
    assert_eq!(font.baseline(), 8);
    assert_eq!(font.len(), 4);
    assert_eq!(Font::from_glyphs(1.0, []).baseline(), 0);
}

#[test]
fn measure_sums_advances() {
    let font = block_font();
    assert_eq!(font.measure("A"), Size::new(5, 8));
    assert_eq!(font.measure("Ab A"), Size::new(15, 8));
    assert_eq!(font.measure(""), Size::new(0, 8));
}

#[test]
fn unknown_chars_fall_back_to_question_mark() {
    let font = block_font();
    assert_eq!(font.measure("zz").width, 4);

    let bare = Font::from_glyphs(12.0, [('A', Glyph::solid(4, 6, 5))]);
    assert!(bare.glyph('z').is_none());
    assert_eq!(bare.measure("AzA").width, 10);
}

#[test]
fn solid_glyph_advance_covers_mask() {
    assert_eq!(Glyph::solid(6, 2, 3).advance, 6);
}

#[test]
fn draw_aligns_glyphs_on_baseline() {
    let font = block_font();
    let mut target = Bitmap::new(Color::WHITE, ImageFormat::Rgba, 20, 12);
    font.draw("Ab", 1, 2, Color::RED, &mut target);

    // 'A' is 6 tall under a baseline of 8, so it starts two rows down.
    assert_eq!(target.pixel(1, 4), Some(Color::RED));
    assert_eq!(target.pixel(1, 3), Some(Color::WHITE));
    assert_eq!(target.pixel(4, 9), Some(Color::RED));
    assert_eq!(target.pixel(5, 9), Some(Color::WHITE));
    // 'b' follows after A's advance of 5 and fills the full height.
    assert_eq!(target.pixel(6, 2), Some(Color::RED));
    assert_eq!(target.pixel(8, 9), Some(Color::RED));
    assert_eq!(target.pixel(9, 9), Some(Color::WHITE));
}

#[test]
fn invalid_font_data_is_an_error() {
    assert!(Font::from_bytes(b"not a font", 0, 12.0).is_err());
}

#[test]
fn missing_font_file_is_resource_missing() {
    let err = Font::load("/definitely/not/here.ttf", 12.0).unwrap_err();
    assert!(matches!(err, DinkyError::ResourceMissing(_)));
}

#[test]
fn system_font_rasterizes_ascii_when_available() {
    let mut db = fontdb::Database::new();
    db.load_system_fonts();
    let Some(id) = db.faces().next().map(|f| f.id) else {
        return;
    };
    let font = db
        .with_face_data(id, |data, index| Font::from_bytes(data, index, 12.0))
        .unwrap()
        .unwrap();
    if font.glyph('A').is_none() {
        return;
    }
    assert!(font.baseline() > 0);
    let a = font.measure("A");
    assert!(a.width > 0);
    assert_eq!(font.measure("AA").width, a.width * 2);
}
