use super::*;

fn rgba(w: u32, h: u32, c: Color) -> Bitmap {
    Bitmap::new(c, ImageFormat::Rgba, w, h)
}

#[test]
fn mismatched_formats_leave_destination_unchanged() {
    let mut dst = rgba(4, 4, Color::WHITE);
    let before = dst.clone();
    let src = Bitmap::new(Color::RED, ImageFormat::Rgb, 2, 2);

    dst.paste(&src, 1, 1, true);
    assert_eq!(dst, before);
    dst.paste(&src, 1, 1, false);
    assert_eq!(dst, before);
}

#[test]
fn opaque_blend_reproduces_source_rgb() {
    let mut dst = rgba(3, 3, Color::rgba(0.2, 0.4, 0.6, 0.3));
    let src = rgba(1, 1, Color::rgba(0.9, 0.1, 0.5, 1.0));
    dst.paste(&src, 1, 1, true);

    let p = dst.pixel(1, 1).unwrap();
    assert_eq!((p.r, p.g, p.b, p.a), (0.9, 0.1, 0.5, 1.0));
    assert_eq!(dst.pixel(0, 0), Some(Color::rgba(0.2, 0.4, 0.6, 0.3)));
}

#[test]
fn half_alpha_blends_and_forces_opaque() {
    let mut dst = rgba(1, 1, Color::rgba(0.0, 0.0, 0.0, 0.5));
    let src = rgba(1, 1, Color::rgba(1.0, 1.0, 1.0, 0.5));
    dst.paste(&src, 0, 0, true);
    assert_eq!(dst.pixel(0, 0), Some(Color::rgba(0.5, 0.5, 0.5, 1.0)));
}

#[test]
fn verbatim_copy_without_blending() {
    let mut dst = rgba(2, 2, Color::WHITE);
    let src = rgba(1, 1, Color::rgba(0.1, 0.2, 0.3, 0.0));
    dst.paste(&src, 1, 0, false);
    assert_eq!(dst.pixel(1, 0), Some(Color::rgba(0.1, 0.2, 0.3, 0.0)));
}

#[test]
fn paste_clips_on_every_side() {
    let mut dst = rgba(3, 3, Color::WHITE);
    let src = rgba(2, 2, Color::RED);

    dst.paste(&src, -1, -1, false);
    assert_eq!(dst.pixel(0, 0), Some(Color::RED));
    assert_eq!(dst.pixel(1, 0), Some(Color::WHITE));

    dst.paste(&src, 2, 2, false);
    assert_eq!(dst.pixel(2, 2), Some(Color::RED));
    assert_eq!(dst.pixels().iter().filter(|p| **p == Color::RED).count(), 2);

    let before = dst.clone();
    dst.paste(&src, 10, 0, false);
    dst.paste(&src, 0, -5, false);
    assert_eq!(dst, before);
}

#[test]
fn paste_and_shade_tints_source() {
    let mut dst = rgba(2, 1, Color::WHITE);
    let mut mask = rgba(2, 1, Color::splat(1.0));
    mask.put_pixel(1, 0, Color::splat(0.0));

    dst.paste_and_shade(&mask, 0, 0, Color::RED);
    assert_eq!(dst.pixel(0, 0), Some(Color::RED));
    assert_eq!(dst.pixel(1, 0), Some(Color::WHITE));
}

#[test]
fn paste_and_shade_requires_rgba() {
    let mut dst = Bitmap::new(Color::WHITE, ImageFormat::Rgb, 2, 2);
    let before = dst.clone();
    dst.paste_and_shade(&rgba(1, 1, Color::BLACK), 0, 0, Color::RED);
    assert_eq!(dst, before);
}

#[test]
fn shade_scales_all_channels() {
    let mut bmp = rgba(1, 1, Color::splat(1.0));
    bmp.shade(Color::rgba(0.5, 0.25, 1.0, 0.5));
    assert_eq!(bmp.pixel(0, 0), Some(Color::rgba(0.5, 0.25, 1.0, 0.5)));

    let mut rgb = Bitmap::new(Color::WHITE, ImageFormat::Rgb, 1, 1);
    rgb.shade(Color::BLACK);
    assert_eq!(rgb.pixel(0, 0), Some(Color::WHITE));
}
