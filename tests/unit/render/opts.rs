use super::*;

#[test]
fn defaults_follow_pixel_density() {
    let opts = RenderOpts::default();
    assert_eq!(opts.pixel_size(), 42);
    assert_eq!(opts.font_size(), 21.0);
    assert_eq!(opts.min_width(), 630);
    assert_eq!(opts.font_name, "default");
    assert_eq!(opts.text_color, Color::BLACK);
    assert_eq!(opts.background, Color::WHITE);
}

#[test]
fn from_path_fills_missing_fields() {
    let dir = std::env::temp_dir().join(format!("dinky_opts_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("opts.json");
    std::fs::write(&path, r##"{"pixel_density": 1, "text_color": "#ff0000"}"##).unwrap();

    let opts = RenderOpts::from_path(&path).unwrap();
    assert_eq!(opts.pixel_size(), 14);
    assert_eq!(opts.text_color, Color::RED);
    assert_eq!(opts.font_path, None);
    assert_eq!(opts.background, Color::WHITE);

    std::fs::write(&path, "{ not json").unwrap();
    assert!(RenderOpts::from_path(&path).is_err());
    assert!(RenderOpts::from_path(dir.join("absent.json")).is_err());

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn density_is_bounded() {
    let huge = RenderOpts {
        pixel_density: u32::MAX,
        ..RenderOpts::default()
    };
    assert_eq!(huge.pixel_size(), u32::MAX);
    assert_eq!(huge.min_width(), u32::MAX);
    assert!(huge.validate().is_err());

    let zero = RenderOpts {
        pixel_density: 0,
        ..RenderOpts::default()
    };
    assert!(zero.validate().is_err());

    let max = RenderOpts {
        pixel_density: MAX_PIXEL_DENSITY,
        ..RenderOpts::default()
    };
    assert!(max.validate().is_ok());
}
