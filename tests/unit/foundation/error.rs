use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        DinkyError::parse(7, "x")
            .to_string()
            .contains("parse error at byte 7:")
    );
    assert!(
        DinkyError::resource_missing("x")
            .to_string()
            .contains("resource missing:")
    );
    assert!(DinkyError::render("x").to_string().contains("render error:"));
    assert!(DinkyError::codec("x").to_string().contains("codec error:"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = DinkyError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
