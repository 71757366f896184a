use super::*;

// =============================================================
// overlay_style
// =============================================================

#[test]
fn overlay_style_uses_percentage_units() {
    let style = overlay_style(10.5, 20.0, 15.0, 12.5);
    assert!(style.contains("left: 10.5%"));
    assert!(style.contains("top: 20%"));
    assert!(style.contains("width: 15%"));
    assert!(style.contains("height: 12.5%"));
}

#[test]
fn overlay_style_is_absolute_and_unselectable() {
    let style = overlay_style(0.0, 0.0, 1.0, 1.0);
    assert!(style.contains("position: absolute"));
    assert!(style.contains("user-select: none"));
}
