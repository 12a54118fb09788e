use approx::assert_abs_diff_eq;
use sparkline_rs::api::{
    TOOLTIP_HEIGHT_PX, TOOLTIP_MIN_WIDTH_PX, layout_tooltip, tooltip_text, tooltip_width,
};
use sparkline_rs::core::{Coordinate, SPARKLINE_GEOMETRY};

#[test]
fn tooltip_floats_right_and_above_the_point() {
    let layout = layout_tooltip(
        3,
        Coordinate::new(100.0, 60.0),
        tooltip_text("Point 4", 42.0, "%"),
        SPARKLINE_GEOMETRY,
    );
    assert_eq!(layout.index, 3);
    assert_eq!(layout.text, "Point 4 | 42.0%");
    assert_abs_diff_eq!(layout.x, 108.0, epsilon = 1e-9);
    assert_abs_diff_eq!(layout.y, 38.0, epsilon = 1e-9);
    assert_eq!(layout.width, TOOLTIP_MIN_WIDTH_PX);
    assert_eq!(layout.height, TOOLTIP_HEIGHT_PX);
    assert_abs_diff_eq!(layout.text_x, 114.0, epsilon = 1e-9);
    assert_abs_diff_eq!(layout.text_y, 50.0, epsilon = 1e-9);
}

#[test]
fn tooltip_is_pulled_back_at_the_right_margin() {
    let layout = layout_tooltip(
        9,
        Coordinate::new(312.0, 8.0),
        tooltip_text("Point 10", 10.0, ""),
        SPARKLINE_GEOMETRY,
    );
    assert_abs_diff_eq!(layout.x, 312.0 - TOOLTIP_MIN_WIDTH_PX, epsilon = 1e-9);
    assert_abs_diff_eq!(layout.right(), 312.0, epsilon = 1e-9);
}

#[test]
fn tooltip_is_pinned_to_the_top_margin() {
    let layout = layout_tooltip(
        0,
        Coordinate::new(34.0, 10.0),
        "x".to_owned(),
        SPARKLINE_GEOMETRY,
    );
    assert_eq!(layout.y, 8.0);
    assert_abs_diff_eq!(layout.x, 42.0, epsilon = 1e-9);
}

#[test]
fn long_text_widens_up_to_the_cap() {
    let text = "Mar 1, 2026, 10:30:05 AM | 98.7%".to_owned();
    let expected = tooltip_width(&text);
    assert!(expected > TOOLTIP_MIN_WIDTH_PX);
    let layout = layout_tooltip(0, Coordinate::new(300.0, 50.0), text, SPARKLINE_GEOMETRY);
    assert_eq!(layout.width, expected);
    assert!(layout.right() <= 312.0 + 1e-9);
    assert!(layout.x >= 34.0);
}
