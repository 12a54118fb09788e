use serde::{Deserialize, Serialize};

use crate::core::{ChartGeometry, Coordinate};

/// Estimated advance per tooltip character at the tooltip font size.
pub const TOOLTIP_CHAR_WIDTH_PX: f64 = 5.6;
pub const TOOLTIP_MIN_WIDTH_PX: f64 = 96.0;
pub const TOOLTIP_MAX_WIDTH_PX: f64 = 220.0;
pub const TOOLTIP_HEIGHT_PX: f64 = 18.0;
/// Gap between the active point and the tooltip's left edge.
pub const TOOLTIP_OFFSET_X_PX: f64 = 8.0;
/// Lift of the tooltip's top edge above the active point.
pub const TOOLTIP_OFFSET_Y_PX: f64 = 22.0;
pub const TOOLTIP_TEXT_INSET_X_PX: f64 = 6.0;
pub const TOOLTIP_TEXT_BASELINE_PX: f64 = 12.0;

/// Resolved tooltip box and text anchor for the active point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipLayout {
    pub index: usize,
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub text_x: f64,
    pub text_y: f64,
}

impl TooltipLayout {
    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// Formats `"{label} | {value}{suffix}"` with one decimal.
///
/// `NaN` shows as `0.0`, the same placeholder used for missing samples.
#[must_use]
pub fn tooltip_text(label: &str, value: f64, value_suffix: &str) -> String {
    let value = if value.is_nan() { 0.0 } else { value };
    format!("{label} | {value:.1}{value_suffix}")
}

/// Width heuristic from text length in UTF-16 units, bounded on both sides.
#[must_use]
pub fn tooltip_width(text: &str) -> f64 {
    (text.encode_utf16().count() as f64 * TOOLTIP_CHAR_WIDTH_PX)
        .clamp(TOOLTIP_MIN_WIDTH_PX, TOOLTIP_MAX_WIDTH_PX)
}

/// Places the tooltip right of and above `anchor`, pulled back inside the plot.
///
/// The box never extends past the left/right margins and never rises above
/// the top margin.
#[must_use]
pub fn layout_tooltip(
    index: usize,
    anchor: Coordinate,
    text: String,
    geometry: ChartGeometry,
) -> TooltipLayout {
    let width = tooltip_width(&text);
    let min_left = geometry.plot_left();
    let max_left = (geometry.plot_right() - width).max(min_left);
    let requested_left = anchor.x + TOOLTIP_OFFSET_X_PX;
    let x = if requested_left.is_finite() {
        requested_left.clamp(min_left, max_left)
    } else {
        min_left
    };
    let y = (anchor.y - TOOLTIP_OFFSET_Y_PX).max(geometry.plot_top());

    TooltipLayout {
        index,
        text,
        x,
        y,
        width,
        height: TOOLTIP_HEIGHT_PX,
        text_x: x + TOOLTIP_TEXT_INSET_X_PX,
        text_y: y + TOOLTIP_TEXT_BASELINE_PX,
    }
}

#[cfg(test)]
mod tests {
    use super::{TOOLTIP_MAX_WIDTH_PX, TOOLTIP_MIN_WIDTH_PX, tooltip_text, tooltip_width};

    #[test]
    fn text_uses_one_decimal_and_suffix() {
        assert_eq!(tooltip_text("09:00", 12.345, " ms"), "09:00 | 12.3 ms");
        assert_eq!(tooltip_text("Point 1", f64::NAN, "%"), "Point 1 | 0.0%");
    }

    #[test]
    fn width_is_bounded() {
        assert_eq!(tooltip_width("a"), TOOLTIP_MIN_WIDTH_PX);
        assert_eq!(tooltip_width(&"x".repeat(200)), TOOLTIP_MAX_WIDTH_PX);
        assert!((tooltip_width(&"x".repeat(20)) - 112.0).abs() < 1e-9);
    }

    #[test]
    fn width_counts_utf16_units() {
        assert!((tooltip_width(&"é".repeat(20)) - 112.0).abs() < 1e-9);
        assert_eq!(tooltip_width(&"\u{1F4C8}".repeat(20)), TOOLTIP_MAX_WIDTH_PX);
        assert!((tooltip_width(&"\u{1F4C8}".repeat(10)) - 112.0).abs() < 1e-9);
    }
}
