use serde::{Deserialize, Serialize};

use crate::render::Color;

const fn hex_rgb(red: u8, green: u8, blue: u8) -> Color {
    Color::rgb(
        red as f64 / 255.0,
        green as f64 / 255.0,
        blue as f64 / 255.0,
    )
}

/// Fixed visual constants of the sparkline.
///
/// Only the series color is host-configurable; everything else here keeps
/// every chart on the dashboard visually identical.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SparklineStyle {
    pub axis_color: Color,
    pub axis_width: f64,
    pub grid_color: Color,
    pub grid_width: f64,
    pub tick_label_color: Color,
    pub tick_label_font_size_px: f64,
    pub tick_label_gap_px: f64,
    pub tick_label_baseline_shift_px: f64,
    pub line_width: f64,
    pub segment_width: f64,
    pub glow_blur_std_deviation: f64,
    pub marker_radius: f64,
    pub active_marker_radius: f64,
    pub guide_line_opacity: f64,
    pub guide_line_width: f64,
    pub tooltip_fill_color: Color,
    pub tooltip_corner_radius: f64,
    pub tooltip_text_color: Color,
    pub tooltip_font_size_px: f64,
    pub caption_color: Color,
    pub caption_font_size_px: f64,
    pub x_caption_bottom_inset_px: f64,
    pub y_caption_x: f64,
    pub empty_state_message: String,
}

impl Default for SparklineStyle {
    fn default() -> Self {
        Self {
            axis_color: hex_rgb(0xcb, 0xd5, 0xe1),
            axis_width: 1.0,
            grid_color: hex_rgb(0xe2, 0xe8, 0xf0),
            grid_width: 1.0,
            tick_label_color: hex_rgb(0x64, 0x74, 0x8b),
            tick_label_font_size_px: 8.0,
            tick_label_gap_px: 4.0,
            tick_label_baseline_shift_px: 3.0,
            line_width: 2.75,
            segment_width: 3.0,
            glow_blur_std_deviation: 1.2,
            marker_radius: 2.2,
            active_marker_radius: 4.0,
            guide_line_opacity: 0.25,
            guide_line_width: 1.0,
            tooltip_fill_color: hex_rgb(0x0f, 0x17, 0x2a).with_alpha(0.88),
            tooltip_corner_radius: 4.0,
            tooltip_text_color: hex_rgb(0xff, 0xff, 0xff),
            tooltip_font_size_px: 8.5,
            caption_color: hex_rgb(0x64, 0x74, 0x8b),
            caption_font_size_px: 9.0,
            x_caption_bottom_inset_px: 4.0,
            y_caption_x: 12.0,
            empty_state_message: "No trend data yet".to_owned(),
        }
    }
}
