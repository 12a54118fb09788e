use crate::core::{
    ChartGeometry, Coordinate, MarkerPoint, NormalizedSeries, ValueDomain, flat_segment,
    segments_between, value_to_y,
};
use crate::interaction::HoverState;
use crate::render::{
    CanvasLayerKind, CirclePrimitive, Color, FilterDef, GroupPrimitive, LayeredCommands, LineCap,
    LinePrimitive, PolylinePrimitive, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive,
};

use super::tooltip_layout::{TooltipLayout, layout_tooltip, tooltip_text};
use super::{SparklineConfig, SparklineStyle};

/// Everything one frame is computed from.
#[derive(Debug, Clone, Copy)]
pub struct FrameInput<'a> {
    pub geometry: ChartGeometry,
    pub config: &'a SparklineConfig,
    pub style: &'a SparklineStyle,
    pub line_color: Color,
    pub series: &'a NormalizedSeries,
    pub domain: ValueDomain,
    pub coordinates: &'a [Coordinate],
    pub markers: &'a [MarkerPoint],
    pub hover: HoverState,
}

/// Placeholder frame for a series with no points.
#[must_use]
pub fn build_empty_frame(geometry: ChartGeometry, style: &SparklineStyle) -> RenderFrame {
    RenderFrame::empty_state(geometry.viewport, style.empty_state_message.clone())
}

/// Tooltip for the effective active point, `None` without coordinates.
#[must_use]
pub fn resolve_tooltip(
    series: &NormalizedSeries,
    coordinates: &[Coordinate],
    hover: HoverState,
    value_suffix: &str,
    geometry: ChartGeometry,
) -> Option<TooltipLayout> {
    let index = hover.effective_index(coordinates.len())?;
    let anchor = coordinates[index];
    let value = series.value_at(index).unwrap_or(0.0);
    let text = tooltip_text(&series.label_at(index), value, value_suffix);
    Some(layout_tooltip(index, anchor, text, geometry))
}

/// Assembles the full drawing description in paint order.
///
/// Pure: identical input yields an identical frame.
#[must_use]
pub fn build_chart_frame(input: &FrameInput<'_>) -> RenderFrame {
    let mut layered = LayeredCommands::default();
    let glow_id = input.config.glow_filter_id();

    append_axes(&mut layered, input);
    append_ticks(&mut layered, input);
    append_series_line(&mut layered, input, &glow_id);
    append_markers(&mut layered, input);
    if input.hover.is_hovering() {
        append_hover_overlay(&mut layered, input);
    }
    append_captions(&mut layered, input);

    let mut frame = RenderFrame::new(input.geometry.viewport).with_def(FilterDef::glow(
        glow_id,
        input.style.glow_blur_std_deviation,
    ));
    frame.commands = layered.flatten();
    frame
}

fn append_axes(layered: &mut LayeredCommands, input: &FrameInput<'_>) {
    let geometry = input.geometry;
    let style = input.style;
    layered.push(
        CanvasLayerKind::Axis,
        LinePrimitive::new(
            geometry.plot_left(),
            geometry.plot_bottom(),
            geometry.plot_right(),
            geometry.plot_bottom(),
            style.axis_width,
            style.axis_color,
        ),
    );
    layered.push(
        CanvasLayerKind::Axis,
        LinePrimitive::new(
            geometry.plot_left(),
            geometry.plot_top(),
            geometry.plot_left(),
            geometry.plot_bottom(),
            style.axis_width,
            style.axis_color,
        ),
    );
}

fn append_ticks(layered: &mut LayeredCommands, input: &FrameInput<'_>) {
    let geometry = input.geometry;
    let style = input.style;
    for tick in &input.config.y_ticks {
        let y = value_to_y(*tick, input.domain, geometry);
        let gridline = LinePrimitive::new(
            geometry.plot_left(),
            y,
            geometry.plot_right(),
            y,
            style.grid_width,
            style.grid_color,
        );
        let label = TextPrimitive::new(
            format!("{tick}"),
            geometry.plot_left() - style.tick_label_gap_px,
            y + style.tick_label_baseline_shift_px,
            style.tick_label_font_size_px,
            style.tick_label_color,
            TextHAlign::Right,
        );
        layered.push(
            CanvasLayerKind::Grid,
            GroupPrimitive::new(
                format!("{}-tick-{tick}", input.config.id),
                vec![gridline.into(), label.into()],
            ),
        );
    }
}

fn append_series_line(layered: &mut LayeredCommands, input: &FrameInput<'_>, glow_id: &str) {
    let style = input.style;
    let color = input.line_color;

    if input.series.padded_from_single() {
        if let Some(first) = input.coordinates.first() {
            let segment = flat_segment(first.y, input.geometry);
            layered.push(
                CanvasLayerKind::Series,
                LinePrimitive::new(
                    segment.x1,
                    segment.y1,
                    segment.x2,
                    segment.y2,
                    style.line_width,
                    color,
                )
                .with_filter(glow_id),
            );
        }
        return;
    }

    if input.config.force_connected_line {
        for segment in segments_between(input.coordinates) {
            layered.push(
                CanvasLayerKind::Series,
                LinePrimitive::new(
                    segment.x1,
                    segment.y1,
                    segment.x2,
                    segment.y2,
                    style.segment_width,
                    color,
                )
                .with_line_cap(LineCap::Round)
                .with_filter(glow_id),
            );
        }
    } else {
        layered.push(
            CanvasLayerKind::Series,
            PolylinePrimitive::new(input.coordinates.to_vec(), style.line_width, color)
                .with_filter(glow_id),
        );
    }
}

fn append_markers(layered: &mut LayeredCommands, input: &FrameInput<'_>) {
    for marker in input.markers {
        layered.push(
            CanvasLayerKind::Markers,
            CirclePrimitive::new(
                marker.coordinate.x,
                marker.coordinate.y,
                input.style.marker_radius,
                input.line_color,
            ),
        );
    }
}

fn append_hover_overlay(layered: &mut LayeredCommands, input: &FrameInput<'_>) {
    let geometry = input.geometry;
    let style = input.style;
    let Some(tooltip) = resolve_tooltip(
        input.series,
        input.coordinates,
        input.hover,
        &input.config.value_suffix,
        geometry,
    ) else {
        return;
    };
    let active = input.coordinates[tooltip.index];

    layered.push(
        CanvasLayerKind::Hover,
        LinePrimitive::new(
            active.x,
            geometry.plot_top(),
            active.x,
            geometry.plot_bottom(),
            style.guide_line_width,
            input.line_color.with_alpha(style.guide_line_opacity),
        ),
    );
    layered.push(
        CanvasLayerKind::Hover,
        CirclePrimitive::new(active.x, active.y, style.active_marker_radius, input.line_color),
    );

    let text_x = tooltip.text_x;
    let text_y = tooltip.text_y;
    let rect = RectPrimitive::new(
        tooltip.x,
        tooltip.y,
        tooltip.width,
        tooltip.height,
        style.tooltip_fill_color,
    )
    .with_corner_radius(style.tooltip_corner_radius);
    let text = TextPrimitive::new(
        tooltip.text,
        text_x,
        text_y,
        style.tooltip_font_size_px,
        style.tooltip_text_color,
        TextHAlign::Left,
    );
    layered.push(
        CanvasLayerKind::Hover,
        GroupPrimitive::new(
            format!("{}-tooltip", input.config.id),
            vec![rect.into(), text.into()],
        ),
    );
}

fn append_captions(layered: &mut LayeredCommands, input: &FrameInput<'_>) {
    let geometry = input.geometry;
    let style = input.style;

    if !input.config.x_axis_label.is_empty() {
        layered.push(
            CanvasLayerKind::Captions,
            TextPrimitive::new(
                input.config.x_axis_label.clone(),
                geometry.width() / 2.0,
                geometry.height() - style.x_caption_bottom_inset_px,
                style.caption_font_size_px,
                style.caption_color,
                TextHAlign::Center,
            ),
        );
    }
    if !input.config.y_axis_label.is_empty() {
        layered.push(
            CanvasLayerKind::Captions,
            TextPrimitive::new(
                input.config.y_axis_label.clone(),
                style.y_caption_x,
                geometry.plot_top() + geometry.chart_height() / 2.0,
                style.caption_font_size_px,
                style.caption_color,
                TextHAlign::Center,
            )
            .with_rotation(-90.0),
        );
    }
}
