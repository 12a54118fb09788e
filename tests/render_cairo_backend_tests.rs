#![cfg(feature = "cairo-backend")]

use cairo::{Context, Format, ImageSurface};
use sparkline_rs::interaction::SurfaceBounds;
use sparkline_rs::render::CairoRenderer;
use sparkline_rs::{ChartError, Sparkline, SparklineConfig};

#[test]
fn cairo_renderer_rejects_invalid_surface_size() {
    let err = CairoRenderer::new(0, 120).expect_err("invalid width must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn cairo_renderer_draws_line_markers_and_captions() {
    let renderer = CairoRenderer::new(640, 240).expect("renderer");
    let mut chart = Sparkline::new(renderer, SparklineConfig::new("cpu")).expect("chart");
    chart.set_points((1..=10).map(f64::from).collect());

    chart.render().expect("render");
    let stats = chart.into_renderer().last_stats();
    assert_eq!(stats.lines_drawn, 2);
    assert_eq!(stats.polylines_drawn, 1);
    assert_eq!(stats.circles_drawn, 6);
    assert_eq!(stats.texts_drawn, 2);
}

#[test]
fn cairo_renderer_draws_tooltip_group_children() {
    let renderer = CairoRenderer::new(320, 120).expect("renderer");
    let mut chart = Sparkline::new(renderer, SparklineConfig::new("cpu")).expect("chart");
    chart.set_points(vec![4.0, 8.0, 6.0]);
    chart.handle_pointer_move(160.0, SurfaceBounds::new(0.0, 320.0));

    chart.render().expect("render");
    let stats = chart.into_renderer().last_stats();
    assert_eq!(stats.rects_drawn, 1);
    assert_eq!(stats.texts_drawn, 3);
    assert_eq!(stats.circles_drawn, 4);
}

#[test]
fn cairo_renderer_draws_empty_state_message() {
    let renderer = CairoRenderer::new(320, 120).expect("renderer");
    let mut chart = Sparkline::new(renderer, SparklineConfig::new("cpu")).expect("chart");
    chart.render().expect("render");
    let stats = chart.into_renderer().last_stats();
    assert_eq!(stats.texts_drawn, 1);
    assert_eq!(stats.lines_drawn, 0);
}

#[test]
fn cairo_renderer_can_draw_on_external_context() {
    let renderer = CairoRenderer::new(320, 120).expect("renderer");
    let mut chart = Sparkline::new(
        renderer,
        SparklineConfig::new("cpu").with_force_connected_line(true),
    )
    .expect("chart");
    chart.set_points(vec![1.0, 3.0, 2.0, 5.0]);

    let surface = ImageSurface::create(Format::ARgb32, 320, 120).expect("surface");
    let context = Context::new(&surface).expect("context");
    chart
        .render_on_cairo_context(&context)
        .expect("render on context");

    assert_eq!(chart.into_renderer().last_stats().lines_drawn, 2 + 3);
}
