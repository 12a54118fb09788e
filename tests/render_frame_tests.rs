use approx::assert_abs_diff_eq;
use sparkline_rs::core::Series;
use sparkline_rs::interaction::{HoverState, SurfaceBounds};
use sparkline_rs::render::{CommandCounts, DrawCommand, LineCap, NullRenderer};
use sparkline_rs::{ChartError, Sparkline, SparklineConfig};

const SURFACE: SurfaceBounds = SurfaceBounds::new(0.0, 320.0);

fn chart_with(config: SparklineConfig, points: Vec<f64>) -> Sparkline<NullRenderer> {
    let mut chart = Sparkline::new(NullRenderer::default(), config).expect("valid config");
    chart.set_points(points);
    chart
}

fn one_to_ten() -> Vec<f64> {
    (1..=10).map(f64::from).collect()
}

#[test]
fn empty_series_renders_placeholder_only() {
    let mut chart = chart_with(SparklineConfig::new("cpu"), Vec::new());
    let frame = chart.build_render_frame();
    assert!(frame.is_empty_state());
    assert_eq!(frame.empty_state.as_deref(), Some("No trend data yet"));
    assert!(frame.commands.is_empty());
    assert!(frame.defs.is_empty());
    assert_eq!(chart.tooltip(), None);

    chart.render().expect("render empty state");
    assert!(chart.renderer().last_was_empty_state);
}

#[test]
fn default_frame_has_expected_primitives() {
    let chart = chart_with(SparklineConfig::new("cpu"), one_to_ten());
    let frame = chart.build_render_frame();
    assert_eq!(
        frame.counts(),
        CommandCounts {
            lines: 2,
            polylines: 1,
            circles: 6,
            rects: 0,
            texts: 2,
            groups: 0,
        }
    );
    assert_eq!(frame.commands.len(), 11);
    assert_eq!(frame.accessibility.role, "img");
    assert_eq!(frame.accessibility.label, "Metric trend chart");
}

#[test]
fn series_strokes_reference_instance_glow_filter() {
    let chart = chart_with(SparklineConfig::new("latency"), one_to_ten());
    let frame = chart.build_render_frame();
    assert_eq!(frame.defs.len(), 1);
    assert_eq!(frame.defs[0].id, "spark-glow-latency");
    assert_abs_diff_eq!(frame.defs[0].blur_std_deviation, 1.2);

    let polyline = frame
        .commands
        .iter()
        .find_map(|command| match command {
            DrawCommand::Polyline(polyline) => Some(polyline),
            _ => None,
        })
        .expect("series polyline");
    assert_eq!(polyline.filter.as_deref(), Some("spark-glow-latency"));
    assert_abs_diff_eq!(polyline.stroke_width, 2.75);
    assert_eq!(polyline.points.len(), 10);
}

#[test]
fn force_connected_draws_segments_over_identical_geometry() {
    let plain = chart_with(SparklineConfig::new("cpu"), one_to_ten());
    let connected = chart_with(
        SparklineConfig::new("cpu").with_force_connected_line(true),
        one_to_ten(),
    );

    let connected_frame = connected.build_render_frame();
    let counts = connected_frame.counts();
    assert_eq!(counts.lines, 2 + 9);
    assert_eq!(counts.polylines, 0);
    assert_eq!(counts.circles, 6);

    let segments: Vec<_> = connected_frame
        .commands
        .iter()
        .filter_map(|command| match command {
            DrawCommand::Line(line) if line.filter.is_some() => Some(line),
            _ => None,
        })
        .collect();
    assert_eq!(segments.len(), 9);
    assert!(segments.iter().all(|line| line.line_cap == LineCap::Round));
    assert!(segments.iter().all(|line| line.stroke_width == 3.0));

    let coordinates = plain.coordinates();
    assert_eq!(coordinates, connected.coordinates());
    for (segment, pair) in segments.iter().zip(coordinates.windows(2)) {
        assert_eq!((segment.x1, segment.y1), (pair[0].x, pair[0].y));
        assert_eq!((segment.x2, segment.y2), (pair[1].x, pair[1].y));
    }
}

#[test]
fn single_point_draws_flat_line_across_plot() {
    for force_connected in [false, true] {
        let chart = chart_with(
            SparklineConfig::new("cpu").with_force_connected_line(force_connected),
            vec![10.0],
        );
        let frame = chart.build_render_frame();
        let counts = frame.counts();
        assert_eq!(counts.polylines, 0);
        assert_eq!(counts.lines, 3);
        assert_eq!(counts.circles, 2);

        let flat = frame
            .commands
            .iter()
            .find_map(|command| match command {
                DrawCommand::Line(line) if line.filter.is_some() => Some(line),
                _ => None,
            })
            .expect("flat series line");
        assert_abs_diff_eq!(flat.x1, 34.0);
        assert_abs_diff_eq!(flat.x2, 312.0);
        assert_abs_diff_eq!(flat.y1, 98.0);
        assert_abs_diff_eq!(flat.y2, 98.0);
    }
}

#[test]
fn hover_adds_guide_active_marker_and_tooltip() {
    let mut chart = chart_with(SparklineConfig::new("cpu"), one_to_ten());
    let idle = chart.build_render_frame().counts();

    let state = chart.handle_pointer_move(320.0, SURFACE);
    assert_eq!(state, HoverState::Hovering { index: 9 });
    let frame = chart.build_render_frame();
    let hovered = frame.counts();
    assert_eq!(hovered.lines, idle.lines + 1);
    assert_eq!(hovered.circles, idle.circles + 1);
    assert_eq!(hovered.rects, 1);
    assert_eq!(hovered.texts, idle.texts + 1);
    assert_eq!(hovered.groups, 1);

    let tooltip_group = frame
        .commands
        .iter()
        .find_map(|command| match command {
            DrawCommand::Group(group) if group.key == "cpu-tooltip" => Some(group),
            _ => None,
        })
        .expect("tooltip group");
    match (&tooltip_group.commands[0], &tooltip_group.commands[1]) {
        (DrawCommand::Rect(rect), DrawCommand::Text(text)) => {
            assert_abs_diff_eq!(rect.x, 216.0);
            assert_abs_diff_eq!(rect.y, 8.0);
            assert_abs_diff_eq!(rect.width, 96.0);
            assert_abs_diff_eq!(rect.height, 18.0);
            assert_eq!(text.text, "Point 10 | 10.0");
        }
        other => panic!("unexpected tooltip children: {other:?}"),
    }

    chart.handle_pointer_leave();
    assert_eq!(chart.build_render_frame().counts(), idle);
}

#[test]
fn idle_tooltip_tracks_last_point() {
    let chart = chart_with(
        SparklineConfig::new("cpu").with_value_suffix("%"),
        vec![3.0, 7.5],
    );
    let tooltip = chart.tooltip().expect("idle tooltip");
    assert_eq!(tooltip.index, 1);
    assert_eq!(tooltip.text, "Point 2 | 7.5%");
}

#[test]
fn labels_are_used_in_tooltip_text() {
    let mut chart = Sparkline::new(NullRenderer::default(), SparklineConfig::new("cpu"))
        .expect("valid config");
    chart.set_series(Series::new(vec![1.0, 2.0, 3.0]).with_labels(["a", "b", "c"]));
    chart.handle_pointer_move(160.0, SURFACE);
    let tooltip = chart.tooltip().expect("tooltip");
    assert_eq!(tooltip.index, 1);
    assert_eq!(tooltip.text, "b | 2.0");
}

#[test]
fn new_series_resets_hover() {
    let mut chart = chart_with(SparklineConfig::new("cpu"), one_to_ten());
    chart.handle_pointer_move(0.0, SURFACE);
    assert!(chart.hover_state().is_hovering());
    chart.set_points(vec![1.0, 2.0, 3.0]);
    assert_eq!(chart.hover_state(), HoverState::Idle);
    assert_eq!(chart.active_index(), Some(2));
}

#[test]
fn config_change_keeps_hover() {
    let mut chart = chart_with(SparklineConfig::new("cpu"), one_to_ten());
    chart.handle_pointer_move(0.0, SURFACE);
    chart
        .set_config(SparklineConfig::new("cpu").with_color("#16a34a"))
        .expect("valid config");
    assert_eq!(chart.hover_state(), HoverState::Hovering { index: 0 });
}

#[test]
fn ticks_render_keyed_gridline_groups() {
    let chart = chart_with(
        SparklineConfig::new("cpu")
            .with_y_domain(Some(0.0), Some(100.0))
            .with_y_ticks(vec![0.0, 50.0, 100.0]),
        vec![20.0, 40.0, 60.0],
    );
    let frame = chart.build_render_frame();
    let counts = frame.counts();
    assert_eq!(counts.groups, 3);
    assert_eq!(counts.lines, 2 + 3);
    assert_eq!(counts.texts, 2 + 3);

    let keys: Vec<_> = frame
        .commands
        .iter()
        .filter_map(|command| match command {
            DrawCommand::Group(group) => Some(group.key.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(keys, ["cpu-tick-0", "cpu-tick-50", "cpu-tick-100"]);

    let DrawCommand::Group(mid) = &frame.commands[3] else {
        panic!("expected tick group after axes");
    };
    match (&mid.commands[0], &mid.commands[1]) {
        (DrawCommand::Line(line), DrawCommand::Text(label)) => {
            assert_abs_diff_eq!(line.y1, 53.0);
            assert_abs_diff_eq!(line.x1, 34.0);
            assert_abs_diff_eq!(line.x2, 312.0);
            assert_eq!(label.text, "50");
            assert_abs_diff_eq!(label.x, 30.0);
            assert_abs_diff_eq!(label.y, 56.0);
        }
        other => panic!("unexpected tick children: {other:?}"),
    }
}

#[test]
fn empty_axis_labels_skip_captions() {
    let chart = chart_with(
        SparklineConfig::new("cpu").with_axis_labels("", ""),
        one_to_ten(),
    );
    assert_eq!(chart.build_render_frame().counts().texts, 0);
}

#[test]
fn frames_are_deterministic() {
    let mut chart = chart_with(SparklineConfig::new("cpu"), one_to_ten());
    chart.handle_pointer_move(100.0, SURFACE);
    assert_eq!(chart.build_render_frame(), chart.build_render_frame());
}

#[test]
fn instances_do_not_share_state() {
    let mut first = chart_with(SparklineConfig::new("a"), one_to_ten());
    let second = chart_with(SparklineConfig::new("b"), one_to_ten());
    first.handle_pointer_move(0.0, SURFACE);
    assert_eq!(second.hover_state(), HoverState::Idle);
    assert_ne!(
        first.build_render_frame().defs[0].id,
        second.build_render_frame().defs[0].id
    );
}

#[test]
fn null_renderer_validates_and_counts() {
    let mut chart = chart_with(SparklineConfig::new("cpu"), one_to_ten());
    chart.render().expect("render");
    chart.render().expect("render again");
    let renderer = chart.into_renderer();
    assert_eq!(renderer.frames_rendered, 2);
    assert_eq!(renderer.last_counts.circles, 6);
    assert!(!renderer.last_was_empty_state);
}

#[test]
fn non_finite_samples_fail_validation_instead_of_drawing() {
    let mut chart = chart_with(SparklineConfig::new("cpu"), vec![1.0, f64::NAN, 3.0]);
    let err = chart.render().expect_err("nan coordinates are rejected");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn invalid_config_is_rejected_up_front() {
    let err = Sparkline::new(
        NullRenderer::default(),
        SparklineConfig::new("cpu").with_color("not-a-color"),
    )
    .err()
    .expect("bad color rejected");
    assert!(matches!(err, ChartError::InvalidConfig(_)));
}

#[test]
fn extreme_finite_samples_still_render() {
    let mut chart = chart_with(SparklineConfig::new("cpu"), vec![-1e308, 1e308, -f64::MAX]);
    chart.render().expect("finite extremes render");
    let coordinates = chart.coordinates();
    assert_abs_diff_eq!(coordinates[1].y, 8.0, epsilon = 1e-9);
    assert_abs_diff_eq!(coordinates[2].y, 98.0, epsilon = 1e-9);
}
