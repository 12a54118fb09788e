use sparkline_rs::api::{RENDER_FRAME_JSON_SCHEMA_V1, SparklineSnapshot};
use sparkline_rs::interaction::{HoverState, SurfaceBounds};
use sparkline_rs::render::{NullRenderer, RenderFrame};
use sparkline_rs::{Sparkline, SparklineConfig};

fn hovered_chart() -> Sparkline<NullRenderer> {
    let mut chart = Sparkline::new(
        NullRenderer::default(),
        SparklineConfig::new("cpu").with_y_ticks(vec![5.0]),
    )
    .expect("valid config");
    chart.set_points((1..=10).map(f64::from).collect());
    chart.handle_pointer_move(320.0, SurfaceBounds::new(0.0, 320.0));
    chart
}

#[test]
fn render_frame_contract_carries_schema_version() {
    let frame = hovered_chart().build_render_frame();
    let json = frame.to_json_contract_v1_pretty().expect("serialize");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(value["schema_version"], RENDER_FRAME_JSON_SCHEMA_V1);
    assert_eq!(value["frame"]["commands"][0]["kind"], "line");

    let parsed = RenderFrame::from_json_compat_str(&json).expect("parse contract");
    assert_eq!(parsed, frame);
}

#[test]
fn render_frame_compat_parser_accepts_bare_payload() {
    let frame = hovered_chart().build_render_frame();
    let bare = serde_json::to_string(&frame).expect("serialize bare frame");
    assert_eq!(RenderFrame::from_json_compat_str(&bare).expect("parse"), frame);
}

#[test]
fn unknown_schema_version_is_rejected() {
    let frame = hovered_chart().build_render_frame();
    let json = frame
        .to_json_contract_v1_pretty()
        .expect("serialize")
        .replacen("\"schema_version\": 1", "\"schema_version\": 7", 1);
    assert!(RenderFrame::from_json_compat_str(&json).is_err());
}

#[test]
fn snapshot_contract_preserves_interaction_state() {
    let snapshot = hovered_chart().snapshot();
    assert_eq!(snapshot.hover, HoverState::Hovering { index: 9 });
    assert_eq!(snapshot.active_index, Some(9));
    assert_eq!(snapshot.point_count, 10);
    assert_eq!(snapshot.markers.len(), 6);
    assert!(!snapshot.padded_from_single);

    let json = snapshot.to_json_contract_v1_pretty().expect("serialize");
    let parsed = SparklineSnapshot::from_json_compat_str(&json).expect("parse");
    assert_eq!(parsed, snapshot);
}

#[test]
fn snapshot_of_single_point_reports_padding() {
    let mut chart =
        Sparkline::new(NullRenderer::default(), SparklineConfig::new("cpu")).expect("config");
    chart.set_points(vec![4.0]);
    let snapshot = chart.snapshot();
    assert_eq!(snapshot.point_count, 1);
    assert!(snapshot.padded_from_single);
    assert_eq!(snapshot.coordinates.len(), 2);
    assert_eq!(
        snapshot.tooltip.map(|tooltip| tooltip.text),
        Some("Point 2 | 4.0".to_owned())
    );
}

#[test]
fn malformed_payload_is_rejected() {
    assert!(SparklineSnapshot::from_json_compat_str("{\"schema_version\":1}").is_err());
}
