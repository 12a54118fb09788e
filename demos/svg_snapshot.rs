use sparkline_rs::core::Series;
use sparkline_rs::interaction::SurfaceBounds;
use sparkline_rs::render::SvgRenderer;
use sparkline_rs::telemetry::init_tracing_with_fallback;
use sparkline_rs::{Sparkline, SparklineConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = init_tracing_with_fallback("sparkline_rs=trace");

    let config = SparklineConfig::new("latency")
        .with_color("#f97316")
        .with_value_suffix(" ms")
        .with_axis_labels("Minute", "p95")
        .with_y_domain(Some(0.0), None)
        .with_y_ticks(vec![0.0, 200.0, 400.0]);
    let mut chart = Sparkline::new(SvgRenderer::new(), config)?;
    chart.set_series(
        Series::new(vec![182.0, 204.5, 197.0, 251.3, 320.8, 288.1, 240.0]).with_labels([
            "10:00", "10:01", "10:02", "10:03", "10:04", "10:05", "10:06",
        ]),
    );

    chart.handle_pointer_move(180.0, SurfaceBounds::new(0.0, 320.0));
    chart.render()?;

    let snapshot_json = chart.snapshot().to_json_contract_v1_pretty()?;
    let svg = chart
        .into_renderer()
        .take_document()
        .ok_or("renderer produced no document")?;

    println!("{svg}");
    eprintln!("snapshot contract bytes: {}", snapshot_json.len());
    Ok(())
}
