use gtk4 as gtk;
use gtk4::prelude::*;
use sparkline_rs::platform_gtk::GtkSparklineAdapter;
use sparkline_rs::render::CairoRenderer;
use sparkline_rs::telemetry::init_default_tracing;
use sparkline_rs::{Sparkline, SparklineConfig};

fn main() -> gtk::glib::ExitCode {
    let _ = init_default_tracing();

    let app = gtk::Application::builder()
        .application_id("rs.sparkline.demo")
        .build();
    app.connect_activate(|app| {
        let chart = CairoRenderer::new(320, 120).and_then(|renderer| {
            Sparkline::new(
                renderer,
                SparklineConfig::new("cpu")
                    .with_value_suffix("%")
                    .with_force_connected_line(true),
            )
        });
        let mut chart = match chart {
            Ok(chart) => chart,
            Err(err) => {
                eprintln!("failed to build sparkline: {err}");
                return;
            }
        };
        chart.set_points(vec![12.0, 18.5, 16.0, 31.2, 27.9, 44.0, 38.6, 52.1]);

        let adapter = GtkSparklineAdapter::new(chart);
        let window = gtk::ApplicationWindow::builder()
            .application(app)
            .title("sparkline")
            .default_width(640)
            .default_height(240)
            .child(adapter.widget())
            .build();
        window.present();
    });
    app.run()
}
