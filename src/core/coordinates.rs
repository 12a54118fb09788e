use serde::{Deserialize, Serialize};

use crate::core::scale::{PixelRange, ValueDomain, map_to_pixel_inverted};
use crate::core::{ChartGeometry, Coordinate, NormalizedSeries};

/// Projected line segment in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Horizontal distance between consecutive points of an `n`-point series.
#[must_use]
pub fn horizontal_step(point_count: usize, geometry: ChartGeometry) -> f64 {
    let intervals = point_count.saturating_sub(1).max(1);
    geometry.chart_width() / intervals as f64
}

/// Vertical pixel position of `value` inside the plot area.
#[must_use]
pub fn value_to_y(value: f64, domain: ValueDomain, geometry: ChartGeometry) -> f64 {
    map_to_pixel_inverted(
        value,
        domain,
        PixelRange::new(geometry.plot_top(), geometry.chart_height()),
    )
}

/// Projects every normalized point to pixel space.
///
/// Output is index-aligned with `series` and shared by line rendering,
/// marker sampling and hover lookup.
#[must_use]
pub fn build_coordinates(
    series: &NormalizedSeries,
    domain: ValueDomain,
    geometry: ChartGeometry,
) -> Vec<Coordinate> {
    let step = horizontal_step(series.len(), geometry);
    series
        .points()
        .iter()
        .enumerate()
        .map(|(index, value)| {
            Coordinate::new(
                geometry.plot_left() + index as f64 * step,
                value_to_y(*value, domain, geometry),
            )
        })
        .collect()
}

/// Splits a coordinate run into adjacent segments.
#[must_use]
pub fn segments_between(coordinates: &[Coordinate]) -> Vec<LineSegment> {
    coordinates
        .windows(2)
        .map(|pair| LineSegment {
            x1: pair[0].x,
            y1: pair[0].y,
            x2: pair[1].x,
            y2: pair[1].y,
        })
        .collect()
}

/// Full-width horizontal segment at the height of a lone value.
#[must_use]
pub fn flat_segment(y: f64, geometry: ChartGeometry) -> LineSegment {
    LineSegment {
        x1: geometry.plot_left(),
        y1: y,
        x2: geometry.plot_right(),
        y2: y,
    }
}
