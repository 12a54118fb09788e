pub mod coordinates;
pub mod markers;
pub mod scale;
pub mod series;
pub mod types;

pub use coordinates::{
    LineSegment, build_coordinates, flat_segment, horizontal_step, segments_between, value_to_y,
};
pub use markers::{MarkerPoint, MarkerSet, marker_stride, sample_markers};
pub use scale::{
    PixelRange, SPREAD_EPSILON, ValueDomain, map_to_pixel, map_to_pixel_inverted,
};
pub use series::{NormalizedSeries, Series, TIME_LABEL_FORMAT, normalize_series};
pub use types::{ChartGeometry, Coordinate, Margins, SPARKLINE_GEOMETRY, Viewport};
