use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::Coordinate;

/// Marker count the stride aims for on long series.
pub const TARGET_MARKER_COUNT: usize = 5;

/// Coordinate chosen for dot rendering, with its series index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerPoint {
    pub index: usize,
    pub coordinate: Coordinate,
}

/// Inline storage fits the usual five strided markers plus the forced last one.
pub type MarkerSet = SmallVec<[MarkerPoint; 8]>;

#[must_use]
pub fn marker_stride(point_count: usize) -> usize {
    (point_count / TARGET_MARKER_COUNT).max(1)
}

/// Selects every `stride`-th coordinate and always the final one.
#[must_use]
pub fn sample_markers(coordinates: &[Coordinate]) -> MarkerSet {
    let count = coordinates.len();
    let stride = marker_stride(count);
    coordinates
        .iter()
        .enumerate()
        .filter(|(index, _)| index % stride == 0 || index + 1 == count)
        .map(|(index, coordinate)| MarkerPoint {
            index,
            coordinate: *coordinate,
        })
        .collect()
}
