use serde::{Deserialize, Serialize};

use crate::core::{Coordinate, MarkerPoint, ValueDomain};
use crate::interaction::HoverState;

use super::TooltipLayout;

/// Derived state of one sparkline, for diagnostics and host-side tooltips.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SparklineSnapshot {
    pub id: String,
    /// Point count before single-point padding.
    pub point_count: usize,
    pub padded_from_single: bool,
    pub domain: Option<ValueDomain>,
    pub coordinates: Vec<Coordinate>,
    pub markers: Vec<MarkerPoint>,
    pub hover: HoverState,
    pub active_index: Option<usize>,
    pub tooltip: Option<TooltipLayout>,
}
