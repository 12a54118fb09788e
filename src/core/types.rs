use serde::{Deserialize, Serialize};

/// Logical drawing surface size in viewBox units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Plot-area insets measured from each viewport edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margins {
    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}

/// Fixed canvas plus margins for one sparkline render.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartGeometry {
    pub viewport: Viewport,
    pub margins: Margins,
}

/// The 320x120 sparkline canvas with its 8/8/22/34 margins.
pub const SPARKLINE_GEOMETRY: ChartGeometry = ChartGeometry {
    viewport: Viewport::new(320, 120),
    margins: Margins::new(8.0, 8.0, 22.0, 34.0),
};

impl Default for ChartGeometry {
    fn default() -> Self {
        SPARKLINE_GEOMETRY
    }
}

impl ChartGeometry {
    #[must_use]
    pub fn width(self) -> f64 {
        f64::from(self.viewport.width)
    }

    #[must_use]
    pub fn height(self) -> f64 {
        f64::from(self.viewport.height)
    }

    #[must_use]
    pub fn chart_width(self) -> f64 {
        self.width() - self.margins.left - self.margins.right
    }

    #[must_use]
    pub fn chart_height(self) -> f64 {
        self.height() - self.margins.top - self.margins.bottom
    }

    #[must_use]
    pub fn plot_left(self) -> f64 {
        self.margins.left
    }

    #[must_use]
    pub fn plot_right(self) -> f64 {
        self.width() - self.margins.right
    }

    #[must_use]
    pub fn plot_top(self) -> f64 {
        self.margins.top
    }

    #[must_use]
    pub fn plot_bottom(self) -> f64 {
        self.margins.top + self.chart_height()
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.viewport.is_valid() && self.chart_width() > 0.0 && self.chart_height() > 0.0
    }
}

/// Pixel position of one series point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl Coordinate {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::SPARKLINE_GEOMETRY;

    #[test]
    fn sparkline_geometry_derives_plot_area() {
        let geometry = SPARKLINE_GEOMETRY;
        assert_eq!(geometry.chart_width(), 278.0);
        assert_eq!(geometry.chart_height(), 90.0);
        assert_eq!(geometry.plot_right(), 312.0);
        assert_eq!(geometry.plot_bottom(), 98.0);
        assert!(geometry.is_valid());
    }
}
