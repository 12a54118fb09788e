use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

use super::validation::validate_sparkline_config;

pub const DEFAULT_LINE_COLOR: &str = "#2563eb";
pub const DEFAULT_X_AXIS_LABEL: &str = "Time";
pub const DEFAULT_Y_AXIS_LABEL: &str = "Value";

/// Per-instance sparkline setup supplied by the host.
///
/// This type is serializable so dashboards can keep chart definitions in
/// JSON next to the metric they plot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SparklineConfig {
    /// Namespaces generated defs so several charts can share one document.
    pub id: String,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default)]
    pub value_suffix: String,
    #[serde(default = "default_x_axis_label")]
    pub x_axis_label: String,
    #[serde(default = "default_y_axis_label")]
    pub y_axis_label: String,
    #[serde(default)]
    pub y_min: Option<f64>,
    #[serde(default)]
    pub y_max: Option<f64>,
    #[serde(default)]
    pub y_ticks: Vec<f64>,
    #[serde(default)]
    pub force_connected_line: bool,
}

impl SparklineConfig {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            color: default_color(),
            value_suffix: String::new(),
            x_axis_label: default_x_axis_label(),
            y_axis_label: default_y_axis_label(),
            y_min: None,
            y_max: None,
            y_ticks: Vec::new(),
            force_connected_line: false,
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    #[must_use]
    pub fn with_value_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.value_suffix = suffix.into();
        self
    }

    #[must_use]
    pub fn with_axis_labels(
        mut self,
        x_axis_label: impl Into<String>,
        y_axis_label: impl Into<String>,
    ) -> Self {
        self.x_axis_label = x_axis_label.into();
        self.y_axis_label = y_axis_label.into();
        self
    }

    /// Overrides either side of the data-derived domain.
    #[must_use]
    pub fn with_y_domain(mut self, y_min: Option<f64>, y_max: Option<f64>) -> Self {
        self.y_min = y_min;
        self.y_max = y_max;
        self
    }

    #[must_use]
    pub fn with_y_ticks(mut self, ticks: impl Into<Vec<f64>>) -> Self {
        self.y_ticks = ticks.into();
        self
    }

    #[must_use]
    pub fn with_force_connected_line(mut self, enabled: bool) -> Self {
        self.force_connected_line = enabled;
        self
    }

    #[must_use]
    pub fn glow_filter_id(&self) -> String {
        format!("spark-glow-{}", self.id)
    }

    pub fn line_color(&self) -> ChartResult<Color> {
        Color::from_hex(&self.color)
            .map_err(|err| ChartError::InvalidConfig(format!("color: {err}")))
    }

    pub fn validate(&self) -> ChartResult<()> {
        validate_sparkline_config(self)
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidConfig(format!("failed to parse sparkline config json: {e}"))
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidConfig(format!("failed to serialize sparkline config: {e}"))
        })
    }
}

fn default_color() -> String {
    DEFAULT_LINE_COLOR.to_owned()
}

fn default_x_axis_label() -> String {
    DEFAULT_X_AXIS_LABEL.to_owned()
}

fn default_y_axis_label() -> String {
    DEFAULT_Y_AXIS_LABEL.to_owned()
}
