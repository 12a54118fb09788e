use tracing::warn;

use crate::error::{ChartError, ChartResult};

use super::SparklineConfig;

pub(super) fn validate_sparkline_config(config: &SparklineConfig) -> ChartResult<()> {
    if config.id.trim().is_empty() {
        return Err(ChartError::InvalidConfig(
            "sparkline id must not be empty".to_owned(),
        ));
    }
    if config.id.chars().any(char::is_whitespace) {
        return Err(ChartError::InvalidConfig(format!(
            "sparkline id `{}` must not contain whitespace",
            config.id
        )));
    }

    config.line_color()?;

    for (bound, name) in [(config.y_min, "y_min"), (config.y_max, "y_max")] {
        if let Some(value) = bound {
            if !value.is_finite() {
                return Err(ChartError::InvalidConfig(format!("{name} must be finite")));
            }
        }
    }
    if let (Some(min), Some(max)) = (config.y_min, config.y_max) {
        if min >= max {
            warn!(
                id = %config.id,
                y_min = min,
                y_max = max,
                "explicit y domain is empty or inverted; spread falls back to epsilon"
            );
        }
    }

    if config.y_ticks.iter().any(|tick| !tick.is_finite()) {
        return Err(ChartError::InvalidConfig(
            "y ticks must be finite".to_owned(),
        ));
    }

    Ok(())
}
