use serde::{Deserialize, Serialize};

/// Lower bound applied to `max - min` so flat data never divides by zero.
pub const SPREAD_EPSILON: f64 = 0.00001;

/// Value range mapped onto the vertical pixel extent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueDomain {
    pub min: f64,
    pub max: f64,
}

impl ValueDomain {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Derives the domain from series extrema.
    ///
    /// Returns `None` for an empty slice. A `NaN` anywhere in `values` makes
    /// both bounds `NaN`, matching how the mapping propagates it.
    #[must_use]
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let min = values.iter().copied().fold(f64::INFINITY, nan_min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, nan_max);
        Some(Self { min, max })
    }

    /// Derives the domain from data, letting explicit bounds override each side.
    #[must_use]
    pub fn resolve(values: &[f64], explicit_min: Option<f64>, explicit_max: Option<f64>) -> Option<Self> {
        let derived = Self::from_values(values)?;
        Some(Self {
            min: explicit_min.unwrap_or(derived.min),
            max: explicit_max.unwrap_or(derived.max),
        })
    }

    #[must_use]
    pub fn spread(self) -> f64 {
        let raw = self.max - self.min;
        if raw.is_nan() {
            return raw;
        }
        raw.max(SPREAD_EPSILON)
    }

    /// Position of `value` inside the domain, `0.0` at `min` and `1.0` at `max`.
    ///
    /// Finite extrema whose difference overflows are compared at half scale.
    #[must_use]
    pub fn normalize(self, value: f64) -> f64 {
        let spread = self.spread();
        if spread.is_infinite() && self.min.is_finite() && self.max.is_finite() {
            return (value * 0.5 - self.min * 0.5) / (self.max * 0.5 - self.min * 0.5);
        }
        (value - self.min) / spread
    }
}

/// Pixel interval described by its start and length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelRange {
    pub start: f64,
    pub length: f64,
}

impl PixelRange {
    #[must_use]
    pub const fn new(start: f64, length: f64) -> Self {
        Self { start, length }
    }

    #[must_use]
    pub fn end(self) -> f64 {
        self.start + self.length
    }
}

/// Maps a value onto a pixel range growing in the same direction as the domain.
#[must_use]
pub fn map_to_pixel(value: f64, domain: ValueDomain, range: PixelRange) -> f64 {
    range.start + domain.normalize(value) * range.length
}

/// Maps a value onto a vertical pixel range where larger values sit higher.
#[must_use]
pub fn map_to_pixel_inverted(value: f64, domain: ValueDomain, range: PixelRange) -> f64 {
    range.start + range.length - domain.normalize(value) * range.length
}

fn nan_min(acc: f64, value: f64) -> f64 {
    if acc.is_nan() || value.is_nan() {
        f64::NAN
    } else {
        acc.min(value)
    }
}

fn nan_max(acc: f64, value: f64) -> f64 {
    if acc.is_nan() || value.is_nan() {
        f64::NAN
    } else {
        acc.max(value)
    }
}
