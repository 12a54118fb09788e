use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// `strftime` pattern used by [`Series::with_time_labels`].
pub const TIME_LABEL_FORMAT: &str = "%H:%M:%S";

/// Raw trend data supplied by the host on every render.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub points: Vec<f64>,
    #[serde(default)]
    pub labels: Vec<String>,
}

impl Series {
    #[must_use]
    pub fn new(points: Vec<f64>) -> Self {
        Self {
            points,
            labels: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = labels.into_iter().map(Into::into).collect();
        self
    }

    /// Labels each point with the wall-clock time of its bucket.
    #[must_use]
    pub fn with_time_labels(mut self, times: &[DateTime<Utc>]) -> Self {
        self.labels = times
            .iter()
            .map(|time| time.format(TIME_LABEL_FORMAT).to_string())
            .collect();
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Series guaranteed to hold at least two points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedSeries {
    points: Vec<f64>,
    labels: Vec<String>,
    padded_from_single: bool,
}

impl NormalizedSeries {
    #[must_use]
    pub fn points(&self) -> &[f64] {
        &self.points
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether the source series had exactly one point.
    #[must_use]
    pub fn padded_from_single(&self) -> bool {
        self.padded_from_single
    }

    #[must_use]
    pub fn value_at(&self, index: usize) -> Option<f64> {
        self.points.get(index).copied()
    }

    /// Returns the supplied label or synthesizes `Point {index + 1}`.
    #[must_use]
    pub fn label_at(&self, index: usize) -> String {
        match self.labels.get(index) {
            Some(label) if !label.is_empty() => label.clone(),
            _ => format!("Point {}", index + 1),
        }
    }
}

/// Pads a one-point series to two points so a line has two endpoints.
///
/// Returns `None` for an empty series; callers render the empty state instead.
#[must_use]
pub fn normalize_series(series: &Series) -> Option<NormalizedSeries> {
    match series.points.as_slice() {
        [] => None,
        [only] => Some(NormalizedSeries {
            points: vec![*only, *only],
            labels: series
                .labels
                .first()
                .map(|label| vec![label.clone(), label.clone()])
                .unwrap_or_default(),
            padded_from_single: true,
        }),
        points => Some(NormalizedSeries {
            points: points.to_vec(),
            labels: series.labels.clone(),
            padded_from_single: false,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::{Series, normalize_series};

    #[test]
    fn empty_series_is_not_normalized() {
        assert!(normalize_series(&Series::default()).is_none());
    }

    #[test]
    fn single_point_is_duplicated_with_its_label() {
        let series = Series::new(vec![10.0]).with_labels(["09:00"]);
        let normalized = normalize_series(&series).expect("normalized");
        assert_eq!(normalized.points(), &[10.0, 10.0]);
        assert_eq!(normalized.labels(), &["09:00".to_owned(), "09:00".to_owned()]);
        assert!(normalized.padded_from_single());
    }

    #[test]
    fn missing_labels_are_synthesized() {
        let series = Series::new(vec![1.0, 2.0, 3.0]).with_labels(["a"]);
        let normalized = normalize_series(&series).expect("normalized");
        assert_eq!(normalized.label_at(0), "a");
        assert_eq!(normalized.label_at(2), "Point 3");
    }
}
