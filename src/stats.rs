//! Duration statistics over the completed subset
//!
//! Mean and aggregate sums go through Trueno SIMD vectors; variance is
//! the population form (divisor N, the completed subset is the whole
//! population of interest, not a sample). Percentiles use linear
//! interpolation on fractional rank between the two nearest order
//! statistics — the same convention pandas' `quantile` defaults to.
//!
//! Degenerate inputs resolve to explicit absences: an empty subset has
//! no statistics at all, and a zero mean has no coefficient of
//! variation. Neither is ever reported as 0.0.

use serde::Serialize;
use trueno::Vector;

/// Fixed percentile ladder reported for completed durations
pub const PERCENTILE_LADDER: [(f32, &str); 8] = [
    (1.0, "1st"),
    (5.0, "5th"),
    (10.0, "10th"),
    (25.0, "25th"),
    (50.0, "50th"),
    (80.0, "80th"),
    (95.0, "95th"),
    (99.0, "99th"),
];

/// One rung of the percentile ladder
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PercentileEntry {
    pub label: &'static str,
    pub percentile: f32,
    pub value: f32,
}

/// Statistics computed over a non-empty sequence of durations
#[derive(Debug, Clone, Serialize)]
pub struct DurationStats {
    pub count: usize,
    pub mean_secs: f32,
    /// Population variance (divisor N)
    pub variance: f32,
    pub stddev: f32,
    pub min_secs: f32,
    pub max_secs: f32,
    /// Coefficient of variation (stddev / mean); absent when mean is zero
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cv: Option<f32>,
    pub percentiles: Vec<PercentileEntry>,
}

impl DurationStats {
    /// Compute statistics over the given durations, or `None` for an
    /// empty slice. Never divides by zero, never indexes an empty
    /// sequence.
    pub fn from_durations(durations: &[f32]) -> Option<Self> {
        if durations.is_empty() {
            return None;
        }

        let v = Vector::from_slice(durations);
        let mean_secs = v.mean().unwrap_or(0.0);
        let min_secs = v.min().unwrap_or(0.0);
        let max_secs = v.max().unwrap_or(0.0);

        // Population variance: mean of squared deviations (divisor N).
        let squared_deviations: Vec<f32> = durations
            .iter()
            .map(|d| (d - mean_secs) * (d - mean_secs))
            .collect();
        let variance = Vector::from_slice(&squared_deviations).mean().unwrap_or(0.0);
        let stddev = variance.sqrt();

        let cv = if mean_secs != 0.0 {
            Some(stddev / mean_secs)
        } else {
            None
        };

        let mut sorted = durations.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        let percentiles = PERCENTILE_LADDER
            .iter()
            .map(|&(percentile, label)| PercentileEntry {
                label,
                percentile,
                value: percentile_of_sorted(&sorted, percentile),
            })
            .collect();

        Some(Self {
            count: durations.len(),
            mean_secs,
            variance,
            stddev,
            min_secs,
            max_secs,
            cv,
            percentiles,
        })
    }
}

/// Calculate a percentile from sorted data by linear interpolation
/// between the two nearest order statistics.
pub fn percentile_of_sorted(sorted_data: &[f32], percentile: f32) -> f32 {
    if sorted_data.is_empty() {
        return 0.0;
    }
    if sorted_data.len() == 1 {
        return sorted_data[0];
    }

    let index = (percentile / 100.0) * (sorted_data.len() - 1) as f32;
    let lower = index.floor() as usize;
    let upper = index.ceil() as usize;

    if lower == upper {
        sorted_data[lower]
    } else {
        let weight = index - lower as f32;
        sorted_data[lower] * (1.0 - weight) + sorted_data[upper] * weight
    }
}
